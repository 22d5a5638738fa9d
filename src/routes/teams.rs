use axum::{
    extract::State,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::aggregate::{aggregate_teams, league_summary};
use crate::error::ApiError;
use crate::models::TeamsResponse;
use crate::db;

// GET /api/teams - Every team that has at least one player, with totals
pub async fn get_teams(
    State(pool): State<SqlitePool>,
) -> Result<Json<TeamsResponse>, ApiError> {
    let rows = db::get_team_goal_rows(&pool).await?;

    let teams = aggregate_teams(rows);
    let summary = league_summary(&teams);
    tracing::debug!("Aggregated {} teams from {} players", summary.team_count, summary.total_players);

    Ok(Json(TeamsResponse { teams, summary }))
}
