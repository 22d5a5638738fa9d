use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;
use crate::aggregate::{performance_score, squad_stats};
use crate::error::ApiError;
use crate::models::{Player, PlayerCard, Position, SquadResponse};
use crate::db;

// Query parameters for listing players
#[derive(Deserialize)]
pub struct ListPlayersQuery {
    #[serde(default)]
    team: Option<String>,
}

// GET /api/players?team=Liverpool - All players, or one team's by goals
pub async fn get_players(
    State(pool): State<SqlitePool>,
    Query(params): Query<ListPlayersQuery>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = match params.team.as_deref() {
        Some(team) => db::get_players_by_team(&pool, team).await?,
        None => db::get_all_players(&pool).await?,
    };

    Ok(Json(players))
}

// GET /api/teams/:team/players - Squad page for one team
pub async fn get_squad(
    State(pool): State<SqlitePool>,
    Path(team): Path<String>,
) -> Result<Json<SquadResponse>, ApiError> {
    let players = db::get_players_by_team(&pool, &team).await?;
    let stats = squad_stats(&players);

    let players = players
        .into_iter()
        .enumerate()
        .map(|(i, p)| to_player_card(i + 1, p))
        .collect();

    Ok(Json(SquadResponse { team, players, stats }))
}

fn to_player_card(rank: usize, player: Player) -> PlayerCard {
    PlayerCard {
        id: player.id,
        rank,
        position: Position::display_label(player.position.as_deref()),
        performance: performance_score(player.goals),
        joined: joined_date(&player.created_at),
        name: player.name,
        team: player.team,
        goals: player.goals,
    }
}

/// Date part of a stored timestamp; SQLite writes `YYYY-MM-DD HH:MM:SS`,
/// hosted stores tend to write RFC 3339.
fn joined_date(created_at: &str) -> String {
    if let Ok(ts) = NaiveDateTime::parse_from_str(created_at, "%Y-%m-%d %H:%M:%S") {
        return ts.date().format("%Y-%m-%d").to_string();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(created_at) {
        return ts.date_naive().format("%Y-%m-%d").to_string();
    }
    created_at.to_string()
}
