use sqlx::migrate::MigrateError;
use sqlx::sqlite::SqlitePool;
use crate::form::SubmissionSink;
use crate::models::*;

/// Apply the embedded schema migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

// Team queries
pub async fn get_team_goal_rows(pool: &SqlitePool) -> Result<Vec<TeamGoalsRow>, sqlx::Error> {
    sqlx::query_as::<_, TeamGoalsRow>(
        r#"SELECT team, goals FROM players WHERE team IS NOT NULL ORDER BY id"#
    )
    .fetch_all(pool)
    .await
}

// Player queries
pub async fn get_all_players(pool: &SqlitePool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT id, name, position, team, COALESCE(goals, 0) AS goals, created_at
           FROM players ORDER BY name"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_players_by_team(pool: &SqlitePool, team: &str) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT id, name, position, team, COALESCE(goals, 0) AS goals, created_at
           FROM players WHERE team = ? ORDER BY COALESCE(goals, 0) DESC, id"#
    )
    .bind(team)
    .fetch_all(pool)
    .await
}

// Submission queries
pub async fn insert_submission(pool: &SqlitePool, submission: &NewSubmission) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO submissions (name, company, price) VALUES (?, ?, ?)"#
    )
    .bind(&submission.name)
    .bind(&submission.company)
    .bind(submission.price)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

impl SubmissionSink for SqlitePool {
    type Error = sqlx::Error;

    async fn send(&self, submission: &NewSubmission) -> Result<i64, Self::Error> {
        insert_submission(self, submission).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

    /// Single-connection in-memory pool; every connection would otherwise get its own database.
    pub async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        super::migrate(&pool).await.unwrap();
        pool
    }

    pub async fn insert_player(pool: &SqlitePool, name: &str, position: Option<&str>, team: Option<&str>, goals: Option<i64>) -> i64 {
        sqlx::query(r#"INSERT INTO players (name, position, team, goals) VALUES (?, ?, ?, ?)"#)
            .bind(name)
            .bind(position)
            .bind(team)
            .bind(goals)
            .execute(pool)
            .await
            .unwrap()
            .last_insert_rowid()
    }
}
