use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::error::ApiError;
use crate::form;
use crate::models::{SubmissionCreated, SubmissionRequest};
use crate::db;

// POST /api/submissions - Store one contact form submission
//
// Repeated posts insert repeated rows.
pub async fn create_submission(
    State(pool): State<SqlitePool>,
    payload: Result<Json<SubmissionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmissionCreated>), ApiError> {
    let Json(request) = payload?;
    let submission = form::validate(&request)?;
    let id = db::insert_submission(&pool, &submission).await?;

    tracing::info!("Stored submission #{} from {}", id, submission.company);

    Ok((StatusCode::CREATED, Json(SubmissionCreated { id })))
}
