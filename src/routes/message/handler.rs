use axum::extract::{Json, Path, Query, State};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::AppState;
use crate::database::MessageRepository;
use crate::error::AppError;
use crate::models::{CreateMessageResponse, Message, MessageCreate};

const DEFAULT_RECENT_LIMIT: i64 = 50;
const MAX_RECENT_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

pub async fn list_messages_for_member(
    State(state): State<AppState>,
    WithRejection(Path(member_id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<Vec<Message>>, AppError> {
    let messages = state.repo.list_messages_for_member(member_id).await?;
    Ok(Json(messages))
}

pub async fn list_recent_messages(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<RecentQuery>, AppError>,
) -> Result<Json<Vec<Message>>, AppError> {
    let limit = query
        .limit
        .map(|limit| limit.clamp(1, MAX_RECENT_LIMIT))
        .unwrap_or(DEFAULT_RECENT_LIMIT);

    let messages = state.repo.list_recent_messages(limit).await?;
    Ok(Json(messages))
}

#[axum::debug_handler]
pub async fn create_message(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<MessageCreate>, AppError>,
) -> Result<Json<CreateMessageResponse>, AppError> {
    let message = state
        .repo
        .create_message(req)
        .await
        .inspect_err(|e| tracing::error!("Failed to create message: {}", e))?;

    Ok(Json(CreateMessageResponse { id: message.id }))
}
