use axum::extract::{Json, Path, State};
use axum_extra::extract::WithRejection;

use crate::AppState;
use crate::database::EventRepository;
use crate::error::AppError;
use crate::models::{CreateEventResponse, DeleteResponse, Event, EventCreate};

pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.repo.list_events().await?;
    Ok(Json(events))
}

// member_id is stored as given; it is not checked against family_members.
#[axum::debug_handler]
pub async fn create_event(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<EventCreate>, AppError>,
) -> Result<Json<CreateEventResponse>, AppError> {
    let event = state
        .repo
        .create_event(req)
        .await
        .inspect_err(|e| tracing::error!("Failed to create event: {}", e))?;

    Ok(Json(CreateEventResponse { id: event.id }))
}

pub async fn delete_event(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<DeleteResponse>, AppError> {
    tracing::info!("Deleting event {}", id);
    state.repo.delete_event(id).await?;
    Ok(Json(DeleteResponse::ok()))
}
