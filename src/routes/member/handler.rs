use axum::extract::{Json, Path, State};
use axum_extra::extract::WithRejection;

use crate::AppState;
use crate::database::MemberRepository;
use crate::error::AppError;
use crate::models::{CreateMemberResponse, DeleteResponse, FamilyMember, FamilyMemberCreate};
use crate::utils::generate_invite_code;

pub async fn list_family_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<FamilyMember>>, AppError> {
    let members = state.repo.list_family_members().await?;
    Ok(Json(members))
}

pub async fn get_family_member(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<FamilyMember>, AppError> {
    match state.repo.get_family_member(id).await? {
        Some(member) => Ok(Json(member)),
        None => Err(AppError::NotFound("Member not found")),
    }
}

/// Adds a member, or links to an existing one with the same name.
///
/// The name lookup and the insert are separate round trips, so two concurrent
/// requests for a new name can both insert.
#[axum::debug_handler]
pub async fn create_family_member(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<FamilyMemberCreate>, AppError>,
) -> Result<Json<CreateMemberResponse>, AppError> {
    let new_member = req.into_new_member(generate_invite_code);

    let existing = state.repo.list_family_members().await?;
    if let Some(found) = existing.iter().find(|m| m.name == new_member.name) {
        tracing::info!("Member {:?} already exists with id {}, linking", found.name, found.id);
        return Ok(Json(CreateMemberResponse::linked(found.id)));
    }

    let member = state
        .repo
        .create_family_member(new_member)
        .await
        .inspect_err(|e| tracing::error!("Failed to create family member: {}", e))?;

    Ok(Json(CreateMemberResponse::created(&member)))
}

pub async fn delete_family_member(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.repo.delete_family_member(id).await?;
    tracing::info!("Deleted family member {}", id);
    Ok(Json(DeleteResponse::ok()))
}
