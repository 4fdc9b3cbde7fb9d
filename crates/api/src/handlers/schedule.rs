//! # Schedule Handlers
//!
//! Teacher and class timetables share one set of handlers; the route decides
//! which [`OwnerKind`] the path id refers to.
//!
//! The conflict endpoints back the "add lesson" dialog: the client first asks
//! which existing slots a candidate collides with, shows them, and then either
//! goes back or submits the slot with `override` set.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use timetable_core::{
    ConflictPolicy, InsertOutcome, Owner, OwnerKind, Schedule, ScheduleSlot, SlotTiming,
    TimetableError, Weekday, find_conflicts,
    models::requests::{
        AddSlotRequest, AddSlotResponse, CheckConflictsRequest, CheckConflictsResponse,
        OwnersResponse, ScheduleQuery, ScheduleResponse,
    },
};
use tracing::{debug, info};

use crate::{ApiState, middleware::error_handling::AppError};

async fn load_schedule(state: &ApiState, owner: &Owner) -> Result<Schedule, AppError> {
    state
        .repository
        .get_schedule(owner)
        .await?
        .ok_or_else(|| AppError(TimetableError::NotFound(format!("Schedule for {} not found", owner))))
}

async fn list_owners(state: &ApiState, kind: OwnerKind) -> Result<Json<OwnersResponse>, AppError> {
    let owners = state.repository.list_owners(kind).await?;
    Ok(Json(OwnersResponse { kind, owners }))
}

async fn get_schedule(
    state: &ApiState,
    owner: Owner,
    query: ScheduleQuery,
) -> Result<Json<ScheduleResponse>, AppError> {
    let day = query
        .day
        .as_deref()
        .map(str::parse::<Weekday>)
        .transpose()?;

    let schedule = load_schedule(state, &owner).await?;

    let slots: Vec<ScheduleSlot> = match day {
        Some(day) => schedule.day(day).into_iter().cloned().collect(),
        None => schedule.slots().to_vec(),
    };

    Ok(Json(ScheduleResponse {
        id: owner.id().to_string(),
        kind: owner.kind(),
        slots,
    }))
}

async fn check_conflicts(
    state: &ApiState,
    owner: Owner,
    payload: CheckConflictsRequest,
) -> Result<Json<CheckConflictsResponse>, AppError> {
    let candidate = SlotTiming::parse(&payload.day, &payload.start_time, &payload.end_time)?;
    let schedule = load_schedule(state, &owner).await?;

    let conflicts: Vec<ScheduleSlot> = find_conflicts(schedule.slots(), &candidate)
        .into_iter()
        .cloned()
        .collect();

    debug!("{} against {}: {} conflicts", candidate, owner, conflicts.len());

    Ok(Json(CheckConflictsResponse {
        has_conflict: !conflicts.is_empty(),
        conflicts,
    }))
}

async fn add_slot(
    state: &ApiState,
    owner: Owner,
    payload: AddSlotRequest,
) -> Result<(StatusCode, Json<AddSlotResponse>), AppError> {
    let timing = SlotTiming::parse(&payload.day, &payload.start_time, &payload.end_time)?;

    let subject = payload.subject.trim();
    if subject.is_empty() {
        return Err(AppError(TimetableError::Validation(
            "Subject must not be empty".to_string(),
        )));
    }
    let occupant_id = payload.occupant.trim();
    if occupant_id.is_empty() {
        return Err(AppError(TimetableError::Validation(
            "Occupant must not be empty".to_string(),
        )));
    }

    let slot = ScheduleSlot::new(timing, subject, owner.occupant(occupant_id));
    let policy = if payload.allow_conflicts {
        ConflictPolicy::Override
    } else {
        ConflictPolicy::Reject
    };

    let outcome = state
        .repository
        .add_slot(&owner, slot.clone(), policy)
        .await?
        .ok_or_else(|| AppError(TimetableError::NotFound(format!("Schedule for {} not found", owner))))?;

    match outcome {
        InsertOutcome::Inserted { overridden } => {
            info!(
                "Added {} ({} minutes) to {}",
                slot,
                slot.range().duration_minutes(),
                owner
            );
            Ok((StatusCode::CREATED, Json(AddSlotResponse { slot, overridden })))
        }
        InsertOutcome::Rejected { conflicts } => {
            let listed: Vec<String> = conflicts.iter().map(ToString::to_string).collect();
            Err(AppError(TimetableError::Conflict(format!(
                "{} overlaps {}",
                timing,
                listed.join("; ")
            ))))
        }
    }
}

#[axum::debug_handler]
pub async fn list_teachers(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<OwnersResponse>, AppError> {
    list_owners(&state, OwnerKind::Teacher).await
}

#[axum::debug_handler]
pub async fn list_classes(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<OwnersResponse>, AppError> {
    list_owners(&state, OwnerKind::Class).await
}

#[axum::debug_handler]
pub async fn get_teacher_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<ScheduleResponse>, AppError> {
    get_schedule(&state, Owner::Teacher(id), query).await
}

#[axum::debug_handler]
pub async fn get_class_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<ScheduleResponse>, AppError> {
    get_schedule(&state, Owner::Class(id), query).await
}

#[axum::debug_handler]
pub async fn check_teacher_conflicts(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(payload): Json<CheckConflictsRequest>,
) -> Result<Json<CheckConflictsResponse>, AppError> {
    check_conflicts(&state, Owner::Teacher(id), payload).await
}

#[axum::debug_handler]
pub async fn check_class_conflicts(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(payload): Json<CheckConflictsRequest>,
) -> Result<Json<CheckConflictsResponse>, AppError> {
    check_conflicts(&state, Owner::Class(id), payload).await
}

#[axum::debug_handler]
pub async fn add_teacher_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(payload): Json<AddSlotRequest>,
) -> Result<(StatusCode, Json<AddSlotResponse>), AppError> {
    add_slot(&state, Owner::Teacher(id), payload).await
}

#[axum::debug_handler]
pub async fn add_class_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(payload): Json<AddSlotRequest>,
) -> Result<(StatusCode, Json<AddSlotResponse>), AppError> {
    add_slot(&state, Owner::Class(id), payload).await
}
