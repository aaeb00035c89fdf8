use std::sync::Arc;

use axum::{Json, extract::State};

use rollcall_core::errors::RollcallError;
use rollcall_core::models::schedule::ScheduleSnapshot;
use rollcall_core::models::suggestion::{
    DailyRoutineRequest, DailyRoutineResponse, TaskSuggestionsRequest, TaskSuggestionsResponse,
};

use crate::ApiState;
use crate::middleware::error_handling::AppError;
use crate::suggest::SuggestionClient;

fn client(state: &ApiState) -> Result<&Arc<dyn SuggestionClient>, AppError> {
    state.suggestions.as_ref().ok_or_else(|| {
        AppError(RollcallError::Validation(
            "suggestion service is not configured".to_string(),
        ))
    })
}

/// Flattens the schedule into the plain-text form the prompt consumes.
fn flatten_schedule(snapshot: &ScheduleSnapshot) -> String {
    if snapshot.classes.is_empty() {
        return "No classes scheduled today.".to_string();
    }

    snapshot
        .classes
        .iter()
        .map(|class| {
            format!(
                "{}: {} with {} in Room {} [{}]",
                class.time, class.subject, class.instructor, class.room, class.status
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Personalized task suggestions for a free period.
#[axum::debug_handler]
pub async fn task_suggestions(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<TaskSuggestionsRequest>,
) -> Result<Json<TaskSuggestionsResponse>, AppError> {
    let client = client(&state)?;

    let prompt = format!(
        "You are an AI assistant that provides personalized academic task \
         suggestions to students during their free periods.\n\n\
         Student Interests: {}\n\
         Student Strengths: {}\n\
         Student Career Goals: {}\n\
         Free Period Details: {}\n\n\
         Provide a bulleted list of task suggestions the student can do \
         during this free period.",
        payload.interests, payload.strengths, payload.career_goals, payload.free_period
    );

    let text = client.complete(&prompt).await?;

    Ok(Json(TaskSuggestionsResponse {
        task_suggestions: text,
    }))
}

/// A personalized daily routine built from the live schedule.
///
/// The schedule snapshot is force-refreshed so the flattened text reflects
/// the clock, not the last timer tick.
#[axum::debug_handler]
pub async fn daily_routine(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<DailyRoutineRequest>,
) -> Result<Json<DailyRoutineResponse>, AppError> {
    let client = client(&state)?;

    // Confirms the student exists before spending a completion call
    let student = state.roster.get(&payload.student_id).await?;
    let snapshot = state.engine.refresh().await?;

    let prompt = format!(
        "You are an AI assistant designed to create personalized daily \
         routines for students.\n\n\
         Student: {}\n\
         Class Schedule:\n{}\n\
         Free Time Available: {}\n\
         Student Interests: {}\n\
         Student Strengths: {}\n\
         Career Goals: {}\n\n\
         Generate a daily routine that balances academic and personal \
         pursuits.",
        student.name,
        flatten_schedule(&snapshot),
        payload.free_time,
        payload.interests,
        payload.strengths,
        payload.career_goals
    );

    let text = client.complete(&prompt).await?;

    Ok(Json(DailyRoutineResponse {
        daily_routine: text,
    }))
}
