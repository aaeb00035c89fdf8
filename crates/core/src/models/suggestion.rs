use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSuggestionsRequest {
    pub interests: String,
    pub strengths: String,
    pub career_goals: String,
    /// Free-period details, e.g. its duration.
    pub free_period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSuggestionsResponse {
    pub task_suggestions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRoutineRequest {
    pub student_id: String,
    pub interests: String,
    pub strengths: String,
    pub career_goals: String,
    pub free_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRoutineResponse {
    pub daily_routine: String,
}
