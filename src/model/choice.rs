use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddChoiceDto {
    pub module_id: i32,
    /// Task code (0 undefined, 1 CAP, 2 CAS, 3 SEAD, 4 Escort, 5 Transport)
    pub task: Option<i32>,
    pub priority: Option<i32>,
    pub comment: Option<String>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateChoiceDto {
    pub module_id: Option<i32>,
    pub task: Option<i32>,
    pub priority: Option<i32>,
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChoiceDto {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub module_id: i32,
    pub task: Option<i32>,
    pub priority: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChoiceDetailDto {
    pub id: i32,
    pub user_id: i32,
    pub nickname: Option<String>,
    pub module_id: i32,
    pub module_name: Option<String>,
    pub task: Option<i32>,
    pub task_label: Option<String>,
    pub priority: i32,
    pub comment: Option<String>,
}
