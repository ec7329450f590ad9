use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    choice::ChoiceDetailDto,
    flight::FlightDetailDto,
    vote::{VoteDetailDto, VoteSummaryDto},
};

fn default_true() -> bool {
    true
}

/// Body of event creation and update requests.
///
/// Enumerations travel as their integer codes and are validated server-side.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventSpecDto {
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Category code (1 Training, 2 Mission, 3 OPEX, 4 Meeting, 5 Maintenance, 6 ATC)
    pub event_type: i32,
    #[serde(default)]
    pub sim_dcs: bool,
    #[serde(default)]
    pub sim_bms: bool,
    pub description: Option<String>,
    /// Restriction codes (1 Cadet, 2 Member)
    #[serde(default)]
    pub restrictions: Vec<i32>,
    #[serde(default = "default_true")]
    pub registration: bool,
    #[serde(default)]
    pub ato: bool,
    pub debrief: Option<String>,
    /// Recurrence code (0 none, 1 day of week, 2 day of month, 3 nth weekday of month)
    #[serde(default)]
    pub repeat_event: i32,
    pub map_id: Option<i32>,
    pub server_id: Option<i32>,
    pub image_id: Option<i32>,
    #[serde(default)]
    pub module_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub event_type: i32,
    pub event_type_label: String,
    pub color: String,
    pub sim_dcs: bool,
    pub sim_bms: bool,
    pub description: Option<String>,
    pub restrictions: Vec<i32>,
    pub registration: bool,
    pub ato: bool,
    pub debrief: Option<String>,
    pub repeat_event: i32,
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub owner_id: i32,
    pub map_id: Option<i32>,
    pub server_id: Option<i32>,
    pub image_id: Option<i32>,
    pub module_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedEventsDto {
    pub events: Vec<EventDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ModuleRefDto {
    pub id: i32,
    pub name: String,
    pub long_name: String,
    pub module_type: i32,
}

/// Full read model of one event.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventDetailDto {
    pub event: EventDto,
    pub owner_nickname: Option<String>,
    pub modules: Vec<ModuleRefDto>,
    pub votes: Vec<VoteDetailDto>,
    pub vote_summary: VoteSummaryDto,
    pub choices: Vec<ChoiceDetailDto>,
    pub flights: Vec<FlightDetailDto>,
}
