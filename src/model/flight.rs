use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DefineFlightDto {
    pub name: String,
    pub module_id: i32,
    pub nb_slots: i32,
    pub mission: Option<String>,
}

/// Administrator slot assignment: exactly one of `user_id` or `username`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AssignSlotDto {
    pub user_id: Option<i32>,
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SlotDto {
    pub id: i32,
    pub flight_id: i32,
    pub event_id: i32,
    pub position: i32,
    pub user_id: Option<i32>,
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FlightDto {
    pub id: i32,
    pub event_id: i32,
    pub name: String,
    pub mission: Option<String>,
    pub module_id: i32,
    pub nb_slots: i32,
    pub slots: Vec<SlotDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OccupantDto {
    Participant { id: i32, nickname: String },
    Guest { username: String },
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SlotEntryDto {
    pub id: i32,
    pub position: i32,
    pub occupant: Option<OccupantDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FlightDetailDto {
    pub id: i32,
    pub name: String,
    pub mission: Option<String>,
    pub module_id: i32,
    pub module_name: Option<String>,
    pub nb_slots: i32,
    pub slots: Vec<SlotEntryDto>,
}
