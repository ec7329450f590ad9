//! Domain models for flights and their slots.

use crate::model::flight::{AssignSlotDto, DefineFlightDto, FlightDto, SlotDto};

/// Smallest and largest number of slots a flight may declare.
pub const MIN_SLOTS: i32 = 1;
pub const MAX_SLOTS: i32 = 16;
/// Longest accepted flight name, in characters.
pub const MAX_FLIGHT_NAME_LEN: usize = 32;
/// Longest accepted mission label or guest username, in characters.
pub const MAX_LABEL_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: i32,
    pub event_id: i32,
    pub name: String,
    pub mission: Option<String>,
    pub module_id: i32,
    pub nb_slots: i32,
}

impl Flight {
    pub fn from_entity(entity: entity::flight::Model) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            name: entity.name,
            mission: entity.mission,
            module_id: entity.module_id,
            nb_slots: entity.nb_slots,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub id: i32,
    pub flight_id: i32,
    pub event_id: i32,
    /// 1-based ordinal within the flight.
    pub position: i32,
    pub user_id: Option<i32>,
    /// Display name of an unregistered occupant.
    pub username: Option<String>,
}

impl Slot {
    pub fn from_entity(entity: entity::slot::Model) -> Self {
        Self {
            id: entity.id,
            flight_id: entity.flight_id,
            event_id: entity.event_id,
            position: entity.position,
            user_id: entity.user_id,
            username: entity.username,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.user_id.is_some() || self.username.is_some()
    }

    pub fn into_dto(self) -> SlotDto {
        SlotDto {
            id: self.id,
            flight_id: self.flight_id,
            event_id: self.event_id,
            position: self.position,
            user_id: self.user_id,
            username: self.username,
        }
    }
}

/// A flight together with its slots ordered by position.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightWithSlots {
    pub flight: Flight,
    pub slots: Vec<Slot>,
}

impl FlightWithSlots {
    pub fn into_dto(self) -> FlightDto {
        FlightDto {
            id: self.flight.id,
            event_id: self.flight.event_id,
            name: self.flight.name,
            mission: self.flight.mission,
            module_id: self.flight.module_id,
            nb_slots: self.flight.nb_slots,
            slots: self.slots.into_iter().map(Slot::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DefineFlightParams {
    pub event_id: i32,
    pub name: String,
    pub module_id: i32,
    pub nb_slots: i32,
    pub mission: Option<String>,
}

impl DefineFlightParams {
    pub fn from_dto(event_id: i32, dto: DefineFlightDto) -> Self {
        Self {
            event_id,
            name: dto.name,
            module_id: dto.module_id,
            nb_slots: dto.nb_slots,
            mission: dto.mission,
        }
    }
}

/// Occupant an administrator puts into a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotAssignee {
    Participant(i32),
    Guest(String),
}

impl SlotAssignee {
    /// Exactly one of `user_id` or `username` must be given.
    pub fn from_dto(dto: AssignSlotDto) -> Option<Self> {
        match (dto.user_id, dto.username) {
            (Some(user_id), None) => Some(Self::Participant(user_id)),
            (None, Some(username)) => Some(Self::Guest(username)),
            _ => None,
        }
    }
}
