//! Domain models for the event store.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{EventType, RepeatEvent};
use sea_orm::ActiveEnum;

use crate::{
    model::event::{EventDto, EventSpecDto, PaginatedEventsDto},
    server::error::roster::RosterError,
};

/// Longest accepted event title, in characters.
pub const MAX_TITLE_LEN: usize = 255;

/// Participation restriction attached to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Restriction {
    /// Open to cadets and members.
    Cadet,
    /// Open to members only.
    Member,
}

impl Restriction {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Cadet),
            2 => Some(Self::Member),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Cadet => 1,
            Self::Member => 2,
        }
    }

    /// Parses the stored comma separated code list, skipping unknown codes.
    pub fn parse_list(stored: Option<&str>) -> Vec<Self> {
        let mut restrictions: Vec<Self> = stored
            .unwrap_or_default()
            .split(',')
            .filter_map(|code| code.trim().parse::<i32>().ok())
            .filter_map(Self::from_code)
            .collect();
        restrictions.sort();
        restrictions.dedup();
        restrictions
    }

    /// Formats a restriction set for storage; an empty set is stored as NULL.
    pub fn join_list(restrictions: &[Self]) -> Option<String> {
        if restrictions.is_empty() {
            return None;
        }

        Some(
            restrictions
                .iter()
                .map(|r| r.code().to_string())
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

/// Calendar event with its module reference set.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub event_type: EventType,
    pub sim_dcs: bool,
    pub sim_bms: bool,
    pub description: Option<String>,
    pub restrictions: Vec<Restriction>,
    pub registration: bool,
    pub ato: bool,
    pub debrief: Option<String>,
    pub repeat_event: RepeatEvent,
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub owner_id: i32,
    pub map_id: Option<i32>,
    pub server_id: Option<i32>,
    pub image_id: Option<i32>,
    pub module_ids: Vec<i32>,
    /// Compare-and-swap counter of the flight/slot aggregate.
    pub roster_version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Converts an entity model to an event domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The event row
    /// - `module_ids` - Ids of the modules referenced through `event_module`
    pub fn from_entity(entity: entity::calendar_event::Model, module_ids: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            start_date: entity.start_date,
            end_date: entity.end_date,
            event_type: entity.event_type,
            sim_dcs: entity.sim_dcs,
            sim_bms: entity.sim_bms,
            description: entity.description,
            restrictions: Restriction::parse_list(entity.restrictions.as_deref()),
            registration: entity.registration,
            ato: entity.ato,
            debrief: entity.debrief,
            repeat_event: entity.repeat_event,
            deleted: entity.deleted,
            deleted_at: entity.deleted_at,
            owner_id: entity.owner_id,
            map_id: entity.map_id,
            server_id: entity.server_id,
            image_id: entity.image_id,
            module_ids,
            roster_version: entity.roster_version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether the event window has closed at `now`.
    pub fn is_finished(&self, now: DateTime<Utc>) -> bool {
        self.end_date < now
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            start_date: self.start_date,
            end_date: self.end_date,
            event_type: self.event_type.to_value(),
            event_type_label: self.event_type.label().to_string(),
            color: self.event_type.color().to_string(),
            sim_dcs: self.sim_dcs,
            sim_bms: self.sim_bms,
            description: self.description,
            restrictions: self.restrictions.iter().map(Restriction::code).collect(),
            registration: self.registration,
            ato: self.ato,
            debrief: self.debrief,
            repeat_event: self.repeat_event.to_value(),
            deleted: self.deleted,
            deleted_at: self.deleted_at,
            owner_id: self.owner_id,
            map_id: self.map_id,
            server_id: self.server_id,
            image_id: self.image_id,
            module_ids: self.module_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Unvalidated event attributes as submitted for create and update.
///
/// Enumerations are still raw codes; `validate` turns them into `EventFields`.
#[derive(Debug, Clone)]
pub struct EventSpecParams {
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub event_type: i32,
    pub sim_dcs: bool,
    pub sim_bms: bool,
    pub description: Option<String>,
    pub restrictions: Vec<i32>,
    pub registration: bool,
    pub ato: bool,
    pub debrief: Option<String>,
    pub repeat_event: i32,
    pub map_id: Option<i32>,
    pub server_id: Option<i32>,
    pub image_id: Option<i32>,
    pub module_ids: Vec<i32>,
}

impl EventSpecParams {
    pub fn from_dto(dto: EventSpecDto) -> Self {
        Self {
            title: dto.title,
            start_date: dto.start_date,
            end_date: dto.end_date,
            event_type: dto.event_type,
            sim_dcs: dto.sim_dcs,
            sim_bms: dto.sim_bms,
            description: dto.description,
            restrictions: dto.restrictions,
            registration: dto.registration,
            ato: dto.ato,
            debrief: dto.debrief,
            repeat_event: dto.repeat_event,
            map_id: dto.map_id,
            server_id: dto.server_id,
            image_id: dto.image_id,
            module_ids: dto.module_ids,
        }
    }

    /// Checks every constraint that does not need the database.
    ///
    /// Module and map references are checked by the service against the catalog.
    ///
    /// # Returns
    /// - `Ok(EventFields)` - Trimmed title, decoded enumerations, deduplicated modules
    /// - `Err(RosterError::Validation)` - First violated constraint
    pub fn validate(self) -> Result<EventFields, RosterError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(RosterError::validation("title", "must not be empty"));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(RosterError::validation(
                "title",
                format!("must be at most {} characters", MAX_TITLE_LEN),
            ));
        }
        if self.end_date < self.start_date {
            return Err(RosterError::validation(
                "end_date",
                "must not be before start_date",
            ));
        }

        let event_type = EventType::try_from_value(&self.event_type).map_err(|_| {
            RosterError::validation(
                "event_type",
                format!("unknown category {}", self.event_type),
            )
        })?;
        let repeat_event = RepeatEvent::try_from_value(&self.repeat_event).map_err(|_| {
            RosterError::validation(
                "repeat_event",
                format!("unknown recurrence {}", self.repeat_event),
            )
        })?;

        let mut restrictions = Vec::with_capacity(self.restrictions.len());
        for code in self.restrictions {
            let restriction = Restriction::from_code(code).ok_or_else(|| {
                RosterError::validation("restrictions", format!("unknown restriction {}", code))
            })?;
            restrictions.push(restriction);
        }
        restrictions.sort();
        restrictions.dedup();

        let mut module_ids = self.module_ids;
        module_ids.sort_unstable();
        module_ids.dedup();

        Ok(EventFields {
            title,
            start_date: self.start_date,
            end_date: self.end_date,
            event_type,
            sim_dcs: self.sim_dcs,
            sim_bms: self.sim_bms,
            description: self.description,
            restrictions,
            registration: self.registration,
            ato: self.ato,
            debrief: self.debrief,
            repeat_event,
            map_id: self.map_id,
            server_id: self.server_id,
            image_id: self.image_id,
            module_ids,
        })
    }
}

/// Validated event attributes written by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFields {
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub event_type: EventType,
    pub sim_dcs: bool,
    pub sim_bms: bool,
    pub description: Option<String>,
    pub restrictions: Vec<Restriction>,
    pub registration: bool,
    pub ato: bool,
    pub debrief: Option<String>,
    pub repeat_event: RepeatEvent,
    pub map_id: Option<i32>,
    pub server_id: Option<i32>,
    pub image_id: Option<i32>,
    pub module_ids: Vec<i32>,
}

impl EventFields {
    /// Template fields of an existing event, used when cloning.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            start_date: event.start_date,
            end_date: event.end_date,
            event_type: event.event_type,
            sim_dcs: event.sim_dcs,
            sim_bms: event.sim_bms,
            description: event.description.clone(),
            restrictions: event.restrictions.clone(),
            registration: event.registration,
            ato: event.ato,
            debrief: event.debrief.clone(),
            repeat_event: event.repeat_event,
            map_id: event.map_id,
            server_id: event.server_id,
            image_id: event.image_id,
            module_ids: event.module_ids.clone(),
        }
    }
}

/// Listing filter.
///
/// `page` is zero-based. `per_page` is already clamped to the configured maximum.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Keep events ending at or after this instant.
    pub from: Option<DateTime<Utc>>,
    /// Keep events starting at or before this instant.
    pub to: Option<DateTime<Utc>>,
    /// Case-insensitive title substring.
    pub search: Option<String>,
    pub event_type: Option<EventType>,
    pub sim_dcs: Option<bool>,
    pub sim_bms: Option<bool>,
    /// `Some(true)` lists only soft-deleted events, `Some(false)` only active ones and
    /// `None` both. Forced to `Some(false)` for non-administrators.
    pub deleted: Option<bool>,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedEvents {
    pub events: Vec<Event>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedEvents {
    pub fn into_dto(self) -> PaginatedEventsDto {
        PaginatedEventsDto {
            events: self.events.into_iter().map(Event::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
