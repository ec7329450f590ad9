//! Domain models for module choices.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ChoiceTask;
use sea_orm::ActiveEnum;

use crate::{
    model::choice::{AddChoiceDto, ChoiceDto, UpdateChoiceDto},
    server::error::roster::RosterError,
};

/// Priority given to a choice submitted without one.
pub const DEFAULT_PRIORITY: i32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub module_id: i32,
    pub task: Option<ChoiceTask>,
    /// Opaque sort hint.
    pub priority: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Choice {
    pub fn from_entity(entity: entity::event_choice::Model) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            user_id: entity.user_id,
            module_id: entity.module_id,
            task: entity.task,
            priority: entity.priority,
            comment: entity.comment,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ChoiceDto {
        ChoiceDto {
            id: self.id,
            event_id: self.event_id,
            user_id: self.user_id,
            module_id: self.module_id,
            task: self.task.map(|t| t.to_value()),
            priority: self.priority,
            comment: self.comment,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Decodes an optional task code.
pub fn parse_task(code: Option<i32>) -> Result<Option<ChoiceTask>, RosterError> {
    code.map(|code| {
        ChoiceTask::try_from_value(&code)
            .map_err(|_| RosterError::validation("task", format!("unknown task {}", code)))
    })
    .transpose()
}

#[derive(Debug, Clone)]
pub struct AddChoiceParams {
    pub event_id: i32,
    pub module_id: i32,
    pub task: Option<i32>,
    pub priority: Option<i32>,
    pub comment: Option<String>,
}

impl AddChoiceParams {
    pub fn from_dto(event_id: i32, dto: AddChoiceDto) -> Self {
        Self {
            event_id,
            module_id: dto.module_id,
            task: dto.task,
            priority: dto.priority,
            comment: dto.comment,
        }
    }
}

/// Partial choice update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateChoiceParams {
    pub id: i32,
    pub module_id: Option<i32>,
    pub task: Option<i32>,
    pub priority: Option<i32>,
    pub comment: Option<String>,
}

impl UpdateChoiceParams {
    pub fn from_dto(id: i32, dto: UpdateChoiceDto) -> Self {
        Self {
            id,
            module_id: dto.module_id,
            task: dto.task,
            priority: dto.priority,
            comment: dto.comment,
        }
    }
}

/// Validated choice attributes written by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceFields {
    pub module_id: i32,
    pub task: Option<ChoiceTask>,
    pub priority: i32,
    pub comment: Option<String>,
}
