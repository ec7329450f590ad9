//! Domain models for attendance votes.

use chrono::{DateTime, Utc};

use crate::model::vote::{CastVoteDto, VoteDto, VoteIntentDto};

/// Longest accepted vote or choice comment, in characters.
pub const MAX_COMMENT_LEN: usize = 255;

/// Tri-state attendance intent.
///
/// Stored as a nullable boolean: `Some(true)` attending, `Some(false)` not attending
/// and `None` undecided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteIntent {
    Attending,
    NotAttending,
    Undecided,
}

impl VoteIntent {
    pub fn from_stored(vote: Option<bool>) -> Self {
        match vote {
            Some(true) => Self::Attending,
            Some(false) => Self::NotAttending,
            None => Self::Undecided,
        }
    }

    pub fn to_stored(self) -> Option<bool> {
        match self {
            Self::Attending => Some(true),
            Self::NotAttending => Some(false),
            Self::Undecided => None,
        }
    }

    pub fn from_dto(dto: VoteIntentDto) -> Self {
        match dto {
            VoteIntentDto::Attending => Self::Attending,
            VoteIntentDto::NotAttending => Self::NotAttending,
            VoteIntentDto::Undecided => Self::Undecided,
        }
    }

    pub fn into_dto(self) -> VoteIntentDto {
        match self {
            Self::Attending => VoteIntentDto::Attending,
            Self::NotAttending => VoteIntentDto::NotAttending,
            Self::Undecided => VoteIntentDto::Undecided,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vote {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub intent: VoteIntent,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vote {
    pub fn from_entity(entity: entity::event_vote::Model) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            user_id: entity.user_id,
            intent: VoteIntent::from_stored(entity.vote),
            comment: entity.comment,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> VoteDto {
        VoteDto {
            id: self.id,
            event_id: self.event_id,
            user_id: self.user_id,
            vote: self.intent.into_dto(),
            comment: self.comment,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CastVoteParams {
    pub event_id: i32,
    pub intent: VoteIntent,
    pub comment: Option<String>,
}

impl CastVoteParams {
    pub fn from_dto(event_id: i32, dto: CastVoteDto) -> Self {
        Self {
            event_id,
            intent: VoteIntent::from_dto(dto.vote),
            comment: dto.comment,
        }
    }
}
