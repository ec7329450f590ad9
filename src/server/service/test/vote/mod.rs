use chrono::Duration;
use entity::sea_orm_active_enums::UserStatus;
use test_utils::{builder::TestBuilder, factory};

use super::actor;
use crate::server::{
    data::vote::VoteRepository,
    error::{auth::AuthError, roster::RosterError, AppError},
    model::vote::{CastVoteParams, VoteIntent},
    service::vote::VoteService,
};

mod cast_vote;

fn cast(event_id: i32, intent: VoteIntent) -> CastVoteParams {
    CastVoteParams {
        event_id,
        intent,
        comment: None,
    }
}
