//! Voting subsystem: one attendance intent per participant and event.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        event::{EventRepository, RowLock},
        vote::VoteRepository,
    },
    error::{roster::RosterError, AppError},
    model::{
        user::Actor,
        vote::{CastVoteParams, Vote, MAX_COMMENT_LEN},
    },
    service::eligibility::check_participation,
};

pub struct VoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the actor's attendance intent, overwriting any previous vote for the
    /// same event. Casting the same vote twice leaves a single vote.
    ///
    /// # Returns
    /// - `Ok(Vote)` - The stored vote
    /// - `Err(AppError::RosterErr(NotFound))` - No event with this ID
    /// - `Err(AppError::RosterErr(EventDeleted))` - The event is soft-deleted
    /// - `Err(AppError::AuthErr(AccessDenied))` - The actor may not take part
    /// - `Err(AppError::RosterErr(Validation))` - Comment longer than 255 characters
    pub async fn cast_vote(&self, actor: &Actor, params: CastVoteParams) -> Result<Vote, AppError> {
        let comment = normalize_comment(params.comment)?;

        let txn = self.db.begin().await?;

        let event = EventRepository::new(&txn)
            .find_by_id_locked(params.event_id, RowLock::Shared)
            .await?
            .ok_or_else(|| RosterError::not_found("Event", params.event_id))?;

        if event.deleted {
            return Err(RosterError::EventDeleted(event.id).into());
        }
        check_participation(actor, &event, Utc::now())?;

        let vote = VoteRepository::new(&txn)
            .upsert(event.id, actor.id, params.intent, comment)
            .await?;
        txn.commit().await?;

        tracing::debug!(
            event_id = event.id,
            user_id = actor.id,
            intent = ?vote.intent,
            "Recorded vote"
        );

        Ok(vote)
    }
}

/// Trims a comment, maps blank comments to `None` and enforces the length limit.
pub(crate) fn normalize_comment(comment: Option<String>) -> Result<Option<String>, RosterError> {
    let Some(comment) = comment else {
        return Ok(None);
    };

    let comment = comment.trim();
    if comment.is_empty() {
        return Ok(None);
    }
    if comment.chars().count() > MAX_COMMENT_LEN {
        return Err(RosterError::validation(
            "comment",
            format!("must be at most {} characters", MAX_COMMENT_LEN),
        ));
    }

    Ok(Some(comment.to_string()))
}
