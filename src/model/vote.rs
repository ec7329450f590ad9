use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VoteIntentDto {
    Attending,
    NotAttending,
    Undecided,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CastVoteDto {
    pub vote: VoteIntentDto,
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VoteDto {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub vote: VoteIntentDto,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VoteDetailDto {
    pub id: i32,
    pub user_id: i32,
    pub nickname: Option<String>,
    pub vote: VoteIntentDto,
    pub comment: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct VoteSummaryDto {
    pub attending: u64,
    pub not_attending: u64,
    pub undecided: u64,
}
