//! Read model assembled by the roster façade.

use crate::{
    model::{
        choice::ChoiceDetailDto,
        event::{EventDetailDto, ModuleRefDto},
        flight::{FlightDetailDto, OccupantDto, SlotEntryDto},
        vote::{VoteDetailDto, VoteSummaryDto},
    },
    server::model::{
        choice::Choice,
        event::Event,
        flight::Flight,
        vote::{Vote, VoteIntent},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleRef {
    pub id: i32,
    pub name: String,
    pub long_name: String,
    pub module_type: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoteEntry {
    pub vote: Vote,
    pub nickname: Option<String>,
}

/// Per-intent vote counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteSummary {
    pub attending: u64,
    pub not_attending: u64,
    pub undecided: u64,
}

impl VoteSummary {
    pub fn from_votes<'a>(votes: impl IntoIterator<Item = &'a Vote>) -> Self {
        votes
            .into_iter()
            .fold(Self::default(), |mut summary, vote| {
                match vote.intent {
                    VoteIntent::Attending => summary.attending += 1,
                    VoteIntent::NotAttending => summary.not_attending += 1,
                    VoteIntent::Undecided => summary.undecided += 1,
                }
                summary
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceEntry {
    pub choice: Choice,
    pub nickname: Option<String>,
    pub module_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Occupant {
    Participant { id: i32, nickname: String },
    Guest { username: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotEntry {
    pub id: i32,
    pub position: i32,
    pub occupant: Option<Occupant>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightEntry {
    pub flight: Flight,
    pub module_name: Option<String>,
    /// Ordered by position.
    pub slots: Vec<SlotEntry>,
}

/// Complete snapshot of one event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    pub event: Event,
    pub owner_nickname: Option<String>,
    pub modules: Vec<ModuleRef>,
    pub votes: Vec<VoteEntry>,
    pub summary: VoteSummary,
    pub choices: Vec<ChoiceEntry>,
    pub flights: Vec<FlightEntry>,
}

impl EventDetail {
    pub fn into_dto(self) -> EventDetailDto {
        EventDetailDto {
            event: self.event.into_dto(),
            owner_nickname: self.owner_nickname,
            modules: self
                .modules
                .into_iter()
                .map(|m| ModuleRefDto {
                    id: m.id,
                    name: m.name,
                    long_name: m.long_name,
                    module_type: m.module_type,
                })
                .collect(),
            votes: self
                .votes
                .into_iter()
                .map(|entry| VoteDetailDto {
                    id: entry.vote.id,
                    user_id: entry.vote.user_id,
                    nickname: entry.nickname,
                    vote: entry.vote.intent.into_dto(),
                    comment: entry.vote.comment,
                    updated_at: entry.vote.updated_at,
                })
                .collect(),
            vote_summary: VoteSummaryDto {
                attending: self.summary.attending,
                not_attending: self.summary.not_attending,
                undecided: self.summary.undecided,
            },
            choices: self
                .choices
                .into_iter()
                .map(|entry| ChoiceDetailDto {
                    id: entry.choice.id,
                    user_id: entry.choice.user_id,
                    nickname: entry.nickname,
                    module_id: entry.choice.module_id,
                    module_name: entry.module_name,
                    task: entry.choice.task.map(|t| sea_orm::ActiveEnum::to_value(&t)),
                    task_label: entry.choice.task.map(|t| t.label().to_string()),
                    priority: entry.choice.priority,
                    comment: entry.choice.comment,
                })
                .collect(),
            flights: self
                .flights
                .into_iter()
                .map(|entry| FlightDetailDto {
                    id: entry.flight.id,
                    name: entry.flight.name,
                    mission: entry.flight.mission,
                    module_id: entry.flight.module_id,
                    module_name: entry.module_name,
                    nb_slots: entry.flight.nb_slots,
                    slots: entry
                        .slots
                        .into_iter()
                        .map(|slot| SlotEntryDto {
                            id: slot.id,
                            position: slot.position,
                            occupant: slot.occupant.map(|occupant| match occupant {
                                Occupant::Participant { id, nickname } => {
                                    OccupantDto::Participant { id, nickname }
                                }
                                Occupant::Guest { username } => OccupantDto::Guest { username },
                            }),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
