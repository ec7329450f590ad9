//! Read façade assembling the complete view of one event.

use std::collections::HashSet;

use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::{
        choice::ChoiceRepository, event::EventRepository, flight::FlightRepository,
        module::ModuleRepository, user::UserRepository, vote::VoteRepository,
    },
    error::{roster::RosterError, AppError},
    model::{
        detail::{
            ChoiceEntry, EventDetail, FlightEntry, ModuleRef, Occupant, SlotEntry, VoteEntry,
            VoteSummary,
        },
        user::Actor,
    },
    service::begin_read,
};

pub struct EventDetailService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventDetailService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the event together with its modules, votes, choices and flight roster.
    ///
    /// Every part is read from the same snapshot. Deleted events are only visible to
    /// administrators.
    ///
    /// # Returns
    /// - `Ok(EventDetail)` - The assembled view
    /// - `Err(AppError::RosterErr(NotFound))` - No visible event with this ID
    pub async fn get_event_detail(
        &self,
        actor: &Actor,
        event_id: i32,
    ) -> Result<EventDetail, AppError> {
        let txn = begin_read(self.db).await?;

        let event = EventRepository::new(&txn)
            .find_by_id(event_id)
            .await?
            .filter(|event| !event.deleted || actor.admin)
            .ok_or_else(|| RosterError::not_found("Event", event_id))?;

        let votes = VoteRepository::new(&txn).get_by_event(event_id).await?;
        let choices = ChoiceRepository::new(&txn).get_by_event(event_id).await?;
        let flights = FlightRepository::new(&txn).get_by_event(event_id).await?;

        let mut user_ids: HashSet<i32> = HashSet::from([event.owner_id]);
        user_ids.extend(votes.iter().map(|v| v.user_id));
        user_ids.extend(choices.iter().map(|c| c.user_id));
        user_ids.extend(
            flights
                .iter()
                .flat_map(|f| f.slots.iter().filter_map(|s| s.user_id)),
        );

        let mut module_ids: HashSet<i32> = event.module_ids.iter().copied().collect();
        module_ids.extend(choices.iter().map(|c| c.module_id));
        module_ids.extend(flights.iter().map(|f| f.flight.module_id));

        let users = UserRepository::new(&txn)
            .find_by_ids(user_ids.into_iter().collect())
            .await?;
        let modules = ModuleRepository::new(&txn)
            .find_by_ids(module_ids.into_iter().collect())
            .await?;

        txn.commit().await?;

        let nickname = |id: i32| users.get(&id).map(|u| u.nickname.clone());
        let module_name = |id: i32| modules.get(&id).map(|m| m.name.clone());

        let summary = VoteSummary::from_votes(&votes);

        let detail = EventDetail {
            owner_nickname: nickname(event.owner_id),
            modules: event
                .module_ids
                .iter()
                .filter_map(|id| modules.get(id))
                .map(|m| ModuleRef {
                    id: m.id,
                    name: m.name.clone(),
                    long_name: m.long_name.clone(),
                    module_type: m.module_type.to_value(),
                })
                .collect(),
            votes: votes
                .into_iter()
                .map(|vote| VoteEntry {
                    nickname: nickname(vote.user_id),
                    vote,
                })
                .collect(),
            summary,
            choices: choices
                .into_iter()
                .map(|choice| ChoiceEntry {
                    nickname: nickname(choice.user_id),
                    module_name: module_name(choice.module_id),
                    choice,
                })
                .collect(),
            flights: flights
                .into_iter()
                .map(|entry| FlightEntry {
                    module_name: module_name(entry.flight.module_id),
                    slots: entry
                        .slots
                        .into_iter()
                        .map(|slot| SlotEntry {
                            id: slot.id,
                            position: slot.position,
                            occupant: match (slot.user_id, slot.username) {
                                (Some(id), _) => Some(Occupant::Participant {
                                    id,
                                    nickname: nickname(id).unwrap_or_default(),
                                }),
                                (None, Some(username)) => Some(Occupant::Guest { username }),
                                (None, None) => None,
                            },
                        })
                        .collect(),
                    flight: entry.flight,
                })
                .collect(),
            event,
        };

        Ok(detail)
    }
}
