use super::*;
use entity::sea_orm_active_enums::RepeatEvent;

use crate::server::data::{flight::FlightRepository, vote::VoteRepository};

/// Tests cloning without flights copies the template but no roster and no votes.
///
/// Expected: new event owned by the actor, same fields and modules, no flights or votes
#[tokio::test]
async fn copies_template_without_flights() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, aircraft, source, flight) =
        factory::helpers::create_flight_with_dependencies(db, 2).await?;
    factory::event::add_module(db, source.id, aircraft.id).await?;
    factory::flight::occupy_slot(db, &flight.slots[0], owner.id).await?;
    factory::vote::create_vote(db, source.id, owner.id).await?;
    let copier = factory::user::create_user(db).await?;

    let copy = EventService::new(db)
        .clone_event(&actor(&copier), source.id, false)
        .await?;

    assert_ne!(copy.id, source.id);
    assert_eq!(copy.owner_id, copier.id);
    assert_eq!(copy.title, source.title);
    assert_eq!(copy.start_date, source.start_date);
    assert_eq!(copy.module_ids, vec![aircraft.id]);
    assert!(!copy.deleted);
    assert!(FlightRepository::new(db).get_by_event(copy.id).await?.is_empty());
    assert!(VoteRepository::new(db).get_by_event(copy.id).await?.is_empty());

    Ok(())
}

/// Tests cloning with flights recreates every flight with fresh empty slots.
///
/// Expected: same flight name and capacity, every slot empty
#[tokio::test]
async fn copies_flights_with_empty_slots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, source, flight) = factory::helpers::create_flight_with_dependencies(db, 3).await?;
    factory::flight::occupy_slot(db, &flight.slots[1], owner.id).await?;

    let copy = EventService::new(db)
        .clone_event(&actor(&owner), source.id, true)
        .await?;

    let flights = FlightRepository::new(db).get_by_event(copy.id).await?;
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].flight.name, flight.flight.name);
    assert_eq!(flights[0].flight.nb_slots, 3);
    assert_eq!(flights[0].slots.len(), 3);
    assert!(flights[0].slots.iter().all(|s| !s.is_occupied()));

    // Source roster untouched
    let source_flights = FlightRepository::new(db).get_by_event(source.id).await?;
    assert_eq!(source_flights[0].slots[1].user_id, Some(owner.id));

    Ok(())
}

/// Tests the recurrence tag travels with the copy.
///
/// Expected: copy keeps the source's recurrence
#[tokio::test]
async fn keeps_recurrence_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let source = factory::event::EventFactory::new(db, owner.id)
        .repeat_event(RepeatEvent::DayOfWeek)
        .build()
        .await?;

    let copy = EventService::new(db)
        .clone_event(&actor(&owner), source.id, false)
        .await?;

    assert_eq!(copy.repeat_event, RepeatEvent::DayOfWeek);

    Ok(())
}

/// Tests a deleted source is hidden from members and reported to administrators.
///
/// Expected: NotFound for a member, EventDeleted for an admin
#[tokio::test]
async fn refuses_deleted_source() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let source = factory::event::EventFactory::new(db, owner.id)
        .deleted(true)
        .build()
        .await?;
    let service = EventService::new(db);

    let result = service.clone_event(&actor(&owner), source.id, false).await;
    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::NotFound { .. }))
    ));

    let result = service.clone_event(&actor(&admin), source.id, false).await;
    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::EventDeleted(_)))
    ));

    Ok(())
}
