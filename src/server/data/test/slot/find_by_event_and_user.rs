use super::*;

/// Tests the lookup spans every flight of the event.
///
/// Expected: the slot in the second flight, nothing for another event
#[tokio::test]
async fn finds_seat_across_flights() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, aircraft, event, _) = factory::helpers::create_flight_with_dependencies(db, 2).await?;
    let second = factory::flight::create_flight(db, event.id, aircraft.id).await?;
    let pilot = factory::user::create_user(db).await?;
    factory::flight::occupy_slot(db, &second.slots[1], pilot.id).await?;

    let (_, other) = factory::helpers::create_event_with_owner(db).await?;

    let repo = SlotRepository::new(db);
    let found = repo.find_by_event_and_user(event.id, pilot.id).await?;
    assert_eq!(found.map(|s| s.id), Some(second.slots[1].id));

    assert!(repo
        .find_by_event_and_user(other.id, pilot.id)
        .await?
        .is_none());

    Ok(())
}
