use super::*;

/// Tests the occupant may release their own slot.
///
/// Expected: slot empty, roster version advanced
#[tokio::test]
async fn occupant_releases_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event, flight) = factory::helpers::create_flight_with_dependencies(db, 2).await?;
    let pilot = factory::user::create_user(db).await?;
    let slot_id = flight.slots[0].id;
    let service = RosterService::new(db);

    service.claim_slot(&actor(&pilot), slot_id).await?;
    let before = roster_version(db, event.id).await?;

    let released = service.release_slot(&actor(&pilot), slot_id).await?;

    assert!(!released.is_occupied());
    assert_eq!(roster_version(db, event.id).await?, before + 1);

    // The participant may take a seat again afterwards
    service.claim_slot(&actor(&pilot), flight.slots[1].id).await?;

    Ok(())
}

/// Tests an administrator may release any slot, including guest slots.
///
/// Expected: both slots empty
#[tokio::test]
async fn admin_releases_any_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, flight) = factory::helpers::create_flight_with_dependencies(db, 2).await?;
    let pilot = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let service = RosterService::new(db);

    factory::flight::occupy_slot(db, &flight.slots[0], pilot.id).await?;
    service
        .assign_guest(&actor(&admin), flight.slots[1].id, "Maverick".to_string())
        .await?;

    for slot in &flight.slots {
        let released = service.release_slot(&actor(&admin), slot.id).await?;
        assert!(!released.is_occupied());
    }

    Ok(())
}

/// Tests a participant cannot release someone else's slot.
///
/// Expected: AccessDenied and the occupant stays seated
#[tokio::test]
async fn stranger_cannot_release_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, flight) = factory::helpers::create_flight_with_dependencies(db, 2).await?;
    let pilot = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let slot = factory::flight::occupy_slot(db, &flight.slots[0], pilot.id).await?;

    let result = RosterService::new(db)
        .release_slot(&actor(&stranger), slot.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    let stored = SlotRepository::new(db).find_by_id(slot.id).await?;
    assert_eq!(stored.and_then(|s| s.user_id), Some(pilot.id));

    Ok(())
}

/// Tests releasing an empty slot changes nothing.
///
/// Expected: Ok with an empty slot and an unchanged roster version
#[tokio::test]
async fn releasing_empty_slot_is_no_op() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, event, flight) = factory::helpers::create_flight_with_dependencies(db, 1).await?;
    let stranger = factory::user::create_user(db).await?;
    let before = roster_version(db, event.id).await?;

    let slot = RosterService::new(db)
        .release_slot(&actor(&stranger), flight.slots[0].id)
        .await?;

    assert!(!slot.is_occupied());
    assert_eq!(roster_version(db, event.id).await?, before);

    Ok(())
}
