use super::*;

/// Tests an administrator seats a participant, replacing the current occupant.
///
/// Expected: new occupant seated, previous one free to claim elsewhere
#[tokio::test]
async fn admin_reassigns_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, flight) = factory::helpers::create_flight_with_dependencies(db, 2).await?;
    let admin = factory::user::create_admin(db).await?;
    let previous = factory::user::create_user(db).await?;
    let next = factory::user::create_user(db).await?;
    let slot = factory::flight::occupy_slot(db, &flight.slots[0], previous.id).await?;
    let service = RosterService::new(db);

    let reassigned = service.reassign_slot(&actor(&admin), slot.id, next.id).await?;
    assert_eq!(reassigned.user_id, Some(next.id));
    assert_eq!(reassigned.username, None);

    service.claim_slot(&actor(&previous), flight.slots[1].id).await?;

    // Seating the participant where they already sit changes nothing
    let same = service.reassign_slot(&actor(&admin), slot.id, next.id).await?;
    assert_eq!(same.user_id, Some(next.id));

    Ok(())
}

/// Tests reassignment keeps the single-seat rule and checks the participant exists.
///
/// Expected: AlreadyAssigned, then NotFound for an unknown participant
#[tokio::test]
async fn reassign_respects_single_seat() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, flight) = factory::helpers::create_flight_with_dependencies(db, 2).await?;
    let admin = factory::user::create_admin(db).await?;
    let pilot = factory::user::create_user(db).await?;
    let held = factory::flight::occupy_slot(db, &flight.slots[0], pilot.id).await?;
    let service = RosterService::new(db);

    let result = service
        .reassign_slot(&actor(&admin), flight.slots[1].id, pilot.id)
        .await;
    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::AlreadyAssigned { slot, .. })) if slot == held.id
    ));

    let result = service
        .reassign_slot(&actor(&admin), flight.slots[1].id, pilot.id + 1000)
        .await;
    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::NotFound { entity: "Participant", .. }))
    ));

    Ok(())
}

/// Tests an administrator puts a guest into a slot.
///
/// Expected: trimmed guest name stored, no participant
#[tokio::test]
async fn admin_assigns_guest() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, flight) = factory::helpers::create_flight_with_dependencies(db, 1).await?;
    let admin = factory::user::create_admin(db).await?;
    let pilot = factory::user::create_user(db).await?;
    factory::flight::occupy_slot(db, &flight.slots[0], pilot.id).await?;
    let service = RosterService::new(db);

    let slot = service
        .assign_guest(&actor(&admin), flight.slots[0].id, "  Goose ".to_string())
        .await?;

    assert_eq!(slot.user_id, None);
    assert_eq!(slot.username.as_deref(), Some("Goose"));

    let result = service
        .assign_guest(&actor(&admin), flight.slots[0].id, "   ".to_string())
        .await;
    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::Validation { ref field, .. })) if field == "username"
    ));

    Ok(())
}

/// Tests assignments are reserved to administrators.
///
/// Expected: AccessDenied for the event owner on both operations
#[tokio::test]
async fn assignments_require_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, flight) = factory::helpers::create_flight_with_dependencies(db, 1).await?;
    let pilot = factory::user::create_user(db).await?;
    let service = RosterService::new(db);

    let result = service
        .reassign_slot(&actor(&owner), flight.slots[0].id, pilot.id)
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let result = service
        .assign_guest(&actor(&owner), flight.slots[0].id, "Iceman".to_string())
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
