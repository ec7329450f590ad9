use super::*;

/// Tests deleting a flight frees its occupants.
///
/// Expected: flight gone, its pilot free to claim in another flight
#[tokio::test]
async fn deleting_flight_frees_occupants() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, aircraft, event, doomed) =
        factory::helpers::create_flight_with_dependencies(db, 2).await?;
    let other = factory::flight::create_flight(db, event.id, aircraft.id).await?;
    let pilot = factory::user::create_user(db).await?;
    let service = RosterService::new(db);

    service.claim_slot(&actor(&pilot), doomed.slots[0].id).await?;
    service.delete_flight(&actor(&owner), doomed.flight.id).await?;

    let flights = FlightRepository::new(db).get_by_event(event.id).await?;
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].flight.id, other.flight.id);

    service.claim_slot(&actor(&pilot), other.slots[0].id).await?;

    Ok(())
}

/// Tests only the owner or an administrator deletes flights.
///
/// Expected: AccessDenied for another member, NotFound for an unknown flight
#[tokio::test]
async fn enforces_access_and_existence() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, flight) = factory::helpers::create_flight_with_dependencies(db, 2).await?;
    let other = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let service = RosterService::new(db);

    let result = service.delete_flight(&actor(&other), flight.flight.id).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service.delete_flight(&actor(&admin), flight.flight.id).await?;

    let result = service.delete_flight(&actor(&admin), flight.flight.id).await;
    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::NotFound { entity: "Flight", .. }))
    ));

    Ok(())
}
