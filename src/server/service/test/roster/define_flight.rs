use super::*;

fn params(event_id: i32, module_id: i32, nb_slots: i32) -> DefineFlightParams {
    DefineFlightParams {
        event_id,
        name: "  Viper 1 ".to_string(),
        module_id,
        nb_slots,
        mission: Some("SEAD".to_string()),
    }
}

/// Tests a flight is created with exactly its declared number of empty slots.
///
/// Expected: four empty slots at positions 1 to 4 and an advanced roster version
#[tokio::test]
async fn provisions_declared_slots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, event) = factory::helpers::create_event_with_owner(db).await?;
    let f16 = factory::module::create_aircraft(db).await?;
    let before = roster_version(db, event.id).await?;

    let flight = RosterService::new(db)
        .define_flight(&actor(&owner), params(event.id, f16.id, 4))
        .await?;

    assert_eq!(flight.flight.name, "Viper 1");
    assert_eq!(flight.flight.nb_slots, 4);
    assert_eq!(
        flight.slots.iter().map(|s| s.position).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert!(flight.slots.iter().all(|s| !s.is_occupied()));
    assert_eq!(roster_version(db, event.id).await?, before + 1);

    Ok(())
}

/// Tests capacities outside 1 to 16 are rejected before anything is written.
///
/// Expected: Validation on `nb_slots` and no flight stored
#[tokio::test]
async fn rejects_capacity_out_of_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, event) = factory::helpers::create_event_with_owner(db).await?;
    let f16 = factory::module::create_aircraft(db).await?;
    let service = RosterService::new(db);

    for nb_slots in [0, 17] {
        let result = service
            .define_flight(&actor(&owner), params(event.id, f16.id, nb_slots))
            .await;
        assert!(matches!(
            result,
            Err(AppError::RosterErr(RosterError::Validation { ref field, .. })) if field == "nb_slots"
        ));
    }

    let result = service
        .define_flight(
            &actor(&owner),
            DefineFlightParams {
                name: "   ".to_string(),
                ..params(event.id, f16.id, 2)
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::Validation { ref field, .. })) if field == "name"
    ));

    assert!(FlightRepository::new(db).get_by_event(event.id).await?.is_empty());

    Ok(())
}

/// Tests only the owner or an administrator may define flights.
///
/// Expected: AccessDenied for another member, success for an admin
#[tokio::test]
async fn requires_owner_or_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_owner(db).await?;
    let other = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let f16 = factory::module::create_aircraft(db).await?;
    let service = RosterService::new(db);

    let result = service
        .define_flight(&actor(&other), params(event.id, f16.id, 2))
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service
        .define_flight(&actor(&admin), params(event.id, f16.id, 2))
        .await?;

    Ok(())
}

/// Tests flights cannot be added to deleted events or reference unknown modules.
///
/// Expected: EventDeleted, then Validation on `module_id`
#[tokio::test]
async fn rejects_deleted_event_and_unknown_module() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let f16 = factory::module::create_aircraft(db).await?;
    let deleted = factory::event::EventFactory::new(db, owner.id)
        .deleted(true)
        .build()
        .await?;
    let active = factory::event::create_event(db, owner.id).await?;
    let service = RosterService::new(db);

    let result = service
        .define_flight(&actor(&owner), params(deleted.id, f16.id, 2))
        .await;
    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::EventDeleted(id))) if id == deleted.id
    ));

    let result = service
        .define_flight(&actor(&owner), params(active.id, f16.id + 1000, 2))
        .await;
    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::Validation { ref field, .. })) if field == "module_id"
    ));

    Ok(())
}
