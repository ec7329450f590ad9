use super::*;

/// Tests a flight is created with exactly `nb_slots` empty slots at positions 1..=n.
///
/// Expected: Ok with 4 empty slots, positions 1 to 4
#[tokio::test]
async fn provisions_declared_capacity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_owner(db).await?;
    let aircraft = factory::module::create_aircraft(db).await?;

    let created = FlightRepository::new(db)
        .create_with_slots(DefineFlightParams {
            event_id: event.id,
            name: "Viper 1".to_string(),
            module_id: aircraft.id,
            nb_slots: 4,
            mission: Some("SEAD".to_string()),
        })
        .await?;

    assert_eq!(created.flight.name, "Viper 1");
    assert_eq!(created.flight.nb_slots, 4);
    assert_eq!(
        created.slots.iter().map(|s| s.position).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert!(created.slots.iter().all(|s| !s.is_occupied()));
    assert!(created.slots.iter().all(|s| s.event_id == event.id));

    Ok(())
}
