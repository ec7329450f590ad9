use super::*;

/// Tests the detail view joins every part of the event.
///
/// Expected: owner nickname, module set, votes with summary, named choices and
/// flights with participant and guest occupants
#[tokio::test]
async fn assembles_full_view() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .nickname("Viper")
        .build()
        .await?;
    let pilot = factory::user::UserFactory::new(db)
        .nickname("Jester")
        .build()
        .await?;
    let f16 = factory::module::ModuleFactory::new(db)
        .name("F-16C")
        .build()
        .await?;
    let event = factory::event::create_event(db, owner.id).await?;
    factory::event::add_module(db, event.id, f16.id).await?;
    factory::vote::create_vote(db, event.id, owner.id).await?;
    factory::vote::VoteFactory::new(db, event.id, pilot.id)
        .vote(None)
        .build()
        .await?;
    factory::choice::create_choice(db, event.id, pilot.id, f16.id).await?;
    let flight = factory::flight::FlightFactory::new(db, event.id, f16.id)
        .name("Venom")
        .build()
        .await?;
    factory::flight::occupy_slot(db, &flight.slots[0], pilot.id).await?;
    SlotRepository::new(db)
        .set_occupant(flight.slots[1].id, None, Some("Goose".to_string()))
        .await?;

    let detail = EventDetailService::new(db)
        .get_event_detail(&actor(&pilot), event.id)
        .await?;

    assert_eq!(detail.event.id, event.id);
    assert_eq!(detail.owner_nickname.as_deref(), Some("Viper"));
    assert_eq!(detail.modules.len(), 1);
    assert_eq!(detail.modules[0].name, "F-16C");

    assert_eq!(detail.votes.len(), 2);
    assert_eq!(
        detail.summary,
        VoteSummary {
            attending: 1,
            not_attending: 0,
            undecided: 1,
        }
    );

    assert_eq!(detail.choices.len(), 1);
    assert_eq!(detail.choices[0].nickname.as_deref(), Some("Jester"));
    assert_eq!(detail.choices[0].module_name.as_deref(), Some("F-16C"));

    assert_eq!(detail.flights.len(), 1);
    let venom = &detail.flights[0];
    assert_eq!(venom.flight.name, "Venom");
    assert_eq!(venom.module_name.as_deref(), Some("F-16C"));
    assert_eq!(
        venom.slots[0].occupant,
        Some(Occupant::Participant {
            id: pilot.id,
            nickname: "Jester".to_string(),
        })
    );
    assert_eq!(
        venom.slots[1].occupant,
        Some(Occupant::Guest {
            username: "Goose".to_string(),
        })
    );

    Ok(())
}

/// Tests an event with nothing attached yields empty collections.
///
/// Expected: empty votes, choices and flights with a zero summary
#[tokio::test]
async fn bare_event_has_empty_parts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, event) = factory::helpers::create_event_with_owner(db).await?;

    let detail = EventDetailService::new(db)
        .get_event_detail(&actor(&owner), event.id)
        .await?;

    assert!(detail.modules.is_empty());
    assert!(detail.votes.is_empty());
    assert!(detail.choices.is_empty());
    assert!(detail.flights.is_empty());
    assert_eq!(detail.summary, VoteSummary::default());

    Ok(())
}

/// Tests deleted events are hidden from participants but not from administrators.
///
/// Expected: NotFound for the owner, the view for an admin
#[tokio::test]
async fn deleted_event_visible_to_admins_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let event = factory::event::EventFactory::new(db, owner.id)
        .deleted(true)
        .build()
        .await?;
    let service = EventDetailService::new(db);

    let result = service.get_event_detail(&actor(&owner), event.id).await;
    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::NotFound { entity: "Event", .. }))
    ));

    let detail = service.get_event_detail(&actor(&admin), event.id).await?;
    assert!(detail.event.deleted);

    Ok(())
}
