use super::*;

/// Tests choices are ordered by participant, then priority.
///
/// Expected: the participant's priority 1 choice before priority 2
#[tokio::test]
async fn orders_by_participant_and_priority() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, event) = factory::helpers::create_event_with_owner(db).await?;
    let f16 = factory::module::create_aircraft(db).await?;
    let f18 = factory::module::create_aircraft(db).await?;

    let second = factory::choice::ChoiceFactory::new(db, event.id, owner.id, f16.id)
        .priority(2)
        .build()
        .await?;
    let first = factory::choice::ChoiceFactory::new(db, event.id, owner.id, f18.id)
        .priority(1)
        .build()
        .await?;

    let choices = ChoiceRepository::new(db).get_by_event(event.id).await?;

    assert_eq!(
        choices.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}
