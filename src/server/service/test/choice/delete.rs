use super::*;

/// Tests the owner and an administrator may delete choices, others may not.
///
/// Expected: AccessDenied for a stranger, then both deletions succeed
#[tokio::test]
async fn owner_or_admin_deletes_choice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, event) = factory::helpers::create_event_with_owner(db).await?;
    let other = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let f16 = factory::module::create_aircraft(db).await?;
    let f18 = factory::module::create_aircraft(db).await?;
    let first = factory::choice::create_choice(db, event.id, owner.id, f16.id).await?;
    let second = factory::choice::create_choice(db, event.id, owner.id, f18.id).await?;
    let service = ChoiceService::new(db);

    let result = service.delete(&actor(&other), first.id).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service.delete(&actor(&owner), first.id).await?;
    service.delete(&actor(&admin), second.id).await?;

    assert!(ChoiceRepository::new(db).get_by_event(event.id).await?.is_empty());

    let result = service.delete(&actor(&owner), first.id).await;
    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::NotFound { entity: "Choice", .. }))
    ));

    Ok(())
}
