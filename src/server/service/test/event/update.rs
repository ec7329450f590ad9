use super::*;

/// Tests the owner replaces the attributes of their event.
///
/// Expected: Ok with the new title
#[tokio::test]
async fn owner_updates_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, event) = factory::helpers::create_event_with_owner(db).await?;

    let updated = EventService::new(db)
        .update(&actor(&owner), event.id, event_params("Night strike"))
        .await?;

    assert_eq!(updated.id, event.id);
    assert_eq!(updated.title, "Night strike");
    assert_eq!(updated.owner_id, owner.id);

    Ok(())
}

/// Tests another member cannot update the event while an administrator can.
///
/// Expected: Err(AuthError::AccessDenied) for the member, Ok for the admin
#[tokio::test]
async fn only_owner_or_admin_updates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_owner(db).await?;
    let other = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let service = EventService::new(db);

    let result = service
        .update(&actor(&other), event.id, event_params("Hijacked"))
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let updated = service
        .update(&actor(&admin), event.id, event_params("Moderated"))
        .await?;
    assert_eq!(updated.title, "Moderated");

    Ok(())
}

/// Tests a deleted event cannot be updated.
///
/// Expected: Err(RosterError::EventDeleted)
#[tokio::test]
async fn rejects_deleted_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let event = factory::event::EventFactory::new(db, owner.id)
        .deleted(true)
        .build()
        .await?;

    let result = EventService::new(db)
        .update(&actor(&owner), event.id, event_params("Too late"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::EventDeleted(id))) if id == event.id
    ));

    Ok(())
}
