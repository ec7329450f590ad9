use super::*;

/// Tests soft-deleting then restoring an event leaves it as it was.
///
/// Expected: restored event equal to the original apart from `updated_at`
#[tokio::test]
async fn delete_then_restore_round_trips() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, event) = factory::helpers::create_event_with_owner(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let service = EventService::new(db);

    let before = load(db, event.id).await?;

    service.soft_delete(&actor(&owner), event.id).await?;
    let deleted = load(db, event.id).await?;
    assert!(deleted.deleted);
    assert!(deleted.deleted_at.is_some());

    let restored = service.restore(&actor(&admin), event.id).await?;
    assert!(!restored.deleted);
    assert_eq!(restored.deleted_at, None);
    assert_eq!(restored.title, before.title);
    assert_eq!(restored.start_date, before.start_date);
    assert_eq!(restored.end_date, before.end_date);
    assert_eq!(restored.owner_id, before.owner_id);
    assert_eq!(restored.module_ids, before.module_ids);

    Ok(())
}

/// Tests deleting twice succeeds and restoring an active event changes nothing.
///
/// Expected: Ok both times, restore returns the unchanged event
#[tokio::test]
async fn repeated_delete_and_restore_are_no_ops() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, event) = factory::helpers::create_event_with_owner(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let service = EventService::new(db);

    let active = load(db, event.id).await?;
    let restored = service.restore(&actor(&admin), event.id).await?;
    assert_eq!(restored, active);

    service.soft_delete(&actor(&owner), event.id).await?;
    service.soft_delete(&actor(&owner), event.id).await?;
    assert!(load(db, event.id).await?.deleted);

    Ok(())
}

/// Tests the access rules: members may not restore, strangers may not delete and
/// unknown ids are reported.
///
/// Expected: AccessDenied, AccessDenied, NotFound
#[tokio::test]
async fn enforces_access_and_existence() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, event) = factory::helpers::create_event_with_owner(db).await?;
    let other = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let service = EventService::new(db);

    let result = service.soft_delete(&actor(&other), event.id).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service.soft_delete(&actor(&owner), event.id).await?;
    let result = service.restore(&actor(&owner), event.id).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let result = service.restore(&actor(&admin), event.id + 1000).await;
    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::NotFound { entity: "Event", .. }))
    ));

    Ok(())
}
