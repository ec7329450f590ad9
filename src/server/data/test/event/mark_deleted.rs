use super::*;

/// Tests soft deletion sets the flag and timestamp, and clearing restores both.
///
/// Expected: deleted with `deleted_at`, then active with no `deleted_at`
#[tokio::test]
async fn marks_and_clears_deletion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_owner(db).await?;
    let at = factory::helpers::now();

    let repo = EventRepository::new(db);
    repo.mark_deleted(event.id, at).await?;

    let deleted = repo.find_by_id(event.id).await?.unwrap();
    assert!(deleted.deleted);
    assert_eq!(deleted.deleted_at, Some(at));

    repo.clear_deleted(event.id).await?;

    let restored = repo.find_by_id(event.id).await?.unwrap();
    assert!(!restored.deleted);
    assert_eq!(restored.deleted_at, None);
    assert_eq!(restored.title, event.title);

    Ok(())
}
