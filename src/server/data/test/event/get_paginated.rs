use super::*;

fn filter() -> EventFilter {
    EventFilter {
        per_page: 10,
        ..Default::default()
    }
}

/// Tests the deletion state filter switches between active and deleted events.
///
/// Expected: active only, deleted only, then both when unset
#[tokio::test]
async fn filters_by_deletion_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let active = factory::event::create_event(db, owner.id).await?;
    let deleted = factory::event::EventFactory::new(db, owner.id)
        .deleted(true)
        .build()
        .await?;

    let repo = EventRepository::new(db);

    let (events, total) = repo
        .get_paginated(&EventFilter {
            deleted: Some(false),
            ..filter()
        })
        .await?;
    assert_eq!(total, 1);
    assert_eq!(events[0].id, active.id);

    let (events, total) = repo
        .get_paginated(&EventFilter {
            deleted: Some(true),
            ..filter()
        })
        .await?;
    assert_eq!(total, 1);
    assert_eq!(events[0].id, deleted.id);

    let (events, total) = repo.get_paginated(&filter()).await?;
    assert_eq!(total, 2);
    assert_eq!(events.len(), 2);

    Ok(())
}

/// Tests `%` and `_` in the search text match only themselves.
///
/// Expected: "100%" finds only the literal title, "a_b" does not match "axb"
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let literal = factory::event::EventFactory::new(db, owner.id)
        .title("100% attendance")
        .build()
        .await?;
    factory::event::EventFactory::new(db, owner.id)
        .title("1000 ft hop")
        .build()
        .await?;
    factory::event::EventFactory::new(db, owner.id)
        .title("axb drill")
        .build()
        .await?;

    let repo = EventRepository::new(db);

    let (events, total) = repo
        .get_paginated(&EventFilter {
            search: Some("100%".to_string()),
            ..filter()
        })
        .await?;
    assert_eq!(total, 1);
    assert_eq!(events[0].id, literal.id);

    let (_, total) = repo
        .get_paginated(&EventFilter {
            search: Some("a_b".to_string()),
            ..filter()
        })
        .await?;
    assert_eq!(total, 0);

    Ok(())
}

/// Tests the date range keeps events overlapping `[from, to]`.
///
/// Expected: only the event overlapping the window
#[tokio::test]
async fn filters_by_overlapping_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let now = factory::helpers::now();

    factory::event::EventFactory::new(db, owner.id)
        .window(now - Duration::days(3), now - Duration::days(2))
        .build()
        .await?;
    let overlapping = factory::event::EventFactory::new(db, owner.id)
        .window(now - Duration::hours(1), now + Duration::hours(1))
        .build()
        .await?;
    factory::event::EventFactory::new(db, owner.id)
        .window(now + Duration::days(2), now + Duration::days(3))
        .build()
        .await?;

    let (events, total) = EventRepository::new(db)
        .get_paginated(&EventFilter {
            from: Some(now),
            to: Some(now + Duration::days(1)),
            ..filter()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(events[0].id, overlapping.id);

    Ok(())
}

/// Tests title search is a case-insensitive substring match and combines with the
/// category filter.
///
/// Expected: only the matching mission
#[tokio::test]
async fn searches_title_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let strike = factory::event::EventFactory::new(db, owner.id)
        .title("Deep Strike")
        .event_type(EventType::Mission)
        .build()
        .await?;
    factory::event::EventFactory::new(db, owner.id)
        .title("Strike training")
        .event_type(EventType::Training)
        .build()
        .await?;
    factory::event::EventFactory::new(db, owner.id)
        .title("Briefing")
        .event_type(EventType::Mission)
        .build()
        .await?;

    let (events, total) = EventRepository::new(db)
        .get_paginated(&EventFilter {
            search: Some("STRIKE".to_string()),
            event_type: Some(EventType::Mission),
            ..filter()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(events[0].id, strike.id);

    Ok(())
}

/// Tests pages are ordered by start date and the total counts every match.
///
/// Expected: second page holds the third event, total is 3
#[tokio::test]
async fn paginates_by_start_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let now = factory::helpers::now();

    let mut created = Vec::new();
    for days in [3, 1, 2] {
        let start = now + Duration::days(days);
        let event = factory::event::EventFactory::new(db, owner.id)
            .window(start, start + Duration::hours(1))
            .build()
            .await?;
        created.push((days, event.id));
    }
    created.sort();

    let (events, total) = EventRepository::new(db)
        .get_paginated(&EventFilter {
            page: 1,
            per_page: 2,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 3);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, created[2].1);

    Ok(())
}
