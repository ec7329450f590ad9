use super::*;

/// Tests the undecided then attending scenario.
///
/// Expected: exactly one vote row for the pair, with intent attending
#[tokio::test]
async fn later_vote_replaces_earlier_one() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_owner(db).await?;
    let pilot = factory::user::create_user(db).await?;
    let service = VoteService::new(db);

    service
        .cast_vote(&actor(&pilot), cast(event.id, VoteIntent::Undecided))
        .await?;
    service
        .cast_vote(&actor(&pilot), cast(event.id, VoteIntent::Attending))
        .await?;

    let votes = VoteRepository::new(db).get_by_event(event.id).await?;
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].user_id, pilot.id);
    assert_eq!(votes[0].intent, VoteIntent::Attending);

    Ok(())
}

/// Tests casting the same vote twice is idempotent.
///
/// Expected: one vote row with the same intent and comment
#[tokio::test]
async fn repeated_vote_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_owner(db).await?;
    let pilot = factory::user::create_user(db).await?;
    let service = VoteService::new(db);

    let params = CastVoteParams {
        event_id: event.id,
        intent: VoteIntent::NotAttending,
        comment: Some("  Busy  ".to_string()),
    };
    let first = service.cast_vote(&actor(&pilot), params.clone()).await?;
    let second = service.cast_vote(&actor(&pilot), params).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.intent, VoteIntent::NotAttending);
    assert_eq!(second.comment.as_deref(), Some("Busy"));
    assert_eq!(VoteRepository::new(db).get_by_event(event.id).await?.len(), 1);

    Ok(())
}

/// Tests votes on deleted events are refused.
///
/// Expected: Err(RosterError::EventDeleted)
#[tokio::test]
async fn rejects_deleted_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let event = factory::event::EventFactory::new(db, owner.id)
        .deleted(true)
        .build()
        .await?;

    let result = VoteService::new(db)
        .cast_vote(&actor(&owner), cast(event.id, VoteIntent::Attending))
        .await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::EventDeleted(_)))
    ));

    Ok(())
}

/// Tests closed registration and finished events refuse everyone, administrators included.
///
/// Expected: Err(AuthError::AccessDenied) in both cases
#[tokio::test]
async fn closed_or_finished_events_refuse_admins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let now = factory::helpers::now();

    let closed = factory::event::EventFactory::new(db, owner.id)
        .registration(false)
        .build()
        .await?;
    let finished = factory::event::EventFactory::new(db, owner.id)
        .window(now - Duration::hours(3), now - Duration::hours(1))
        .build()
        .await?;

    let service = VoteService::new(db);
    for event_id in [closed.id, finished.id] {
        let result = service
            .cast_vote(&actor(&admin), cast(event_id, VoteIntent::Attending))
            .await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
    }

    Ok(())
}

/// Tests restrictions and simulator flags gate participants but not administrators.
///
/// Expected: cadet refused on a member-only event, BMS-only pilot refused on a DCS
/// event, a DCS-flying administrator admitted to both
#[tokio::test]
async fn restrictions_and_simulators_gate_participants() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let cadet = factory::user::UserFactory::new(db)
        .status(UserStatus::Cadet)
        .build()
        .await?;
    let bms_pilot = factory::user::UserFactory::new(db)
        .sim_dcs(false)
        .sim_bms(true)
        .build()
        .await?;
    let admin = factory::user::UserFactory::new(db)
        .admin(true)
        .status(UserStatus::Guest)
        .sim_dcs(true)
        .sim_bms(false)
        .build()
        .await?;

    let members_only = factory::event::EventFactory::new(db, owner.id)
        .restrictions("2")
        .build()
        .await?;
    let dcs_only = factory::event::EventFactory::new(db, owner.id)
        .sims(true, false)
        .build()
        .await?;

    let service = VoteService::new(db);

    let result = service
        .cast_vote(&actor(&cadet), cast(members_only.id, VoteIntent::Attending))
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let result = service
        .cast_vote(&actor(&bms_pilot), cast(dcs_only.id, VoteIntent::Attending))
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    for event_id in [members_only.id, dcs_only.id] {
        service
            .cast_vote(&actor(&admin), cast(event_id, VoteIntent::Attending))
            .await?;
    }

    Ok(())
}

/// Tests events flagged for both simulators and restricted to both statuses.
///
/// Expected: DCS-only pilot and cadet refused, pilot flying both admitted
#[tokio::test]
async fn every_flag_and_restriction_applies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let dcs_pilot = factory::user::UserFactory::new(db)
        .sim_bms(false)
        .build()
        .await?;
    let cadet = factory::user::UserFactory::new(db)
        .status(UserStatus::Cadet)
        .build()
        .await?;
    let both_pilot = factory::user::create_user(db).await?;

    let both_sims = factory::event::EventFactory::new(db, owner.id)
        .sims(true, true)
        .build()
        .await?;
    let both_statuses = factory::event::EventFactory::new(db, owner.id)
        .restrictions("1,2")
        .build()
        .await?;

    let service = VoteService::new(db);

    let result = service
        .cast_vote(&actor(&dcs_pilot), cast(both_sims.id, VoteIntent::Attending))
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let result = service
        .cast_vote(&actor(&cadet), cast(both_statuses.id, VoteIntent::Attending))
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    for event_id in [both_sims.id, both_statuses.id] {
        service
            .cast_vote(&actor(&both_pilot), cast(event_id, VoteIntent::Attending))
            .await?;
    }

    Ok(())
}
