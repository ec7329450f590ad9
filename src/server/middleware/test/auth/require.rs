use super::*;

/// Tests a known participant passes when no permission is required.
///
/// Expected: Ok(Actor) carrying the participant's flags
#[tokio::test]
async fn resolves_participant_from_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .nickname("Viper")
        .sim_bms(false)
        .build()
        .await?;

    let headers = identity(&user.id.to_string());
    let actor = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(actor.id, user.id);
    assert_eq!(actor.nickname, "Viper");
    assert!(actor.sim_dcs);
    assert!(!actor.sim_bms);

    Ok(())
}

/// Tests requests without the identity header are rejected.
///
/// Expected: Err(AuthError::MissingIdentity)
#[tokio::test]
async fn rejects_missing_identity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingIdentity))
    ));

    Ok(())
}

/// Tests a header that is not a participant id is rejected.
///
/// Expected: Err(AuthError::InvalidIdentity)
#[tokio::test]
async fn rejects_malformed_identity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = identity("not-a-number");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidIdentity(_)))
    ));

    Ok(())
}

/// Tests an id with no participant row is rejected.
///
/// Expected: Err(AuthError::UnknownParticipant)
#[tokio::test]
async fn rejects_unknown_participant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = identity("4242");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownParticipant(4242)))
    ));

    Ok(())
}

/// Tests the admin permission is granted to administrators only.
///
/// Expected: Ok for the admin, Err(AuthError::AccessDenied) for a member
#[tokio::test]
async fn admin_permission_requires_admin_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let member = factory::user::create_user(db).await?;

    let headers = identity(&admin.id.to_string());
    let actor = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await?;
    assert!(actor.admin);

    let headers = identity(&member.id.to_string());
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == member.id
    ));

    Ok(())
}

/// Tests the member permission admits members and administrators but not cadets.
///
/// Expected: Ok for member and admin cadet, Err(AuthError::AccessDenied) for a cadet
#[tokio::test]
async fn member_permission_excludes_cadets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::user::create_user(db).await?;
    let cadet = factory::user::UserFactory::new(db)
        .status(UserStatus::Cadet)
        .build()
        .await?;
    let admin_cadet = factory::user::UserFactory::new(db)
        .status(UserStatus::Cadet)
        .admin(true)
        .build()
        .await?;

    for user in [&member, &admin_cadet] {
        let headers = identity(&user.id.to_string());
        let result = AuthGuard::new(db, &headers)
            .require(&[Permission::Member])
            .await;
        assert!(result.is_ok());
    }

    let headers = identity(&cadet.id.to_string());
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Member])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
