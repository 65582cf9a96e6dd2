use super::*;

/// Tests updating a doctor's name and capacity.
///
/// Expected: Ok(Some(User)) and the stored row reflects the new values
#[tokio::test]
async fn updates_doctor_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParam {
            id: doctor.id,
            name: "Renamed".to_string(),
            details: RoleDetails::Doctor { max_projects: 9 },
        })
        .await?;

    assert!(updated.is_some());

    let found = repo.find_by_id(doctor.id).await?.unwrap();
    assert_eq!(found.name, "Renamed");
    assert_eq!(found.details, RoleDetails::Doctor { max_projects: 9 });

    Ok(())
}

/// Tests that an update only matches a user of the named role.
///
/// Verifies that updating a student through the doctor variant leaves the user
/// untouched.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_user_with_other_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParam {
            id: student.id,
            name: "Renamed".to_string(),
            details: RoleDetails::Doctor { max_projects: 9 },
        })
        .await?;

    assert!(updated.is_none());

    let found = repo.find_by_id(student.id).await?.unwrap();
    assert_eq!(found.name, student.name);
    assert_eq!(found.role(), Role::Student);

    Ok(())
}

/// Tests that a doctor without a details row gets one on update.
///
/// Expected: Ok(Some(User)) with the given capacity persisted
#[tokio::test]
async fn creates_missing_details_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bare = factory::user::UserFactory::new(db)
        .role(Role::Doctor)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert_eq!(
        repo.find_by_id(bare.id).await?.unwrap().details,
        RoleDetails::Doctor { max_projects: 0 }
    );

    repo.update(UpdateUserParam {
        id: bare.id,
        name: bare.name.clone(),
        details: RoleDetails::Doctor { max_projects: 2 },
    })
    .await?;

    assert_eq!(
        repo.find_by_id(bare.id).await?.unwrap().details,
        RoleDetails::Doctor { max_projects: 2 }
    );

    Ok(())
}
