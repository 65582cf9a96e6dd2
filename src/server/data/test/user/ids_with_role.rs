use super::*;

/// Tests selecting the ids that belong to users of a role.
///
/// Verifies that unknown ids and ids of other roles are left out.
///
/// Expected: Ok(HashSet) containing only the student ids
#[tokio::test]
async fn returns_only_matching_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let doctor = factory::create_doctor(db).await?;

    let repo = UserRepository::new(db);
    let found = repo
        .ids_with_role(&[student.id, doctor.id, -1], Role::Student)
        .await?;

    assert_eq!(found.len(), 1);
    assert!(found.contains(&student.id));

    assert!(repo.has_role(doctor.id, Role::Doctor).await?);
    assert!(!repo.has_role(doctor.id, Role::Student).await?);

    Ok(())
}

/// Tests an empty id list short-circuits.
///
/// Expected: Ok(empty set)
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.ids_with_role(&[], Role::Student).await?.is_empty());
    assert!(repo.existing_ids(&[]).await?.is_empty());

    Ok(())
}
