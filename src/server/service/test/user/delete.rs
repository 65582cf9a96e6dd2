use super::*;

/// Tests deleting a doctor who supervises a project and owns requests.
///
/// Verifies the project, the doctor's requests and their stored files are
/// removed, while unrelated requests and the students survive.
///
/// Expected: Ok(()) with dependent records removed
#[tokio::test]
async fn removes_dependent_projects_and_requests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (dir, files) = temp_storage();

    let team = create_team(db, 3).await?;
    let other_doctor = factory::create_doctor(db).await?;

    let stored = files.save("idea.pdf", b"idea").await?;
    let project = factory::project::ProjectFactory::new(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
    )
    .students(team.student_ids())
    .file_url(stored.clone())
    .build()
    .await?;
    let owned = factory::project_idea_request::ProjectIdeaRequestFactory::new(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
    )
    .file_url(stored.clone())
    .build()
    .await?;
    let unrelated = factory::create_pending_request(
        db,
        team.member.id,
        other_doctor.id,
        other_doctor.id,
        vec![team.member.id],
    )
    .await?;

    let service = UserService::new(db, &files);
    service.delete(team.doctor.id).await?;

    assert!(!service.id_exists(team.doctor.id).await?);
    assert!(ProjectRepository::new(db).find_by_id(project.id).await?.is_none());

    let requests = ProjectIdeaRequestRepository::new(db);
    assert!(requests.find_by_id(owned.id).await?.is_none());
    assert!(requests.find_by_id(unrelated.id).await?.is_some());

    assert!(service.id_exists(team.team_leader.id).await?);
    assert!(!dir.path().join(&stored).exists());

    Ok(())
}

/// Tests deleting a student who is a member of another student's project.
///
/// Verifies the project survives and no longer lists the student.
///
/// Expected: Ok(()) and the project keeps its other members
#[tokio::test]
async fn removes_student_memberships() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, files) = temp_storage();

    let team = create_team(db, 3).await?;
    let project = factory::project::ProjectFactory::new(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
    )
    .students(team.student_ids())
    .build()
    .await?;

    let service = UserService::new(db, &files);
    service.delete(team.member.id).await?;

    let remaining = ProjectRepository::new(db)
        .find_by_id(project.id)
        .await?
        .unwrap();
    assert_eq!(remaining.student_ids, vec![team.team_leader.id]);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, files) = temp_storage();

    let service = UserService::new(db, &files);

    assert!(matches!(
        service.delete(12345).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a doctor whose request became a project now supervised by
/// someone else.
///
/// Verifies the shared document stays on disk for the surviving project.
///
/// Expected: Ok(()) with the project and its file intact
#[tokio::test]
async fn keeps_file_shared_with_surviving_project() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (dir, files) = temp_storage();

    let team = create_team(db, 3).await?;
    let other_doctor = factory::create_doctor(db).await?;

    let stored = files.save("idea.pdf", b"idea").await?;
    let owned = factory::project_idea_request::ProjectIdeaRequestFactory::new(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
    )
    .status(entity::sea_orm_active_enums::ProjectIdeaRequestStatus::Accepted)
    .file_url(stored.clone())
    .build()
    .await?;
    let project = factory::project::ProjectFactory::new(
        db,
        team.team_leader.id,
        other_doctor.id,
        team.assistant_doctor.id,
    )
    .file_url(stored.clone())
    .build()
    .await?;

    let service = UserService::new(db, &files);
    service.delete(team.doctor.id).await?;

    assert!(ProjectIdeaRequestRepository::new(db)
        .find_by_id(owned.id)
        .await?
        .is_none());
    let surviving = ProjectRepository::new(db)
        .find_by_id(project.id)
        .await?
        .unwrap();
    assert_eq!(surviving.file_url, stored);
    assert!(dir.path().join(&stored).exists());

    Ok(())
}
