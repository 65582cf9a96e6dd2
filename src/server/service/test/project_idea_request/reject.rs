use super::*;

/// Tests rejecting a pending request.
///
/// Verifies that only the rejected request changes; a request sharing its
/// students stays pending.
///
/// Expected: Ok(()) and status Rejected
#[tokio::test]
async fn rejects_without_cascade() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, files) = temp_storage();

    let team = create_team(db, 3).await?;
    let request = factory::create_pending_request(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
        team.student_ids(),
    )
    .await?;
    let sibling = factory::create_pending_request(
        db,
        team.member.id,
        team.doctor.id,
        team.assistant_doctor.id,
        team.student_ids(),
    )
    .await?;

    let service = ProjectIdeaRequestService::new(db, &files);
    service.reject(request.id, team.doctor.id).await?;

    let repo = ProjectIdeaRequestRepository::new(db);
    assert_eq!(
        repo.find_by_id(request.id).await?.unwrap().status,
        ProjectIdeaRequestStatus::Rejected
    );
    assert_eq!(
        repo.find_by_id(sibling.id).await?.unwrap().status,
        ProjectIdeaRequestStatus::Pending
    );

    Ok(())
}

/// Tests rejecting requests that already left the pending state.
///
/// Verifies the conflict names the current status for each terminal status.
///
/// Expected: Err(IdeaRequestError::NotPending) naming the stored status
#[tokio::test]
async fn fails_for_non_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, files) = temp_storage();

    let team = create_team(db, 3).await?;
    let service = ProjectIdeaRequestService::new(db, &files);

    for status in [
        ProjectIdeaRequestStatus::Accepted,
        ProjectIdeaRequestStatus::Rejected,
        ProjectIdeaRequestStatus::Missed,
    ] {
        let request = factory::project_idea_request::ProjectIdeaRequestFactory::new(
            db,
            team.team_leader.id,
            team.doctor.id,
            team.assistant_doctor.id,
        )
        .status(status)
        .build()
        .await?;

        let err = service
            .reject(request.id, team.doctor.id)
            .await
            .unwrap_err();

        match err {
            AppError::IdeaRequestErr(err) => {
                assert_eq!(err, IdeaRequestError::NotPending { status });
                assert_eq!(err.to_string(), format!("Idea is already {:?}", status));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    Ok(())
}

/// Tests that a doctor cannot reject another doctor's request.
///
/// Expected: Err(IdeaRequestError::NotOwner) and status unchanged
#[tokio::test]
async fn fails_for_non_owning_doctor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, files) = temp_storage();

    let team = create_team(db, 3).await?;
    let stranger = factory::create_doctor(db).await?;
    let request = factory::create_pending_request(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
        team.student_ids(),
    )
    .await?;

    let service = ProjectIdeaRequestService::new(db, &files);
    let result = service.reject(request.id, stranger.id).await;

    assert!(matches!(
        result,
        Err(AppError::IdeaRequestErr(IdeaRequestError::NotOwner))
    ));
    assert_eq!(
        ProjectIdeaRequestRepository::new(db)
            .find_by_id(request.id)
            .await?
            .unwrap()
            .status,
        ProjectIdeaRequestStatus::Pending
    );

    Ok(())
}
