use super::*;

/// Tests finding competing requests through a shared student.
///
/// Verifies that only pending requests sharing at least one student are found,
/// and that the request itself is excluded.
///
/// Expected: Ok(vec![sharing.id])
#[tokio::test]
async fn finds_pending_requests_sharing_a_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = create_team(db, 3).await?;
    let outsider = factory::create_student(db).await?;

    let accepted = factory::create_pending_request(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
        team.student_ids(),
    )
    .await?;
    // shares `member` with the accepted request
    let sharing = factory::create_pending_request(
        db,
        team.member.id,
        team.assistant_doctor.id,
        team.doctor.id,
        vec![team.member.id],
    )
    .await?;
    // shares a student but is no longer pending
    ProjectIdeaRequestFactory::new(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
    )
    .status(ProjectIdeaRequestStatus::Rejected)
    .build()
    .await?;
    // pending but shares nobody
    factory::create_pending_request(
        db,
        outsider.id,
        team.doctor.id,
        team.assistant_doctor.id,
        vec![outsider.id],
    )
    .await?;

    let repo = ProjectIdeaRequestRepository::new(db);
    let found = repo.find_pending_sharing_students(accepted.id).await?;

    assert_eq!(found, vec![sharing.id]);

    Ok(())
}

/// Tests a request whose students appear nowhere else.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = create_team(db, 3).await?;
    let request = factory::create_pending_request(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
        vec![team.team_leader.id],
    )
    .await?;
    factory::create_pending_request(
        db,
        team.member.id,
        team.doctor.id,
        team.assistant_doctor.id,
        vec![team.member.id],
    )
    .await?;

    let repo = ProjectIdeaRequestRepository::new(db);

    assert!(repo.find_pending_sharing_students(request.id).await?.is_empty());

    Ok(())
}
