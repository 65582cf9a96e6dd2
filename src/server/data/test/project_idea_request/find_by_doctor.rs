use super::*;

/// Tests that a doctor's requests are listed newest first.
///
/// Expected: Ok(Vec) ordered by `requested_on` descending, excluding other doctors
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = create_team(db, 3).await?;
    let other = create_team(db, 3).await?;
    let now = Utc::now();

    let older = ProjectIdeaRequestFactory::new(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
    )
    .requested_on(now - Duration::days(2))
    .build()
    .await?;
    let newer = ProjectIdeaRequestFactory::new(
        db,
        team.member.id,
        team.doctor.id,
        team.assistant_doctor.id,
    )
    .requested_on(now)
    .build()
    .await?;
    factory::create_pending_request(
        db,
        other.team_leader.id,
        other.doctor.id,
        other.assistant_doctor.id,
        vec![other.team_leader.id],
    )
    .await?;

    let repo = ProjectIdeaRequestRepository::new(db);
    let requests = repo.find_by_doctor(team.doctor.id, None).await?;

    assert_eq!(
        requests.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );

    Ok(())
}

/// Tests restricting a doctor's requests to one status.
///
/// Expected: Ok(Vec) with only the rejected request
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = create_team(db, 3).await?;
    factory::create_pending_request(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
        vec![team.team_leader.id],
    )
    .await?;
    let rejected = ProjectIdeaRequestFactory::new(
        db,
        team.member.id,
        team.doctor.id,
        team.assistant_doctor.id,
    )
    .status(ProjectIdeaRequestStatus::Rejected)
    .build()
    .await?;

    let repo = ProjectIdeaRequestRepository::new(db);
    let requests = repo
        .find_by_doctor(team.doctor.id, Some(ProjectIdeaRequestStatus::Rejected))
        .await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, rejected.id);

    Ok(())
}
