use super::*;

/// Tests listing the requests a student leads.
///
/// Verifies that requests where the student is only a member are excluded.
///
/// Expected: Ok(Vec) with the led request only
#[tokio::test]
async fn lists_only_led_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = create_team(db, 3).await?;
    let led = factory::create_pending_request(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
        team.student_ids(),
    )
    .await?;
    factory::create_pending_request(
        db,
        team.member.id,
        team.doctor.id,
        team.assistant_doctor.id,
        team.student_ids(),
    )
    .await?;

    let repo = ProjectIdeaRequestRepository::new(db);
    let requests = repo.find_by_team_leader(team.team_leader.id, None).await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, led.id);
    assert_eq!(requests[0].student_ids, team.student_ids());

    Ok(())
}
