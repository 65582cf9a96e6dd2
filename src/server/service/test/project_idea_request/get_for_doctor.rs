use super::*;

/// Tests listing a doctor's requests with participants resolved.
///
/// Expected: Ok(Vec) with the team leader, students and both doctors hydrated
#[tokio::test]
async fn hydrates_participants() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, files) = temp_storage();

    let team = create_team(db, 3).await?;
    factory::create_pending_request(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
        team.student_ids(),
    )
    .await?;

    let service = ProjectIdeaRequestService::new(db, &files);
    let requests = service.get_for_doctor(team.doctor.id, None).await?;

    assert_eq!(requests.len(), 1);
    let view = &requests[0];
    assert_eq!(view.team_leader.id, team.team_leader.id);
    assert_eq!(view.doctor.id, team.doctor.id);
    assert_eq!(view.assistant_doctor.name, team.assistant_doctor.name);
    assert_eq!(view.students.len(), 2);

    let for_student = service
        .get_for_student(team.team_leader.id, Some(ProjectIdeaRequestStatus::Accepted))
        .await?;
    assert!(for_student.is_empty());

    Ok(())
}
