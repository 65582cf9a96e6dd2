use super::*;

/// Tests creating a pending request with its students.
///
/// Expected: Ok(ProjectIdeaRequest) with status Pending, readable via `find_by_id`
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = create_team(db, 3).await?;
    let requested_on = Utc::now();

    let repo = ProjectIdeaRequestRepository::new(db);
    let request = repo
        .create(InsertProjectIdeaRequestParam {
            title: "Campus Navigator".to_string(),
            file_url: "files/navigator.pdf".to_string(),
            team_leader_id: team.team_leader.id,
            doctor_id: team.doctor.id,
            assistant_doctor_id: team.assistant_doctor.id,
            student_ids: team.student_ids(),
            requested_on,
        })
        .await?;

    assert_eq!(request.status, ProjectIdeaRequestStatus::Pending);

    let found = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(found.title, "Campus Navigator");
    assert_eq!(found.student_ids, team.student_ids());
    assert_eq!(found.team_leader_id, team.team_leader.id);

    Ok(())
}

/// Tests that a failed student link leaves no request row behind.
///
/// Expected: Err(DbErr) and no request led by the team leader
#[tokio::test]
async fn rolls_back_request_when_student_link_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = create_team(db, 3).await?;

    let repo = ProjectIdeaRequestRepository::new(db);
    let result = repo
        .create(InsertProjectIdeaRequestParam {
            title: "Orphaned".to_string(),
            file_url: "files/orphaned.pdf".to_string(),
            team_leader_id: team.team_leader.id,
            doctor_id: team.doctor.id,
            assistant_doctor_id: team.assistant_doctor.id,
            // No user has this id, so the link violates its foreign key.
            student_ids: vec![team.team_leader.id, 987_654_321],
            requested_on: Utc::now(),
        })
        .await;

    assert!(result.is_err());
    assert!(repo
        .find_by_team_leader(team.team_leader.id, None)
        .await?
        .is_empty());

    Ok(())
}
