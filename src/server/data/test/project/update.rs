use super::*;

/// Tests replacing a project's fields and team.
///
/// Expected: Ok(Some(Project)) with the new title, supervisors and students
#[tokio::test]
async fn replaces_fields_and_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = create_team(db, 3).await?;
    let newcomer = factory::create_student(db).await?;
    let project = factory::create_project(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
    )
    .await?;

    let repo = ProjectRepository::new(db);
    let updated = repo
        .update(UpdateProjectParam {
            id: project.id,
            title: "Renamed".to_string(),
            team_leader_id: newcomer.id,
            doctor_id: team.assistant_doctor.id,
            assistant_doctor_id: team.doctor.id,
            student_ids: vec![newcomer.id, team.member.id],
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.team_leader_id, newcomer.id);
    assert_eq!(updated.doctor_id, team.assistant_doctor.id);
    assert_eq!(updated.assistant_doctor_id, team.doctor.id);

    let mut expected = vec![newcomer.id, team.member.id];
    expected.sort_unstable();
    assert_eq!(updated.student_ids, expected);
    assert!(!repo.is_student_in_project(team.team_leader.id).await?);

    Ok(())
}

/// Tests updating a project that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_project() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let result = repo
        .update(UpdateProjectParam {
            id: 404,
            title: "Nothing".to_string(),
            team_leader_id: 1,
            doctor_id: 2,
            assistant_doctor_id: 3,
            student_ids: vec![],
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a failed team insert leaves the project as it was.
///
/// Expected: Err(DbErr), original title and team still stored
#[tokio::test]
async fn keeps_project_when_team_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = create_team(db, 3).await?;
    let project = factory::create_project(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
    )
    .await?;

    let repo = ProjectRepository::new(db);
    let result = repo
        .update(UpdateProjectParam {
            id: project.id,
            title: "Renamed".to_string(),
            team_leader_id: team.team_leader.id,
            doctor_id: team.doctor.id,
            assistant_doctor_id: team.assistant_doctor.id,
            student_ids: vec![team.team_leader.id, 987_654_321],
        })
        .await;

    assert!(result.is_err());

    let stored = repo.find_by_id(project.id).await?.unwrap();
    assert_eq!(stored.title, project.title);
    assert_eq!(stored.student_ids, vec![team.team_leader.id]);

    Ok(())
}
