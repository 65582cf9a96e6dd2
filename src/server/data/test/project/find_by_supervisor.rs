use super::*;

/// Tests that a doctor sees projects they supervise in either capacity.
///
/// Expected: Ok(Vec<Project>) with both the supervised and the assisted project
#[tokio::test]
async fn includes_doctor_and_assistant_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = create_team(db, 3).await?;
    let second = create_team(db, 3).await?;
    let third = create_team(db, 3).await?;

    // first.doctor supervises p1 and assists p2; p3 is unrelated
    let p1 = factory::create_project(
        db,
        first.team_leader.id,
        first.doctor.id,
        first.assistant_doctor.id,
    )
    .await?;
    let p2 = factory::create_project(
        db,
        second.team_leader.id,
        second.doctor.id,
        first.doctor.id,
    )
    .await?;
    factory::create_project(
        db,
        third.team_leader.id,
        third.doctor.id,
        third.assistant_doctor.id,
    )
    .await?;

    let repo = ProjectRepository::new(db);
    let projects = repo.find_by_supervisor(first.doctor.id).await?;

    assert_eq!(
        projects.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![p1.id, p2.id]
    );

    Ok(())
}
