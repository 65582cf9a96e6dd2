use super::*;

/// Tests counting only projects where the user is the main doctor.
///
/// Expected: Ok(1) although the doctor also assists another project
#[tokio::test]
async fn counts_main_doctor_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = create_team(db, 3).await?;
    let second = create_team(db, 3).await?;
    factory::create_project(
        db,
        first.team_leader.id,
        first.doctor.id,
        first.assistant_doctor.id,
    )
    .await?;
    factory::create_project(
        db,
        second.team_leader.id,
        second.doctor.id,
        first.doctor.id,
    )
    .await?;

    let repo = ProjectRepository::new(db);

    assert_eq!(repo.count_by_doctor(first.doctor.id).await?, 1);
    assert_eq!(repo.count_by_doctor(first.assistant_doctor.id).await?, 0);

    Ok(())
}
