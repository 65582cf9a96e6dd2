use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting projects together with their team rows.
///
/// Expected: Ok(1) and no membership rows remain for the deleted project
#[tokio::test]
async fn deletes_project_and_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

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

    let repo = ProjectRepository::new(db);
    let deleted = repo.delete_many(&[project.id]).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(project.id).await?.is_none());
    assert_eq!(entity::prelude::ProjectStudent::find().count(db).await?, 0);

    Ok(())
}

/// Tests that `ids_involving` finds projects for every participant role.
///
/// Expected: the project id for the leader, doctor and assistant; none for a plain member
#[tokio::test]
async fn ids_involving_covers_leader_and_supervisors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

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

    let repo = ProjectRepository::new(db);

    for user_id in [team.team_leader.id, team.doctor.id, team.assistant_doctor.id] {
        assert_eq!(repo.ids_involving(user_id).await?, vec![project.id]);
    }
    assert!(repo.ids_involving(team.member.id).await?.is_empty());

    Ok(())
}
