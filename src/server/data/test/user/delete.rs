use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a student removes details and memberships.
///
/// Verifies that the student's detail row and project membership row go away
/// while the project itself remains.
///
/// Expected: Ok(true)
#[tokio::test]
async fn removes_details_and_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::helpers::create_team(db, 3).await?;
    factory::project::ProjectFactory::new(
        db,
        team.team_leader.id,
        team.doctor.id,
        team.assistant_doctor.id,
    )
    .students(team.student_ids())
    .build()
    .await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(team.member.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(team.member.id).await?.is_none());
    assert_eq!(entity::prelude::StudentDetails::find().count(db).await?, 1);
    assert_eq!(entity::prelude::ProjectStudent::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Project::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting an unknown user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(404).await?);

    Ok(())
}
