use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting requests a user is involved in.
///
/// Verifies `find_involving` picks up requests by leader and supervisor, and that
/// `delete_many` removes the rows with their student links.
///
/// Expected: Ok(2) and no request rows remain
#[tokio::test]
async fn deletes_requests_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = create_team(db, 3).await?;
    factory::create_pending_request(
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
        team.assistant_doctor.id,
        team.doctor.id,
        vec![team.member.id],
    )
    .await?;

    let repo = ProjectIdeaRequestRepository::new(db);
    let involving = repo.find_involving(team.doctor.id).await?;
    assert_eq!(involving.len(), 2);

    let ids: Vec<i32> = involving.iter().map(|r| r.id).collect();
    let deleted = repo.delete_many(&ids).await?;

    assert_eq!(deleted, 2);
    assert_eq!(entity::prelude::ProjectIdeaRequest::find().count(db).await?, 0);
    assert_eq!(
        entity::prelude::ProjectIdeaRequestStudent::find()
            .count(db)
            .await?,
        0
    );

    Ok(())
}
