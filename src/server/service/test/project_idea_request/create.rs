use super::*;

fn proposal(file_name: &str) -> UploadedFile {
    UploadedFile {
        file_name: file_name.to_string(),
        bytes: b"%PDF-1.7 proposal".to_vec(),
    }
}

/// Tests submitting a request adds the submitting student as team leader.
///
/// Verifies the student is appended to the team when omitted from the form and
/// that the document is stored under the files directory.
///
/// Expected: Ok(ProjectIdeaRequest) with status Pending
#[tokio::test]
async fn adds_submitting_student_and_stores_file() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (dir, files) = temp_storage();

    let team = create_team(db, 3).await?;

    let service = ProjectIdeaRequestService::new(db, &files);
    let request = service
        .create(
            team.team_leader.id,
            CreateProjectIdeaRequestParam {
                title: "Library Robot".to_string(),
                doctor_id: team.doctor.id,
                assistant_doctor_id: team.assistant_doctor.id,
                student_ids: vec![team.member.id],
                file: proposal("robot.pdf"),
            },
        )
        .await?;

    assert_eq!(request.status, ProjectIdeaRequestStatus::Pending);
    assert_eq!(request.team_leader_id, team.team_leader.id);

    let mut expected = team.student_ids();
    expected.sort_unstable();
    assert_eq!(request.student_ids, expected);

    assert!(request.file_url.starts_with("files/"));
    assert!(request.file_url.ends_with(".pdf"));
    assert!(dir.path().join(&request.file_url).exists());

    Ok(())
}

/// Tests that every failing team rule is reported and nothing is stored.
///
/// Verifies invalid student ids, a student already in a project and a
/// non-doctor supervisor are all reported at once, and that no file is written.
///
/// Expected: Err(AppError::ValidationErr) with errors on students_ids and doctor_id
#[tokio::test]
async fn reports_all_validation_errors_without_storing_file() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (dir, files) = temp_storage();

    let team = create_team(db, 3).await?;
    let taken = create_team(db, 3).await?;
    factory::create_project(
        db,
        taken.team_leader.id,
        taken.doctor.id,
        taken.assistant_doctor.id,
    )
    .await?;

    let service = ProjectIdeaRequestService::new(db, &files);
    let result = service
        .create(
            team.team_leader.id,
            CreateProjectIdeaRequestParam {
                title: "Broken".to_string(),
                doctor_id: team.member.id,
                assistant_doctor_id: team.assistant_doctor.id,
                // unknown id, plus a student already on a team
                student_ids: vec![-5, taken.team_leader.id],
                file: proposal("broken.pdf"),
            },
        )
        .await;

    let Err(AppError::ValidationErr(errors)) = result else {
        panic!("expected validation errors, got {:?}", result);
    };

    assert!(errors.contains("students_ids", INVALID_STUDENTS));
    assert!(errors.contains("students_ids", STUDENT_IN_PROJECT));
    assert!(errors.contains("doctor_id", INVALID_DOCTOR));
    assert!(!errors.fields().any(|f| f == "assistant_doctor_id"));
    assert!(!dir.path().join("files").exists());

    Ok(())
}

/// Tests that a repeated student id counts as invalid.
///
/// Expected: Err(AppError::ValidationErr) on students_ids
#[tokio::test]
async fn rejects_duplicate_student_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, files) = temp_storage();

    let team = create_team(db, 3).await?;

    let service = ProjectIdeaRequestService::new(db, &files);
    let result = service
        .create(
            team.team_leader.id,
            CreateProjectIdeaRequestParam {
                title: "Twice".to_string(),
                doctor_id: team.doctor.id,
                assistant_doctor_id: team.assistant_doctor.id,
                student_ids: vec![team.member.id, team.member.id],
                file: proposal("twice.pdf"),
            },
        )
        .await;

    let Err(AppError::ValidationErr(errors)) = result else {
        panic!("expected validation errors, got {:?}", result);
    };
    assert!(errors.contains("students_ids", INVALID_STUDENTS));

    Ok(())
}
