use super::*;

fn csv(contents: &str) -> UploadedFile {
    UploadedFile {
        file_name: "accounts.CSV".to_string(),
        bytes: contents.as_bytes().to_vec(),
    }
}

/// Tests importing students from a CSV file.
///
/// Expected: Ok(2) and both students stored with their GPA
#[tokio::test]
async fn imports_students() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, files) = temp_storage();

    let service = UserService::new(db, &files);
    let count = service
        .import(
            ImportKind::Students,
            &csv("id,name,password,gpa\n3001,Mona,pw1,3.4\n3002,Omar,pw2,2.9\n"),
        )
        .await?;

    assert_eq!(count, 2);
    let students = service.get_all(Some(Role::Student)).await?;
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].id, 3001);
    assert_eq!(students[1].details, RoleDetails::Student { gpa: 2.9 });

    Ok(())
}

/// Tests that duplicate and already taken ids reject the whole file.
///
/// Expected: Err(AppError::ValidationErr) on the file field and nothing inserted
#[tokio::test]
async fn rejects_duplicate_and_taken_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, files) = temp_storage();

    let existing = factory::create_student(db).await?;

    let contents = format!(
        "id,name,password,max_projects\n4001,A,pw,2\n4001,B,pw,2\n{},C,pw,2\n4002,D,pw,1\n",
        existing.id
    );

    let service = UserService::new(db, &files);
    let result = service.import(ImportKind::Doctors, &csv(&contents)).await;

    let Err(AppError::ValidationErr(errors)) = result else {
        panic!("expected validation errors, got {:?}", result);
    };
    assert!(errors.contains("file", "Id 4001 is duplicated in the import file."));
    assert!(errors.contains("file", &format!("Id {} already exists.", existing.id)));

    assert!(!service.id_exists(4002).await?);

    Ok(())
}

/// Tests importing a file with only a header row.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_empty_file() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, files) = temp_storage();

    let service = UserService::new(db, &files);
    let result = service
        .import(ImportKind::Doctors, &csv("id,name,password,max_projects\n"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a doctor row with a negative capacity rejects the whole file.
///
/// Expected: Err(AppError::ValidationErr) naming the row's id and nothing inserted
#[tokio::test]
async fn rejects_negative_max_projects() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_dir, files) = temp_storage();

    let service = UserService::new(db, &files);
    let result = service
        .import(
            ImportKind::Doctors,
            &csv("id,name,password,max_projects\n5001,A,pw,2\n5002,B,pw,-3\n"),
        )
        .await;

    let Err(AppError::ValidationErr(errors)) = result else {
        panic!("expected validation errors, got {:?}", result);
    };
    assert!(errors.contains("file", "Id 5002 has a negative max projects count."));
    assert!(!service.id_exists(5001).await?);

    Ok(())
}
