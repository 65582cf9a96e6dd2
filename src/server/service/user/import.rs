//! Parsing of bulk user import files.
//!
//! Import files are CSV with a header row followed by one user per row:
//! `id,name,password,gpa` for students and `id,name,password,max_projects` for
//! doctors. Columns are read by position, so header names are free-form.

use csv::{ReaderBuilder, Trim};

use crate::server::{
    error::AppError,
    model::{
        project_idea_request::UploadedFile,
        user::{CreateUserParam, RoleDetails},
    },
};

/// Which kind of account an import file creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Students,
    Doctors,
}

/// Parses an uploaded import file into account parameters.
///
/// # Returns
/// - `Ok(Vec<CreateUserParam>)` - One entry per data row, in file order
/// - `Err(AppError::BadRequest)` - Not a `.csv` file, or no data rows
/// - `Err(AppError::CsvErr)` - A row has the wrong shape or an unparsable value
pub fn parse_import(kind: ImportKind, file: &UploadedFile) -> Result<Vec<CreateUserParam>, AppError> {
    if !file.file_name.to_ascii_lowercase().ends_with(".csv") {
        return Err(AppError::BadRequest(
            "Import file must be a .csv file.".to_string(),
        ));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(file.bytes.as_slice());

    let rows = match kind {
        ImportKind::Students => reader
            .deserialize::<(i32, String, String, f64)>()
            .map(|row| {
                row.map(|(id, name, password, gpa)| CreateUserParam {
                    id,
                    name,
                    password,
                    details: RoleDetails::Student { gpa },
                })
            })
            .collect::<Result<Vec<_>, _>>()?,
        ImportKind::Doctors => reader
            .deserialize::<(i32, String, String, i32)>()
            .map(|row| {
                row.map(|(id, name, password, max_projects)| CreateUserParam {
                    id,
                    name,
                    password,
                    details: RoleDetails::Doctor { max_projects },
                })
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    if rows.is_empty() {
        return Err(AppError::BadRequest("Import file is empty".to_string()));
    }

    Ok(rows)
}
