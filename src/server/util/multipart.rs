//! Reading `multipart/form-data` bodies into named text fields and files.

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::server::{
    error::{validation::ValidationErrors, AppError},
    model::project_idea_request::UploadedFile,
};

/// A fully buffered multipart form.
///
/// Parts carrying a file name are kept as files; every other part is read as
/// UTF-8 text. Repeated text fields keep every value in order.
#[derive(Debug, Default)]
pub struct MultipartForm {
    texts: HashMap<String, Vec<String>>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    /// Buffers every part of the request body.
    ///
    /// # Returns
    /// - `Ok(MultipartForm)` - All parts read
    /// - `Err(AppError::MultipartErr)` - Malformed body or a text part that is not UTF-8
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let bytes = field.bytes().await?;
                    form.files.insert(
                        name,
                        UploadedFile {
                            file_name,
                            bytes: bytes.to_vec(),
                        },
                    );
                }
                None => {
                    let value = field.text().await?;
                    form.texts.entry(name).or_default().push(value);
                }
            }
        }

        Ok(form)
    }

    /// First value of a text field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Takes an uploaded file out of the form.
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    /// Reads a required, non-empty text field, recording an error when missing.
    pub fn required_text(&self, name: &str, errors: &mut ValidationErrors) -> Option<String> {
        match self.text(name).map(str::trim) {
            Some(value) if !value.is_empty() => Some(value.to_string()),
            _ => {
                errors.add(name, format!("The {} field is required.", name));
                None
            }
        }
    }

    /// Reads a required integer field, recording an error when missing or invalid.
    pub fn required_i32(&self, name: &str, errors: &mut ValidationErrors) -> Option<i32> {
        let value = self.required_text(name, errors)?;
        match value.parse::<i32>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                errors.add(name, format!("The value '{}' is not valid.", value));
                None
            }
        }
    }

    /// Reads every value of a repeated integer field.
    ///
    /// Values may also be sent comma separated in a single part. Invalid entries
    /// are recorded as errors.
    pub fn i32_list(&self, name: &str, errors: &mut ValidationErrors) -> Vec<i32> {
        let mut values = Vec::new();

        for raw in self.texts.get(name).into_iter().flatten() {
            for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                match item.parse::<i32>() {
                    Ok(parsed) => values.push(parsed),
                    Err(_) => errors.add(name, format!("The value '{}' is not valid.", item)),
                }
            }
        }

        values
    }

    /// Takes a required file, recording an error when it is missing or empty.
    pub fn required_file(
        &mut self,
        name: &str,
        errors: &mut ValidationErrors,
    ) -> Option<UploadedFile> {
        match self.take_file(name) {
            Some(file) if !file.bytes.is_empty() => Some(file),
            _ => {
                errors.add(name, format!("The {} field is required.", name));
                None
            }
        }
    }
}
