use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Field-level validation failures, keyed by request field name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    pub errors: BTreeMap<String, Vec<String>>,
}

/// Identifier of a newly created resource.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct CreatedIdDto {
    pub id: i32,
}

/// Multipart form carrying a single uploaded file in the `file` field.
///
/// Only used for API documentation; handlers read the multipart stream directly.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct FileUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: String,
}
