use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;

#[derive(MultipartForm)]
pub struct UploadFileForm {
    #[multipart(limit = "25MB")]
    pub file: TempFile,
}

#[derive(Deserialize)]
pub struct CreateBackupForm {
    pub note: Option<String>,
}
