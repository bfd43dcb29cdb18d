use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StoredFile {
    pub id: i32,
    pub name: String,
    pub path: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewStoredFile {
    pub name: String,
    pub path: String,
    pub content_type: String,
    pub size_bytes: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Backup {
    pub id: i32,
    pub file_name: String,
    pub size_bytes: i64,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewBackup {
    pub file_name: String,
    pub size_bytes: i64,
    pub note: Option<String>,
}
