use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::storage::{
    Backup as DomainBackup, NewBackup as DomainNewBackup, NewStoredFile as DomainNewStoredFile,
    StoredFile as DomainStoredFile,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::stored_files)]
pub struct StoredFile {
    pub id: i32,
    pub name: String,
    pub path: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::stored_files)]
pub struct NewStoredFile<'a> {
    pub name: &'a str,
    pub path: &'a str,
    pub content_type: &'a str,
    pub size_bytes: i64,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::backups)]
pub struct Backup {
    pub id: i32,
    pub file_name: String,
    pub size_bytes: i64,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::backups)]
pub struct NewBackup<'a> {
    pub file_name: &'a str,
    pub size_bytes: i64,
    pub note: Option<&'a str>,
}

impl From<StoredFile> for DomainStoredFile {
    fn from(f: StoredFile) -> Self {
        Self {
            id: f.id,
            name: f.name,
            path: f.path,
            content_type: f.content_type,
            size_bytes: f.size_bytes,
            created_at: f.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewStoredFile> for NewStoredFile<'a> {
    fn from(f: &'a DomainNewStoredFile) -> Self {
        Self {
            name: f.name.as_str(),
            path: f.path.as_str(),
            content_type: f.content_type.as_str(),
            size_bytes: f.size_bytes,
        }
    }
}

impl From<Backup> for DomainBackup {
    fn from(b: Backup) -> Self {
        Self {
            id: b.id,
            file_name: b.file_name,
            size_bytes: b.size_bytes,
            note: b.note,
            created_at: b.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewBackup> for NewBackup<'a> {
    fn from(b: &'a DomainNewBackup) -> Self {
        Self {
            file_name: b.file_name.as_str(),
            size_bytes: b.size_bytes,
            note: b.note.as_deref(),
        }
    }
}
