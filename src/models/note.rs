use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::note::{NewNote as DomainNewNote, Note as DomainNote};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::notes)]
pub struct Note {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::notes)]
pub struct NewNote<'a> {
    pub user_id: i32,
    pub title: &'a str,
    pub body: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::notes)]
pub struct UpdateNote<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Note> for DomainNote {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            user_id: note.user_id,
            title: note.title,
            body: note.body,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewNote> for NewNote<'a> {
    fn from(note: &'a DomainNewNote) -> Self {
        Self {
            user_id: note.user_id,
            title: note.title.as_str(),
            body: note.body.as_str(),
        }
    }
}

impl<'a> From<&'a DomainNewNote> for UpdateNote<'a> {
    fn from(note: &'a DomainNewNote) -> Self {
        Self {
            title: note.title.as_str(),
            body: note.body.as_str(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
