use diesel::prelude::*;

use crate::domain::note::{NewNote, Note};
use crate::domain::task::{NewTask, Task, TaskStatus, UpdateTask};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DieselRepository, NoteReader, NoteWriter, TaskReader, TaskWriter,
};

impl TaskReader for DieselRepository {
    fn get_task_by_id(&self, id: i32) -> RepositoryResult<Option<Task>> {
        use crate::models::task::Task as DbTask;
        use crate::schema::tasks;

        let mut conn = self.conn()?;
        let task = tasks::table.find(id).first::<DbTask>(&mut conn).optional()?;

        Ok(task.map(Into::into))
    }

    fn list_tasks(&self, status: Option<TaskStatus>) -> RepositoryResult<Vec<Task>> {
        use crate::models::task::Task as DbTask;
        use crate::schema::tasks;

        let mut conn = self.conn()?;
        let mut query = tasks::table.into_boxed();
        if let Some(status) = status {
            query = query.filter(tasks::status.eq(status.to_string()));
        }

        let items = query
            .order((tasks::due_on.asc(), tasks::id.asc()))
            .load::<DbTask>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl TaskWriter for DieselRepository {
    fn create_task(&self, new_task: &NewTask) -> RepositoryResult<Task> {
        use crate::models::task::{NewTask as DbNewTask, Task as DbTask};
        use crate::schema::tasks;

        let mut conn = self.conn()?;
        let insertable: DbNewTask = new_task.into();
        let created = diesel::insert_into(tasks::table)
            .values(&insertable)
            .get_result::<DbTask>(&mut conn)?;

        Ok(created.into())
    }

    fn update_task(&self, id: i32, updates: &UpdateTask) -> RepositoryResult<Task> {
        use crate::models::task::{Task as DbTask, UpdateTask as DbUpdateTask};
        use crate::schema::tasks;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateTask = updates.into();

        let updated = diesel::update(tasks::table.find(id))
            .set(&db_updates)
            .get_result::<DbTask>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_task(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::tasks;

        let mut conn = self.conn()?;
        diesel::delete(tasks::table.find(id)).execute(&mut conn)?;
        Ok(())
    }

    fn set_task_status(&self, id: i32, status: TaskStatus) -> RepositoryResult<Task> {
        use crate::models::task::Task as DbTask;
        use crate::schema::tasks;

        let mut conn = self.conn()?;
        let updated = diesel::update(tasks::table.find(id))
            .set((
                tasks::status.eq(status.to_string()),
                tasks::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .get_result::<DbTask>(&mut conn)?;

        Ok(updated.into())
    }
}

impl NoteReader for DieselRepository {
    fn get_note_by_id(&self, id: i32) -> RepositoryResult<Option<Note>> {
        use crate::models::note::Note as DbNote;
        use crate::schema::notes;

        let mut conn = self.conn()?;
        let note = notes::table.find(id).first::<DbNote>(&mut conn).optional()?;

        Ok(note.map(Into::into))
    }

    fn list_notes(&self, user_id: i32) -> RepositoryResult<Vec<Note>> {
        use crate::models::note::Note as DbNote;
        use crate::schema::notes;

        let mut conn = self.conn()?;
        let items = notes::table
            .filter(notes::user_id.eq(user_id))
            .order(notes::updated_at.desc())
            .load::<DbNote>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl NoteWriter for DieselRepository {
    fn create_note(&self, new_note: &NewNote) -> RepositoryResult<Note> {
        use crate::models::note::{NewNote as DbNewNote, Note as DbNote};
        use crate::schema::notes;

        let mut conn = self.conn()?;
        let insertable: DbNewNote = new_note.into();
        let created = diesel::insert_into(notes::table)
            .values(&insertable)
            .get_result::<DbNote>(&mut conn)?;

        Ok(created.into())
    }

    fn update_note(&self, id: i32, title: &str, body: &str) -> RepositoryResult<Note> {
        use crate::models::note::Note as DbNote;
        use crate::schema::notes;

        let mut conn = self.conn()?;
        let updated = diesel::update(notes::table.find(id))
            .set((
                notes::title.eq(title),
                notes::body.eq(body),
                notes::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .get_result::<DbNote>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_note(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::notes;

        let mut conn = self.conn()?;
        diesel::delete(notes::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}
