use diesel::prelude::*;

use crate::domain::storage::{Backup, NewBackup, NewStoredFile, StoredFile};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BackupReader, BackupWriter, DieselRepository, StoredFileReader, StoredFileWriter,
};

impl StoredFileReader for DieselRepository {
    fn get_file_by_id(&self, id: i32) -> RepositoryResult<Option<StoredFile>> {
        use crate::models::storage::StoredFile as DbStoredFile;
        use crate::schema::stored_files;

        let mut conn = self.conn()?;
        let file = stored_files::table
            .find(id)
            .first::<DbStoredFile>(&mut conn)
            .optional()?;

        Ok(file.map(Into::into))
    }

    fn list_files(&self) -> RepositoryResult<Vec<StoredFile>> {
        use crate::models::storage::StoredFile as DbStoredFile;
        use crate::schema::stored_files;

        let mut conn = self.conn()?;
        let items = stored_files::table
            .order(stored_files::id.desc())
            .load::<DbStoredFile>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl StoredFileWriter for DieselRepository {
    fn create_file(&self, new_file: &NewStoredFile) -> RepositoryResult<StoredFile> {
        use crate::models::storage::{NewStoredFile as DbNewStoredFile, StoredFile as DbStoredFile};
        use crate::schema::stored_files;

        let mut conn = self.conn()?;
        let insertable: DbNewStoredFile = new_file.into();
        let created = diesel::insert_into(stored_files::table)
            .values(&insertable)
            .get_result::<DbStoredFile>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_file(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::stored_files;

        let mut conn = self.conn()?;
        diesel::delete(stored_files::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}

impl BackupReader for DieselRepository {
    fn get_backup_by_id(&self, id: i32) -> RepositoryResult<Option<Backup>> {
        use crate::models::storage::Backup as DbBackup;
        use crate::schema::backups;

        let mut conn = self.conn()?;
        let backup = backups::table
            .find(id)
            .first::<DbBackup>(&mut conn)
            .optional()?;

        Ok(backup.map(Into::into))
    }

    fn list_backups(&self) -> RepositoryResult<Vec<Backup>> {
        use crate::models::storage::Backup as DbBackup;
        use crate::schema::backups;

        let mut conn = self.conn()?;
        let items = backups::table
            .order(backups::id.desc())
            .load::<DbBackup>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl BackupWriter for DieselRepository {
    fn create_backup(&self, new_backup: &NewBackup) -> RepositoryResult<Backup> {
        use crate::models::storage::{Backup as DbBackup, NewBackup as DbNewBackup};
        use crate::schema::backups;

        let mut conn = self.conn()?;
        let insertable: DbNewBackup = new_backup.into();
        let created = diesel::insert_into(backups::table)
            .values(&insertable)
            .get_result::<DbBackup>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_backup(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::backups;

        let mut conn = self.conn()?;
        diesel::delete(backups::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}
