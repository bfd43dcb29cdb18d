//! System log storage and the dashboard summary.

use diesel::prelude::*;

use crate::domain::system_log::{NewSystemLog, SystemLog};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DashboardSummary, DieselRepository, LogListQuery, SummaryReader, SystemLogReader,
    SystemLogWriter,
};

impl SystemLogReader for DieselRepository {
    fn list_system_logs(&self, query: LogListQuery) -> RepositoryResult<(usize, Vec<SystemLog>)> {
        use crate::models::system_log::SystemLog as DbSystemLog;
        use crate::schema::system_logs;

        let mut conn = self.conn()?;

        let mut items_query = system_logs::table.into_boxed();
        let mut count_query = system_logs::table.count().into_boxed();

        if let Some(level) = &query.level {
            items_query = items_query.filter(system_logs::level.eq(level.to_string()));
            count_query = count_query.filter(system_logs::level.eq(level.to_string()));
        }

        items_query = items_query.order(system_logs::id.desc());

        if let Some(pagination) = &query.pagination {
            let (limit, offset) = pagination.limit_offset();
            items_query = items_query.limit(limit).offset(offset);
        }

        let items = items_query
            .load::<DbSystemLog>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<SystemLog>>();

        let total: i64 = count_query.get_result(&mut conn)?;

        Ok((total as usize, items))
    }
}

impl SystemLogWriter for DieselRepository {
    fn create_system_log(&self, new_log: &NewSystemLog) -> RepositoryResult<SystemLog> {
        use crate::models::system_log::{NewSystemLog as DbNewSystemLog, SystemLog as DbSystemLog};
        use crate::schema::system_logs;

        let mut conn = self.conn()?;
        let insertable: DbNewSystemLog = new_log.into();
        let created = diesel::insert_into(system_logs::table)
            .values(&insertable)
            .get_result::<DbSystemLog>(&mut conn)?;

        Ok(created.into())
    }

    fn clear_system_logs(&self) -> RepositoryResult<usize> {
        use crate::schema::system_logs;

        let mut conn = self.conn()?;
        let affected = diesel::delete(system_logs::table).execute(&mut conn)?;
        Ok(affected)
    }
}

impl SummaryReader for DieselRepository {
    fn dashboard_summary(&self) -> RepositoryResult<DashboardSummary> {
        use crate::schema::{
            backups, contact_messages, invoices, projects, service_items, stored_files,
            subscribers, tasks,
        };

        let mut conn = self.conn()?;

        let summary = DashboardSummary {
            projects: projects::table.count().get_result(&mut conn)?,
            service_items: service_items::table.count().get_result(&mut conn)?,
            unread_messages: contact_messages::table
                .filter(contact_messages::is_read.eq(false))
                .count()
                .get_result(&mut conn)?,
            open_invoices: invoices::table
                .filter(invoices::status.ne("paid"))
                .filter(invoices::status.ne("void"))
                .count()
                .get_result(&mut conn)?,
            open_tasks: tasks::table
                .filter(tasks::status.ne("done"))
                .count()
                .get_result(&mut conn)?,
            subscribers: subscribers::table
                .filter(subscribers::subscribed.eq(true))
                .count()
                .get_result(&mut conn)?,
            stored_files: stored_files::table.count().get_result(&mut conn)?,
            backups: backups::table.count().get_result(&mut conn)?,
        };

        Ok(summary)
    }
}
