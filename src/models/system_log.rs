use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::system_log::{NewSystemLog as DomainNewSystemLog, SystemLog as DomainSystemLog};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::system_logs)]
pub struct SystemLog {
    pub id: i32,
    pub level: String,
    pub message: String,
    pub context: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::system_logs)]
pub struct NewSystemLog {
    pub level: String,
    pub message: String,
    pub context: Option<String>,
}

impl From<SystemLog> for DomainSystemLog {
    fn from(log: SystemLog) -> Self {
        Self {
            id: log.id,
            level: log.level.as_str().into(),
            message: log.message,
            context: log
                .context
                .as_deref()
                .and_then(|raw| serde_json::from_str(raw).ok()),
            created_at: log.created_at,
        }
    }
}

impl From<&DomainNewSystemLog> for NewSystemLog {
    fn from(log: &DomainNewSystemLog) -> Self {
        Self {
            level: log.level.to_string(),
            message: log.message.clone(),
            context: log.context.as_ref().map(|value| value.to_string()),
        }
    }
}
