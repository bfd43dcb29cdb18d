use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::contact::{
    ContactMessage as DomainContactMessage, NewContactMessage as DomainNewContactMessage,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::contact_messages)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::contact_messages)]
pub struct NewContactMessage<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub subject: Option<&'a str>,
    pub message: &'a str,
}

impl From<ContactMessage> for DomainContactMessage {
    fn from(msg: ContactMessage) -> Self {
        Self {
            id: msg.id,
            name: msg.name,
            email: msg.email,
            phone: msg.phone,
            subject: msg.subject,
            message: msg.message,
            is_read: msg.is_read,
            created_at: msg.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewContactMessage> for NewContactMessage<'a> {
    fn from(msg: &'a DomainNewContactMessage) -> Self {
        Self {
            name: msg.name.as_str(),
            email: msg.email.as_str(),
            phone: msg.phone.as_ref().map(|p| p.as_str()),
            subject: msg.subject.as_deref(),
            message: msg.message.as_str(),
        }
    }
}
