use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::newsletter::{
    Campaign as DomainCampaign, NewCampaign as DomainNewCampaign,
    NewSubscriber as DomainNewSubscriber, Subscriber as DomainSubscriber,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::subscribers)]
pub struct Subscriber {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub token: String,
    pub subscribed: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::subscribers)]
pub struct NewSubscriber<'a> {
    pub email: &'a str,
    pub name: Option<&'a str>,
    pub token: &'a str,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::campaigns)]
pub struct Campaign {
    pub id: i32,
    pub subject: String,
    pub body: String,
    pub status: String,
    pub sent_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::campaigns)]
pub struct NewCampaign<'a> {
    pub subject: &'a str,
    pub body: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::campaigns)]
pub struct UpdateCampaign<'a> {
    pub subject: &'a str,
    pub body: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Subscriber> for DomainSubscriber {
    fn from(s: Subscriber) -> Self {
        Self {
            id: s.id,
            email: s.email,
            name: s.name,
            token: s.token,
            subscribed: s.subscribed,
            created_at: s.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewSubscriber> for NewSubscriber<'a> {
    fn from(s: &'a DomainNewSubscriber) -> Self {
        Self {
            email: s.email.as_str(),
            name: s.name.as_deref(),
            token: s.token.as_str(),
        }
    }
}

impl From<Campaign> for DomainCampaign {
    fn from(c: Campaign) -> Self {
        Self {
            id: c.id,
            subject: c.subject,
            body: c.body,
            status: c.status.as_str().into(),
            sent_at: c.sent_at,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCampaign> for NewCampaign<'a> {
    fn from(c: &'a DomainNewCampaign) -> Self {
        Self {
            subject: c.subject.as_str(),
            body: c.body.as_str(),
        }
    }
}

impl<'a> From<&'a DomainNewCampaign> for UpdateCampaign<'a> {
    fn from(c: &'a DomainNewCampaign) -> Self {
        Self {
            subject: c.subject.as_str(),
            body: c.body.as_str(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
