use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::content::{
    NewPageContent as DomainNewPageContent, PageContent as DomainPageContent,
    SiteSetting as DomainSiteSetting,
};

#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = crate::schema::site_settings)]
pub struct SiteSetting {
    pub key: String,
    pub value: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::site_settings)]
pub struct NewSiteSetting<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = crate::schema::page_contents)]
pub struct PageContent {
    pub page: String,
    pub section: String,
    pub body: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::page_contents)]
pub struct NewPageContent<'a> {
    pub page: &'a str,
    pub section: &'a str,
    pub body: &'a str,
}

impl From<SiteSetting> for DomainSiteSetting {
    fn from(s: SiteSetting) -> Self {
        Self {
            key: s.key,
            value: s.value,
            updated_at: s.updated_at,
        }
    }
}

impl From<PageContent> for DomainPageContent {
    fn from(c: PageContent) -> Self {
        Self {
            page: c.page,
            section: c.section,
            body: c.body,
            updated_at: c.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewPageContent> for NewPageContent<'a> {
    fn from(c: &'a DomainNewPageContent) -> Self {
        Self {
            page: c.page.as_str(),
            section: c.section.as_str(),
            body: c.body.as_str(),
        }
    }
}
