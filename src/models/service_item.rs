use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::service_item::{
    NewServiceItem as DomainNewServiceItem, ServiceItem as DomainServiceItem,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::service_items)]
pub struct ServiceItem {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub icon: Option<String>,
    pub price_from_cents: Option<i64>,
    pub active: bool,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::service_items)]
pub struct NewServiceItem<'a> {
    pub title: &'a str,
    pub summary: &'a str,
    pub description: &'a str,
    pub icon: Option<&'a str>,
    pub price_from_cents: Option<i64>,
    pub active: bool,
    pub sort_order: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::service_items)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateServiceItem<'a> {
    pub title: &'a str,
    pub summary: &'a str,
    pub description: &'a str,
    pub icon: Option<&'a str>,
    pub price_from_cents: Option<i64>,
    pub active: bool,
    pub sort_order: i32,
    pub updated_at: NaiveDateTime,
}

impl From<ServiceItem> for DomainServiceItem {
    fn from(item: ServiceItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            summary: item.summary,
            description: item.description,
            icon: item.icon,
            price_from_cents: item.price_from_cents,
            active: item.active,
            sort_order: item.sort_order,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewServiceItem> for NewServiceItem<'a> {
    fn from(item: &'a DomainNewServiceItem) -> Self {
        Self {
            title: item.title.as_str(),
            summary: item.summary.as_str(),
            description: item.description.as_str(),
            icon: item.icon.as_deref(),
            price_from_cents: item.price_from_cents,
            active: item.active,
            sort_order: item.sort_order,
        }
    }
}

impl<'a> From<&'a DomainNewServiceItem> for UpdateServiceItem<'a> {
    fn from(item: &'a DomainNewServiceItem) -> Self {
        Self {
            title: item.title.as_str(),
            summary: item.summary.as_str(),
            description: item.description.as_str(),
            icon: item.icon.as_deref(),
            price_from_cents: item.price_from_cents,
            active: item.active,
            sort_order: item.sort_order,
            updated_at: Utc::now().naive_utc(),
        }
    }
}
