use diesel::prelude::*;

use crate::domain::faq::{FaqItem as DomainFaqItem, NewFaqItem as DomainNewFaqItem};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::faq_items)]
pub struct FaqItem {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub active: bool,
    pub sort_order: i32,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::faq_items)]
pub struct NewFaqItem<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub active: bool,
    pub sort_order: i32,
}

impl From<FaqItem> for DomainFaqItem {
    fn from(item: FaqItem) -> Self {
        Self {
            id: item.id,
            question: item.question,
            answer: item.answer,
            active: item.active,
            sort_order: item.sort_order,
        }
    }
}

impl<'a> From<&'a DomainNewFaqItem> for NewFaqItem<'a> {
    fn from(item: &'a DomainNewFaqItem) -> Self {
        Self {
            question: item.question.as_str(),
            answer: item.answer.as_str(),
            active: item.active,
            sort_order: item.sort_order,
        }
    }
}
