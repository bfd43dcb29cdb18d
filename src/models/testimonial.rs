use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::testimonial::{
    NewTestimonial as DomainNewTestimonial, Testimonial as DomainTestimonial,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::testimonials)]
pub struct Testimonial {
    pub id: i32,
    pub author: String,
    pub company: Option<String>,
    pub quote: String,
    pub rating: i32,
    pub active: bool,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::testimonials)]
#[diesel(treat_none_as_null = true)]
pub struct NewTestimonial<'a> {
    pub author: &'a str,
    pub company: Option<&'a str>,
    pub quote: &'a str,
    pub rating: i32,
    pub active: bool,
    pub sort_order: i32,
}

impl From<Testimonial> for DomainTestimonial {
    fn from(t: Testimonial) -> Self {
        Self {
            id: t.id,
            author: t.author,
            company: t.company,
            quote: t.quote,
            rating: t.rating,
            active: t.active,
            sort_order: t.sort_order,
            created_at: t.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewTestimonial> for NewTestimonial<'a> {
    fn from(t: &'a DomainNewTestimonial) -> Self {
        Self {
            author: t.author.as_str(),
            company: t.company.as_deref(),
            quote: t.quote.as_str(),
            rating: t.rating,
            active: t.active,
            sort_order: t.sort_order,
        }
    }
}
