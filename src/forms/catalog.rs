use serde::Deserialize;
use validator::Validate;

use crate::domain::faq::NewFaqItem;
use crate::domain::project::NewProject;
use crate::domain::service_item::NewServiceItem;
use crate::domain::testimonial::NewTestimonial;
use crate::forms::{checkbox, optional_f64, optional_i32};

#[derive(Deserialize, Validate)]
pub struct SaveProjectForm {
    #[serde(default, deserialize_with = "optional_i32")]
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "summary is required"))]
    pub summary: String,
    pub description: String,
    pub image_url: Option<String>,
    pub active: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl SaveProjectForm {
    #[must_use]
    pub fn to_new_project(&self) -> NewProject {
        NewProject::new(
            self.title.clone(),
            self.summary.clone(),
            self.description.clone(),
            self.image_url.clone(),
            checkbox(&self.active),
            self.sort_order,
        )
    }
}

#[derive(Deserialize, Validate)]
pub struct SaveServiceItemForm {
    #[serde(default, deserialize_with = "optional_i32")]
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "summary is required"))]
    pub summary: String,
    pub description: String,
    pub icon: Option<String>,
    /// Price in whole currency units; stored as cents.
    #[serde(default, deserialize_with = "optional_f64")]
    pub price_from: Option<f64>,
    pub active: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl SaveServiceItemForm {
    #[must_use]
    pub fn to_new_service_item(&self) -> NewServiceItem {
        NewServiceItem::new(
            self.title.clone(),
            self.summary.clone(),
            self.description.clone(),
            self.icon.clone(),
            self.price_from.map(|p| (p * 100.0).round() as i64),
            checkbox(&self.active),
            self.sort_order,
        )
    }
}

#[derive(Deserialize, Validate)]
pub struct SaveTestimonialForm {
    #[serde(default, deserialize_with = "optional_i32")]
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    pub company: Option<String>,
    #[validate(length(min = 1, message = "quote is required"))]
    pub quote: String,
    #[serde(default = "default_rating")]
    pub rating: i32,
    pub active: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_rating() -> i32 {
    5
}

impl SaveTestimonialForm {
    #[must_use]
    pub fn to_new_testimonial(&self) -> NewTestimonial {
        NewTestimonial::new(
            self.author.clone(),
            self.company.clone(),
            self.quote.clone(),
            self.rating,
            checkbox(&self.active),
            self.sort_order,
        )
    }
}

#[derive(Deserialize, Validate)]
pub struct SaveFaqItemForm {
    #[serde(default, deserialize_with = "optional_i32")]
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "question is required"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer is required"))]
    pub answer: String,
    pub active: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl SaveFaqItemForm {
    #[must_use]
    pub fn to_new_faq_item(&self) -> NewFaqItem {
        NewFaqItem::new(
            self.question.clone(),
            self.answer.clone(),
            checkbox(&self.active),
            self.sort_order,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_maps_to_active_flag() {
        let form = SaveProjectForm {
            id: None,
            title: "t".into(),
            summary: "s".into(),
            description: String::new(),
            image_url: None,
            active: Some("on".into()),
            sort_order: 1,
        };
        assert!(form.to_new_project().active);

        let form = SaveProjectForm {
            active: None,
            ..form
        };
        assert!(!form.to_new_project().active);
    }

    #[test]
    fn price_is_converted_to_cents() {
        let form = SaveServiceItemForm {
            id: None,
            title: "t".into(),
            summary: "s".into(),
            description: String::new(),
            icon: None,
            price_from: Some(1499.99),
            active: None,
            sort_order: 0,
        };
        assert_eq!(form.to_new_service_item().price_from_cents, Some(149_999));
    }
}
