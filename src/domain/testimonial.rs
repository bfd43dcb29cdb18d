use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
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

#[derive(Clone, Debug, Deserialize)]
pub struct NewTestimonial {
    pub author: String,
    pub company: Option<String>,
    pub quote: String,
    pub rating: i32,
    pub active: bool,
    pub sort_order: i32,
}

impl NewTestimonial {
    #[must_use]
    pub fn new(
        author: String,
        company: Option<String>,
        quote: String,
        rating: i32,
        active: bool,
        sort_order: i32,
    ) -> Self {
        Self {
            author: author.trim().to_string(),
            company: company
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            quote: quote.trim().to_string(),
            // ratings render as 1..=5 stars
            rating: rating.clamp(1, 5),
            active,
            sort_order,
        }
    }
}

pub type UpdateTestimonial = NewTestimonial;
