use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct FaqItem {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub active: bool,
    pub sort_order: i32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewFaqItem {
    pub question: String,
    pub answer: String,
    pub active: bool,
    pub sort_order: i32,
}

impl NewFaqItem {
    #[must_use]
    pub fn new(question: String, answer: String, active: bool, sort_order: i32) -> Self {
        Self {
            question: question.trim().to_string(),
            answer: answer.trim().to_string(),
            active,
            sort_order,
        }
    }
}

pub type UpdateFaqItem = NewFaqItem;
