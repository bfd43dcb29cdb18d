use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{EmailAddress, NonEmptyString, PhoneNumber, RichText, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
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

#[derive(Clone, Debug, Deserialize)]
pub struct NewContactMessage {
    pub name: NonEmptyString,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
    pub subject: Option<String>,
    pub message: RichText,
}

impl NewContactMessage {
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        subject: Option<String>,
        message: String,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: NonEmptyString::new(name)?,
            email: EmailAddress::new(email)?,
            phone: match phone.filter(|s| !s.trim().is_empty()) {
                Some(phone) => Some(PhoneNumber::new(phone)?),
                None => None,
            },
            subject: subject
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            message: RichText::new(message)?,
        })
    }
}
