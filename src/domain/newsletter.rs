use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{EmailAddress, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Subscriber {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub token: String,
    pub subscribed: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSubscriber {
    pub email: EmailAddress,
    pub name: Option<String>,
    pub token: String,
}

impl NewSubscriber {
    pub fn new(
        email: String,
        name: Option<String>,
        token: String,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            email: EmailAddress::new(email)?,
            name: name.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            token,
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CampaignStatus {
    Draft,
    Sent,
}

impl Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CampaignStatus::Draft => write!(f, "draft"),
            CampaignStatus::Sent => write!(f, "sent"),
        }
    }
}

impl From<&str> for CampaignStatus {
    fn from(s: &str) -> Self {
        match s {
            "sent" => CampaignStatus::Sent,
            _ => CampaignStatus::Draft,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: i32,
    pub subject: String,
    pub body: String,
    pub status: CampaignStatus,
    pub sent_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCampaign {
    pub subject: String,
    pub body: String,
}

impl NewCampaign {
    #[must_use]
    pub fn new(subject: String, body: String) -> Self {
        Self {
            subject: subject.trim().to_string(),
            body,
        }
    }
}

pub type UpdateCampaign = NewCampaign;
