use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warning => write!(f, "warning"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl From<&str> for LogLevel {
    fn from(s: &str) -> Self {
        match s {
            "warning" => LogLevel::Warning,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SystemLog {
    pub id: i32,
    pub level: LogLevel,
    pub message: String,
    pub context: Option<Value>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSystemLog {
    pub level: LogLevel,
    pub message: String,
    pub context: Option<Value>,
}

impl NewSystemLog {
    #[must_use]
    pub fn info(message: impl Into<String>, context: Option<Value>) -> Self {
        Self {
            level: LogLevel::Info,
            message: message.into(),
            context,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>, context: Option<Value>) -> Self {
        Self {
            level: LogLevel::Error,
            message: message.into(),
            context,
        }
    }
}
