//! Form payloads accepted by the route handlers.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

pub mod auth;
pub mod billing;
pub mod catalog;
pub mod main;
pub mod newsletter;
pub mod settings;
pub mod storage;
pub mod tasks;

/// HTML date inputs submit an empty string when cleared; treat that as None.
pub(crate) fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| s.trim().parse().ok()))
}

/// Optional numeric inputs submit an empty string when left blank.
pub(crate) fn optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| s.trim().parse().ok()))
}

pub(crate) fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| s.trim().parse().ok()))
}

/// Checkboxes submit a value only when checked.
pub(crate) fn checkbox(value: &Option<String>) -> bool {
    value.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct DateForm {
        #[serde(default, deserialize_with = "optional_date")]
        due_on: Option<NaiveDate>,
    }

    #[test]
    fn empty_date_becomes_none() {
        let form: DateForm = serde_html_form::from_str("due_on=").unwrap();
        assert_eq!(form.due_on, None);
    }

    #[test]
    fn valid_date_is_parsed() {
        let form: DateForm = serde_html_form::from_str("due_on=2026-03-01").unwrap();
        assert_eq!(form.due_on, NaiveDate::from_ymd_opt(2026, 3, 1));
    }
}
