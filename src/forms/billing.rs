use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::billing::{NewInvoice, NewTransaction};
use crate::forms::{optional_date, optional_i32};

#[derive(Deserialize, Validate)]
pub struct SaveInvoiceForm {
    #[serde(default, deserialize_with = "optional_i32")]
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "number is required"))]
    pub number: String,
    #[validate(length(min = 1, message = "customer is required"))]
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: String,
    /// Amount in whole currency units; stored as cents.
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub status: String,
    pub issued_on: NaiveDate,
    #[serde(default, deserialize_with = "optional_date")]
    pub due_on: Option<NaiveDate>,
}

pub(crate) fn default_currency() -> String {
    "EUR".to_string()
}

impl SaveInvoiceForm {
    #[must_use]
    pub fn to_new_invoice(&self) -> NewInvoice {
        NewInvoice::new(
            self.number.clone(),
            self.customer_name.clone(),
            self.customer_email.clone(),
            (self.amount * 100.0).round() as i64,
            self.currency.clone(),
            self.status.as_str().into(),
            self.issued_on,
            self.due_on,
        )
    }
}

#[derive(Deserialize, Validate)]
pub struct SaveTransactionForm {
    #[serde(default, deserialize_with = "optional_i32")]
    pub id: Option<i32>,
    #[serde(default)]
    pub kind: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub booked_on: NaiveDate,
    #[serde(default, deserialize_with = "optional_i32")]
    pub invoice_id: Option<i32>,
}

impl SaveTransactionForm {
    #[must_use]
    pub fn to_new_transaction(&self) -> NewTransaction {
        NewTransaction::new(
            self.kind.as_str().into(),
            self.description.clone(),
            (self.amount * 100.0).round() as i64,
            self.currency.clone(),
            self.booked_on,
            self.invoice_id,
        )
    }
}
