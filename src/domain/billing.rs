//! Invoices and the cash-flow ledger.

use std::fmt::Display;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Void,
}

impl Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::Draft => write!(f, "draft"),
            InvoiceStatus::Sent => write!(f, "sent"),
            InvoiceStatus::Paid => write!(f, "paid"),
            InvoiceStatus::Void => write!(f, "void"),
        }
    }
}

impl From<&str> for InvoiceStatus {
    fn from(s: &str) -> Self {
        match s {
            "sent" => InvoiceStatus::Sent,
            "paid" => InvoiceStatus::Paid,
            "void" => InvoiceStatus::Void,
            _ => InvoiceStatus::Draft,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: i32,
    pub number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: InvoiceStatus,
    pub issued_on: NaiveDate,
    pub due_on: Option<NaiveDate>,
    pub paid_on: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewInvoice {
    pub number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: InvoiceStatus,
    pub issued_on: NaiveDate,
    pub due_on: Option<NaiveDate>,
}

impl NewInvoice {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        number: String,
        customer_name: String,
        customer_email: String,
        amount_cents: i64,
        currency: String,
        status: InvoiceStatus,
        issued_on: NaiveDate,
        due_on: Option<NaiveDate>,
    ) -> Self {
        Self {
            number: number.trim().to_string(),
            customer_name: customer_name.trim().to_string(),
            customer_email: customer_email.to_lowercase().trim().to_string(),
            amount_cents,
            currency: currency.trim().to_uppercase(),
            status,
            issued_on,
            due_on,
        }
    }
}

pub type UpdateInvoice = NewInvoice;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

impl From<&str> for TransactionKind {
    fn from(s: &str) -> Self {
        match s {
            "expense" => TransactionKind::Expense,
            _ => TransactionKind::Income,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub kind: TransactionKind,
    pub description: String,
    pub amount_cents: i64,
    pub currency: String,
    pub booked_on: NaiveDate,
    pub invoice_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub description: String,
    pub amount_cents: i64,
    pub currency: String,
    pub booked_on: NaiveDate,
    pub invoice_id: Option<i32>,
}

impl NewTransaction {
    #[must_use]
    pub fn new(
        kind: TransactionKind,
        description: String,
        amount_cents: i64,
        currency: String,
        booked_on: NaiveDate,
        invoice_id: Option<i32>,
    ) -> Self {
        Self {
            kind,
            description: description.trim().to_string(),
            amount_cents,
            currency: currency.trim().to_uppercase(),
            booked_on,
            invoice_id,
        }
    }
}

pub type UpdateTransaction = NewTransaction;
