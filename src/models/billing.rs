use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::billing::{
    Invoice as DomainInvoice, NewInvoice as DomainNewInvoice,
    NewTransaction as DomainNewTransaction, Transaction as DomainTransaction,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::invoices)]
pub struct Invoice {
    pub id: i32,
    pub number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
    pub issued_on: NaiveDate,
    pub due_on: Option<NaiveDate>,
    pub paid_on: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::invoices)]
pub struct NewInvoice<'a> {
    pub number: &'a str,
    pub customer_name: &'a str,
    pub customer_email: &'a str,
    pub amount_cents: i64,
    pub currency: &'a str,
    pub status: String,
    pub issued_on: NaiveDate,
    pub due_on: Option<NaiveDate>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::invoices)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateInvoice<'a> {
    pub number: &'a str,
    pub customer_name: &'a str,
    pub customer_email: &'a str,
    pub amount_cents: i64,
    pub currency: &'a str,
    pub status: String,
    pub issued_on: NaiveDate,
    pub due_on: Option<NaiveDate>,
    pub updated_at: NaiveDateTime,
}

impl From<Invoice> for DomainInvoice {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id,
            number: invoice.number,
            customer_name: invoice.customer_name,
            customer_email: invoice.customer_email,
            amount_cents: invoice.amount_cents,
            currency: invoice.currency,
            status: invoice.status.as_str().into(),
            issued_on: invoice.issued_on,
            due_on: invoice.due_on,
            paid_on: invoice.paid_on,
            created_at: invoice.created_at,
            updated_at: invoice.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewInvoice> for NewInvoice<'a> {
    fn from(invoice: &'a DomainNewInvoice) -> Self {
        Self {
            number: invoice.number.as_str(),
            customer_name: invoice.customer_name.as_str(),
            customer_email: invoice.customer_email.as_str(),
            amount_cents: invoice.amount_cents,
            currency: invoice.currency.as_str(),
            status: invoice.status.to_string(),
            issued_on: invoice.issued_on,
            due_on: invoice.due_on,
        }
    }
}

impl<'a> From<&'a DomainNewInvoice> for UpdateInvoice<'a> {
    fn from(invoice: &'a DomainNewInvoice) -> Self {
        Self {
            number: invoice.number.as_str(),
            customer_name: invoice.customer_name.as_str(),
            customer_email: invoice.customer_email.as_str(),
            amount_cents: invoice.amount_cents,
            currency: invoice.currency.as_str(),
            status: invoice.status.to_string(),
            issued_on: invoice.issued_on,
            due_on: invoice.due_on,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::transactions)]
pub struct Transaction {
    pub id: i32,
    pub kind: String,
    pub description: String,
    pub amount_cents: i64,
    pub currency: String,
    pub booked_on: NaiveDate,
    pub invoice_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(treat_none_as_null = true)]
pub struct NewTransaction<'a> {
    pub kind: String,
    pub description: &'a str,
    pub amount_cents: i64,
    pub currency: &'a str,
    pub booked_on: NaiveDate,
    pub invoice_id: Option<i32>,
}

impl From<Transaction> for DomainTransaction {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            kind: tx.kind.as_str().into(),
            description: tx.description,
            amount_cents: tx.amount_cents,
            currency: tx.currency,
            booked_on: tx.booked_on,
            invoice_id: tx.invoice_id,
            created_at: tx.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewTransaction> for NewTransaction<'a> {
    fn from(tx: &'a DomainNewTransaction) -> Self {
        Self {
            kind: tx.kind.to_string(),
            description: tx.description.as_str(),
            amount_cents: tx.amount_cents,
            currency: tx.currency.as_str(),
            booked_on: tx.booked_on,
            invoice_id: tx.invoice_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::{InvoiceStatus, TransactionKind};

    #[test]
    fn invoice_status_round_trips_through_text() {
        let now = Utc::now().naive_utc();
        let db_invoice = Invoice {
            id: 1,
            number: "2026-001".to_string(),
            customer_name: "Acme".to_string(),
            customer_email: "billing@acme.test".to_string(),
            amount_cents: 120_000,
            currency: "EUR".to_string(),
            status: "paid".to_string(),
            issued_on: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            due_on: None,
            paid_on: None,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainInvoice = db_invoice.into();
        assert_eq!(domain.status, InvoiceStatus::Paid);
    }

    #[test]
    fn transaction_kind_defaults_to_income() {
        assert_eq!(TransactionKind::from("income"), TransactionKind::Income);
        assert_eq!(TransactionKind::from("weird"), TransactionKind::Income);
        assert_eq!(TransactionKind::from("expense"), TransactionKind::Expense);
    }
}
