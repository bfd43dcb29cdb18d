//! Repository implementations for invoices and the transaction ledger.

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::billing::{
    Invoice, NewInvoice, NewTransaction, Transaction, UpdateInvoice, UpdateTransaction,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DieselRepository, InvoiceListQuery, InvoiceReader, InvoiceWriter, TransactionListQuery,
    TransactionReader, TransactionWriter,
};

impl InvoiceReader for DieselRepository {
    fn get_invoice_by_id(&self, id: i32) -> RepositoryResult<Option<Invoice>> {
        use crate::models::billing::Invoice as DbInvoice;
        use crate::schema::invoices;

        let mut conn = self.conn()?;
        let invoice = invoices::table
            .find(id)
            .first::<DbInvoice>(&mut conn)
            .optional()?;

        Ok(invoice.map(Into::into))
    }

    fn list_invoices(&self, query: InvoiceListQuery) -> RepositoryResult<(usize, Vec<Invoice>)> {
        use crate::models::billing::Invoice as DbInvoice;
        use crate::schema::invoices;

        let mut conn = self.conn()?;

        let mut items_query = invoices::table.into_boxed();
        let mut count_query = invoices::table.count().into_boxed();

        if let Some(status) = &query.status {
            items_query = items_query.filter(invoices::status.eq(status.to_string()));
            count_query = count_query.filter(invoices::status.eq(status.to_string()));
        }

        items_query = items_query.order(invoices::issued_on.desc());

        if let Some(pagination) = &query.pagination {
            let (limit, offset) = pagination.limit_offset();
            items_query = items_query.limit(limit).offset(offset);
        }

        let items = items_query
            .load::<DbInvoice>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Invoice>>();

        let total: i64 = count_query.get_result(&mut conn)?;

        Ok((total as usize, items))
    }
}

impl InvoiceWriter for DieselRepository {
    fn create_invoice(&self, new_invoice: &NewInvoice) -> RepositoryResult<Invoice> {
        use crate::models::billing::{Invoice as DbInvoice, NewInvoice as DbNewInvoice};
        use crate::schema::invoices;

        let mut conn = self.conn()?;
        let insertable: DbNewInvoice = new_invoice.into();
        let created = diesel::insert_into(invoices::table)
            .values(&insertable)
            .get_result::<DbInvoice>(&mut conn)?;

        Ok(created.into())
    }

    fn update_invoice(&self, id: i32, updates: &UpdateInvoice) -> RepositoryResult<Invoice> {
        use crate::models::billing::{Invoice as DbInvoice, UpdateInvoice as DbUpdateInvoice};
        use crate::schema::invoices;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateInvoice = updates.into();

        let updated = diesel::update(invoices::table.find(id))
            .set(&db_updates)
            .get_result::<DbInvoice>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_invoice(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::{invoices, transactions};

        let mut conn = self.conn()?;

        // unlink ledger entries first, keep the bookings themselves
        diesel::update(transactions::table.filter(transactions::invoice_id.eq(id)))
            .set(transactions::invoice_id.eq(None::<i32>))
            .execute(&mut conn)?;
        diesel::delete(invoices::table.find(id)).execute(&mut conn)?;
        Ok(())
    }

    fn mark_invoice_paid(&self, id: i32) -> RepositoryResult<Invoice> {
        use crate::models::billing::Invoice as DbInvoice;
        use crate::schema::invoices;

        let mut conn = self.conn()?;
        let now = Utc::now();
        let updated = diesel::update(invoices::table.find(id))
            .set((
                invoices::status.eq("paid"),
                invoices::paid_on.eq(now.date_naive()),
                invoices::updated_at.eq(now.naive_utc()),
            ))
            .get_result::<DbInvoice>(&mut conn)?;

        Ok(updated.into())
    }
}

impl TransactionReader for DieselRepository {
    fn get_transaction_by_id(&self, id: i32) -> RepositoryResult<Option<Transaction>> {
        use crate::models::billing::Transaction as DbTransaction;
        use crate::schema::transactions;

        let mut conn = self.conn()?;
        let tx = transactions::table
            .find(id)
            .first::<DbTransaction>(&mut conn)
            .optional()?;

        Ok(tx.map(Into::into))
    }

    fn list_transactions(
        &self,
        query: TransactionListQuery,
    ) -> RepositoryResult<(usize, Vec<Transaction>)> {
        use crate::models::billing::Transaction as DbTransaction;
        use crate::schema::transactions;

        let mut conn = self.conn()?;

        let mut items_query = transactions::table.into_boxed();
        let mut count_query = transactions::table.count().into_boxed();

        if let Some(kind) = &query.kind {
            items_query = items_query.filter(transactions::kind.eq(kind.to_string()));
            count_query = count_query.filter(transactions::kind.eq(kind.to_string()));
        }

        items_query = items_query.order(transactions::booked_on.desc());

        if let Some(pagination) = &query.pagination {
            let (limit, offset) = pagination.limit_offset();
            items_query = items_query.limit(limit).offset(offset);
        }

        let items = items_query
            .load::<DbTransaction>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Transaction>>();

        let total: i64 = count_query.get_result(&mut conn)?;

        Ok((total as usize, items))
    }
}

impl TransactionWriter for DieselRepository {
    fn create_transaction(&self, new_tx: &NewTransaction) -> RepositoryResult<Transaction> {
        use crate::models::billing::{NewTransaction as DbNewTransaction, Transaction as DbTransaction};
        use crate::schema::transactions;

        let mut conn = self.conn()?;
        let insertable: DbNewTransaction = new_tx.into();
        let created = diesel::insert_into(transactions::table)
            .values(&insertable)
            .get_result::<DbTransaction>(&mut conn)?;

        Ok(created.into())
    }

    fn update_transaction(
        &self,
        id: i32,
        updates: &UpdateTransaction,
    ) -> RepositoryResult<Transaction> {
        use crate::models::billing::{NewTransaction as DbNewTransaction, Transaction as DbTransaction};
        use crate::schema::transactions;

        let mut conn = self.conn()?;
        let db_updates: DbNewTransaction = updates.into();

        let updated = diesel::update(transactions::table.find(id))
            .set(&db_updates)
            .get_result::<DbTransaction>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_transaction(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::transactions;

        let mut conn = self.conn()?;
        diesel::delete(transactions::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}
