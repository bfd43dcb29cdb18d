//! Invoices and transactions.

use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;
use validator::Validate;

use crate::SERVICE_ADMIN_ROLE;
use crate::forms::billing::{SaveInvoiceForm, SaveTransactionForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::zmq::ChangeOp;
use crate::pagination::Paginated;
use crate::repository::{
    DieselRepository, InvoiceListQuery, InvoiceReader, InvoiceWriter, TransactionListQuery,
    TransactionReader, TransactionWriter,
};
use crate::routes::{
    DEFAULT_ITEMS_PER_PAGE, base_context, ensure_access, ensure_role, notify_change, redirect,
    render_template, resolve_theme,
};
use crate::zmq::ZmqSenders;

#[derive(Deserialize)]
pub struct InvoicesQueryParams {
    status: Option<String>,
    page: Option<usize>,
}

#[get("/admin/invoices")]
pub async fn invoices(
    req: HttpRequest,
    params: web::Query<InvoicesQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let page = params.page.unwrap_or(1);
    let mut query = InvoiceListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let status_filter = params
        .status
        .as_deref()
        .filter(|s| ["draft", "sent", "paid", "void"].contains(s));
    if let Some(status) = status_filter {
        query = query.status(status.into());
    }

    let invoices = match repo.list_invoices(query) {
        Ok((total, items)) => {
            Paginated::new(items, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE))
        }
        Err(e) => {
            log::error!("Failed to list invoices: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, Some(&user), "invoices", &resolve_theme(&req));
    context.insert("invoices", &invoices);
    context.insert("status_filter", &status_filter);

    render_template(&tera, "admin/invoices.html", &context)
}

#[post("/admin/invoices/save")]
pub async fn save_invoice(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
    web::Form(form): web::Form<SaveInvoiceForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate invoice form: {e}");
        FlashMessage::error("Please fill in number, customer and a valid email.").send();
        return redirect("/admin/invoices");
    }

    let payload = form.to_new_invoice();
    let result = match form.id {
        Some(id) => repo.update_invoice(id, &payload).map(|i| (i, ChangeOp::Updated)),
        None => repo.create_invoice(&payload).map(|i| (i, ChangeOp::Created)),
    };

    match result {
        Ok((invoice, op)) => {
            notify_change(&senders, "invoices", invoice.id, op);
            FlashMessage::success("Invoice saved.").send();
        }
        Err(e) => {
            log::error!("Failed to save invoice: {e}");
            FlashMessage::error("Could not save the invoice.").send();
        }
    }

    redirect("/admin/invoices")
}

#[post("/admin/invoices/{id}/paid")]
pub async fn mark_invoice_paid(
    invoice_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let id = invoice_id.into_inner();
    match repo.mark_invoice_paid(id) {
        Ok(invoice) => {
            notify_change(&senders, "invoices", invoice.id, ChangeOp::Updated);
            FlashMessage::success(format!("Invoice {} marked as paid.", invoice.number)).send();
        }
        Err(e) => {
            log::error!("Failed to mark invoice paid: {e}");
            FlashMessage::error("Could not update the invoice.").send();
        }
    }

    redirect("/admin/invoices")
}

#[post("/admin/invoices/{id}/delete")]
pub async fn delete_invoice(
    invoice_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let id = invoice_id.into_inner();
    match repo.delete_invoice(id) {
        Ok(()) => {
            notify_change(&senders, "invoices", id, ChangeOp::Deleted);
            FlashMessage::success("Invoice deleted.").send();
        }
        Err(e) => {
            log::error!("Failed to delete invoice: {e}");
            FlashMessage::error("Could not delete the invoice.").send();
        }
    }

    redirect("/admin/invoices")
}

#[derive(Deserialize)]
pub struct TransactionsQueryParams {
    kind: Option<String>,
    page: Option<usize>,
}

#[get("/admin/transactions")]
pub async fn transactions(
    req: HttpRequest,
    params: web::Query<TransactionsQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_access(&user) {
        return response;
    }

    let page = params.page.unwrap_or(1);
    let mut query = TransactionListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let kind_filter = params
        .kind
        .as_deref()
        .filter(|k| ["income", "expense"].contains(k));
    if let Some(kind) = kind_filter {
        query = query.kind(kind.into());
    }

    let transactions = match repo.list_transactions(query) {
        Ok((total, items)) => {
            Paginated::new(items, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE))
        }
        Err(e) => {
            log::error!("Failed to list transactions: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context =
        base_context(&flash_messages, Some(&user), "transactions", &resolve_theme(&req));
    context.insert("transactions", &transactions);
    context.insert("kind_filter", &kind_filter);

    render_template(&tera, "admin/transactions.html", &context)
}

#[post("/admin/transactions/save")]
pub async fn save_transaction(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
    web::Form(form): web::Form<SaveTransactionForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate transaction form: {e}");
        FlashMessage::error("Please fill in a description.").send();
        return redirect("/admin/transactions");
    }

    let payload = form.to_new_transaction();
    let result = match form.id {
        Some(id) => repo
            .update_transaction(id, &payload)
            .map(|t| (t, ChangeOp::Updated)),
        None => repo
            .create_transaction(&payload)
            .map(|t| (t, ChangeOp::Created)),
    };

    match result {
        Ok((tx, op)) => {
            notify_change(&senders, "transactions", tx.id, op);
            FlashMessage::success("Transaction saved.").send();
        }
        Err(e) => {
            log::error!("Failed to save transaction: {e}");
            FlashMessage::error("Could not save the transaction.").send();
        }
    }

    redirect("/admin/transactions")
}

#[post("/admin/transactions/{id}/delete")]
pub async fn delete_transaction(
    transaction_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    senders: web::Data<ZmqSenders>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, Some("/na")) {
        return response;
    }

    let id = transaction_id.into_inner();
    match repo.delete_transaction(id) {
        Ok(()) => {
            notify_change(&senders, "transactions", id, ChangeOp::Deleted);
            FlashMessage::success("Transaction deleted.").send();
        }
        Err(e) => {
            log::error!("Failed to delete transaction: {e}");
            FlashMessage::error("Could not delete the transaction.").send();
        }
    }

    redirect("/admin/transactions")
}
