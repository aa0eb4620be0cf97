//! Routing from a selected search result to its destination view.
//!
//! The destination is a pure function of the result kind. An
//! [`Unknown`](meridian_core::ResultKind::Unknown) kind routes nowhere:
//! selecting it is a no-op, observable in the log rather than a crash.

use meridian_core::{ResultId, ResultKind, SearchResult};

/// A destination view within the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Inventory product detail.
    ProductDetail(ResultId),
    /// Customer detail.
    CustomerDetail(ResultId),
    /// Sales order detail.
    OrderDetail(ResultId),
    /// Finance invoice detail.
    InvoiceDetail(ResultId),
}

impl Route {
    /// The destination for a search result, or `None` for a kind this
    /// build cannot route.
    pub fn for_result(result: &SearchResult) -> Option<Route> {
        match result.kind {
            ResultKind::Product => Some(Route::ProductDetail(result.id.clone())),
            ResultKind::Customer => Some(Route::CustomerDetail(result.id.clone())),
            ResultKind::Order => Some(Route::OrderDetail(result.id.clone())),
            ResultKind::Invoice => Some(Route::InvoiceDetail(result.id.clone())),
            ResultKind::Unknown => {
                tracing::warn!(id = %result.id, "no destination for unknown result kind");
                None
            }
        }
    }

    /// The path the embedding router should navigate to.
    pub fn path(&self) -> String {
        match self {
            Route::ProductDetail(id) => format!("/inventory/products/{id}"),
            Route::CustomerDetail(id) => format!("/customers/{id}"),
            Route::OrderDetail(id) => format!("/sales/orders/{id}"),
            Route::InvoiceDetail(id) => format!("/finance/invoices/{id}"),
        }
    }
}
