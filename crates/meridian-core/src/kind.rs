//! # Record Kinds — Single Source of Truth
//!
//! The two closed tag sets the dashboard dispatches on. Each is defined
//! once here and matched exhaustively everywhere — adding a kind forces
//! every router, grouper, and filter in the workspace to address it.
//!
//! Both enums carry a `#[serde(other)]` catch-all so that a tag introduced
//! by a newer server deserializes to `Unknown` instead of rejecting the
//! entire payload. `Unknown` never routes, never groups, and never matches
//! a kind filter.

use serde::{Deserialize, Serialize};

/// The kind of a search result, driving routing and display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// An inventory product.
    Product,
    /// A customer record.
    Customer,
    /// A sales order.
    Order,
    /// A finance invoice.
    Invoice,
    /// Forward-compatible catch-all for tags this build does not know.
    #[serde(other)]
    Unknown,
}

impl ResultKind {
    /// The kinds that appear in the grouped search display, in display
    /// order. `Unknown` is deliberately absent.
    pub const DISPLAY_ORDER: [ResultKind; 4] = [
        ResultKind::Product,
        ResultKind::Customer,
        ResultKind::Order,
        ResultKind::Invoice,
    ];

    /// Human-readable group heading for this kind.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Product => "Products",
            Self::Customer => "Customers",
            Self::Order => "Orders",
            Self::Invoice => "Invoices",
            Self::Unknown => "Other",
        }
    }
}

impl std::fmt::Display for ResultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Product => f.write_str("product"),
            Self::Customer => f.write_str("customer"),
            Self::Order => f.write_str("order"),
            Self::Invoice => f.write_str("invoice"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// The kind of a notification, driving icon/styling and the kind filters.
/// Never business logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Platform and maintenance notices.
    System,
    /// Something needing attention (low stock, overdue invoice).
    Alert,
    /// A message from another user.
    Message,
    /// Forward-compatible catch-all for tags this build does not know.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => f.write_str("system"),
            Self::Alert => f.write_str("alert"),
            Self::Message => f.write_str("message"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}
