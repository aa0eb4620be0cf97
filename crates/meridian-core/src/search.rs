//! # Search Result Records
//!
//! The transient record the search endpoint returns. Fetched per query,
//! displayed grouped by kind, never persisted client-side.

use serde::{Deserialize, Serialize};

use crate::id::ResultId;
use crate::kind::ResultKind;

/// A single match returned by `GET /api/search`.
///
/// Only `id`, `type`, and `name` are always present. The remaining fields
/// are kind-specific annotations (a product's SKU, a customer's email, an
/// order's number and total) and their absence must never break rendering,
/// so every one of them is optional with a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Server-minted identifier, unique within `kind`.
    pub id: ResultId,
    /// The closed tag driving routing and grouping.
    #[serde(rename = "type")]
    pub kind: ResultKind,
    /// Display label.
    pub name: String,
    /// Stock-keeping unit; present only on product results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Contact email; present only on customer results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Human order number; present only on order results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    /// Monetary total; present only on order and invoice results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_only_required_fields() {
        let result: SearchResult =
            serde_json::from_str(r#"{"id":"1","type":"product","name":"Laptop Pro X"}"#).unwrap();
        assert_eq!(result.id.as_str(), "1");
        assert_eq!(result.kind, ResultKind::Product);
        assert_eq!(result.name, "Laptop Pro X");
        assert!(result.sku.is_none());
        assert!(result.email.is_none());
        assert!(result.order_number.is_none());
        assert!(result.total.is_none());
    }

    #[test]
    fn deserializes_kind_specific_fields() {
        let result: SearchResult = serde_json::from_str(
            r#"{"id":"o-9","type":"order","name":"Order 9","orderNumber":"SO-0009","total":129.5}"#,
        )
        .unwrap();
        assert_eq!(result.order_number.as_deref(), Some("SO-0009"));
        assert_eq!(result.total, Some(129.5));
    }

    #[test]
    fn ignores_fields_this_build_does_not_know() {
        let result: SearchResult = serde_json::from_str(
            r#"{"id":"c-3","type":"customer","name":"Acme","email":"ops@acme.test","vip":true}"#,
        )
        .unwrap();
        assert_eq!(result.kind, ResultKind::Customer);
        assert_eq!(result.email.as_deref(), Some("ops@acme.test"));
    }
}
