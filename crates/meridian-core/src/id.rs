//! # Identifier Newtypes
//!
//! Opaque string identifiers for the records the dashboard works with.
//! Each identifier is a distinct type — you cannot pass a [`ResultId`]
//! where a [`NotificationId`] is expected.
//!
//! Both wrap the server-minted string verbatim. A search-result id is only
//! guaranteed unique within its kind, so routing always pairs it with the
//! kind; a notification id is globally unique. Neither is validated beyond
//! what the server already guarantees.

use serde::{Deserialize, Serialize};

/// Identifier of a single search result, unique within its result kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultId(String);

impl ResultId {
    /// Wrap a server-minted identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResultId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResultId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ResultId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier of a notification record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(String);

impl NotificationId {
    /// Wrap a server-minted identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NotificationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_id_round_trips_transparently() {
        let id = ResultId::new("p-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p-42\"");
        let back: ResultId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn notification_id_display_is_verbatim() {
        let id = NotificationId::from("n-7");
        assert_eq!(id.to_string(), "n-7");
        assert_eq!(id.as_str(), "n-7");
    }
}
