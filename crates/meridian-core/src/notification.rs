//! # Notification Records
//!
//! The client-side mirror of a server-side notification row. The server is
//! the source of truth; the client copy is replaced wholesale on every
//! panel open and mutated only by explicit user action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::NotificationId;
use crate::kind::NotificationKind;

/// A notification as returned by `GET /api/notifications`.
///
/// `created_at` is immutable and used only for relative-time display;
/// ordering is whatever the server returned. `is_read` is the one mutable
/// field, flipped optimistically ahead of server confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Server-minted identifier.
    pub id: NotificationId,
    /// The closed tag driving icon/styling and kind filters.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Short display title.
    pub title: String,
    /// Longer display text.
    #[serde(default)]
    pub description: String,
    /// Whether the user has read this notification.
    #[serde(default)]
    pub is_read: bool,
    /// Server-side creation time.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Relative-time label for this notification at render time.
    ///
    /// Delegates to [`crate::temporal::relative_label`].
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        crate::temporal::relative_label(self.created_at, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_server_row() {
        let n: Notification = serde_json::from_str(
            r#"{
                "id": "n-1",
                "type": "alert",
                "title": "Low stock",
                "description": "Laptop Pro X is below the reorder point.",
                "isRead": false,
                "createdAt": "2026-01-15T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(n.id.as_str(), "n-1");
        assert_eq!(n.kind, NotificationKind::Alert);
        assert!(!n.is_read);
    }

    #[test]
    fn missing_is_read_defaults_to_unread() {
        let n: Notification = serde_json::from_str(
            r#"{"id":"n-2","type":"system","title":"Backup done","createdAt":"2026-01-15T12:00:00Z"}"#,
        )
        .unwrap();
        assert!(!n.is_read);
        assert_eq!(n.description, "");
    }
}
