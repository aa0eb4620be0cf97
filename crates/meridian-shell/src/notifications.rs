//! The notification center controller.
//!
//! Fetches the notification set when the panel opens, applies read and
//! delete mutations optimistically against local state while a confirm
//! call runs, and filters the list client-side. The server is the source
//! of truth; every panel open replaces the local copy wholesale, which is
//! also what bounds the divergence window a failed confirmation leaves
//! behind; mutations are never rolled back on failure, only surfaced as
//! a notice.

use std::sync::Arc;

use meridian_core::{Notification, NotificationId, NotificationKind};
use tokio::sync::mpsc::UnboundedSender;

use crate::event::ShellEvent;
use crate::gateway::{GatewayError, NotificationGateway};
use crate::notice::Notice;

/// Client-side filter over the notification list. Pure and synchronous;
/// switching filters never touches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    /// Every notification.
    #[default]
    All,
    /// Only unread notifications.
    Unread,
    /// Only system notices.
    System,
    /// Only alerts.
    Alert,
    /// Only user messages.
    Message,
}

impl NotificationFilter {
    /// Whether a notification passes this filter.
    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !notification.is_read,
            Self::System => notification.kind == NotificationKind::System,
            Self::Alert => notification.kind == NotificationKind::Alert,
            Self::Message => notification.kind == NotificationKind::Message,
        }
    }
}

/// Owns the notification panel state and its server synchronization.
pub struct NotificationController {
    gateway: Arc<dyn NotificationGateway>,
    events: UnboundedSender<ShellEvent>,
    notifications: Vec<Notification>,
    loading: bool,
    open: bool,
    filter: NotificationFilter,
    generation: u64,
}

impl NotificationController {
    /// Create a controller reporting completions on `events`.
    pub fn new(
        gateway: Arc<dyn NotificationGateway>,
        events: UnboundedSender<ShellEvent>,
    ) -> Self {
        Self {
            gateway,
            events,
            notifications: Vec::new(),
            loading: false,
            open: false,
            filter: NotificationFilter::default(),
            generation: 0,
        }
    }

    // ── Render-ready state ───────────────────────────────────────────

    /// The full notification set, in server order.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// The notifications passing the active filter, in server order.
    pub fn filtered(&self) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| self.filter.matches(n))
            .collect()
    }

    /// Unread count for the badge, always computed from the full set
    /// rather than the filtered view.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Whether a fetch is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Whether the panel is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The active filter.
    pub fn filter(&self) -> NotificationFilter {
        self.filter
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// Show the panel and fetch the current set from the server.
    pub fn open_panel(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.refresh();
    }

    /// Hide the panel.
    pub fn close_panel(&mut self) {
        self.open = false;
    }

    /// Re-fetch the notification set, replacing local state wholesale on
    /// success.
    pub fn refresh(&mut self) {
        self.loading = true;
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let gateway = Arc::clone(&self.gateway);
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = gateway.list().await;
            let _ = events.send(ShellEvent::NotificationsFetched {
                generation,
                outcome,
            });
        });
    }

    /// Select the client-side filter. Never fetches.
    pub fn set_filter(&mut self, filter: NotificationFilter) {
        self.filter = filter;
    }

    /// Mark a single notification read: optimistic local flip, then a
    /// confirm call carrying that one id.
    pub fn mark_read(&mut self, id: &NotificationId) {
        let Some(entry) = self.notifications.iter_mut().find(|n| n.id == *id) else {
            tracing::warn!(id = %id, "mark_read for an id not in local state");
            return;
        };
        entry.is_read = true;

        let ids = vec![id.clone()];
        let id = id.clone();
        let gateway = Arc::clone(&self.gateway);
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = gateway.mark_read(&ids).await;
            let _ = events.send(ShellEvent::MarkReadCompleted { id, outcome });
        });
    }

    /// Mark every notification read: no-op (zero network calls) when
    /// nothing is unread, otherwise an optimistic bulk flip and one
    /// confirm call carrying the whole id batch.
    pub fn mark_all_read(&mut self) {
        let unread: Vec<NotificationId> = self
            .notifications
            .iter()
            .filter(|n| !n.is_read)
            .map(|n| n.id.clone())
            .collect();
        if unread.is_empty() {
            return;
        }

        for n in &mut self.notifications {
            n.is_read = true;
        }

        let count = unread.len();
        let gateway = Arc::clone(&self.gateway);
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = gateway.mark_read(&unread).await;
            let _ = events.send(ShellEvent::MarkAllReadCompleted { count, outcome });
        });
    }

    /// Delete a single notification: optimistic local removal, then a
    /// delete call carrying that one id.
    pub fn delete(&mut self, id: &NotificationId) {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != *id);
        if self.notifications.len() == before {
            tracing::warn!(id = %id, "delete for an id not in local state");
            return;
        }

        let ids = vec![id.clone()];
        let id = id.clone();
        let gateway = Arc::clone(&self.gateway);
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = gateway.delete(&ids).await;
            let _ = events.send(ShellEvent::DeleteCompleted { id, outcome });
        });
    }

    /// Delete every notification: no-op (zero network calls) when the
    /// list is empty, otherwise one delete call carrying every current id
    /// and an optimistic local empty.
    pub fn clear_all(&mut self) {
        if self.notifications.is_empty() {
            return;
        }

        let ids: Vec<NotificationId> = self.notifications.iter().map(|n| n.id.clone()).collect();
        let count = ids.len();
        self.notifications.clear();

        let gateway = Arc::clone(&self.gateway);
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = gateway.delete(&ids).await;
            let _ = events.send(ShellEvent::ClearAllCompleted { count, outcome });
        });
    }

    // ── Event handling (called by Shell on the event loop) ───────────

    pub(crate) fn handle_fetched(
        &mut self,
        generation: u64,
        outcome: Result<Vec<Notification>, GatewayError>,
    ) -> Option<Notice> {
        if generation != self.generation {
            tracing::debug!("discarding stale notification fetch");
            return None;
        }

        self.loading = false;
        match outcome {
            Ok(notifications) => {
                self.notifications = notifications;
                None
            }
            Err(err) => {
                // Local state intentionally untouched.
                tracing::warn!(error = %err, "notification fetch failed");
                Some(Notice::error(
                    "Failed to load notifications",
                    "Please try again later.",
                ))
            }
        }
    }

    pub(crate) fn handle_mark_read_completed(
        &mut self,
        id: NotificationId,
        outcome: Result<(), GatewayError>,
    ) -> Option<Notice> {
        match outcome {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(error = %err, id = %id, "mark-read confirmation failed");
                Some(Notice::error(
                    "Failed to update notification",
                    "Please try again later.",
                ))
            }
        }
    }

    pub(crate) fn handle_mark_all_read_completed(
        &mut self,
        count: usize,
        outcome: Result<(), GatewayError>,
    ) -> Option<Notice> {
        match outcome {
            Ok(()) => Some(Notice::success(
                "All notifications marked as read",
                format!("{count} notifications updated."),
            )),
            Err(err) => {
                tracing::warn!(error = %err, count, "bulk mark-read confirmation failed");
                Some(Notice::error(
                    "Failed to update notifications",
                    "Please try again later.",
                ))
            }
        }
    }

    pub(crate) fn handle_delete_completed(
        &mut self,
        id: NotificationId,
        outcome: Result<(), GatewayError>,
    ) -> Option<Notice> {
        match outcome {
            Ok(()) => None,
            Err(err) => {
                // The entry stays removed locally; the next panel open
                // reconciles with whatever the server still has.
                tracing::warn!(error = %err, id = %id, "delete confirmation failed");
                Some(Notice::error(
                    "Failed to delete notification",
                    "Please try again later.",
                ))
            }
        }
    }

    pub(crate) fn handle_clear_all_completed(
        &mut self,
        count: usize,
        outcome: Result<(), GatewayError>,
    ) -> Option<Notice> {
        match outcome {
            Ok(()) => Some(Notice::success(
                "All notifications cleared",
                "Your notification center is now empty.",
            )),
            Err(err) => {
                tracing::warn!(error = %err, count, "clear-all confirmation failed");
                Some(Notice::error(
                    "Failed to clear notifications",
                    "Please try again later.",
                ))
            }
        }
    }
}
