//! The embeddable shell facade.
//!
//! One object for the embedding page to hold: both controllers, the
//! notice list, the event dispatcher, and the global-shortcut handler.

use std::sync::Arc;

use meridian_api_client::DashboardClient;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use uuid::Uuid;

use crate::event::ShellEvent;
use crate::gateway::{NotificationGateway, SearchGateway};
use crate::keys::KeyCombo;
use crate::notice::Notice;
use crate::notifications::NotificationController;
use crate::search::SearchController;

/// The dashboard shell: global search, notification center, notices.
///
/// All mutation happens on the embedding event loop, through the action
/// methods and [`handle_event`](Shell::handle_event). The receiver
/// returned by [`new`](Shell::new) is the only back-channel spawned work
/// has; pump everything it yields straight back in.
pub struct Shell {
    search: SearchController,
    notifications: NotificationController,
    notices: Vec<Notice>,
}

impl Shell {
    /// Create a shell over explicit gateways (tests, alternative
    /// transports).
    pub fn new(
        search_gateway: Arc<dyn SearchGateway>,
        notification_gateway: Arc<dyn NotificationGateway>,
    ) -> (Self, UnboundedReceiver<ShellEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let shell = Self {
            search: SearchController::new(search_gateway, tx.clone()),
            notifications: NotificationController::new(notification_gateway, tx),
            notices: Vec::new(),
        };
        (shell, rx)
    }

    /// Create a shell backed by a [`DashboardClient`]'s sub-clients.
    pub fn for_client(client: &DashboardClient) -> (Self, UnboundedReceiver<ShellEvent>) {
        Self::new(
            Arc::new(client.search().clone()),
            Arc::new(client.notifications().clone()),
        )
    }

    /// The search controller.
    pub fn search(&self) -> &SearchController {
        &self.search
    }

    /// The search controller, for actions.
    pub fn search_mut(&mut self) -> &mut SearchController {
        &mut self.search
    }

    /// The notification controller.
    pub fn notifications(&self) -> &NotificationController {
        &self.notifications
    }

    /// The notification controller, for actions.
    pub fn notifications_mut(&mut self) -> &mut NotificationController {
        &mut self.notifications
    }

    /// Current notices, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Dismiss a notice by id. Unknown ids are ignored.
    pub fn dismiss_notice(&mut self, id: Uuid) {
        self.notices.retain(|n| n.id != id);
    }

    /// Handle a chord from the host's process-wide key subscription.
    /// Returns `true` when the chord was consumed (so the host can
    /// suppress the default input behavior, whatever had focus).
    pub fn handle_global_key(&mut self, key: &KeyCombo) -> bool {
        if key.is_search_shortcut() {
            self.search.toggle();
            true
        } else {
            false
        }
    }

    /// Apply a completion event to the controller that owns it,
    /// collecting any notice it raises.
    pub fn handle_event(&mut self, event: ShellEvent) {
        let notice = match event {
            ShellEvent::QueryStabilized(query) => {
                self.search.handle_query_stabilized(query);
                None
            }
            ShellEvent::SearchCompleted {
                generation,
                query,
                outcome,
            } => self.search.handle_search_completed(generation, query, outcome),
            ShellEvent::NotificationsFetched {
                generation,
                outcome,
            } => self.notifications.handle_fetched(generation, outcome),
            ShellEvent::MarkReadCompleted { id, outcome } => {
                self.notifications.handle_mark_read_completed(id, outcome)
            }
            ShellEvent::MarkAllReadCompleted { count, outcome } => self
                .notifications
                .handle_mark_all_read_completed(count, outcome),
            ShellEvent::DeleteCompleted { id, outcome } => {
                self.notifications.handle_delete_completed(id, outcome)
            }
            ShellEvent::ClearAllCompleted { count, outcome } => self
                .notifications
                .handle_clear_all_completed(count, outcome),
        };

        if let Some(notice) = notice {
            self.notices.push(notice);
        }
    }
}
