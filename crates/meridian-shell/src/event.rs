//! Completion events flowing from spawned work back to the event loop.
//!
//! Controllers never mutate state from spawned tasks. Every debounce
//! settle and every network completion is sent as a [`ShellEvent`] over
//! the channel returned by [`Shell::new`](crate::Shell::new); the
//! embedding view pumps each one into
//! [`Shell::handle_event`](crate::Shell::handle_event), which dispatches
//! to the controller that owns the affected state. The event loop is the
//! sole serialization point.

use meridian_core::{Notification, NotificationId, SearchResult};

use crate::gateway::GatewayError;

/// A completion delivered back to the event loop.
///
/// Fetch completions carry the generation they were issued under;
/// [`Shell::handle_event`](crate::Shell::handle_event) discards any whose
/// generation no longer matches the owning controller's; that is the
/// whole stale-response policy.
#[derive(Debug)]
pub enum ShellEvent {
    /// The search input has been quiet for the debounce delay.
    QueryStabilized(String),
    /// A search fetch finished.
    SearchCompleted {
        /// Generation the fetch was issued under.
        generation: u64,
        /// The query the fetch was issued for; kept for logging.
        query: String,
        /// The gateway outcome.
        outcome: Result<Vec<SearchResult>, GatewayError>,
    },
    /// A notification list fetch finished.
    NotificationsFetched {
        /// Generation the fetch was issued under.
        generation: u64,
        /// The gateway outcome.
        outcome: Result<Vec<Notification>, GatewayError>,
    },
    /// A single mark-read confirmation finished.
    MarkReadCompleted {
        /// The notification that was optimistically marked.
        id: NotificationId,
        /// The gateway outcome.
        outcome: Result<(), GatewayError>,
    },
    /// A bulk mark-read confirmation finished.
    MarkAllReadCompleted {
        /// How many notifications were in the batch.
        count: usize,
        /// The gateway outcome.
        outcome: Result<(), GatewayError>,
    },
    /// A single delete confirmation finished.
    DeleteCompleted {
        /// The notification that was optimistically removed.
        id: NotificationId,
        /// The gateway outcome.
        outcome: Result<(), GatewayError>,
    },
    /// A clear-all confirmation finished.
    ClearAllCompleted {
        /// How many notifications were cleared.
        count: usize,
        /// The gateway outcome.
        outcome: Result<(), GatewayError>,
    },
}
