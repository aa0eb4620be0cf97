//! # meridian-shell — Interaction Core of the Meridian Dashboard
//!
//! The headless controllers behind the dashboard shell's two global
//! widgets: the debounced cross-entity search box and the notification
//! center. No rendering lives here; the embedding view reads
//! render-ready state and calls action methods; everything temporal
//! (debounce timers, in-flight requests, optimistic confirmation) is this
//! crate's job.
//!
//! ## Event-loop contract
//!
//! All state is owned by [`Shell`] and mutated only on the embedding
//! event loop. Spawned work never touches state; it reports back through
//! the [`ShellEvent`] channel handed out by [`Shell::new`], and the host
//! pumps every received event into [`Shell::handle_event`]:
//!
//! ```no_run
//! # async fn demo() {
//! use std::sync::Arc;
//! use meridian_api_client::{ApiConfig, DashboardClient};
//! use meridian_shell::Shell;
//!
//! let client = DashboardClient::new(ApiConfig::from_env().unwrap()).unwrap();
//! let (mut shell, mut events) = Shell::for_client(&client);
//!
//! shell.search_mut().open();
//! shell.search_mut().set_query("lap");
//!
//! while let Some(event) = events.recv().await {
//!     shell.handle_event(event);
//!     // re-render from shell.search(), shell.notifications(), shell.notices()
//! }
//! # }
//! ```
//!
//! Superseded work is never cancelled mid-flight; completions carry a
//! generation tag and stale ones are discarded on arrival. The debounce
//! timer is the only thing that gets cancelled.

pub mod debounce;
pub mod event;
pub mod gateway;
pub mod keys;
pub mod notice;
pub mod notifications;
pub mod route;
pub mod search;
mod shell;

pub use debounce::Debouncer;
pub use event::ShellEvent;
pub use gateway::{GatewayError, NotificationGateway, SearchGateway};
pub use keys::KeyCombo;
pub use notice::{Notice, NoticeSeverity};
pub use notifications::{NotificationController, NotificationFilter};
pub use route::Route;
pub use search::{ResultGroup, SearchController};
pub use shell::Shell;
