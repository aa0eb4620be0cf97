#![deny(missing_docs)]

//! # meridian-core — Foundational Types for the Meridian Dashboard
//!
//! This crate defines the types shared by every other crate in the
//! workspace. It has no internal crate dependencies — only `serde` and
//! `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** Every identifier is a distinct
//!    type. You cannot pass a [`ResultId`] where a [`NotificationId`] is
//!    expected. Both are opaque: the server mints them and the client never
//!    interprets their contents.
//!
//! 2. **Closed kind enums with a forward-compatible catch-all.** The
//!    [`ResultKind`] and [`NotificationKind`] tag sets drive routing,
//!    grouping, and filtering through exhaustive `match`. A tag this build
//!    has never seen deserializes to `Unknown` instead of failing the whole
//!    payload.
//!
//! 3. **Server order is preserved.** Records carry timestamps for display
//!    only; nothing in this workspace re-sorts what the server returned.

pub mod id;
pub mod kind;
pub mod notification;
pub mod search;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use id::{NotificationId, ResultId};
pub use kind::{NotificationKind, ResultKind};
pub use notification::Notification;
pub use search::SearchResult;
pub use temporal::relative_label;
