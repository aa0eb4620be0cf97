//! Transient, user-visible, dismissible notices.
//!
//! Every failure the controllers absorb, and every bulk-operation
//! confirmation, surfaces as a [`Notice`] in
//! [`Shell::notices`](crate::Shell::notices). The embedding view renders them however it
//! likes (toast, banner) and dismisses by id. No notice is ever fatal.

use uuid::Uuid;

/// Severity of a notice, determining its visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeSeverity {
    /// Neutral informational message.
    Info,
    /// A successful operation or positive outcome.
    Success,
    /// A non-critical issue the user should be aware of.
    Warning,
    /// An error or failure that may affect functionality.
    Error,
}

/// A notice payload intended for the user interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Unique id, used by the view to dismiss this notice.
    pub id: Uuid,
    /// Severity, determining visual style.
    pub severity: NoticeSeverity,
    /// Short heading.
    pub title: String,
    /// Supporting text.
    pub body: String,
}

impl Notice {
    /// Build a notice with the given severity.
    pub fn new(
        severity: NoticeSeverity,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            severity,
            title: title.into(),
            body: body.into(),
        }
    }

    /// A success notice.
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NoticeSeverity::Success, title, body)
    }

    /// An error notice.
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NoticeSeverity::Error, title, body)
    }
}
