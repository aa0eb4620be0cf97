//! The global search shortcut.
//!
//! The shortcut must work regardless of which widget holds focus, so the
//! embedding view registers a single process-wide key subscription at
//! mount (and tears it down on unmount) and forwards every chord to
//! [`Shell::handle_global_key`](crate::Shell::handle_global_key). This
//! module only decides whether a chord *is* the shortcut; listening is
//! the host's job.

/// A key chord as delivered by the embedding view's input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    /// The character key, as typed.
    pub key: char,
    /// Control held.
    pub ctrl: bool,
    /// Command/Super held.
    pub meta: bool,
    /// Alt/Option held.
    pub alt: bool,
}

impl KeyCombo {
    /// A bare character with no modifiers.
    pub fn plain(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            alt: false,
        }
    }

    /// A Control chord.
    pub fn ctrl(key: char) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }

    /// A Command/Super chord.
    pub fn meta(key: char) -> Self {
        Self {
            meta: true,
            ..Self::plain(key)
        }
    }

    /// Whether this chord toggles the search panel: `k` with the primary
    /// modifier (Command on macOS, Control elsewhere), Alt not held.
    pub fn is_search_shortcut(&self) -> bool {
        self.key.eq_ignore_ascii_case(&'k') && (self.ctrl || self.meta) && !self.alt
    }
}
