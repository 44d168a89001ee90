//! Messages shown to the player
//!
//! Error notices are transient and expire after [`NOTICE_TTL`]; end-of-game
//! notices stay until the next game starts.

use std::time::{Duration, Instant};

/// How long a transient notice stays visible
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message line for the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    raised_at: Instant,
}

impl Notice {
    #[must_use]
    pub fn new(text: impl Into<String>, kind: NoticeKind) -> Self {
        Self::raised_at(text, kind, Instant::now())
    }

    #[must_use]
    pub fn raised_at(text: impl Into<String>, kind: NoticeKind, at: Instant) -> Self {
        Self {
            text: text.into(),
            kind,
            raised_at: at,
        }
    }

    /// Error notices auto-dismiss; success notices persist
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        !matches!(self.kind, NoticeKind::Success)
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.is_transient() && now.saturating_duration_since(self.raised_at) >= NOTICE_TTL
    }
}
