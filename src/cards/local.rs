//! Per-card local fallback state.

use std::cell::Cell;

/// Ephemeral like-toggle owned by a single rendered card instance.
///
/// Used only when no `on_like` callback is supplied: the toggle flips a local
/// display flag instead of notifying a collaborator. The state is never
/// shared between instances, never persisted, and ignored when comparing
/// render output for idempotence.
#[derive(Debug, Default)]
pub struct LikeToggle {
    /// Current local liked flag.
    liked: Cell<bool>,
}

impl LikeToggle {
    /// Fresh toggle in the un-liked state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            liked: Cell::new(false),
        }
    }

    /// Current local liked flag.
    #[must_use]
    pub fn is_liked(&self) -> bool {
        self.liked.get()
    }

    /// Flip the local liked flag.
    pub fn toggle(&self) {
        self.liked.set(!self.liked.get());
    }
}
