//! Terminal resize notification flag.
//!
//! The flag is written by whoever observes the window size change (the
//! input reader when crossterm reports a resize) and read-and-cleared only
//! by the main loop, once per iteration, through
//! [`Display::check_resize`](crate::ui::Display::check_resize).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "terminal size changed" flag.
#[derive(Debug, Clone, Default)]
pub struct ResizeFlag(Arc<AtomicBool>);

impl ResizeFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the terminal as resized.
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Clears the flag, returning whether it was set.
    #[must_use]
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}
