//! Liveness flag for async work spawned by a component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Simulated submissions resolve after a timer. A component releases its
//! guard from `on_cleanup`, and pending completions check it before touching
//! signals that belong to the unmounted view.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "still mounted" flag. Clones observe the same state.
#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Mark the owner as gone. Idempotent.
    pub fn release(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Create a guard that is released when the current reactive owner is
    /// cleaned up.
    pub fn for_current_owner() -> Self {
        let guard = Self::new();
        let on_drop = guard.clone();
        leptos::prelude::on_cleanup(move || on_drop.release());
        guard
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
