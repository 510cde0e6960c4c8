// File: crates/pulse-history/src/gate.rs
// Summary: Single-flight guard around the in-flight history request.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Refuses a second acquisition while a request is outstanding, so a
/// trigger cannot race itself. The permit releases on drop; completion and
/// failure paths both re-enable the trigger without separate bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct LoadGate {
    busy: Arc<AtomicBool>,
}

/// Held for the lifetime of one request.
#[derive(Debug)]
pub struct LoadPermit {
    busy: Arc<AtomicBool>,
}

impl LoadGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request is currently outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Acquire the single permit, or None while one is outstanding.
    pub fn try_acquire(&self) -> Option<LoadPermit> {
        if self.busy.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(LoadPermit { busy: Arc::clone(&self.busy) })
    }
}

impl Drop for LoadPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
