use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

struct ProgressInner {
    value: RwLock<f32>,
    // Bumped whenever a player claims the handle; stale players see a
    // mismatch and stand down.
    generation: AtomicU64,
}

/// The mutable scalar an animation plan drives.
///
/// A progress handle is bound to exactly one visual property by the style
/// mapping and starts at 1.0 by convention (the resting value for most
/// animation kinds). Clones share the same underlying value, so a handle can
/// be held by both the view layer and a [`super::Player`].
///
/// # Thread Safety
/// The value can be read and written from any thread. At most one player is
/// ever active per handle; the generation counter enforces that a newly
/// started player supersedes any earlier one.
#[derive(Clone)]
pub struct Progress {
    inner: Arc<ProgressInner>,
}

impl Progress {
    pub fn new(value: f32) -> Self {
        Self {
            inner: Arc::new(ProgressInner {
                value: RwLock::new(value),
                generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn get(&self) -> f32 {
        *self.inner.value.read().expect("progress lock poisoned")
    }

    pub fn set(&self, value: f32) {
        let Ok(mut guard) = self.inner.value.write() else {
            return; // Lock poisoned, skip update silently
        };
        *guard = value;
    }

    pub(crate) fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::Acquire)
    }

    /// Claim the handle for a new player, invalidating any previous claim.
    pub(crate) fn claim(&self) -> u64 {
        self.inner.generation.fetch_add(1, Ordering::AcqRel) + 1
    }
}

impl Default for Progress {
    /// Handles start at the common resting value of 1.0
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl std::fmt::Debug for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress").field("value", &self.get()).finish()
    }
}
