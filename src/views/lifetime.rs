use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Whether the view that started a fetch is still on screen.
///
/// Clones share state, so a fetch can hold one while the view keeps another
/// and unmounts. A loader moves a clone into its worker and hands the result
/// back through [`ViewLifetime::deliver`]; after `unmount` the result is
/// dropped instead of applied.
#[derive(Clone, Debug)]
pub struct ViewLifetime {
    mounted: Arc<AtomicBool>,
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::mount()
    }
}

impl ViewLifetime {
    pub fn mount() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Hands `result` to `apply` only while mounted; otherwise drops it.
    pub fn deliver<T>(&self, result: T, apply: impl FnOnce(T)) -> bool {
        if self.is_mounted() {
            apply(result);
            true
        } else {
            tracing::debug!("view unmounted; discarding late result");
            false
        }
    }
}

#[cfg(test)]
#[path = "../tests/views/lifetime_tests.rs"]
mod tests;
