use std::sync::Mutex;

/// Performs full navigations that discard in-memory application state.
pub trait Navigator: Send + Sync {
    fn hard_redirect(&self, path: &str);
}

/// Logs the redirect and does nothing else.
#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn hard_redirect(&self, path: &str) {
        tracing::info!(path, "hard redirect");
    }
}

/// Remembers every redirect, in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn hard_redirect(&self, path: &str) {
        self.visited
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(path.to_string());
    }
}
