//! Navigation capability
//!
//! Session helpers send the user back to the entry page through a
//! [`Navigator`] instead of touching a browser location directly.

use std::sync::Mutex;

use tracing::info;

pub trait Navigator: Send + Sync {
    fn redirect(&self, location: &str);
}

/// Remembers every redirect; useful for tests and headless embedding
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.history().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, location: &str) {
        if let Ok(mut history) = self.history.lock() {
            history.push(location.to_string());
        }
    }
}

/// Reports redirects through the log; used by the command line client
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn redirect(&self, location: &str) {
        info!(location = location, "Redirecting to entry page");
    }
}
