//! Shared application state for the HTTP server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::classify::Label;
use crate::history::{History, HistoryEntry};

use super::error::ApiError;

/// Shared state accessible by all handlers via axum's State extractor.
///
/// The server owns exactly one session history for its lifetime.
#[derive(Debug, Default)]
pub struct AppState {
    history: Mutex<History>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedState {
        Arc::new(Self::new())
    }

    fn lock(&self) -> Result<MutexGuard<'_, History>, ApiError> {
        self.history
            .lock()
            .map_err(|_| ApiError::Internal("history lock poisoned".to_owned()))
    }

    /// Prepend an entry to the session history.
    pub fn record(&self, text: &str, label: Label) -> Result<(), ApiError> {
        self.lock()?.record(text, label);
        Ok(())
    }

    /// Up to `limit` entries, newest first.
    pub fn history(&self, limit: Option<usize>) -> Result<Vec<HistoryEntry>, ApiError> {
        Ok(self.lock()?.snapshot(limit))
    }

    pub fn history_len(&self) -> Result<usize, ApiError> {
        Ok(self.lock()?.len())
    }
}
