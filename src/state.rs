//! Shared application state handed to every request handler.
//!
//! The inference engine is read-only after startup and needs no locking;
//! the SQLite connection is the single shared mutable resource and sits
//! behind a `Mutex`, held only for the duration of one insert or one query.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::inference::InferenceEngine;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("database lock poisoned")]
    LockPoisoned,
}

#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
    engine: Arc<InferenceEngine>,
}

impl AppState {
    pub fn new(conn: Connection, engine: InferenceEngine) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            engine: Arc::new(engine),
        }
    }

    pub fn lock_db(&self) -> Result<MutexGuard<'_, Connection>, StateError> {
        self.db.lock().map_err(|_| StateError::LockPoisoned)
    }

    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }
}
