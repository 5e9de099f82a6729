use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::ActionStore;
use crate::error::{GreenlogError, Result};
use crate::model::Action;

/// In-memory storage backend for testing.
///
/// Command tests run against this to avoid filesystem I/O. The collection
/// sits behind a `Mutex` so the store stays shareable with the async server
/// tests.
#[derive(Default)]
pub struct InMemoryStore {
    actions: Mutex<Vec<Action>>,
    fail_writes: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing collection.
    pub fn with_actions(actions: Vec<Action>) -> Self {
        Self {
            actions: Mutex::new(actions),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make subsequent saves fail, for error-path tests.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl ActionStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Action>> {
        let actions = self
            .actions
            .lock()
            .map_err(|_| GreenlogError::Store("store mutex poisoned".to_string()))?;
        Ok(actions.clone())
    }

    fn save(&self, new_actions: &[Action]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(GreenlogError::Store("simulated write error".to_string()));
        }
        let mut actions = self
            .actions
            .lock()
            .map_err(|_| GreenlogError::Store("store mutex poisoned".to_string()))?;
        *actions = new_actions.to_vec();
        Ok(())
    }
}
