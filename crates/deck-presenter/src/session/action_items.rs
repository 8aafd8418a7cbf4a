//! Action item completion flags

use std::collections::BTreeSet;
use std::rc::Rc;

use crate::storage::SessionStore;

/// Stored value of a completed item
pub const COMPLETED: &str = "completed";

/// Checkbox completion state keyed by 0-based item index
///
/// The in-memory set is always updated first; the store only mirrors it.
pub struct ActionItems {
    store: Rc<dyn SessionStore>,
    key_prefix: String,
    completed: BTreeSet<usize>,
}

impl ActionItems {
    /// Create the tracker with no completed items
    pub fn new(store: Rc<dyn SessionStore>, key_prefix: impl Into<String>) -> Self {
        Self {
            store,
            key_prefix: key_prefix.into(),
            completed: BTreeSet::new(),
        }
    }

    /// Store key of an item
    pub fn key(&self, index: usize) -> String {
        format!("{}{}", self.key_prefix, index)
    }

    /// Load the persisted flags of items `0..count`
    ///
    /// Returns the indices that are completed afterwards. Items whose flag
    /// cannot be read keep their in-memory state.
    pub fn restore(&mut self, count: usize) -> Vec<usize> {
        for index in 0..count {
            match self.store.get(&self.key(index)) {
                Ok(Some(value)) if value == COMPLETED => {
                    self.completed.insert(index);
                }
                Ok(_) => {
                    self.completed.remove(&index);
                }
                Err(e) => {
                    log::debug!("[deck] action item {} not restored: {}", index, e);
                }
            }
        }
        self.completed.iter().copied().filter(|&i| i < count).collect()
    }

    /// Check if an item is completed
    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Completed indices in ascending order
    pub fn completed(&self) -> impl Iterator<Item = usize> + '_ {
        self.completed.iter().copied()
    }

    /// Flip an item and persist it; returns the new state
    pub fn toggle(&mut self, index: usize) -> bool {
        let key = self.key(index);

        let now_completed = if self.completed.remove(&index) {
            false
        } else {
            self.completed.insert(index);
            true
        };

        let result = if now_completed {
            self.store.set(&key, COMPLETED)
        } else {
            self.store.remove(&key)
        };
        if let Err(e) = result {
            log::warn!("[deck] action item {} kept in memory only: {}", index, e);
        }

        now_completed
    }
}
