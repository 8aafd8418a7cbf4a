//! Slide view history
//!
//! Bounded log of slide views. The whole log is persisted as a JSON array
//! after every append; the in-memory copy stays authoritative when the
//! store fails.

use std::collections::VecDeque;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::storage::{SessionStore, StoreError};

/// One slide view
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewEvent {
    /// 1-based slide viewed
    pub slide: usize,
    /// ISO-8601 UTC timestamp
    pub timestamp: String,
    /// Title of the viewed slide
    #[serde(rename = "slideTitle")]
    pub title: String,
    /// Session the view belongs to
    pub session_id: String,
}

/// Ring buffer of view events, oldest evicted first
pub struct ViewHistory {
    store: Rc<dyn SessionStore>,
    key: String,
    capacity: usize,
    events: VecDeque<ViewEvent>,
}

impl ViewHistory {
    /// Open the history, loading events already stored this session
    pub fn open(store: Rc<dyn SessionStore>, key: impl Into<String>, capacity: usize) -> Self {
        let key = key.into();
        let capacity = capacity.max(1);

        let mut events = match load(store.as_ref(), &key) {
            Ok(events) => events,
            Err(e) => {
                log::warn!("[deck] view history not restored: {}", e);
                VecDeque::new()
            }
        };
        while events.len() > capacity {
            events.pop_front();
        }

        Self {
            store,
            key,
            capacity,
            events,
        }
    }

    /// Append an event, evicting the oldest beyond capacity
    pub fn record(&mut self, event: ViewEvent) {
        log::info!(
            "[deck] slide {} viewed: {} ({})",
            event.slide,
            event.title,
            event.timestamp
        );

        self.events.push_back(event);
        while self.events.len() > self.capacity {
            self.events.pop_front();
        }

        if let Err(e) = self.persist() {
            log::warn!("[deck] storage not available, tracking views in memory only: {}", e);
        }
    }

    /// Number of events held
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no views were recorded
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Maximum number of events held
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Events, oldest first
    pub fn events(&self) -> impl Iterator<Item = &ViewEvent> {
        self.events.iter()
    }

    /// Copy of the events, oldest first
    pub fn to_vec(&self) -> Vec<ViewEvent> {
        self.events.iter().cloned().collect()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.events)
            .map_err(|e| StoreError::corrupt(self.key.as_str(), e))?;
        self.store.set(&self.key, &json)
    }
}

fn load(store: &dyn SessionStore, key: &str) -> Result<VecDeque<ViewEvent>, StoreError> {
    match store.get(key)? {
        Some(json) => serde_json::from_str(&json).map_err(|e| StoreError::corrupt(key, e)),
        None => Ok(VecDeque::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::testing::FailingStore;

    fn event(slide: usize) -> ViewEvent {
        ViewEvent {
            slide,
            timestamp: "2025-01-05T10:00:00.000Z".to_string(),
            title: format!("Slide {}", slide),
            session_id: "session_1_abc".to_string(),
        }
    }

    #[test]
    fn test_record_persists() {
        let store = Rc::new(MemoryStore::new());
        let mut history = ViewHistory::open(store.clone(), "views", 50);

        history.record(event(1));
        history.record(event(2));

        let stored: Vec<ViewEvent> =
            serde_json::from_str(&store.get("views").unwrap().unwrap()).unwrap();
        assert_eq!(stored, history.to_vec());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_oldest_evicted_first() {
        let store = Rc::new(MemoryStore::new());
        let mut history = ViewHistory::open(store, "views", 50);

        for slide in 1..=55 {
            history.record(event(slide));
        }

        assert_eq!(history.len(), 50);
        assert_eq!(history.events().next().map(|e| e.slide), Some(6));
        assert_eq!(history.events().last().map(|e| e.slide), Some(55));
    }

    #[test]
    fn test_open_restores_session_history() {
        let store = Rc::new(MemoryStore::new());
        {
            let mut history = ViewHistory::open(store.clone(), "views", 50);
            history.record(event(3));
        }

        let history = ViewHistory::open(store, "views", 50);
        assert_eq!(history.to_vec(), vec![event(3)]);
    }

    #[test]
    fn test_open_trims_to_capacity() {
        let store = Rc::new(MemoryStore::new());
        let events: Vec<ViewEvent> = (1..=5).map(event).collect();
        store.set("views", &serde_json::to_string(&events).unwrap()).unwrap();

        let history = ViewHistory::open(store, "views", 3);
        assert_eq!(history.events().map(|e| e.slide).collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_corrupt_history_starts_empty() {
        let store = Rc::new(MemoryStore::new());
        store.set("views", "not json").unwrap();

        let history = ViewHistory::open(store, "views", 50);
        assert!(history.is_empty());
    }

    #[test]
    fn test_failing_store_keeps_memory() {
        let mut history = ViewHistory::open(Rc::new(FailingStore), "views", 50);
        history.record(event(1));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_view_event_json_shape() {
        let json = serde_json::to_value(event(4)).unwrap();
        assert_eq!(json["slide"], 4);
        assert_eq!(json["slideTitle"], "Slide 4");
        assert_eq!(json["sessionId"], "session_1_abc");
        assert_eq!(json["timestamp"], "2025-01-05T10:00:00.000Z");
    }
}
