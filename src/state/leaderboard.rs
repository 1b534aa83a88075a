// Local high-score table persisted as one JSON array under a single key.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::GameError;
use crate::model::LeaderboardEntry;
use crate::util::clog;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError>;
}

/// In-process store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct Leaderboard {
    store: Box<dyn KeyValueStore>,
    key: String,
    clock: fn() -> String,
}

impl Leaderboard {
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>, clock: fn() -> String) -> Self {
        Self {
            store,
            key: key.into(),
            clock,
        }
    }

    /// Every stored entry, best first. Unreadable data counts as an empty table.
    pub fn entries(&self) -> Vec<LeaderboardEntry> {
        let Some(raw) = self.store.get(&self.key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                let err = GameError::StorageCorrupt {
                    key: self.key.clone(),
                    detail: e.to_string(),
                };
                clog(&err.to_string());
                Vec::new()
            }
        }
    }

    pub fn top_n(&self, n: usize) -> Vec<LeaderboardEntry> {
        let mut all = self.entries();
        all.truncate(n);
        all
    }

    /// Append a score and persist the re-sorted table. Empty names are rejected.
    pub fn record(&mut self, name: &str, score: u32) -> Result<LeaderboardEntry, GameError> {
        if name.is_empty() {
            return Err(GameError::InvalidInput {
                reason: "player name is empty",
            });
        }
        let entry = LeaderboardEntry {
            name: name.to_string(),
            score,
            date: (self.clock)(),
        };
        let mut all = self.entries();
        all.push(entry.clone());
        all.sort_by(|a, b| b.score.cmp(&a.score));
        let raw = serde_json::to_string(&all).map_err(|e| GameError::ResourceUnavailable {
            resource: "leaderboard encoder",
            detail: e.to_string(),
        })?;
        self.store.set(&self.key, &raw)?;
        Ok(entry)
    }
}
