// 🗄️ Receipt Store - identifier → points
// In-memory only: entries live until the process exits. No update, no delete.

use crate::error::{ReceiptError, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    /// Shared across handler tasks; clones point at the same map
    points: Arc<RwLock<HashMap<String, u64>>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        ReceiptStore {
            points: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a points total under a fresh identifier and return the identifier
    pub fn create(&self, points: u64) -> String {
        // Inserts never leave the map half-written, so a poisoned lock is still usable
        let mut map = self.points.write().unwrap_or_else(PoisonError::into_inner);

        loop {
            match map.entry(Uuid::new_v4().to_string()) {
                Entry::Vacant(slot) => {
                    let id = slot.key().clone();
                    slot.insert(points);
                    return id;
                }
                Entry::Occupied(taken) => {
                    debug!(id = %taken.key(), "Identifier collision, drawing again");
                }
            }
        }
    }

    /// Points stored under `id`
    pub fn lookup(&self, id: &str) -> Result<u64> {
        let map = self.points.read().unwrap_or_else(PoisonError::into_inner);
        map.get(id)
            .copied()
            .ok_or_else(|| ReceiptError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.points
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// TESTS
// ============================================================================
