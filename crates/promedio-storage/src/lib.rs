use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedAverage {
    pub id: String,
    pub mean: f64,
    pub timestamp_ms: u64,
}

pub trait AverageStore: Send {
    fn save(&mut self, mean: f64) -> String;
    fn list(&self, limit: usize) -> Vec<SavedAverage>;
    fn stats(&self) -> serde_json::Value;
}

#[derive(Debug)]
pub struct InMemoryAverageStore {
    entries: Vec<SavedAverage>,
    next_id: u64,
}

impl InMemoryAverageStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn save(&mut self, mean: f64) -> String {
        let entry = SavedAverage {
            id: format!("avg-{}", self.next_id),
            mean,
            timestamp_ms: now_ms(),
        };
        self.next_id += 1;
        let message = format!("average {:.2} saved as {}", mean, entry.id);
        self.entries.push(entry);
        message
    }

    pub fn list(&self, limit: usize) -> Vec<SavedAverage> {
        let n = limit.max(1);
        self.entries.iter().rev().take(n).cloned().collect()
    }

    pub fn stats(&self) -> serde_json::Value {
        serde_json::json!({
            "count": self.entries.len(),
            "last_mean": self.entries.last().map(|e| e.mean),
        })
    }
}

impl Default for InMemoryAverageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AverageStore for InMemoryAverageStore {
    fn save(&mut self, mean: f64) -> String {
        Self::save(self, mean)
    }

    fn list(&self, limit: usize) -> Vec<SavedAverage> {
        Self::list(self, limit)
    }

    fn stats(&self) -> serde_json::Value {
        Self::stats(self)
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
