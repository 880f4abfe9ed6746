use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// In-memory map whose entries expire `ttl` after insertion.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: Mutex<HashMap<K, (Instant, V)>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn is_live(&self, inserted_at: Instant) -> bool {
        inserted_at.elapsed() < self.ttl
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.lock().await;

        match entries.get(key) {
            Some((inserted_at, value)) if self.is_live(*inserted_at) => {
                return Some(value.clone())
            }
            Some(_) => {}
            None => return None,
        }

        // expired
        entries.remove(key);
        None
    }

    /// Stores `value` and drops every expired entry, so the map never holds
    /// more than the entries inserted within the last `ttl`.
    pub async fn insert(&self, key: K, value: V) -> usize {
        let mut entries = self.entries.lock().await;
        entries.retain(|_, (inserted_at, _)| inserted_at.elapsed() < self.ttl);
        entries.insert(key, (Instant::now(), value));

        entries.len()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}
