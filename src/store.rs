// src/store.rs

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::interview::MockInterview;
use crate::models::progress::UserProgress;
use crate::models::question::Question;

/// Process-wide key-value registry.
///
/// Backs the question, session and progress registries with a shared
/// `RwLock`-guarded map: record mutation goes through [`MemoryStore::update`],
/// which holds the write lock for the whole read-modify-write, so two
/// concurrent writers to the same record cannot lose updates. The narrow
/// insert/get/update surface is what a database-backed replacement would
/// implement; handler call sites never touch the map directly.
///
/// Nothing is ever evicted or persisted; entries live until the process
/// exits.
#[derive(Debug)]
pub struct MemoryStore<T> {
    inner: Arc<RwLock<HashMap<String, T>>>,
}

// Derived Clone would require T: Clone; cloning only copies the handle.
impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers a record under `id`, replacing any existing one.
    pub async fn insert(&self, id: impl Into<String>, value: T) {
        self.inner.write().await.insert(id.into(), value);
    }

    /// Applies `apply` to the record under `id` while holding the write
    /// lock. Returns `None` when the id is unknown.
    pub async fn update<F, R>(&self, id: &str, apply: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.write().await.get_mut(id).map(apply)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

impl<T: Clone> MemoryStore<T> {
    /// Clones out the record under `id`, if any.
    pub async fn get(&self, id: &str) -> Option<T> {
        self.inner.read().await.get(id).cloned()
    }
}

/// Registry of every question ever generated, keyed by question id.
pub type QuestionStore = MemoryStore<Question>;

/// Registry of mock-interview sessions, keyed by interview id.
pub type InterviewStore = MemoryStore<MockInterview>;

/// Registry of per-user aggregate statistics, keyed by user id.
pub type ProgressStore = MemoryStore<UserProgress>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_clones_out_inserted_records() {
        let store: MemoryStore<String> = MemoryStore::new();
        store.insert("a", "alpha".to_string()).await;

        assert_eq!(store.get("a").await.as_deref(), Some("alpha"));
        assert_eq!(store.get("missing").await, None);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn insert_replaces_existing_record() {
        let store: MemoryStore<u32> = MemoryStore::new();
        store.insert("k", 1).await;
        store.insert("k", 2).await;

        assert_eq!(store.get("k").await, Some(2));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn update_mutates_in_place_and_reports_unknown_ids() {
        let store: MemoryStore<Vec<u32>> = MemoryStore::new();
        store.insert("k", vec![1]).await;

        let len = store
            .update("k", |v| {
                v.push(2);
                v.len()
            })
            .await;
        assert_eq!(len, Some(2));
        assert_eq!(store.get("k").await, Some(vec![1, 2]));

        let missing = store.update("missing", |_| ()).await;
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn concurrent_updates_are_not_lost() {
        let store: MemoryStore<u64> = MemoryStore::new();
        store.insert("counter", 0).await;

        let mut tasks = Vec::new();
        for _ in 0..32 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.update("counter", |n| *n += 1).await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.get("counter").await, Some(32));
    }
}
