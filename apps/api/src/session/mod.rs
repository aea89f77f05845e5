//! In-memory session store.
//!
//! All `ResumeData` lives in caller-owned session state scoped to one
//! interactive session — nothing is persisted. The store serializes access;
//! the rendering core itself never touches shared state, so concurrent
//! sessions can never interact through it.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeData;

/// One user's editing session: the résumé value plus bookkeeping.
#[derive(Debug, Clone)]
pub struct Session {
    pub data: ResumeData,
    pub created_at: DateTime<Utc>,
}

/// Cheap-to-clone handle over the shared session map.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session and returns its id.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let session = Session {
            data: ResumeData::default(),
            created_at: Utc::now(),
        };
        self.inner.write().await.insert(id, session);
        id
    }

    /// Returns a snapshot of the session.
    pub async fn get(&self, id: Uuid) -> Result<Session, AppError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No session with id {id}")))
    }

    /// Runs a mutation against the session's résumé under the write lock and
    /// returns whatever the closure produces.
    pub async fn with_data<T>(
        &self,
        id: Uuid,
        mutate: impl FnOnce(&mut ResumeData) -> T,
    ) -> Result<T, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("No session with id {id}")))?;
        Ok(mutate(&mut session.data))
    }

    /// Drops the session entirely.
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("No session with id {id}")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_starts_empty() {
        let store = SessionStore::new();
        let id = store.create().await;
        let session = store.get(id).await.unwrap();
        assert!(session.data.name.is_none());
        assert!(session.data.work_experience.is_empty());
    }

    #[tokio::test]
    async fn test_with_data_mutates_in_place() {
        let store = SessionStore::new();
        let id = store.create().await;
        store
            .with_data(id, |data| data.name = Some("Ana".to_string()))
            .await
            .unwrap();
        let session = store.get(id).await.unwrap();
        assert_eq!(session.data.name.as_deref(), Some("Ana"));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = SessionStore::new();
        let err = store.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = SessionStore::new();
        let a = store.create().await;
        let b = store.create().await;
        store
            .with_data(a, |data| data.name = Some("A".to_string()))
            .await
            .unwrap();
        let other = store.get(b).await.unwrap();
        assert!(other.data.name.is_none(), "sessions must not share state");
    }

    #[tokio::test]
    async fn test_remove_drops_session() {
        let store = SessionStore::new();
        let id = store.create().await;
        store.remove(id).await.unwrap();
        assert!(store.get(id).await.is_err());
    }
}
