//! Annotation store client
//!
//! The viewer never talks to the remote store directly; it is handed an
//! `AnnotationStore` capability so a test double can stand in for the HTTP
//! client. The store is the single source of truth across sessions and
//! devices; the viewer's in-memory set is a working copy.

use async_trait::async_trait;
use thiserror::Error;

use crate::annotations::{Annotation, AnnotationDraft};

/// Client-side store failure taxonomy
#[derive(Debug, Error)]
pub enum StoreError {
    /// No authenticated user at write time. Raised before any network call.
    #[error("No authenticated user")]
    Unauthenticated,

    /// Network-level failure reaching the store
    #[error("Store transport error: {0}")]
    Transport(String),

    /// The targeted record does not exist (including repeated deletes)
    #[error("Annotation not found: {0}")]
    NotFound(String),

    /// The store refused the operation
    #[error("Store rejected operation: {0}")]
    Rejected(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

/// Identity/session boundary: who is annotating right now, if anyone.
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<String>;
}

/// Scoped CRUD against the remote annotation store.
#[async_trait]
pub trait AnnotationStore: Send + Sync {
    /// Fetch all annotations for one page. An empty page is an empty list,
    /// not an error.
    async fn list(&self, pdf_id: &str, page_number: i64) -> Result<Vec<Annotation>, StoreError>;

    /// Persist a draft and return the stored record with its assigned id.
    async fn create(
        &self,
        user_id: &str,
        draft: &AnnotationDraft,
    ) -> Result<Annotation, StoreError>;

    /// Remove an annotation by id. Deleting an id the store no longer holds
    /// is a failure, not a no-op.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// HTTP implementation speaking the Marginalia REST surface.
pub struct HttpAnnotationStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnnotationStore {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/annotations{}", self.base_url, path)
    }

    async fn error_for(response: reqwest::Response) -> StoreError {
        let status = response.status();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| status.to_string());

        match status {
            reqwest::StatusCode::NOT_FOUND => StoreError::NotFound(message),
            reqwest::StatusCode::UNAUTHORIZED => StoreError::Unauthenticated,
            _ => StoreError::Rejected(message),
        }
    }
}

#[async_trait]
impl AnnotationStore for HttpAnnotationStore {
    async fn list(&self, pdf_id: &str, page_number: i64) -> Result<Vec<Annotation>, StoreError> {
        let response = self
            .client
            .get(self.url(&format!("/document/{}/page/{}", pdf_id, page_number)))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::error_for(response).await)
        }
    }

    async fn create(
        &self,
        user_id: &str,
        draft: &AnnotationDraft,
    ) -> Result<Annotation, StoreError> {
        let response = self
            .client
            .post(self.url(""))
            .header("X-User-Id", user_id)
            .json(draft)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::error_for(response).await)
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.url(&format!("/{}", id)))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_for(response).await)
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory store double for controller tests

    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    /// Fixed-identity session provider
    pub struct StaticSession(pub Option<String>);

    impl SessionProvider for StaticSession {
        fn current_user(&self) -> Option<String> {
            self.0.clone()
        }
    }

    /// In-memory `AnnotationStore` with call counters and switchable
    /// failure injection.
    #[derive(Default)]
    pub struct MemoryStore {
        records: Mutex<Vec<Annotation>>,
        pub list_calls: AtomicUsize,
        pub create_calls: AtomicUsize,
        pub delete_calls: AtomicUsize,
        pub fail_lists: AtomicBool,
        pub fail_creates: AtomicBool,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn record_count(&self) -> usize {
            self.records.lock().unwrap().len()
        }

        pub fn records_for(&self, pdf_id: &str, page_number: i64) -> Vec<Annotation> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.pdf_id == pdf_id && a.page_number == page_number)
                .cloned()
                .collect()
        }
    }

    #[async_trait]
    impl AnnotationStore for MemoryStore {
        async fn list(
            &self,
            pdf_id: &str,
            page_number: i64,
        ) -> Result<Vec<Annotation>, StoreError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_lists.load(Ordering::SeqCst) {
                return Err(StoreError::Transport("injected list failure".to_string()));
            }
            Ok(self.records_for(pdf_id, page_number))
        }

        async fn create(
            &self,
            user_id: &str,
            draft: &AnnotationDraft,
        ) -> Result<Annotation, StoreError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_creates.load(Ordering::SeqCst) {
                return Err(StoreError::Transport("injected create failure".to_string()));
            }
            if !draft.position.has_positive_area() {
                return Err(StoreError::Rejected("degenerate region".to_string()));
            }

            let annotation = Annotation {
                id: Uuid::new_v4().to_string(),
                user_id: user_id.to_string(),
                pdf_id: draft.pdf_id.clone(),
                page_number: draft.page_number,
                kind: draft.kind,
                color: draft.color.clone(),
                text_content: draft.label(),
                position: draft.position,
                created_at: Utc::now(),
            };
            self.records.lock().unwrap().push(annotation.clone());
            Ok(annotation)
        }

        async fn delete(&self, id: &str) -> Result<(), StoreError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|a| a.id != id);
            if records.len() == before {
                Err(StoreError::NotFound(id.to_string()))
            } else {
                Ok(())
            }
        }
    }
}
