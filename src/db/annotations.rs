//! Annotation database operations

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::annotations::{Annotation, AnnotationDraft, AnnotationKind, Region};
use crate::error::{AppError, Result};

/// Flat row as stored in SQLite
#[derive(Debug, sqlx::FromRow)]
struct AnnotationRow {
    id: String,
    user_id: String,
    pdf_id: String,
    page_number: i64,
    #[sqlx(rename = "type")]
    kind: String,
    color: String,
    text_content: String,
    position_x: f64,
    position_y: f64,
    position_width: f64,
    position_height: f64,
    created_at: String,
}

impl AnnotationRow {
    fn into_annotation(self) -> Result<Annotation> {
        let kind = AnnotationKind::parse(&self.kind).ok_or_else(|| {
            AppError::Internal(format!("Unknown annotation type in store: {}", self.kind))
        })?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| AppError::Internal(format!("Bad created_at in store: {}", e)))?;

        Ok(Annotation {
            id: self.id,
            user_id: self.user_id,
            pdf_id: self.pdf_id,
            page_number: self.page_number,
            kind,
            color: self.color,
            text_content: self.text_content,
            position: Region::new(
                self.position_x,
                self.position_y,
                self.position_width,
                self.position_height,
            ),
            created_at,
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, pdf_id, page_number, type, color, text_content,
           position_x, position_y, position_width, position_height, created_at
    FROM annotations
"#;

/// Annotation repository
pub struct AnnotationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AnnotationRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a specific annotation
    pub async fn get(&self, id: &str) -> Result<Option<Annotation>> {
        let row = sqlx::query_as::<_, AnnotationRow>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        row.map(AnnotationRow::into_annotation).transpose()
    }

    /// List annotations for one page of one document. An empty page yields
    /// an empty list, not an error. No ordering is guaranteed among the
    /// annotations of a page; created_at is used only to keep results stable.
    pub async fn list_for_page(&self, pdf_id: &str, page_number: i64) -> Result<Vec<Annotation>> {
        let rows = sqlx::query_as::<_, AnnotationRow>(&format!(
            "{} WHERE pdf_id = ? AND page_number = ? ORDER BY created_at ASC",
            SELECT_COLUMNS
        ))
        .bind(pdf_id)
        .bind(page_number)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(AnnotationRow::into_annotation).collect()
    }

    /// Persist a new annotation and return the stored record.
    pub async fn create(&self, user_id: &str, draft: &AnnotationDraft) -> Result<Annotation> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let label = draft.label();

        sqlx::query(
            r#"
            INSERT INTO annotations (id, user_id, pdf_id, page_number, type, color, text_content,
                                     position_x, position_y, position_width, position_height, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(user_id)
        .bind(&draft.pdf_id)
        .bind(draft.page_number)
        .bind(draft.kind.as_str())
        .bind(&draft.color)
        .bind(&label)
        .bind(draft.position.x)
        .bind(draft.position.y)
        .bind(draft.position.width)
        .bind(draft.position.height)
        .bind(&now)
        .execute(self.pool)
        .await?;

        self.get(&id).await?.ok_or_else(|| {
            AppError::Internal("Failed to fetch created annotation".to_string())
        })
    }

    /// Delete an annotation. Returns false when no row matched; deleting an
    /// already-removed id is a failure at the API layer, not a no-op.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM annotations WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count annotations for a document across all pages
    pub async fn count_for_document(&self, pdf_id: &str) -> Result<i64> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM annotations WHERE pdf_id = ?")
            .bind(pdf_id)
            .fetch_one(self.pool)
            .await?;

        Ok(result.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::initialize_schema(&pool).await.unwrap();
        pool
    }

    fn draft(pdf_id: &str, page: i64) -> AnnotationDraft {
        AnnotationDraft::new(
            pdf_id,
            page,
            AnnotationKind::Highlight,
            "#FFFF00",
            Region::new(50.0, 50.0, 100.0, 40.0),
        )
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let pool = test_pool().await;
        let repo = AnnotationRepository::new(&pool);

        let created = repo.create("user-1", &draft("pdf-1", 2)).await.unwrap();
        assert_eq!(created.user_id, "user-1");
        assert_eq!(created.kind, AnnotationKind::Highlight);
        assert_eq!(created.text_content, "highlight annotation");

        let listed = repo.list_for_page("pdf-1", 2).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].position, Region::new(50.0, 50.0, 100.0, 40.0));
        assert_eq!(listed[0].color, "#FFFF00");
    }

    #[tokio::test]
    async fn test_list_scoped_by_document_and_page() {
        let pool = test_pool().await;
        let repo = AnnotationRepository::new(&pool);

        repo.create("u", &draft("pdf-1", 1)).await.unwrap();
        repo.create("u", &draft("pdf-1", 2)).await.unwrap();
        repo.create("u", &draft("pdf-2", 1)).await.unwrap();

        assert_eq!(repo.list_for_page("pdf-1", 1).await.unwrap().len(), 1);
        assert_eq!(repo.list_for_page("pdf-1", 2).await.unwrap().len(), 1);
        assert_eq!(repo.list_for_page("pdf-1", 3).await.unwrap().len(), 0);
        assert_eq!(repo.count_for_document("pdf-1").await.unwrap(), 2);
        assert_eq!(repo.count_for_document("pdf-2").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let pool = test_pool().await;
        let repo = AnnotationRepository::new(&pool);

        let a = repo.create("u", &draft("pdf-1", 1)).await.unwrap();
        let b = repo.create("u", &draft("pdf-1", 1)).await.unwrap();

        assert!(repo.delete(&a.id).await.unwrap());
        let remaining = repo.list_for_page("pdf-1", 1).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b.id);

        // Repeated delete reports no match
        assert!(!repo.delete(&a.id).await.unwrap());
        assert_eq!(repo.list_for_page("pdf-1", 1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_underline_draft_persists_kind_and_label() {
        let pool = test_pool().await;
        let repo = AnnotationRepository::new(&pool);

        let d = AnnotationDraft::new(
            "pdf-1",
            1,
            AnnotationKind::Underline,
            "#0000FF",
            Region::new(10.0, 10.0, 80.0, 12.0),
        );
        let created = repo.create("u", &d).await.unwrap();
        assert_eq!(created.kind, AnnotationKind::Underline);
        assert_eq!(created.text_content, "underline annotation");

        let fetched = repo.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.kind, AnnotationKind::Underline);
    }
}
