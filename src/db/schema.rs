//! Database schema initialization

use sqlx::SqlitePool;

use crate::error::Result;

/// Initialize the database schema
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(SCHEMA_SQL).execute(pool).await?;

    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Annotations table
--
-- One row per persisted mark. Regions are page-local pixel coordinates
-- (origin top-left); width and height are always positive.
CREATE TABLE IF NOT EXISTS annotations (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    pdf_id TEXT NOT NULL,
    -- 1-indexed page within the document
    page_number INTEGER NOT NULL,
    -- 'highlight' or 'underline'
    type TEXT NOT NULL,
    color TEXT NOT NULL,
    text_content TEXT NOT NULL,
    position_x REAL NOT NULL,
    position_y REAL NOT NULL,
    position_width REAL NOT NULL,
    position_height REAL NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_annotations_pdf_page ON annotations(pdf_id, page_number);
CREATE INDEX IF NOT EXISTS idx_annotations_user_id ON annotations(user_id);
"#;
