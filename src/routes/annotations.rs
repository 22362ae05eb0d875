//! Annotation API routes
//!
//! REST surface of the annotation store. Records are immutable once created,
//! so there is no update route; the lifecycle is create, list, delete.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};

use crate::annotations::{Annotation, AnnotationDraft};
use crate::db::AnnotationRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create the annotations router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_annotation))
        .route("/:id", get(get_annotation))
        .route("/:id", delete(delete_annotation))
        .route("/document/:pdf_id/page/:page", get(list_page_annotations))
        .route("/document/:pdf_id/count", get(count_annotations))
}

/// Identity boundary: requests that write to the store carry the
/// authenticated user's id in this header. Reads do not require it.
const USER_HEADER: &str = "x-user-id";

fn current_user(headers: &HeaderMap) -> Result<String> {
    headers
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Unauthorized("Missing X-User-Id header".to_string()))
}

fn validate_draft(draft: &AnnotationDraft) -> Result<()> {
    if draft.pdf_id.is_empty() {
        return Err(AppError::Validation("pdf_id must not be empty".to_string()));
    }
    if draft.page_number < 1 {
        return Err(AppError::Validation(
            "page_number must be a positive 1-indexed page".to_string(),
        ));
    }
    if !draft.position.has_positive_area() {
        return Err(AppError::Validation(
            "position must have positive width and height".to_string(),
        ));
    }
    if draft.color.is_empty() {
        return Err(AppError::Validation("color must not be empty".to_string()));
    }
    Ok(())
}

/// List annotations for one page of a document
async fn list_page_annotations(
    State(state): State<AppState>,
    Path((pdf_id, page)): Path<(String, i64)>,
) -> Result<Json<Vec<Annotation>>> {
    let repo = AnnotationRepository::new(state.db());
    let annotations = repo.list_for_page(&pdf_id, page).await?;
    Ok(Json(annotations))
}

/// Count annotations for a document
async fn count_annotations(
    State(state): State<AppState>,
    Path(pdf_id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let repo = AnnotationRepository::new(state.db());
    let count = repo.count_for_document(&pdf_id).await?;
    Ok(Json(serde_json::json!({ "count": count })))
}

/// Create a new annotation
async fn create_annotation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<AnnotationDraft>,
) -> Result<(StatusCode, Json<Annotation>)> {
    let user_id = current_user(&headers)?;
    validate_draft(&draft)?;

    let repo = AnnotationRepository::new(state.db());
    let annotation = repo.create(&user_id, &draft).await?;
    tracing::debug!(
        id = %annotation.id,
        pdf_id = %annotation.pdf_id,
        page = annotation.page_number,
        "annotation created"
    );
    Ok((StatusCode::CREATED, Json(annotation)))
}

/// Get a specific annotation
async fn get_annotation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Annotation>> {
    let repo = AnnotationRepository::new(state.db());
    let annotation = repo
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Annotation not found: {}", id)))?;
    Ok(Json(annotation))
}

/// Delete an annotation. Deletion is not restricted to the creating owner;
/// user_id is attribution only.
async fn delete_annotation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let repo = AnnotationRepository::new(state.db());
    let deleted = repo.delete(&id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Annotation not found: {}", id)))
    }
}
