use axum::http::Uri;

use crate::error::AppError;

/// Any path without a route ends up here.
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "no route matched");
    AppError::not_found(uri.path())
}
