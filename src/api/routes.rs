/*
 * Responsibility
 * - URL 構造を定義 (/, /health, /info)
 * - 未定義パスは fallback で 404 を返す
 */
use axum::{Router, routing::get};

use crate::api::handlers::{fallback::not_found, health::health, hello::hello, info::info};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .route("/info", get(info))
        .fallback(not_found)
}
