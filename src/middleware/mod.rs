/*
 * Responsibility
 * - middleware の公開インターフェース
 * - 適用順はここで固定する (app.rs からは apply() を呼ぶだけ)
 */
use axum::Router;

pub mod http;
pub mod security_headers;

/// Wrap the router with every cross-cutting layer.
///
/// Security headers sit inside the HTTP layers so they are also set on
/// responses produced by the fallback handler.
pub fn apply(router: Router) -> Router {
    http::apply(security_headers::apply(router))
}
