/*
 * Responsibility
 * - GET /health (疎通用、liveness probe 向け)
 * - JSON ではなくプレーンテキスト "UP" を返す
 */
pub const STATUS_UP: &str = "UP";

pub async fn health() -> &'static str {
    STATUS_UP
}
