/*
 * Responsibility
 * - GET /info (ビルド情報の固定文字列)
 */
pub const BUILD_INFO: &str = "Spring Boot 3.2.0 - AT2 Exam";

pub async fn info() -> &'static str {
    BUILD_INFO
}
