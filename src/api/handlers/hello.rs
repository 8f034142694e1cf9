/*
 * Responsibility
 * - GET / (固定メッセージ)
 */
pub const GREETING: &str = "Hello World depuis Spring Boot ! (port 8080) - Deploye sur EKS";

pub async fn hello() -> &'static str {
    GREETING
}
