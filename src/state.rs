/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - 現状ハンドラは静的レスポンスのみなので中身は空
 * - Clone 前提で持つ
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
