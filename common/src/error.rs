//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// fetch自体の失敗（接続不可、CORS等）
    #[error("Network error: {0}")]
    Network(String),

    /// 2xx以外のレスポンス
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing element: #{0}")]
    MissingElement(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
