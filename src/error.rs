use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ベースURLが設定されていません。`affiliate-reader config --set-base-url URL` で設定してください")]
    MissingBaseUrl,

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Core(#[from] affiliate_reader_common::Error),

    #[error("{0}")]
    ArticleUnavailable(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("ログ初期化エラー: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, ReaderError>;
