//! Affiliate Reader Common Library
//!
//! ブラウザ(WASM)とCLIで共有される型と状態遷移:
//! - 記事データ型とCTA用の射影
//! - URLルーティング、検索フィルタ、スティッキーCTA判定
//! - `update(state, msg) -> (state, effects)` 形式の純粋な状態遷移

pub mod types;
pub mod error;
pub mod config;
pub mod routing;
pub mod software;
pub mod search;
pub mod scroll;
pub mod state;
mod msg;
mod effect;
mod update;

pub use types::{ArticleDetail, ArticlePreview};
pub use error::{Error, Result};
pub use config::LoaderConfig;
pub use routing::{article_path, slug_from_path, HistoryMode};
pub use software::{CurrentSoftware, DisplayUpdate};
pub use scroll::{ScrollMetrics, StickyCtaRule};
pub use state::{AppState, DetailRequest, RequestId};
pub use msg::Msg;
pub use effect::Effect;
pub use update::update;
