//! 状態遷移が要求する副作用

use crate::routing::HistoryMode;
use crate::software::DisplayUpdate;
use crate::state::DetailRequest;
use crate::types::ArticlePreview;

/// プラットフォーム側（DOM / 端末）が実行する副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowLoading,
    HideLoading,
    FetchPreview { url: String },
    FetchFull { url: String },
    FetchDetail { request: DetailRequest, url: String },
    /// サイドバーを作り直す
    RenderSidebar { articles: Vec<ArticlePreview> },
    UpdateHistory { path: String, mode: HistoryMode },
    Display(DisplayUpdate),
    ScrollToTop,
    HighlightActive { slug: Option<String> },
    Alert { message: String },
    SetSidebarOpen(bool),
    /// 正規化済みクエリでサイドバーを絞り込む
    FilterSidebar { query: String },
    SetStickyVisible(bool),
    OpenAffiliate { url: String },
}
