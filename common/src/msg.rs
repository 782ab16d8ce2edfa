//! 状態遷移への入力メッセージ（ユーザー操作と非同期応答）

use crate::error::Result;
use crate::scroll::ScrollMetrics;
use crate::state::DetailRequest;
use crate::types::{ArticleDetail, ArticlePreview};

/// 状態遷移への入力
#[derive(Debug)]
pub enum Msg {
    /// ページ準備完了（現在のURLパス付き）
    Started { path: String },
    /// プレビューリストの取得完了
    PreviewLoaded(Result<Vec<ArticlePreview>>),
    /// 検索欄にフォーカス
    SearchFocused,
    /// 全件リストの取得完了
    FullLoaded(Result<Vec<ArticlePreview>>),
    /// 検索欄の入力（キーストロークごと）
    SearchChanged(String),
    /// サイドバーのエントリをクリック
    EntryClicked { slug: String },
    /// 記事詳細の取得完了
    DetailLoaded {
        request: DetailRequest,
        result: Result<ArticleDetail>,
    },
    /// メニューボタン（クリック / Enter / Space）
    MenuToggled,
    OverlayClicked,
    EscapePressed,
    Scrolled(ScrollMetrics),
    /// アフィリエイトボックス/CTAボタンのクリック
    AffiliateClicked,
}
