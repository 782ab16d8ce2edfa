//! アプリケーション状態
//!
//! 起動時に生成され、ページの再読み込みまで破棄されない。変更は `update` 経由のみ。

use crate::config::LoaderConfig;
use crate::routing::slug_from_path;
use crate::scroll::StickyCtaRule;
use crate::software::CurrentSoftware;
use crate::types::{ArticleDetail, ArticlePreview};

/// 記事詳細リクエストの世代番号（単調増加）
pub type RequestId = u64;

/// 発行済みの記事詳細リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub id: RequestId,
    pub slug: String,
}

/// 現在の記事リストの取得元
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListSource {
    #[default]
    Empty,
    Preview,
    Full,
}

#[derive(Debug, Clone)]
pub struct AppState {
    config: LoaderConfig,
    sticky_rule: StickyCtaRule,
    started: bool,
    initial_path: String,
    articles: Vec<ArticlePreview>,
    list_source: ListSource,
    full_list_requested: bool,
    default_resolved: bool,
    current_article: Option<ArticleDetail>,
    current_software: Option<CurrentSoftware>,
    active_slug: Option<String>,
    last_request_id: RequestId,
    loading: bool,
    sidebar_open: bool,
    sticky_visible: bool,
}

impl AppState {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            sticky_rule: StickyCtaRule::from_config(&config),
            config,
            started: false,
            initial_path: String::new(),
            articles: Vec::new(),
            list_source: ListSource::Empty,
            full_list_requested: false,
            default_resolved: false,
            current_article: None,
            current_software: None,
            active_slug: None,
            last_request_id: 0,
            loading: false,
            sidebar_open: false,
            sticky_visible: false,
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn sticky_rule(&self) -> &StickyCtaRule {
        &self.sticky_rule
    }

    pub fn articles(&self) -> &[ArticlePreview] {
        &self.articles
    }

    pub fn current_article(&self) -> Option<&ArticleDetail> {
        self.current_article.as_ref()
    }

    pub fn current_software(&self) -> Option<&CurrentSoftware> {
        self.current_software.as_ref()
    }

    /// サイドバーで強調表示中のスラッグ
    pub fn active_slug(&self) -> Option<&str> {
        self.active_slug.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn is_sticky_visible(&self) -> bool {
        self.sticky_visible
    }

    pub fn full_list_requested(&self) -> bool {
        self.full_list_requested
    }

    pub fn last_request_id(&self) -> RequestId {
        self.last_request_id
    }

    /// 起動時のパスから得たスラッグ
    pub fn initial_slug(&self) -> Option<&str> {
        slug_from_path(&self.initial_path)
    }

    pub(crate) fn start(&mut self, path: String) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.initial_path = path;
        true
    }

    /// リストを丸ごと置き換える。全件リスト取得後に届いたプレビューは無視する。
    pub(crate) fn replace_articles(&mut self, articles: Vec<ArticlePreview>, source: ListSource) -> bool {
        if source == ListSource::Preview && self.list_source == ListSource::Full {
            return false;
        }
        self.articles = articles;
        self.list_source = source;
        true
    }

    /// 全件取得を1セッション1回に制限する
    pub(crate) fn claim_full_list(&mut self) -> bool {
        if self.full_list_requested {
            return false;
        }
        self.full_list_requested = true;
        true
    }

    pub(crate) fn claim_default_resolution(&mut self) -> bool {
        if self.default_resolved {
            return false;
        }
        self.default_resolved = true;
        true
    }

    pub(crate) fn begin_detail_request(&mut self, slug: &str) -> DetailRequest {
        self.last_request_id += 1;
        DetailRequest {
            id: self.last_request_id,
            slug: slug.to_string(),
        }
    }

    /// 最新の（まだ上書きされていない）リクエストか
    pub fn is_latest(&self, request: &DetailRequest) -> bool {
        request.id == self.last_request_id
    }

    pub(crate) fn set_current(&mut self, article: ArticleDetail, software: CurrentSoftware) {
        self.current_article = Some(article);
        self.current_software = Some(software);
    }

    pub(crate) fn set_active_slug(&mut self, slug: Option<String>) {
        self.active_slug = slug;
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    /// 変化があった場合のみtrue
    pub(crate) fn set_sticky_visible(&mut self, visible: bool) -> bool {
        let changed = self.sticky_visible != visible;
        self.sticky_visible = visible;
        changed
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}
