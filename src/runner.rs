//! 端末用の実行ループ
//!
//! `update` が返した副作用をキューで順に実行する。fetchは1件ずつ待ち、
//! 完了メッセージの副作用はキューの末尾に積まれる。DOMの代わりに `Screen` に書き込む。

use std::collections::VecDeque;
use std::time::Duration;

use affiliate_reader_common::search::entry_matches;
use affiliate_reader_common::{
    update, AppState, ArticlePreview, DisplayUpdate, Effect, HistoryMode, LoaderConfig, Msg,
};
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::ArticleSource;

/// 端末上の「DOM」
#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub entries: Vec<ArticlePreview>,
    pub active: Option<String>,
    /// 正規化済みの検索文字列
    pub filter: String,
    pub display: Option<DisplayUpdate>,
    pub location: String,
    /// pushされた履歴（replaceは含まない）
    pub history: Vec<String>,
    pub alerts: Vec<String>,
    pub loading: bool,
    pub sidebar_open: bool,
    pub sticky_visible: bool,
    pub opened: Vec<String>,
}

impl Screen {
    pub fn visible_entries(&self) -> impl Iterator<Item = &ArticlePreview> {
        self.entries
            .iter()
            .filter(|a| entry_matches(&self.filter, &a.title, &a.excerpt))
    }

    pub fn is_active(&self, article: &ArticlePreview) -> bool {
        self.active.as_deref() == Some(article.title_slug.as_str())
    }
}

pub struct Runner<S> {
    source: S,
    state: Option<AppState>,
    queue: VecDeque<Effect>,
    screen: Screen,
    show_spinner: bool,
    spinner: Option<ProgressBar>,
}

impl<S: ArticleSource> Runner<S> {
    pub fn new(source: S, config: LoaderConfig) -> Self {
        Self {
            source,
            state: Some(AppState::new(config)),
            queue: VecDeque::new(),
            screen: Screen::default(),
            show_spinner: false,
            spinner: None,
        }
    }

    /// 読み込み中にスピナーを表示する
    pub fn with_spinner(mut self) -> Self {
        self.show_spinner = true;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn state(&self) -> Option<&AppState> {
        self.state.as_ref()
    }

    /// 起動（プレビュー取得と初期記事の表示まで）
    pub async fn start(&mut self, path: &str) {
        self.screen.location = path.to_string();
        self.send(Msg::Started {
            path: path.to_string(),
        })
        .await;
    }

    /// メッセージを適用し、キューが空になるまで副作用を実行する
    pub async fn send(&mut self, msg: Msg) {
        self.apply(msg);
        while let Some(effect) = self.queue.pop_front() {
            if let Some(next) = self.run_effect(effect).await {
                self.apply(next);
            }
        }
    }

    fn apply(&mut self, msg: Msg) {
        let state = self.state.take().unwrap_or_default();
        let (state, effects) = update(state, msg);
        self.state = Some(state);
        self.queue.extend(effects);
    }

    async fn run_effect(&mut self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::ShowLoading => self.set_loading(true),
            Effect::HideLoading => self.set_loading(false),
            Effect::FetchPreview { url } => {
                log::debug!("GET {}", url);
                return Some(Msg::PreviewLoaded(self.source.fetch_preview(&url).await));
            }
            Effect::FetchFull { url } => {
                log::debug!("GET {}", url);
                return Some(Msg::FullLoaded(self.source.fetch_all(&url).await));
            }
            Effect::FetchDetail { request, url } => {
                log::debug!("GET {} (request {})", url, request.id);
                let result = self.source.fetch_article(&url).await;
                return Some(Msg::DetailLoaded { request, result });
            }
            Effect::RenderSidebar { articles } => self.screen.entries = articles,
            Effect::UpdateHistory { path, mode } => {
                if mode == HistoryMode::Push {
                    self.screen.history.push(path.clone());
                }
                self.screen.location = path;
            }
            Effect::Display(display) => self.screen.display = Some(display),
            Effect::ScrollToTop => {}
            Effect::HighlightActive { slug } => self.screen.active = slug,
            Effect::Alert { message } => self.screen.alerts.push(message),
            Effect::SetSidebarOpen(open) => self.screen.sidebar_open = open,
            Effect::FilterSidebar { query } => self.screen.filter = query,
            Effect::SetStickyVisible(visible) => self.screen.sticky_visible = visible,
            Effect::OpenAffiliate { url } => self.screen.opened.push(url),
        }
        None
    }

    fn set_loading(&mut self, loading: bool) {
        self.screen.loading = loading;
        if !self.show_spinner {
            return;
        }
        if loading {
            if self.spinner.is_none() {
                let spinner = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                    spinner.set_style(style);
                }
                spinner.set_message("Loading...");
                spinner.enable_steady_tick(Duration::from_millis(100));
                self.spinner = Some(spinner);
            }
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}
