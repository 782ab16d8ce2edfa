//! 状態遷移
//!
//! メッセージを状態に適用し、プラットフォームに実行させる副作用を返す。
//! 古いリクエストIDの応答はここで捨てる。

use log::{debug, error};

use crate::routing::{article_path, HistoryMode};
use crate::search::normalize_query;
use crate::software::{CurrentSoftware, DisplayUpdate};
use crate::state::{AppState, DetailRequest, ListSource};
use crate::types::{ArticleDetail, ArticlePreview};
use crate::{Effect, Msg, Result};

/// 純粋な状態遷移: メッセージを状態に適用し、実行すべき副作用を返す
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started { path } => {
            if state.start(path) {
                state.set_loading(true);
                vec![
                    Effect::ShowLoading,
                    Effect::FetchPreview {
                        url: state.config().preview_url(),
                    },
                ]
            } else {
                Vec::new()
            }
        }
        Msg::PreviewLoaded(result) => on_preview_loaded(&mut state, result),
        Msg::SearchFocused => {
            if state.claim_full_list() {
                vec![Effect::FetchFull {
                    url: state.config().articles_url(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::FullLoaded(Ok(articles)) => {
            state.replace_articles(articles.clone(), ListSource::Full);
            vec![Effect::RenderSidebar { articles }]
        }
        Msg::FullLoaded(Err(e)) => {
            error!("Error loading all articles: {}", e);
            Vec::new()
        }
        Msg::SearchChanged(query) => {
            vec![Effect::FilterSidebar { query: normalize_query(&query) }]
        }
        Msg::EntryClicked { slug } => {
            state.set_loading(true);
            state.set_sidebar_open(false);
            state.set_active_slug(Some(slug.clone()));
            let mut effects = vec![Effect::ShowLoading];
            effects.push(fetch_detail(&mut state, &slug));
            effects.extend([
                Effect::UpdateHistory {
                    path: article_path(&slug),
                    mode: HistoryMode::Push,
                },
                Effect::SetSidebarOpen(false),
                Effect::HighlightActive { slug: Some(slug) },
            ]);
            effects
        }
        Msg::DetailLoaded { request, result } => on_detail_loaded(&mut state, request, result),
        Msg::MenuToggled => {
            let open = !state.is_sidebar_open();
            state.set_sidebar_open(open);
            vec![Effect::SetSidebarOpen(open)]
        }
        Msg::OverlayClicked | Msg::EscapePressed => {
            state.set_sidebar_open(false);
            vec![Effect::SetSidebarOpen(false)]
        }
        Msg::Scrolled(metrics) => {
            let visible = state.sticky_rule().is_visible(&metrics);
            if state.set_sticky_visible(visible) {
                vec![Effect::SetStickyVisible(visible)]
            } else {
                Vec::new()
            }
        }
        Msg::AffiliateClicked => state
            .current_software()
            .and_then(|software| software.affiliate_url.clone())
            .map(|url| vec![Effect::OpenAffiliate { url }])
            .unwrap_or_default(),
    };

    (state, effects)
}

fn on_preview_loaded(state: &mut AppState, result: Result<Vec<ArticlePreview>>) -> Vec<Effect> {
    let articles = match result {
        Ok(articles) => articles,
        Err(e) => {
            error!("Error loading preview articles: {}", e);
            state.set_loading(false);
            return vec![Effect::HideLoading];
        }
    };

    let mut effects = Vec::new();
    if state.replace_articles(articles.clone(), ListSource::Preview) {
        effects.push(Effect::RenderSidebar { articles });
    }
    if state.claim_default_resolution() {
        effects.extend(resolve_default_article(state));
    }
    effects
}

/// 初期表示する記事を決める（ページ読み込みにつき1回）
///
/// 1. URLパスにスラッグがあればそれを直接読み込む（リストに無くてもよい）
/// 2. なければリスト先頭を読み込み、URLを履歴を積まずに書き換える
/// 3. どちらも無ければローディング表示を消すだけ
fn resolve_default_article(state: &mut AppState) -> Vec<Effect> {
    if let Some(slug) = state.initial_slug().map(str::to_string) {
        return vec![fetch_detail(state, &slug)];
    }

    match state.articles().first().map(|a| a.title_slug.clone()) {
        Some(slug) => vec![
            fetch_detail(state, &slug),
            Effect::UpdateHistory {
                path: article_path(&slug),
                mode: HistoryMode::Replace,
            },
        ],
        None => {
            state.set_loading(false);
            vec![Effect::HideLoading]
        }
    }
}

fn fetch_detail(state: &mut AppState, slug: &str) -> Effect {
    let request = state.begin_detail_request(slug);
    Effect::FetchDetail {
        url: state.config().article_url(slug),
        request,
    }
}

fn on_detail_loaded(
    state: &mut AppState,
    request: DetailRequest,
    result: Result<ArticleDetail>,
) -> Vec<Effect> {
    if !state.is_latest(&request) {
        debug!(
            "Discarding stale article response for '{}' (request {}, latest {})",
            request.slug,
            request.id,
            state.last_request_id()
        );
        return Vec::new();
    }

    match result {
        Ok(article) => {
            let software = CurrentSoftware::from_article(&article, state.config());
            let display = DisplayUpdate::new(&request.slug, &article, software.clone(), state.config());
            state.set_current(article, software);
            state.set_active_slug(Some(request.slug.clone()));
            state.set_loading(false);
            vec![
                Effect::Display(display),
                Effect::ScrollToTop,
                Effect::HighlightActive {
                    slug: Some(request.slug),
                },
                Effect::HideLoading,
            ]
        }
        Err(e) => {
            error!("Error loading article by slug '{}': {}", request.slug, e);
            state.set_loading(false);
            vec![
                Effect::Alert {
                    message: state.config().not_found_message.clone(),
                },
                Effect::HideLoading,
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn started(path: &str) -> AppState {
        let (state, _) = update(AppState::default(), Msg::Started { path: path.into() });
        state
    }

    #[test]
    fn test_started_requests_preview() {
        let (state, effects) = update(AppState::default(), Msg::Started { path: "/".into() });
        assert!(state.is_loading());
        assert_eq!(
            effects,
            vec![
                Effect::ShowLoading,
                Effect::FetchPreview {
                    url: "/api/articles/preview".into()
                },
            ]
        );
    }

    #[test]
    fn test_started_twice_is_noop() {
        let state = started("/");
        let (_, effects) = update(state, Msg::Started { path: "/other".into() });
        assert!(effects.is_empty());
    }

    #[test]
    fn test_preview_failure_hides_loading() {
        let state = started("/");
        let (state, effects) = update(state, Msg::PreviewLoaded(Err(Error::Network("offline".into()))));
        assert_eq!(effects, vec![Effect::HideLoading]);
        assert!(!state.is_loading());
        assert!(state.articles().is_empty());
    }

    #[test]
    fn test_empty_preview_and_root_path() {
        let state = started("/");
        let (state, effects) = update(state, Msg::PreviewLoaded(Ok(vec![])));
        assert_eq!(
            effects,
            vec![Effect::RenderSidebar { articles: vec![] }, Effect::HideLoading]
        );
        assert!(!state.is_loading());
    }

    #[test]
    fn test_full_load_failure_keeps_list() {
        let state = started("/");
        let previews = vec![ArticlePreview::new("A", "", "a")];
        let (state, _) = update(state, Msg::PreviewLoaded(Ok(previews.clone())));
        let (state, _) = update(state, Msg::SearchFocused);
        let (state, effects) = update(state, Msg::FullLoaded(Err(Error::Status(500))));

        assert!(effects.is_empty());
        assert_eq!(state.articles(), previews.as_slice());
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let (state, effects) = update(AppState::default(), Msg::MenuToggled);
        assert_eq!(effects, vec![Effect::SetSidebarOpen(true)]);
        let (state, effects) = update(state, Msg::MenuToggled);
        assert_eq!(effects, vec![Effect::SetSidebarOpen(false)]);
        let (state, _) = update(state, Msg::MenuToggled);
        let (state, effects) = update(state, Msg::EscapePressed);
        assert_eq!(effects, vec![Effect::SetSidebarOpen(false)]);
        assert!(!state.is_sidebar_open());
    }

    #[test]
    fn test_affiliate_click_without_article() {
        let (_, effects) = update(AppState::default(), Msg::AffiliateClicked);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_search_changed_normalizes() {
        let (state, effects) = update(AppState::default(), Msg::SearchChanged("  VPN ".into()));
        assert_eq!(effects, vec![Effect::FilterSidebar { query: "vpn".into() }]);
        // 検索は表示だけの問題で、記事や読み込み状態には触れない
        assert!(state.articles().is_empty());
        assert!(!state.is_loading());
    }
}
