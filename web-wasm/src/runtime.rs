//! アプリケーション状態の所有と副作用の実行
//!
//! 状態はメインスレッド上の単一ランタイムが保持する。イベントハンドラとfetch完了は
//! すべて `dispatch` を経由し、`update` の返した副作用をここで実行する。

use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use affiliate_reader_common::{update, AppState, Effect, LoaderConfig, Msg, Result};

use crate::api::articles;
use crate::components::sidebar::{ArticleList, SidebarSignals};
use crate::dom::{self, DomHandles};
use crate::events;

struct Runtime {
    state: Option<AppState>,
    dom: DomHandles,
    sidebar: SidebarSignals,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

/// 必須要素を確認し、サイドバーを組み込んでイベントを接続する
pub fn start(config: LoaderConfig) -> Result<()> {
    let handles = DomHandles::resolve()?;
    let sidebar = SidebarSignals::new();

    handles.article_list.set_inner_html("");
    leptos::mount::mount_to(handles.article_list.clone(), move || {
        view! { <ArticleList signals=sidebar /> }
    })
    .forget();

    events::wire(&handles);

    RUNTIME.with(|cell| {
        *cell.borrow_mut() = Some(Runtime {
            state: Some(AppState::new(config)),
            dom: handles,
            sidebar,
        });
    });

    dispatch(Msg::Started {
        path: dom::current_path(),
    });
    Ok(())
}

pub fn dispatch(msg: Msg) {
    let effects = RUNTIME.with(|cell| {
        let mut guard = cell.borrow_mut();
        let Some(runtime) = guard.as_mut() else {
            log::warn!("dispatch before start: {:?}", msg);
            return Vec::new();
        };
        let state = runtime.state.take().unwrap_or_default();
        let (state, effects) = update(state, msg);
        runtime.state = Some(state);
        effects
    });

    if effects.is_empty() {
        return;
    }

    // 借用を解放してから実行する（シグナル更新やアラート中に別イベントが来てもよいように）
    let Some((handles, sidebar)) =
        RUNTIME.with(|cell| cell.borrow().as_ref().map(|r| (r.dom.clone(), r.sidebar)))
    else {
        return;
    };

    for effect in effects {
        run_effect(effect, &handles, sidebar);
    }
}

fn run_effect(effect: Effect, handles: &DomHandles, sidebar: SidebarSignals) {
    match effect {
        Effect::ShowLoading => dom::set_loading_visible(true),
        Effect::HideLoading => dom::set_loading_visible(false),
        Effect::FetchPreview { url } => spawn_local(async move {
            let result = articles::fetch_preview(&url).await;
            dispatch(Msg::PreviewLoaded(result));
        }),
        Effect::FetchFull { url } => spawn_local(async move {
            let result = articles::fetch_all(&url).await;
            dispatch(Msg::FullLoaded(result));
        }),
        Effect::FetchDetail { request, url } => spawn_local(async move {
            let result = articles::fetch_article(&url).await;
            dispatch(Msg::DetailLoaded { request, result });
        }),
        Effect::RenderSidebar { articles } => sidebar.articles.set(articles),
        Effect::UpdateHistory { path, mode } => dom::update_history(&path, mode),
        Effect::Display(display) => dom::apply_display(&display),
        Effect::ScrollToTop => dom::scroll_to_top(),
        Effect::HighlightActive { slug } => sidebar.active.set(slug),
        Effect::Alert { message } => gloo::dialogs::alert(&message),
        Effect::SetSidebarOpen(open) => handles.set_sidebar_open(open),
        Effect::FilterSidebar { query } => sidebar.query.set(query),
        Effect::SetStickyVisible(visible) => dom::set_sticky_visible(visible),
        Effect::OpenAffiliate { url } => dom::open_in_new_tab(&url),
    }
}
