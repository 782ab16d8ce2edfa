//! DOMイベントの接続
//!
//! リスナーはページの寿命と同じなので `forget` する。

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, KeyboardEvent};
use affiliate_reader_common::Msg;

use crate::dom::{self, DomHandles, AFFILIATE_BOX, AFFILIATE_CTA_BUTTON, STICKY_CTA_BUTTON};
use crate::runtime::dispatch;

fn listen<F>(target: &EventTarget, event_type: &'static str, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new(target, event_type, callback).forget();
}

/// `preventDefault` を呼ぶリスナー（passiveにしない）
fn listen_active<F>(target: &EventTarget, event_type: &'static str, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event_type,
        EventListenerOptions::enable_prevent_default(),
        callback,
    )
    .forget();
}

fn key_of(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key)
}

pub fn wire(handles: &DomHandles) {
    let document = gloo::utils::document();
    let window = gloo::utils::window();

    // メニュー開閉
    listen(&handles.menu_toggle, "click", |_| dispatch(Msg::MenuToggled));
    listen_active(&handles.menu_toggle, "keydown", |event| {
        if matches!(key_of(event).as_deref(), Some("Enter") | Some(" ")) {
            event.prevent_default();
            dispatch(Msg::MenuToggled);
        }
    });
    listen(&handles.sidebar_overlay, "click", |_| dispatch(Msg::OverlayClicked));
    listen(&document, "keydown", |event| {
        if key_of(event).as_deref() == Some("Escape") {
            dispatch(Msg::EscapePressed);
        }
    });

    // スティッキーCTA
    listen(&window, "scroll", |_| {
        if let Some(metrics) = dom::scroll_metrics() {
            dispatch(Msg::Scrolled(metrics));
        }
    });

    // 検索
    listen(&handles.search_input, "focus", |_| dispatch(Msg::SearchFocused));
    let input = handles.search_input.clone();
    listen(&handles.search_input, "input", move |_| {
        dispatch(Msg::SearchChanged(input.value()));
    });

    // アフィリエイトリンク
    for id in [AFFILIATE_BOX, STICKY_CTA_BUTTON] {
        if let Some(target) = dom::optional::<EventTarget>(id) {
            listen(&target, "click", |_| dispatch(Msg::AffiliateClicked));
        }
    }
    if let Some(button) = dom::optional::<EventTarget>(AFFILIATE_CTA_BUTTON) {
        // ボックス側のハンドラで二重に開かないように止める
        listen(&button, "click", |event| {
            event.stop_propagation();
            dispatch(Msg::AffiliateClicked);
        });
    }

    // ページ内アンカーのスムーススクロール
    listen_active(&document, "click", |event| {
        let Some(anchor) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if anchor.tag_name() != "A" {
            return;
        }
        if let Some(target_id) = anchor.get_attribute("href").as_deref().and_then(|h| h.strip_prefix('#')) {
            event.prevent_default();
            dom::scroll_into_view(target_id);
        }
    });
}
