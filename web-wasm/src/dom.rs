//! DOM要素の参照と書き込み
//!
//! 必須要素は起動時に `DomHandles::resolve` で一括取得し、欠けていれば起動しない。
//! 表示先やCTAボタンは任意要素で、存在しなければ何もしない。

use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlElement, HtmlImageElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions,
};
use affiliate_reader_common::{DisplayUpdate, Error, HistoryMode, Result, ScrollMetrics};

pub const LOADING_OVERLAY: &str = "loadingOverlay";
pub const MENU_TOGGLE: &str = "menuToggle";
pub const SIDEBAR_OVERLAY: &str = "sidebarOverlay";
pub const SIDEBAR: &str = "sidebar";
pub const ARTICLE_LIST: &str = "articleList";
pub const SEARCH_INPUT: &str = "searchInput";
pub const SOFTWARE_LOGO: &str = "softwareLogo";
pub const BOTTOM_SOFTWARE_LOGO: &str = "bottomSoftwareLogo";
pub const AFFILIATE_LOGO: &str = "affiliateLogo";
pub const BOTTOM_SOFTWARE_NAME: &str = "bottomSoftwareName";
pub const AFFILIATE_NAME: &str = "affiliateName";
pub const ARTICLE_CONTENT: &str = "articleContent";
pub const CTA_TEXT: &str = "ctaText";
pub const AFFILIATE_BENEFITS: &str = "affiliateBenefits";
pub const STICKY_CTA: &str = "stickyCta";
pub const STICKY_CTA_BUTTON: &str = "stickyCtatButton";
pub const AFFILIATE_BOX: &str = "affiliateBox";
pub const AFFILIATE_CTA_BUTTON: &str = "affiliateCtaButton";
pub const ARTICLE_SELECTOR: &str = ".article";

/// 任意要素の取得（無ければNone）
pub fn optional<T: JsCast>(id: &str) -> Option<T> {
    gloo::utils::document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// 必須要素の取得
pub fn required<T: JsCast>(id: &str) -> Result<T> {
    optional(id).ok_or_else(|| Error::MissingElement(id.to_string()))
}

/// 起動に必須の要素
#[derive(Clone)]
pub struct DomHandles {
    pub menu_toggle: HtmlElement,
    pub sidebar_overlay: HtmlElement,
    pub sidebar: HtmlElement,
    pub article_list: HtmlElement,
    pub search_input: web_sys::HtmlInputElement,
}

impl DomHandles {
    pub fn resolve() -> Result<Self> {
        Ok(Self {
            menu_toggle: required(MENU_TOGGLE)?,
            sidebar_overlay: required(SIDEBAR_OVERLAY)?,
            sidebar: required(SIDEBAR)?,
            article_list: required(ARTICLE_LIST)?,
            search_input: required(SEARCH_INPUT)?,
        })
    }

    pub fn set_sidebar_open(&self, open: bool) {
        set_class(&self.sidebar, "open", open);
        set_class(&self.sidebar_overlay, "active", open);
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

pub fn set_loading_visible(visible: bool) {
    if let Some(overlay) = optional::<HtmlElement>(LOADING_OVERLAY) {
        let display = if visible { "flex" } else { "none" };
        let _ = overlay.style().set_property("display", display);
    }
}

pub fn set_sticky_visible(visible: bool) {
    if let Some(sticky) = optional::<Element>(STICKY_CTA) {
        set_class(&sticky, "visible", visible);
    }
}

fn set_image(id: &str, src: &str) {
    if let Some(img) = optional::<HtmlImageElement>(id) {
        img.set_src(src);
    }
}

fn set_text(id: &str, text: &str) {
    if let Some(el) = optional::<Element>(id) {
        el.set_text_content(Some(text));
    }
}

fn set_html(id: &str, html: &str) {
    if let Some(el) = optional::<Element>(id) {
        el.set_inner_html(html);
    }
}

/// 記事の表示領域を更新する（存在しない要素は無視）
pub fn apply_display(update: &DisplayUpdate) {
    let software = &update.software;
    for id in [SOFTWARE_LOGO, BOTTOM_SOFTWARE_LOGO, AFFILIATE_LOGO] {
        set_image(id, &software.logo);
    }
    for id in [BOTTOM_SOFTWARE_NAME, AFFILIATE_NAME] {
        set_text(id, &software.name);
    }
    set_html(ARTICLE_CONTENT, &update.content_html);
    set_text(CTA_TEXT, &update.cta_label);
    set_text(AFFILIATE_BENEFITS, &software.benefits);
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    gloo::utils::window().scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_into_view(id: &str) {
    if let Some(target) = optional::<Element>(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn current_path() -> String {
    gloo::utils::window()
        .location()
        .pathname()
        .unwrap_or_default()
}

pub fn update_history(path: &str, mode: HistoryMode) {
    let Ok(history) = gloo::utils::window().history() else {
        return;
    };
    let state = JsValue::from(js_sys::Object::new());
    let result = match mode {
        HistoryMode::Push => history.push_state_with_url(&state, "", Some(path)),
        HistoryMode::Replace => history.replace_state_with_url(&state, "", Some(path)),
    };
    if let Err(e) = result {
        log::warn!("history update failed for {}: {:?}", path, e);
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Err(e) = gloo::utils::window().open_with_url_and_target(url, "_blank") {
        log::warn!("failed to open {}: {:?}", url, e);
    }
}

/// `.article` 要素がある場合のみスクロール計測値を返す
pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = gloo::utils::window();
    let document = gloo::utils::document();
    let article: HtmlElement = document
        .query_selector(ARTICLE_SELECTOR)
        .ok()
        .flatten()?
        .dyn_into()
        .ok()?;
    let document_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();

    Some(ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or_default(),
        window_height: window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or_default(),
        document_height,
        article_top: article.offset_top() as f64,
        article_height: article.offset_height() as f64,
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use affiliate_reader_common::{CurrentSoftware, DisplayUpdate};

    wasm_bindgen_test_configure!(run_in_browser);

    fn append(html: &str) {
        let body = gloo::utils::body();
        let holder = gloo::utils::document().create_element("div").unwrap();
        holder.set_inner_html(html);
        body.append_child(&holder).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_optional_missing_element() {
        assert!(optional::<Element>("noSuchElement").is_none());
        assert!(matches!(
            required::<Element>("noSuchElement"),
            Err(Error::MissingElement(_))
        ));
    }

    #[wasm_bindgen_test]
    fn test_apply_display_tolerates_missing_targets() {
        append(r#"<img id="softwareLogo"><span id="ctaText"></span>"#);
        let update = DisplayUpdate {
            slug: "acme".into(),
            title: "Acme".into(),
            software: CurrentSoftware {
                name: "Acme".into(),
                logo: "acme.png".into(),
                affiliate_url: None,
                benefits: "Fast".into(),
            },
            content_html: "<p>x</p>".into(),
            cta_label: "Try Acme".into(),
        };

        apply_display(&update);

        let logo: HtmlImageElement = required(SOFTWARE_LOGO).unwrap();
        assert!(logo.src().ends_with("acme.png"));
        let cta: Element = required(CTA_TEXT).unwrap();
        assert_eq!(cta.text_content().as_deref(), Some("Try Acme"));
    }

    #[wasm_bindgen_test]
    fn test_loading_overlay_toggle() {
        append(r#"<div id="loadingOverlay"></div>"#);
        set_loading_visible(true);
        let overlay: HtmlElement = required(LOADING_OVERLAY).unwrap();
        assert_eq!(overlay.style().get_property_value("display").unwrap(), "flex");
        set_loading_visible(false);
        assert_eq!(overlay.style().get_property_value("display").unwrap(), "none");
    }
}
