//! サイドバーの記事リストコンポーネント

use leptos::prelude::*;
use web_sys::MouseEvent;
use affiliate_reader_common::{search, ArticlePreview, Msg};

use crate::runtime;

/// サイドバーの描画状態
///
/// `query` は正規化済み（小文字・前後空白なし）の検索文字列。
#[derive(Clone, Copy)]
pub struct SidebarSignals {
    pub articles: RwSignal<Vec<ArticlePreview>>,
    pub active: RwSignal<Option<String>>,
    pub query: RwSignal<String>,
}

impl SidebarSignals {
    pub fn new() -> Self {
        Self {
            articles: RwSignal::new(Vec::new()),
            active: RwSignal::new(None),
            query: RwSignal::new(String::new()),
        }
    }
}

#[component]
pub fn ArticleList(signals: SidebarSignals) -> impl IntoView {
    view! {
        <For
            each=move || signals.articles.get().into_iter().enumerate()
            key=|(index, article)| (*index, article.title_slug.clone())
            children=move |(_, article)| {
                view! { <ArticleItem article=article signals=signals /> }
            }
        />
    }
}

#[component]
fn ArticleItem(article: ArticlePreview, signals: SidebarSignals) -> impl IntoView {
    let is_active = {
        let slug = article.title_slug.clone();
        move || signals.active.get().as_deref() == Some(slug.as_str())
    };

    let is_visible = {
        let title = article.title.clone();
        let excerpt = article.excerpt.clone();
        move || search::entry_matches(&signals.query.get(), &title, &excerpt)
    };

    let on_click = {
        let slug = article.title_slug.clone();
        move |_: MouseEvent| runtime::dispatch(Msg::EntryClicked { slug: slug.clone() })
    };

    view! {
        <div
            class="article-item"
            class:active=is_active
            style:display=move || if is_visible() { "block" } else { "none" }
            on:click=on_click
        >
            <h4>{article.title}</h4>
            <p>{article.excerpt}</p>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    /// リアクティブな更新が反映されるまで待つ
    async fn next_tick() {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            gloo::utils::window()
                .set_timeout_with_callback(&resolve)
                .unwrap();
        });
        wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
    }

    fn item(container: &HtmlElement, index: u32) -> HtmlElement {
        container
            .children()
            .item(index)
            .expect("エントリが無い")
            .dyn_into::<HtmlElement>()
            .unwrap()
    }

    fn display(element: &HtmlElement) -> String {
        element.style().get_property_value("display").unwrap()
    }

    /// 記事一覧の描画、強調表示、検索による表示切り替え
    #[wasm_bindgen_test]
    async fn test_article_list_active_and_filter() {
        let container = gloo::utils::document()
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        gloo::utils::body().append_child(&container).unwrap();

        let signals = SidebarSignals::new();
        signals.articles.set(vec![
            ArticlePreview::new("Alpha Review", "Project tools", "a"),
            ArticlePreview::new("Beta Review", "Password vaults", "b"),
        ]);
        leptos::mount::mount_to(container.clone(), move || view! { <ArticleList signals=signals /> })
            .forget();
        next_tick().await;

        assert_eq!(container.children().length(), 2);
        let heading = item(&container, 0).query_selector("h4").unwrap().expect("見出しが無い");
        assert_eq!(heading.text_content().as_deref(), Some("Alpha Review"));
        assert!(!item(&container, 1).class_list().contains("active"));

        signals.active.set(Some("b".into()));
        signals.query.set("alpha".into());
        next_tick().await;

        let first = item(&container, 0);
        let second = item(&container, 1);
        assert!(!first.class_list().contains("active"));
        assert!(second.class_list().contains("active"));
        assert_eq!(display(&first), "block");
        assert_eq!(display(&second), "none");

        // 検索を空に戻すと全件表示
        signals.query.set(String::new());
        next_tick().await;
        assert_eq!(display(&item(&container, 1)), "block");
    }
}
