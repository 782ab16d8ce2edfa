//! 記事APIの呼び出し（fetch）
//!
//! 2xx以外はすべて `Error::Status` として返し、呼び出し側で「見つからない」扱いにする。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use affiliate_reader_common::{ArticleDetail, ArticlePreview, Error, Result};

/// JSのエラー値を文字列化
fn js_error(value: JsValue) -> Error {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Network(message)
}

/// GETしてレスポンス本文を文字列で返す
async fn fetch_text(url: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window = gloo::utils::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| Error::Network("response body is not text".into()))
}

pub async fn fetch_preview(url: &str) -> Result<Vec<ArticlePreview>> {
    let body = fetch_text(url).await?;
    Ok(serde_json::from_str(&body)?)
}

/// 全件リスト（詳細形）を取得してプレビュー形に射影
pub async fn fetch_all(url: &str) -> Result<Vec<ArticlePreview>> {
    let body = fetch_text(url).await?;
    let articles: Vec<ArticleDetail> = serde_json::from_str(&body)?;
    Ok(articles.iter().map(ArticleDetail::to_preview).collect())
}

pub async fn fetch_article(url: &str) -> Result<ArticleDetail> {
    let body = fetch_text(url).await?;
    ArticleDetail::from_json(&body)
}
