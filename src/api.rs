//! 記事APIクライアント（reqwest）

use affiliate_reader_common::{ArticleDetail, ArticlePreview, Error, Result};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

/// 記事データの取得元
///
/// 端末クライアントではHTTP、テストではメモリ上の実装を使う。
#[allow(async_fn_in_trait)]
pub trait ArticleSource {
    async fn fetch_preview(&self, url: &str) -> Result<Vec<ArticlePreview>>;
    async fn fetch_all(&self, url: &str) -> Result<Vec<ArticlePreview>>;
    async fn fetch_article(&self, url: &str) -> Result<ArticleDetail>;
}

pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> crate::error::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("affiliate-reader/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Error::Status(resp.status().as_u16()));
        }

        resp.text().await.map_err(|e| Error::Network(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl ArticleSource for HttpSource {
    async fn fetch_preview(&self, url: &str) -> Result<Vec<ArticlePreview>> {
        self.get_json(url).await
    }

    async fn fetch_all(&self, url: &str) -> Result<Vec<ArticlePreview>> {
        let articles: Vec<ArticleDetail> = self.get_json(url).await?;
        Ok(articles.iter().map(ArticleDetail::to_preview).collect())
    }

    async fn fetch_article(&self, url: &str) -> Result<ArticleDetail> {
        let body = self.get_text(url).await?;
        ArticleDetail::from_json(&body)
    }
}
