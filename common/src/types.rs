//! 記事データの型定義
//!
//! ブラウザとCLIで共有される型:
//! - ArticlePreview: サイドバー表示用の軽量レコード（`/api/articles/preview`）
//! - ArticleDetail: 記事本文を含む完全レコード（`/api/article/<slug>`、`/api/articles`）

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// サイドバー用の記事プレビュー
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticlePreview {
    pub title: String,
    pub excerpt: String,
    /// ルーティングキー（URLパスとAPI参照の両方に使う）
    pub title_slug: String,
}

impl ArticlePreview {
    pub fn new(title: impl Into<String>, excerpt: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            excerpt: excerpt.into(),
            title_slug: slug.into(),
        }
    }
}

/// 記事の完全データ
///
/// サーバーによってフィールド名の揺れがあるため、代替名はそれぞれ別フィールドで受け取り
/// アクセサで優先順位を解決する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDetail {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub excerpt: Option<String>,

    #[serde(default, rename = "excerptSlug")]
    pub excerpt_slug: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default, rename = "titleSlug")]
    pub title_slug: Option<String>,

    #[serde(default)]
    pub software_name: Option<String>,

    #[serde(default, rename = "websiteName")]
    pub website_name: Option<String>,

    #[serde(default)]
    pub logo_path: Option<String>,

    /// アフィリエイトURL
    #[serde(default)]
    pub website_link: Option<String>,

    /// 記事本文（HTML断片）
    #[serde(default)]
    pub article_content: Option<String>,
}

impl ArticleDetail {
    /// `/api/article/<slug>` のレスポンス本文をパースする
    ///
    /// 全フィールドが省略可能なので、配列など非オブジェクトの本文も空の記事として
    /// 通ってしまう。オブジェクト以外はJSONエラーとして弾く。
    pub fn from_json(body: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom(format!("article payload is not an object: {}", value)).into());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// `titleSlug` → `slug` の順で最初の空でない値
    pub fn route_slug(&self) -> Option<&str> {
        first_non_empty(&[self.title_slug.as_deref(), self.slug.as_deref()])
    }

    /// `excerpt` → `excerptSlug` の順で最初の空でない値
    pub fn summary(&self) -> Option<&str> {
        first_non_empty(&[self.excerpt.as_deref(), self.excerpt_slug.as_deref()])
    }

    /// `software_name` → `websiteName` の順で最初の空でない値
    pub fn display_name(&self) -> Option<&str> {
        first_non_empty(&[self.software_name.as_deref(), self.website_name.as_deref()])
    }

    /// 全件リスト用にプレビュー形へ射影
    pub fn to_preview(&self) -> ArticlePreview {
        ArticlePreview {
            title: self.title.clone(),
            excerpt: self.summary().unwrap_or_default().to_string(),
            title_slug: self.route_slug().unwrap_or_default().to_string(),
        }
    }
}

/// 空文字を未設定とみなして最初の値を返す
pub(crate) fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates.iter().flatten().copied().find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_deserialize() {
        let json = r#"[
            {"title": "Best CRM", "excerpt": "Compare tools", "titleSlug": "best-crm"},
            {"title": "VPN Guide", "excerpt": "Stay safe", "titleSlug": "vpn-guide"}
        ]"#;

        let previews: Vec<ArticlePreview> = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(previews.len(), 2);
        assert_eq!(previews[0].title_slug, "best-crm");
        assert_eq!(previews[1].title, "VPN Guide");
    }

    #[test]
    fn test_preview_deserialize_missing_fields() {
        let json = r#"{"titleSlug": "only-slug"}"#;

        let preview: ArticlePreview = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(preview.title_slug, "only-slug");
        assert_eq!(preview.title, "");
        assert_eq!(preview.excerpt, "");
    }

    #[test]
    fn test_detail_deserialize_with_alternate_names() {
        let json = r#"{
            "title": "Review",
            "excerptSlug": "Fast and cheap",
            "slug": "review",
            "websiteName": "Acme",
            "logo_path": null,
            "website_link": "https://acme.example/?ref=1",
            "article_content": "<p>Hello</p>"
        }"#;

        let detail: ArticleDetail = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(detail.route_slug(), Some("review"));
        assert_eq!(detail.summary(), Some("Fast and cheap"));
        assert_eq!(detail.display_name(), Some("Acme"));
        assert_eq!(detail.logo_path, None);
    }

    #[test]
    fn test_detail_both_names_present() {
        // 両方あっても重複フィールドエラーにならず、優先側が使われる
        let json = r#"{
            "title": "Review",
            "excerpt": "Primary",
            "excerptSlug": "Secondary",
            "software_name": "Primary Soft",
            "websiteName": "Secondary Soft",
            "titleSlug": "primary-slug",
            "slug": "secondary-slug"
        }"#;

        let detail: ArticleDetail = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(detail.summary(), Some("Primary"));
        assert_eq!(detail.display_name(), Some("Primary Soft"));
        assert_eq!(detail.route_slug(), Some("primary-slug"));
    }

    #[test]
    fn test_empty_string_falls_through() {
        let detail = ArticleDetail {
            software_name: Some(String::new()),
            website_name: Some("Fallback".into()),
            ..Default::default()
        };
        assert_eq!(detail.display_name(), Some("Fallback"));
    }

    #[test]
    fn test_from_json_object() {
        let detail = ArticleDetail::from_json(r#"{"title": "Acme", "software_name": "Acme"}"#)
            .expect("パース失敗");
        assert_eq!(detail.title, "Acme");
        assert_eq!(detail.display_name(), Some("Acme"));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        // 配列は既定値の記事として通ってしまうのでエラーにする
        for body in ["[]", "[{\"title\": \"x\"}]", "null", "\"text\""] {
            let result = ArticleDetail::from_json(body);
            assert!(matches!(result, Err(crate::Error::Json(_))), "body = {}", body);
        }
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(ArticleDetail::from_json("{"), Err(crate::Error::Json(_))));
    }

    #[test]
    fn test_to_preview() {
        let detail = ArticleDetail {
            title: "Full".into(),
            excerpt_slug: Some("Short text".into()),
            slug: Some("full".into()),
            article_content: Some("<p>body</p>".into()),
            ..Default::default()
        };

        let preview = detail.to_preview();
        assert_eq!(preview, ArticlePreview::new("Full", "Short text", "full"));
    }
}
