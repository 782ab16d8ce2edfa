//! 表示中記事から導出されるCTA用ソフトウェア情報

use crate::config::LoaderConfig;
use crate::types::{first_non_empty, ArticleDetail};

/// 現在のソフトウェア（CTA描画とアフィリエイトクリック用の射影）
///
/// 記事を表示するたびに再計算され、単独で変更されることはない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentSoftware {
    pub name: String,
    pub logo: String,
    pub affiliate_url: Option<String>,
    pub benefits: String,
}

impl CurrentSoftware {
    pub fn from_article(article: &ArticleDetail, config: &LoaderConfig) -> Self {
        Self {
            name: article.display_name().unwrap_or_default().to_string(),
            logo: first_non_empty(&[article.logo_path.as_deref()])
                .unwrap_or(config.default_logo.as_str())
                .to_string(),
            affiliate_url: first_non_empty(&[article.website_link.as_deref()]).map(str::to_string),
            benefits: article.summary().unwrap_or_default().to_string(),
        }
    }
}

/// 表示更新1回分の内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub slug: String,
    pub title: String,
    pub software: CurrentSoftware,
    /// サニタイズしない（信頼済みソース前提）
    pub content_html: String,
    pub cta_label: String,
}

impl DisplayUpdate {
    pub fn new(slug: &str, article: &ArticleDetail, software: CurrentSoftware, config: &LoaderConfig) -> Self {
        Self {
            slug: slug.to_string(),
            title: article.title.clone(),
            cta_label: config.cta_label(&software.name),
            content_html: article.article_content.clone().unwrap_or_default(),
            software,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> ArticleDetail {
        ArticleDetail {
            title: "Acme Review".into(),
            excerpt: Some("Saves time".into()),
            software_name: Some("Acme".into()),
            website_name: Some("acme.example".into()),
            logo_path: Some("/static/acme.png".into()),
            website_link: Some("https://acme.example/?ref=42".into()),
            article_content: Some("<h2>Intro</h2>".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_prefers_primary_fields() {
        let software = CurrentSoftware::from_article(&article(), &LoaderConfig::default());
        assert_eq!(software.name, "Acme");
        assert_eq!(software.logo, "/static/acme.png");
        assert_eq!(software.affiliate_url.as_deref(), Some("https://acme.example/?ref=42"));
        assert_eq!(software.benefits, "Saves time");
    }

    #[test]
    fn test_fallbacks() {
        let article = ArticleDetail {
            title: "Bare".into(),
            excerpt_slug: Some("Alt benefits".into()),
            website_name: Some("Alt Name".into()),
            logo_path: Some(String::new()),
            ..Default::default()
        };

        let software = CurrentSoftware::from_article(&article, &LoaderConfig::default());
        assert_eq!(software.name, "Alt Name");
        assert_eq!(software.logo, "default-logo.png");
        assert_eq!(software.affiliate_url, None);
        assert_eq!(software.benefits, "Alt benefits");
    }

    #[test]
    fn test_display_update() {
        let config = LoaderConfig::default();
        let article = article();
        let software = CurrentSoftware::from_article(&article, &config);
        let update = DisplayUpdate::new("acme-review", &article, software, &config);

        assert_eq!(update.cta_label, "Try Acme");
        assert_eq!(update.content_html, "<h2>Intro</h2>");
        assert_eq!(update.title, "Acme Review");
        assert_eq!(update.slug, "acme-review");
    }

    #[test]
    fn test_display_update_without_content() {
        let config = LoaderConfig::default();
        let article = ArticleDetail::default();
        let software = CurrentSoftware::from_article(&article, &config);
        let update = DisplayUpdate::new("empty", &article, software, &config);

        assert_eq!(update.content_html, "");
        assert_eq!(update.cta_label, "Try ");
    }
}
