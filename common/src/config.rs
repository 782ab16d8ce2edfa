//! ローダー設定
//!
//! ブラウザではデフォルト値のまま（相対URL）使い、CLIでは設定ファイルから読み込む。

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGO: &str = "default-logo.png";
pub const DEFAULT_CTA_TEMPLATE: &str = "Try {name}";
pub const NOT_FOUND_MESSAGE: &str = "Article not found or API issue.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// APIのオリジン（空なら同一オリジンの相対パス）
    pub api_base: String,
    pub default_logo: String,
    /// `{name}` がソフトウェア名に置換される
    pub cta_template: String,
    pub not_found_message: String,
    /// 記事高さに対するスティッキーCTA表示開始位置の割合
    pub sticky_threshold_ratio: f64,
    /// ページ末尾からこの距離(px)以内ではスティッキーCTAを隠す
    pub sticky_bottom_margin: f64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            default_logo: DEFAULT_LOGO.into(),
            cta_template: DEFAULT_CTA_TEMPLATE.into(),
            not_found_message: NOT_FOUND_MESSAGE.into(),
            sticky_threshold_ratio: 0.3,
            sticky_bottom_margin: 200.0,
        }
    }
}

impl LoaderConfig {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    pub fn preview_url(&self) -> String {
        self.endpoint("/api/articles/preview")
    }

    pub fn articles_url(&self) -> String {
        self.endpoint("/api/articles")
    }

    pub fn article_url(&self, slug: &str) -> String {
        self.endpoint(&format!("/api/article/{}", slug))
    }

    pub fn cta_label(&self, name: &str) -> String {
        self.cta_template.replace("{name}", name)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}
