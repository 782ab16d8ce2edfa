use crate::error::{ReaderError, Result};
use affiliate_reader_common::LoaderConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const BASE_URL_ENV: &str = "AFFILIATE_READER_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// 記事APIのオリジン（例: http://localhost:5000）
    pub base_url: Option<String>,
    pub loader: LoaderConfig,
    /// コマンドラインの `--base-url`（保存しない、環境変数より優先）
    #[serde(skip)]
    pub base_url_override: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReaderError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("affiliate-reader").join("config.json"))
    }

    pub fn get_base_url(&self) -> Result<String> {
        self.resolve_base_url(std::env::var(BASE_URL_ENV).ok())
    }

    /// 優先順位: `--base-url` → 環境変数 → 設定ファイル
    pub fn resolve_base_url(&self, env_value: Option<String>) -> Result<String> {
        if let Some(url) = &self.base_url_override {
            return Ok(url.clone());
        }
        if let Some(url) = env_value.filter(|url| !url.trim().is_empty()) {
            return Ok(url);
        }

        self.base_url.clone().ok_or(ReaderError::MissingBaseUrl)
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ReaderError::Config(format!("URLはhttp(s)で始めてください: {}", url)));
        }
        self.base_url = Some(url);
        self.save()
    }

    /// ベースURLを反映したローダー設定
    pub fn loader_config(&self) -> Result<LoaderConfig> {
        Ok(LoaderConfig {
            api_base: self.get_base_url()?,
            ..self.loader.clone()
        })
    }
}
