//! スクロール位置によるスティッキーCTAの表示判定

use crate::config::LoaderConfig;

/// 判定に必要なスクロール計測値（すべてpx）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub window_height: f64,
    pub document_height: f64,
    pub article_top: f64,
    pub article_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickyCtaRule {
    pub threshold_ratio: f64,
    pub bottom_margin: f64,
}

impl StickyCtaRule {
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self {
            threshold_ratio: config.sticky_threshold_ratio,
            bottom_margin: config.sticky_bottom_margin,
        }
    }

    /// 記事の一定割合を過ぎ、かつページ末尾付近ではないときに表示
    pub fn is_visible(&self, m: &ScrollMetrics) -> bool {
        let threshold = m.article_top + m.article_height * self.threshold_ratio;
        let bottom_limit = m.document_height - m.window_height - self.bottom_margin;
        m.scroll_y > threshold && m.scroll_y < bottom_limit
    }
}

impl Default for StickyCtaRule {
    fn default() -> Self {
        Self::from_config(&LoaderConfig::default())
    }
}
