//! URLパスとスラッグの相互変換

/// 履歴の更新方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// ユーザー操作（履歴を積む）
    Push,
    /// 初期表示のリダイレクト（履歴を積まない）
    Replace,
}

/// パスの前後の `/` を取り除いてスラッグとして返す
///
/// # Examples
/// ```
/// use affiliate_reader_common::routing::slug_from_path;
///
/// assert_eq!(slug_from_path("/my-article/"), Some("my-article"));
/// assert_eq!(slug_from_path("/"), None);
/// ```
pub fn slug_from_path(path: &str) -> Option<&str> {
    let slug = path.trim_matches('/');
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}

pub fn article_path(slug: &str) -> String {
    format!("/{}", slug)
}
