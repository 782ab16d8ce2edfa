//! サイドバーの検索フィルタ
//!
//! 表示済みエントリのタイトル/抜粋に対する単純な部分一致。デバウンスやランキングは行わない。

/// 入力値を比較用に正規化（前後空白除去 + 小文字化）
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// 正規化済みクエリがタイトルまたは抜粋に含まれるか
pub fn entry_matches(normalized_query: &str, title: &str, excerpt: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }
    title.to_lowercase().contains(normalized_query)
        || excerpt.to_lowercase().contains(normalized_query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(query: &str) -> Vec<bool> {
        let query = normalize_query(query);
        ENTRIES
            .iter()
            .map(|(title, excerpt)| entry_matches(&query, title, excerpt))
            .collect()
    }

    const ENTRIES: [(&str, &str); 3] = [
        ("Best VPN 2024", "Privacy first"),
        ("CRM Showdown", "Sales tools compared"),
        ("Password Managers", "Keep your vpn keys safe"),
    ];

    #[test]
    fn test_case_insensitive() {
        assert_eq!(visible("vpn"), vec![true, false, true]);
        assert_eq!(visible("VPN"), vec![true, false, true]);
    }

    #[test]
    fn test_matches_excerpt() {
        assert_eq!(visible("sales"), vec![false, true, false]);
    }

    #[test]
    fn test_empty_and_whitespace_show_all() {
        assert_eq!(visible(""), vec![true, true, true]);
        assert_eq!(visible("   "), vec![true, true, true]);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(visible("zzz"), vec![false, false, false]);
    }
}
