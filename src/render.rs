//! 端末への描画

use crate::runner::Screen;

/// サイドバー（強調表示中は `>`）
pub fn render_sidebar(screen: &Screen) -> String {
    let mut out = String::new();
    for article in screen.visible_entries() {
        let marker = if screen.is_active(article) { ">" } else { " " };
        out.push_str(&format!("{} {}  [/{}]\n", marker, article.title, article.title_slug));
        if !article.excerpt.is_empty() {
            out.push_str(&format!("    {}\n", article.excerpt));
        }
    }
    out
}

/// 表示中の記事とCTA
pub fn render_article(screen: &Screen, with_content: bool) -> String {
    let Some(display) = &screen.display else {
        return "(記事なし)\n".to_string();
    };

    let software = &display.software;
    let mut out = format!("# {}\n", display.title);
    out.push_str(&format!("URL:    {}\n", screen.location));
    out.push_str(&format!("Logo:   {}\n", software.logo));
    out.push_str(&format!("CTA:    {}", display.cta_label));
    if let Some(url) = &software.affiliate_url {
        out.push_str(&format!(" -> {}", url));
    }
    out.push('\n');
    if !software.benefits.is_empty() {
        out.push_str(&format!("        {}\n", software.benefits));
    }
    if with_content {
        out.push('\n');
        out.push_str(&display.content_html);
        out.push('\n');
    }
    out
}
