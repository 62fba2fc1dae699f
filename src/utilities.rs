use tracing::{debug, warn};
use url::Url;

/// Escapes text for safe inclusion in HTML element content or attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn open_in_browser(url: &Url) {
    debug!("Opening {}", url);
    if let Err(e) = webbrowser::open(url.as_str()) {
        warn!("Failed to open {} in browser: {}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn test_escape_html_neutralises_markup() {
        assert_eq!(
            escape_html(r#"<img src=x onerror="alert('x')">&"#),
            "&lt;img src=x onerror=&quot;alert(&#39;x&#39;)&quot;&gt;&amp;"
        );
    }

    #[test]
    fn test_escape_html_keeps_plain_text() {
        assert_eq!(escape_html("Clair de Lune"), "Clair de Lune");
        assert_eq!(escape_html("Café Tacvba"), "Café Tacvba");
    }
}
