//! Helpers for article markup: plain-text extraction, excerpts and Markdown input

use pulldown_cmark::{html, Options, Parser as MdParser};
use regex::Regex;
use std::sync::OnceLock;

fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

fn whitespace_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Strip tags, decode common entities and collapse whitespace
pub fn plain_text(markup: &str) -> String {
    let without_tags = tag_regex().replace_all(markup, " ");
    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    whitespace_regex()
        .replace_all(&decoded, " ")
        .trim()
        .to_string()
}

/// First `max_chars` characters of the plain text, with `...` when cut
pub fn generate_excerpt(markup: &str, max_chars: usize) -> String {
    let text = plain_text(markup);
    if text.chars().count() > max_chars {
        let mut cut: String = text.chars().take(max_chars).collect();
        cut.push_str("...");
        cut
    } else {
        text
    }
}

/// Render Markdown source to the HTML stored in `Article::content`
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = MdParser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_strips_tags() {
        assert_eq!(
            plain_text("<p>Hello <strong>bold</strong>\n<em>world</em></p>"),
            "Hello bold world"
        );
    }

    #[test]
    fn test_plain_text_decodes_entities() {
        assert_eq!(plain_text("<p>a &lt;b&gt; &amp;&nbsp;c</p>"), "a <b> & c");
    }

    #[test]
    fn test_excerpt_short_text_unchanged() {
        assert_eq!(generate_excerpt("<p>short</p>", 150), "short");
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let excerpt = generate_excerpt("<p>héllo wörld</p>", 5);
        assert_eq!(excerpt, "héllo...");
    }

    #[test]
    fn test_excerpt_exact_length_not_truncated() {
        assert_eq!(generate_excerpt("abcde", 5), "abcde");
    }

    #[test]
    fn test_render_markdown() {
        let html = render_markdown("# Title\n\nSome *text*");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
    }
}
