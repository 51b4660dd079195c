use scraper::Html;

use crate::document::{collapse_whitespace, parse_selector, ExtractError};

pub const MAX_PAGE_CONTENT_CHARS: usize = 4000;

/// Chrome removed before any text is taken.
const STRIPPED_ELEMENTS: &str = "script, style, nav, header, footer";

/// Tried in order; the first selector that matches anything supplies the text.
const CONTENT_SELECTORS: &[&str] = &["main", "article", ".content", "#content", "body"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    /// Whitespace-collapsed text, at most `MAX_PAGE_CONTENT_CHARS` characters.
    pub text: String,
    /// Selector the text came from, `None` when nothing matched.
    pub source: Option<&'static str>,
    pub truncated: bool,
}

impl PageContent {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub trait ContentExtractor: Send + Sync {
    fn extract(&self, html: &str) -> Result<PageContent, ExtractError>;
}

/// Main-text extractor for question answering:
/// - drops `script`, `style`, `nav`, `header` and `footer` subtrees
/// - reads the first of `main`, `article`, `.content`, `#content`, `body` that exists
/// - collapses whitespace and caps the result at `max_chars`.
#[derive(Debug, Clone)]
pub struct MainTextExtractor {
    max_chars: usize,
}

impl Default for MainTextExtractor {
    fn default() -> Self {
        Self::with_max_chars(MAX_PAGE_CONTENT_CHARS)
    }
}

impl MainTextExtractor {
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl ContentExtractor for MainTextExtractor {
    fn extract(&self, html: &str) -> Result<PageContent, ExtractError> {
        let mut doc = Html::parse_document(html);
        strip_elements(&mut doc)?;

        for &css in CONTENT_SELECTORS {
            let selector = parse_selector(css)?;
            if let Some(node) = doc.select(&selector).next() {
                let collapsed = collapse_whitespace(&node.text().collect::<String>());
                let (text, truncated) = truncate_chars(collapsed, self.max_chars);
                return Ok(PageContent {
                    text,
                    source: Some(css),
                    truncated,
                });
            }
        }

        Ok(PageContent {
            text: String::new(),
            source: None,
            truncated: false,
        })
    }
}

fn strip_elements(doc: &mut Html) -> Result<(), ExtractError> {
    let selector = parse_selector(STRIPPED_ELEMENTS)?;
    let ids: Vec<_> = doc.select(&selector).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
    Ok(())
}

fn truncate_chars(text: String, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (text[..byte_idx].to_string(), true),
        None => (text, false),
    }
}

#[cfg(test)]
mod tests {
    use super::{truncate_chars, ContentExtractor, MainTextExtractor, MAX_PAGE_CONTENT_CHARS};

    #[test]
    fn chrome_is_removed_before_reading_body() {
        let html = r#"<html><head><style>p{}</style></head><body>
            <header>Site header</header>
            <nav>Menu</nav>
            <div>Visible <script>var x = 1;</script>text</div>
            <footer>Copyright</footer>
        </body></html>"#;
        let content = MainTextExtractor::default().extract(html).unwrap();
        assert_eq!(content.text, "Visible text");
        assert_eq!(content.source, Some("body"));
    }

    #[test]
    fn selector_order_beats_document_order() {
        let html = r#"<body><div id="content">sidebar-ish</div><article>Article body</article><main>Main body</main></body>"#;
        let content = MainTextExtractor::default().extract(html).unwrap();
        assert_eq!(content.text, "Main body");
        assert_eq!(content.source, Some("main"));
    }

    #[test]
    fn whitespace_is_collapsed_and_trimmed() {
        let html = "<article>\n  one\n\n\ttwo   three  \n</article>";
        let content = MainTextExtractor::default().extract(html).unwrap();
        assert_eq!(content.text, "one two three");
        assert!(!content.truncated);
    }

    #[test]
    fn long_text_is_capped_in_characters() {
        let body = "日".repeat(MAX_PAGE_CONTENT_CHARS + 50);
        let html = format!("<main>{body}</main>");
        let content = MainTextExtractor::default().extract(&html).unwrap();
        assert_eq!(content.text.chars().count(), MAX_PAGE_CONTENT_CHARS);
        assert!(content.truncated);
    }

    #[test]
    fn truncate_is_noop_at_exact_length() {
        assert_eq!(truncate_chars("abc".into(), 3), ("abc".to_string(), false));
        assert_eq!(truncate_chars("abcd".into(), 3), ("abc".to_string(), true));
    }

    #[test]
    fn empty_main_yields_empty_content() {
        let html = "<body><main>   </main><p>elsewhere</p></body>";
        let content = MainTextExtractor::default().extract(html).unwrap();
        assert!(content.is_empty());
    }
}
