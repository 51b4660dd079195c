//! Parsed HTML plus the selector lookups the extractors are built from.
//!
//! Lookups return `Result<Option<String>, ExtractError>`: `Ok(None)` means "nothing
//! usable here, try the next source", `Err` means the lookup itself is broken.

use engine_logging::engine_warn;
use scraper::{ElementRef, Html, Selector};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },
    #[error("{platform}: {message}")]
    Platform {
        platform: &'static str,
        message: String,
    },
}

pub type Lookup = Result<Option<String>, ExtractError>;

pub fn parse_selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|err| ExtractError::Selector {
        selector: css.to_string(),
        message: err.to_string(),
    })
}

pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    /// `meta[property=key]`, then `meta[name=key]`.
    pub fn meta(&self, key: &str) -> Lookup {
        match self.meta_property(key)? {
            Some(value) => Ok(Some(value)),
            None => self.meta_name(key),
        }
    }

    pub fn meta_property(&self, key: &str) -> Lookup {
        self.first_attr(&format!(r#"meta[property="{key}"]"#), "content")
    }

    pub fn meta_name(&self, key: &str) -> Lookup {
        self.first_attr(&format!(r#"meta[name="{key}"]"#), "content")
    }

    /// Text of the first matching element whose text is not blank, whitespace collapsed.
    pub fn first_text(&self, css: &str) -> Lookup {
        let selector = parse_selector(css)?;
        Ok(self
            .html
            .select(&selector)
            .map(element_text)
            .find(|text| !text.is_empty()))
    }

    /// Text of the first matching element that is not blank, only trimmed.
    pub fn first_text_trimmed(&self, css: &str) -> Lookup {
        let selector = parse_selector(css)?;
        Ok(self
            .html
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .find(|text| !text.is_empty()))
    }

    /// Attribute of the first matching element that carries a non-blank value.
    pub fn first_attr(&self, css: &str, attr: &str) -> Lookup {
        let selector = parse_selector(css)?;
        Ok(self
            .html
            .select(&selector)
            .filter_map(|el| el.value().attr(attr))
            .map(str::trim)
            .find(|value| !value.is_empty())
            .map(ToOwned::to_owned))
    }

    /// Non-blank texts of every matching element, in document order.
    pub fn texts(&self, css: &str) -> Result<Vec<String>, ExtractError> {
        let selector = parse_selector(css)?;
        Ok(self
            .html
            .select(&selector)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .collect())
    }
}

pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

type Candidate<'a> = Box<dyn FnOnce() -> Lookup + 'a>;

/// Ordered candidate sources for one field, evaluated lazily; the first non-blank
/// value wins.
#[derive(Default)]
pub struct FieldChain<'a> {
    name: &'static str,
    candidates: Vec<Candidate<'a>>,
}

impl<'a> FieldChain<'a> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            candidates: Vec::new(),
        }
    }

    pub fn or(mut self, candidate: impl FnOnce() -> Lookup + 'a) -> Self {
        self.candidates.push(Box::new(candidate));
        self
    }

    pub fn or_value(self, value: Option<String>) -> Self {
        self.or(move || Ok(value))
    }

    /// First non-blank value; a broken lookup is logged and the next source tried.
    pub fn resolve(self) -> Option<String> {
        let name = self.name;
        for candidate in self.candidates {
            match candidate() {
                Ok(value) => {
                    if let Some(value) = non_blank(value) {
                        return Some(value);
                    }
                }
                Err(err) => engine_warn!("skipping {name} candidate: {err}"),
            }
        }
        None
    }

    /// Like [`FieldChain::resolve`], falling back to an empty string.
    pub fn resolve_lenient(self) -> String {
        self.resolve().unwrap_or_default()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{ExtractError, FieldChain, PageDocument};

    const HTML: &str = r#"
        <html><head>
            <meta property="og:title" content="  OG Title ">
            <meta name="description" content="Named description">
            <meta name="og:image" content="/named-og.png">
        </head><body>
            <h1>   </h1>
            <h1>Real
                heading</h1>
            <span class="tag">rust</span><span class="tag"> </span><span class="tag">web</span>
        </body></html>
    "#;

    #[test]
    fn meta_prefers_property_then_name() {
        let doc = PageDocument::parse(HTML);
        assert_eq!(doc.meta("og:title").unwrap().as_deref(), Some("OG Title"));
        assert_eq!(doc.meta("og:image").unwrap().as_deref(), Some("/named-og.png"));
        assert_eq!(doc.meta("description").unwrap().as_deref(), Some("Named description"));
        assert_eq!(doc.meta("og:description").unwrap(), None);
    }

    #[test]
    fn first_text_skips_blank_elements() {
        let doc = PageDocument::parse(HTML);
        assert_eq!(doc.first_text("h1").unwrap().as_deref(), Some("Real heading"));
    }

    #[test]
    fn texts_drop_blank_entries() {
        let doc = PageDocument::parse(HTML);
        assert_eq!(doc.texts(".tag").unwrap(), vec!["rust", "web"]);
    }

    #[test]
    fn broken_selector_is_an_error() {
        let doc = PageDocument::parse(HTML);
        assert!(matches!(doc.first_text("h1[["), Err(ExtractError::Selector { .. })));
    }

    #[test]
    fn chain_short_circuits_on_first_value() {
        let doc = PageDocument::parse(HTML);
        let value = FieldChain::new("title")
            .or(|| doc.meta("og:missing"))
            .or(|| doc.meta("og:title"))
            .or(|| panic!("must not be evaluated"))
            .resolve();
        assert_eq!(value.as_deref(), Some("OG Title"));
    }

    #[test]
    fn broken_candidate_falls_through_to_next_source() {
        let doc = PageDocument::parse(HTML);
        let value = FieldChain::new("title")
            .or(|| doc.first_text("h1[["))
            .or(|| doc.first_text("h1"))
            .resolve();
        assert_eq!(value.as_deref(), Some("Real heading"));

        let nothing = FieldChain::new("title")
            .or(|| doc.first_text("h1[["))
            .resolve();
        assert_eq!(nothing, None);
    }

    #[test]
    fn trimmed_text_keeps_inner_whitespace() {
        let doc = PageDocument::parse("<title>\n  Line one\n  line two  \n</title>");
        assert_eq!(
            doc.first_text_trimmed("title").unwrap().as_deref(),
            Some("Line one\n  line two")
        );
        assert_eq!(doc.first_text("title").unwrap().as_deref(), Some("Line one line two"));
    }

    #[test]
    fn lenient_chain_defaults_to_empty() {
        let value = FieldChain::new("image").or_value(Some("   ".into())).resolve_lenient();
        assert_eq!(value, "");
    }
}
