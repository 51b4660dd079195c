//! Site-specific metadata extraction for known publishing platforms.
//!
//! [`Platform::detect`] tests URL substrings in [`Platform::ALL`] order and the first
//! match is the only handler applied. [`run_registry`] absorbs a failing handler so
//! the generic resolver still gets its chance.

mod github;
mod hatena;
mod medium;
mod note;
mod qiita;
mod zenn;

use engine_logging::{engine_debug, engine_warn};
use url::Url;

use crate::document::{ExtractError, PageDocument};

/// Partial metadata produced by a platform handler; `None` means "not found here".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub site_name: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Zenn,
    Qiita,
    Note,
    Medium,
    HatenaBlog,
    GitHub,
}

impl Platform {
    /// Registration order; detection stops at the first match.
    pub const ALL: [Platform; 6] = [
        Platform::Zenn,
        Platform::Qiita,
        Platform::Note,
        Platform::Medium,
        Platform::HatenaBlog,
        Platform::GitHub,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Platform::Zenn => "zenn",
            Platform::Qiita => "qiita",
            Platform::Note => "note",
            Platform::Medium => "medium",
            Platform::HatenaBlog => "hatena-blog",
            Platform::GitHub => "github",
        }
    }

    fn url_markers(self) -> &'static [&'static str] {
        match self {
            Platform::Zenn => &["zenn.dev"],
            Platform::Qiita => &["qiita.com"],
            Platform::Note => &["note.com"],
            Platform::Medium => &["medium.com"],
            Platform::HatenaBlog => &["hatenablog.com", "hatenablog.jp", "hatena.ne.jp"],
            Platform::GitHub => &["github.com"],
        }
    }

    /// Raw substring test against the URL as given.
    pub fn matches(self, url: &str) -> bool {
        self.url_markers().iter().any(|marker| url.contains(marker))
    }

    pub fn detect(url: &str) -> Option<Platform> {
        Platform::ALL.into_iter().find(|platform| platform.matches(url))
    }

    pub fn extract(self, url: &str, doc: &PageDocument) -> Result<PlatformFields, ExtractError> {
        match self {
            Platform::Zenn => zenn::extract(url, doc),
            Platform::Qiita => qiita::extract(url, doc),
            Platform::Note => note::extract(url, doc),
            Platform::Medium => medium::extract(url, doc),
            Platform::HatenaBlog => hatena::extract(url, doc),
            Platform::GitHub => github::extract(url, doc),
        }
    }
}

/// Applies the first matching handler. A handler error is logged and treated as if
/// no platform matched.
pub fn run_registry(url: &str, doc: &PageDocument) -> PlatformFields {
    let Some(platform) = Platform::detect(url) else {
        return PlatformFields::default();
    };
    engine_debug!("{url} handled by {} extractor", platform.name());
    match platform.extract(url, doc) {
        Ok(fields) => fields,
        Err(err) => {
            engine_warn!(
                "{} extractor failed for {url}, using generic metadata: {err}",
                platform.name()
            );
            PlatformFields::default()
        }
    }
}

/// Trims, drops blanks, and keeps the first occurrence of each value.
pub fn dedupe_tags<I>(tags: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && !seen.iter().any(|existing| existing == tag) {
            seen.push(tag.to_string());
        }
    }
    seen
}

/// Collects tags from each selector in turn, `None` when nothing was found. A broken
/// selector only loses its own tags.
fn collect_tags(doc: &PageDocument, selectors: &[&str]) -> Option<Vec<String>> {
    let mut raw = Vec::new();
    for css in selectors {
        match doc.texts(css) {
            Ok(texts) => raw.extend(texts),
            Err(err) => engine_warn!("skipping tag source: {err}"),
        }
    }
    let tags = dedupe_tags(raw.iter().map(|tag| tag.trim_start_matches('#')));
    (!tags.is_empty()).then_some(tags)
}

/// Handlers that read the URL path cannot run without a parseable URL.
fn page_url(platform: Platform, url: &str) -> Result<Url, ExtractError> {
    Url::parse(url).map_err(|err| ExtractError::Platform {
        platform: platform.name(),
        message: format!("unparseable url {url}: {err}"),
    })
}

/// Non-empty path segment `index` of `url` (`/{0}/{1}/...`).
fn path_segment(url: &Url, index: usize) -> Option<String> {
    url.path_segments()
        .and_then(|mut segments| segments.nth(index))
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::{collect_tags, dedupe_tags, run_registry, Platform};
    use crate::document::PageDocument;

    #[test]
    fn detection_follows_registration_order() {
        assert_eq!(Platform::detect("https://zenn.dev/a/articles/b"), Some(Platform::Zenn));
        assert_eq!(Platform::detect("https://qiita.com/a/items/b"), Some(Platform::Qiita));
        assert_eq!(Platform::detect("https://note.com/a/n/b"), Some(Platform::Note));
        assert_eq!(Platform::detect("https://medium.com/@a/b"), Some(Platform::Medium));
        assert_eq!(
            Platform::detect("https://a.hatenablog.com/entry/1"),
            Some(Platform::HatenaBlog)
        );
        assert_eq!(
            Platform::detect("https://github.com/rust-lang/rust"),
            Some(Platform::GitHub)
        );
        assert_eq!(Platform::detect("https://example.com/"), None);

        // Both markers present: the earlier registration wins.
        assert_eq!(
            Platform::detect("https://github.com/x/y?ref=zenn.dev"),
            Some(Platform::Zenn)
        );
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        assert_eq!(
            dedupe_tags([" rust", "web", "rust ", "", "Web", "web"]),
            vec!["rust", "web", "Web"]
        );
    }

    #[test]
    fn unmatched_url_yields_no_fields() {
        let doc = PageDocument::parse("<title>x</title>");
        assert_eq!(run_registry("https://example.com/", &doc), Default::default());
    }

    #[test]
    fn failing_handler_degrades_to_empty_fields() {
        // Matches GitHub by substring but cannot be parsed for the owner segment.
        let doc = PageDocument::parse(r#"<meta property="og:title" content="T">"#);
        let fields = run_registry("github.com/owner/repo", &doc);
        assert_eq!(fields, Default::default());
    }

    #[test]
    fn broken_tag_selector_keeps_other_sources() {
        let doc = PageDocument::parse(r##"<a class="t">#rust</a><a class="t">web</a>"##);
        assert_eq!(
            collect_tags(&doc, &["a[[", "a.t"]),
            Some(vec!["rust".to_string(), "web".to_string()])
        );
        assert_eq!(collect_tags(&doc, &["a[["]), None);
    }
}
