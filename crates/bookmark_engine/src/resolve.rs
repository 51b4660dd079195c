use crate::document::{FieldChain, PageDocument};
use crate::platforms::PlatformFields;
use crate::ExtractionResult;

/// Fills every field the platform stage left empty from Open Graph / named meta tags
/// and element fallbacks. The canonical URL always ends up non-empty.
pub fn resolve_metadata(
    url: &str,
    doc: &PageDocument,
    platform: PlatformFields,
) -> ExtractionResult {
    let PlatformFields {
        title,
        description,
        image,
        site_name,
        author,
        published_at,
        tags,
    } = platform;

    let title = FieldChain::new("title")
        .or_value(title)
        .or(|| doc.meta("og:title"))
        .or(|| doc.first_text_trimmed("title"))
        .resolve_lenient();

    let description = FieldChain::new("description")
        .or_value(description)
        .or(|| doc.meta("og:description"))
        .or(|| doc.meta("description"))
        .resolve_lenient();

    let image = FieldChain::new("image")
        .or_value(image)
        .or(|| doc.meta("og:image"))
        .or(|| doc.meta("twitter:image"))
        .resolve_lenient();

    let site_name = FieldChain::new("site_name")
        .or_value(site_name)
        .or(|| doc.meta("og:site_name"))
        .resolve_lenient();

    let canonical_url = FieldChain::new("canonical_url")
        .or(|| doc.meta("og:url"))
        .or(|| doc.first_attr(r#"link[rel="canonical"]"#, "href"))
        .or_value(Some(url.to_string()))
        .resolve_lenient();

    ExtractionResult {
        title,
        description,
        image,
        site_name,
        canonical_url,
        author: trimmed(author),
        published_at: trimmed(published_at),
        tags: tags.filter(|tags| !tags.is_empty()),
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
