use crate::document::{ExtractError, FieldChain, PageDocument};

use super::{collect_tags, page_url, path_segment, Platform, PlatformFields};

/// Repository pages: the About blurb beats the generated `og:description`, which
/// prefixes it with "Contribute to owner/repo development...".
pub(super) fn extract(url: &str, doc: &PageDocument) -> Result<PlatformFields, ExtractError> {
    let page = page_url(Platform::GitHub, url)?;

    let title = FieldChain::new("title")
        .or(|| doc.meta_property("og:title"))
        .or(|| doc.first_text(r#"strong[itemprop="name"] a"#))
        .or(|| doc.first_text("title"))
        .resolve();

    let description = FieldChain::new("description")
        .or(|| doc.first_text(".BorderGrid-cell p.f4"))
        .or(|| doc.meta_property("og:description"))
        .or(|| doc.meta_name("description"))
        .resolve();

    let image = FieldChain::new("image")
        .or(|| doc.meta_property("og:image"))
        .or(|| doc.meta_name("twitter:image"))
        .resolve();

    let author = FieldChain::new("author")
        .or_value(path_segment(&page, 0))
        .or(|| doc.first_text(r#"[rel="author"]"#))
        .resolve();

    let published_at = FieldChain::new("published_at")
        .or(|| doc.first_attr("relative-time[datetime]", "datetime"))
        .resolve();

    let tags = collect_tags(doc, &["a.topic-tag"]);

    Ok(PlatformFields {
        title,
        description,
        image,
        site_name: Some("GitHub".to_string()),
        author,
        published_at,
        tags,
    })
}
