use crate::document::{ExtractError, FieldChain, PageDocument};

use super::{collect_tags, page_url, path_segment, Platform, PlatformFields};

pub(super) fn extract(url: &str, doc: &PageDocument) -> Result<PlatformFields, ExtractError> {
    let page = page_url(Platform::Note, url)?;

    let title = FieldChain::new("title")
        .or(|| doc.meta_property("og:title"))
        .or(|| doc.first_text("h1.o-noteContentHeader__title"))
        .or(|| doc.first_text("h1"))
        .resolve();

    let description = FieldChain::new("description")
        .or(|| doc.meta_property("og:description"))
        .or(|| doc.meta_name("description"))
        .or(|| doc.first_text(".note-common-styles__textnote-body p"))
        .resolve();

    let image = FieldChain::new("image")
        .or(|| doc.meta_property("og:image"))
        .or(|| doc.meta_name("twitter:image"))
        .resolve();

    let author = FieldChain::new("author")
        .or(|| doc.first_text(".o-noteContentHeader__name a"))
        .or(|| doc.meta_name("note:creator"))
        .or_value(path_segment(&page, 0))
        .resolve();

    let published_at = FieldChain::new("published_at")
        .or(|| doc.meta_property("article:published_time"))
        .or(|| doc.first_attr(".o-noteContentHeader__date time", "datetime"))
        .or(|| doc.first_attr("time[datetime]", "datetime"))
        .resolve();

    // Hashtag links render as "#tag"; the marker is stripped during collection.
    let tags = collect_tags(
        doc,
        &[r#"a[href^="/hashtag/"]"#, r#"a[href*="note.com/hashtag/"]"#],
    );

    Ok(PlatformFields {
        title,
        description,
        image,
        site_name: Some("note".to_string()),
        author,
        published_at,
        tags,
    })
}
