use crate::document::{ExtractError, FieldChain, PageDocument};

use super::{collect_tags, PlatformFields};

/// Hatena Blog; every theme keeps the `entry-*` class names.
pub(super) fn extract(_url: &str, doc: &PageDocument) -> Result<PlatformFields, ExtractError> {
    let title = FieldChain::new("title")
        .or(|| doc.meta_property("og:title"))
        .or(|| doc.first_text(".entry-title a"))
        .or(|| doc.first_text(".entry-title"))
        .resolve();

    let description = FieldChain::new("description")
        .or(|| doc.meta_property("og:description"))
        .or(|| doc.meta_name("description"))
        .or(|| doc.first_text(".entry-content p"))
        .resolve();

    let image = FieldChain::new("image")
        .or(|| doc.meta_property("og:image"))
        .or(|| doc.first_attr(".entry-content img", "src"))
        .resolve();

    let site_name = FieldChain::new("site_name")
        .or(|| doc.meta_property("og:site_name"))
        .or(|| doc.first_text("#title a"))
        .resolve();

    let author = FieldChain::new("author")
        .or(|| doc.meta_name("author"))
        .or(|| doc.first_attr("[data-user-name]", "data-user-name"))
        .or(|| doc.first_text(".author.vcard .fn"))
        .resolve();

    let published_at = FieldChain::new("published_at")
        .or(|| doc.meta_property("article:published_time"))
        .or(|| doc.first_attr(".entry-date time", "datetime"))
        .or(|| doc.first_attr("time[datetime]", "datetime"))
        .resolve();

    let tags = collect_tags(doc, &[".entry-categories a.entry-category-link"]);

    Ok(PlatformFields {
        title,
        description,
        image,
        site_name,
        author,
        published_at,
        tags,
    })
}
