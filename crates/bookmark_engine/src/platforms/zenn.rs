use crate::document::{ExtractError, FieldChain, PageDocument};

use super::{collect_tags, page_url, path_segment, Platform, PlatformFields};

// Zenn renders with CSS-module class names, so selectors match on the stable prefix.
pub(super) fn extract(url: &str, doc: &PageDocument) -> Result<PlatformFields, ExtractError> {
    let page = page_url(Platform::Zenn, url)?;

    let title = FieldChain::new("title")
        .or(|| doc.meta_property("og:title"))
        .or(|| doc.first_text(r#"h1[class*="ArticleHeader_title"]"#))
        .or(|| doc.first_text("h1"))
        .resolve();

    let description = FieldChain::new("description")
        .or(|| doc.meta_property("og:description"))
        .or(|| doc.meta_name("description"))
        .resolve();

    let image = FieldChain::new("image")
        .or(|| doc.meta_property("og:image"))
        .resolve();

    let author = FieldChain::new("author")
        .or(|| doc.first_text(r#"a[class*="ArticleSidebar_userName"]"#))
        .or(|| doc.first_text(r#"[class*="userName"]"#))
        .or_value(path_segment(&page, 0))
        .resolve();

    let published_at = FieldChain::new("published_at")
        .or(|| doc.meta_property("article:published_time"))
        .or(|| doc.first_attr("time[datetime]", "datetime"))
        .resolve();

    let tags = collect_tags(
        doc,
        &[r#"a[class*="TopicList_topic"]"#, r#"a[href^="/topics/"]"#],
    );

    Ok(PlatformFields {
        title,
        description,
        image,
        site_name: Some("Zenn".to_string()),
        author,
        published_at,
        tags,
    })
}
