use crate::document::{ExtractError, FieldChain, PageDocument};

use super::{collect_tags, PlatformFields};

pub(super) fn extract(_url: &str, doc: &PageDocument) -> Result<PlatformFields, ExtractError> {
    let title = FieldChain::new("title")
        .or(|| doc.meta_property("og:title"))
        .or(|| doc.first_text(r#"h1[data-testid="storyTitle"]"#))
        .or(|| doc.first_text("article h1"))
        .resolve();

    let description = FieldChain::new("description")
        .or(|| doc.meta_property("og:description"))
        .or(|| doc.meta_name("description"))
        .or(|| doc.first_text("article h2"))
        .resolve();

    let image = FieldChain::new("image")
        .or(|| doc.meta_property("og:image"))
        .or(|| doc.meta_name("twitter:image"))
        .or(|| doc.first_attr("article figure img", "src"))
        .resolve();

    let site_name = FieldChain::new("site_name")
        .or(|| doc.meta_property("og:site_name"))
        .or_value(Some("Medium".to_string()))
        .resolve();

    let author = FieldChain::new("author")
        .or(|| doc.meta_name("author"))
        .or(|| doc.first_text(r#"a[data-testid="authorName"]"#))
        .or(|| doc.first_text(r#"a[rel="author"]"#))
        .resolve();

    let published_at = FieldChain::new("published_at")
        .or(|| doc.meta_property("article:published_time"))
        .or(|| doc.first_attr(r#"[data-testid="storyPublishDate"]"#, "datetime"))
        .resolve();

    let tags = collect_tags(doc, &[r#"a[href*="/tag/"]"#]);

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
