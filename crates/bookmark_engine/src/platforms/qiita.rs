use crate::document::{ExtractError, FieldChain, PageDocument};

use super::{collect_tags, page_url, path_segment, Platform, PlatformFields};

/// Qiita articles live at `qiita.com/{user}/items/{id}`.
pub(super) fn extract(url: &str, doc: &PageDocument) -> Result<PlatformFields, ExtractError> {
    let page = page_url(Platform::Qiita, url)?;

    let title = FieldChain::new("title")
        .or(|| doc.meta_property("og:title"))
        .or(|| doc.first_text(r#"h1[itemprop="headline"]"#))
        .or(|| doc.first_text("article h1"))
        .or(|| doc.first_text("h1"))
        .resolve();

    let description = FieldChain::new("description")
        .or(|| doc.meta_property("og:description"))
        .or(|| doc.meta_name("description"))
        .resolve();

    let image = FieldChain::new("image")
        .or(|| doc.meta_property("og:image"))
        .or(|| doc.meta_name("twitter:image"))
        .resolve();

    let author = FieldChain::new("author")
        .or(|| doc.first_text(r#"[itemprop="author"] [itemprop="name"]"#))
        .or(|| doc.meta_name("author"))
        .or_value(path_segment(&page, 0).map(|user| format!("@{user}")))
        .resolve();

    let published_at = FieldChain::new("published_at")
        .or(|| doc.meta_property("article:published_time"))
        .or(|| doc.first_attr(r#"time[itemprop="datePublished"]"#, "datetime"))
        .or(|| doc.first_attr("time[datetime]", "datetime"))
        .resolve();

    let tags = collect_tags(doc, &[r#"a[href^="/tags/"]"#]);

    Ok(PlatformFields {
        title,
        description,
        image,
        site_name: Some("Qiita".to_string()),
        author,
        published_at,
        tags,
    })
}
