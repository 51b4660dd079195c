use engine_logging::engine_debug;
use url::Url;

/// Substrings that mark a URL as a plausible image asset. Anything else (tracking
/// pixels, HTML pages, API endpoints) is dropped.
const IMAGE_MARKERS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".webp", "images/", "image/", "media/", "avatar", "thumb",
];

/// Absolute image URL for `candidate`, or an empty string when it is missing,
/// unresolvable, or does not look like an image.
///
/// Relative paths resolve against the origin of `page_url`, not its directory.
pub fn normalize_image_url(candidate: &str, page_url: &str) -> String {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return String::new();
    }

    let absolute = if candidate.starts_with("http") {
        candidate.to_string()
    } else {
        match resolve_against_origin(candidate, page_url) {
            Some(resolved) => resolved,
            None => {
                engine_debug!("dropping unresolvable image {candidate:?} on {page_url}");
                return String::new();
            }
        }
    };

    if looks_like_image(&absolute) {
        absolute
    } else {
        engine_debug!("dropping non-image url {absolute}");
        String::new()
    }
}

fn resolve_against_origin(candidate: &str, page_url: &str) -> Option<String> {
    let page = Url::parse(page_url).ok()?;
    let origin = page.origin();
    if !origin.is_tuple() {
        return None;
    }
    let base = Url::parse(&format!("{}/", origin.ascii_serialization())).ok()?;
    base.join(candidate).ok().map(String::from)
}

fn looks_like_image(url: &str) -> bool {
    let lowered = url.to_ascii_lowercase();
    IMAGE_MARKERS.iter().any(|marker| lowered.contains(marker))
}
