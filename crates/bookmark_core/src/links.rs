use url::Url;

const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";
const FAVICON_SIZE: u32 = 32;

/// Hostname of `url` without a leading `www.`.
///
/// Unparseable input is returned unchanged so callers can always display something.
pub fn extract_domain(url: &str) -> String {
    match Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_owned)) {
        Some(host) => host
            .strip_prefix("www.")
            .map(ToOwned::to_owned)
            .unwrap_or(host),
        None => url.to_string(),
    }
}

pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

/// 32x32 favicon served by Google's favicon service, or `None` for unparseable input.
pub fn favicon_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(format!("{FAVICON_SERVICE}?domain={host}&sz={FAVICON_SIZE}"))
}

/// Lines of pasted text that look like http(s) URLs, trimmed, in input order.
pub fn valid_urls(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| looks_like_web_url(line))
        .map(ToOwned::to_owned)
        .collect()
}

fn looks_like_web_url(line: &str) -> bool {
    let rest = line
        .strip_prefix("https://")
        .or_else(|| line.strip_prefix("http://"));
    matches!(rest, Some(rest) if !rest.is_empty())
}
