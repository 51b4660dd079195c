use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// How far into the document `<meta charset>` declarations are honoured.
const META_SNIFF_BYTES: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes with {encoding}: {message}")]
    DecodeFailure { encoding: String, message: String },
}

/// Decode raw bytes into UTF-8 using:
/// BOM -> Content-Type charset -> meta charset -> chardetng fallback.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedHtml, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(enc) = content_type
        .and_then(charset_from_content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, enc);
    }

    if let Some(enc) = sniff_meta_charset(bytes) {
        return decode_with(bytes, enc);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            if key.trim().eq_ignore_ascii_case("charset") {
                Some(value.trim_matches([' ', '"', '\''].as_ref()).to_string())
            } else {
                None
            }
        })
        .next()
}

/// Finds `charset=...` in the document head; covers both `<meta charset>` and the
/// `http-equiv="Content-Type"` form.
fn sniff_meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(META_SNIFF_BYTES)];
    let lowered: Vec<u8> = head.iter().map(u8::to_ascii_lowercase).collect();
    let needle = b"charset=";
    let start = lowered
        .windows(needle.len())
        .position(|window| window == needle)?
        + needle.len();

    let label: Vec<u8> = lowered[start..]
        .iter()
        .skip_while(|b| matches!(b, b'"' | b'\'' | b' '))
        .take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.'))
        .copied()
        .collect();
    Encoding::for_label(&label)
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<DecodedHtml, DecodeError> {
    let (text, _, had_errors) = enc.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: enc.name().to_string(),
            message: "decoding error".into(),
        });
    }
    Ok(DecodedHtml {
        html: text.into_owned(),
        encoding_label: enc.name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{charset_from_content_type, decode_html, sniff_meta_charset};

    #[test]
    fn content_type_charset_key_is_case_insensitive() {
        assert_eq!(
            charset_from_content_type("text/html; Charset=\"Shift_JIS\"").as_deref(),
            Some("Shift_JIS")
        );
        assert_eq!(charset_from_content_type("text/html"), None);
    }

    #[test]
    fn meta_charset_is_sniffed() {
        let html = br#"<html><head><meta charset="euc-jp"><title>x</title>"#;
        assert_eq!(sniff_meta_charset(html).map(|e| e.name()), Some("EUC-JP"));

        let equiv =
            br#"<meta http-equiv="Content-Type" content="text/html; charset=Shift_JIS">"#;
        assert_eq!(sniff_meta_charset(equiv).map(|e| e.name()), Some("Shift_JIS"));
    }

    #[test]
    fn shift_jis_body_decodes_via_meta() {
        // "日本" in Shift_JIS
        let mut bytes = br#"<meta charset="shift_jis"><p>"#.to_vec();
        bytes.extend_from_slice(&[0x93, 0xfa, 0x96, 0x7b]);
        let decoded = decode_html(&bytes, Some("text/html")).unwrap();
        assert!(decoded.html.contains("日本"));
        assert_eq!(decoded.encoding_label, "Shift_JIS");
    }

    #[test]
    fn utf8_bom_wins() {
        let decoded =
            decode_html(b"\xEF\xBB\xBFhello", Some("text/html; charset=ISO-8859-1")).unwrap();
        assert_eq!(decoded.html, "hello");
        assert_eq!(decoded.encoding_label, "UTF-8");
    }
}
