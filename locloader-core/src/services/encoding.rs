use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use tracing::warn;

use crate::error::Result;

#[derive(Debug)]
pub struct DecodedText {
    pub text: String,
    /// Lowercase encoding label, e.g. `utf-8` or `windows-1252`
    pub encoding: String,
    pub had_errors: bool,
}

/// Reads a text file, honoring a BOM and falling back to a detected legacy
/// encoding when the bytes are not UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let decoded = decode(&bytes);

    if decoded.encoding != "utf-8" || decoded.had_errors {
        warn!(
            file = %path.display(),
            encoding = %decoded.encoding,
            lossy = decoded.had_errors,
            "file is not plain UTF-8, decoded with detected encoding"
        );
    }

    Ok(decoded.text)
}

pub fn decode(bytes: &[u8]) -> DecodedText {
    // BOM (UTF-8 EF BB BF, UTF-16 LE/BE)
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return DecodedText {
            text: text.into_owned(),
            encoding: encoding.name().to_lowercase(),
            had_errors,
        };
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return DecodedText {
            text: text.to_string(),
            encoding: UTF_8.name().to_lowercase(),
            had_errors: false,
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);

    let (text, _, had_errors) = encoding.decode(bytes);
    DecodedText {
        text: text.into_owned(),
        encoding: encoding.name().to_lowercase(),
        had_errors,
    }
}
