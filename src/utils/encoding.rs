//! Single-byte Latin-1 (ISO-8859-1) text codec.
//!
//! Latin-1 maps bytes 0x00..=0xFF one-to-one onto U+0000..=U+00FF, so no
//! lookup table is needed. `windows-1252` differs in 0x80..=0x9F and must
//! not be substituted here.

use crate::config::TextEncoding;

const REPLACEMENT: u8 = b'?';

pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encodes `text` as Latin-1. Characters outside U+0000..=U+00FF become `?`;
/// the second value is how many were replaced.
pub fn encode_latin1(text: &str) -> (Vec<u8>, usize) {
    let mut replaced = 0;
    let bytes = text
        .chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(b) => b,
            Err(_) => {
                replaced += 1;
                REPLACEMENT
            }
        })
        .collect();
    (bytes, replaced)
}

pub fn decode(bytes: &[u8], encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Latin1 => decode_latin1(bytes),
        TextEncoding::Utf8 => {
            let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

pub fn encode(text: &str, encoding: TextEncoding) -> (Vec<u8>, usize) {
    match encoding {
        TextEncoding::Latin1 => encode_latin1(text),
        TextEncoding::Utf8 => (text.as_bytes().to_vec(), 0),
    }
}
