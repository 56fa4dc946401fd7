//! Entry name recovery for package containers
//!
//! Zip entries written by the original authoring tool may carry their paths
//! in a legacy single-byte codepage instead of UTF-8, and the recovered text
//! may additionally contain percent-style URI escapes. Both layers are
//! undone here before any path touches the filesystem.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Legacy single-byte encoding used for non-Unicode entry names.
///
/// One value is recognized today; the dispatch is kept open so further
/// codepages can be added without touching the recovery logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LegacyEncoding {
    /// IBM code page 866 (DOS Cyrillic).
    #[default]
    Cp866,
}

impl LegacyEncoding {
    /// Decode raw name bytes under this encoding.
    fn decode<'a>(self, raw: &'a [u8]) -> Cow<'a, str> {
        match self {
            LegacyEncoding::Cp866 => {
                let (text, _, _) = encoding_rs::IBM866.decode(raw);
                text
            }
        }
    }
}

/// Recover an entry's true filename from its raw stored bytes.
///
/// Names that are already valid Unicode text are used as-is, so recovery is
/// idempotent. Anything else is decoded under `encoding`. Percent escapes
/// left behind by the authoring tool (`%20` and friends) are then decoded;
/// a `%` that does not introduce a valid UTF-8 escape sequence is kept
/// literally.
pub fn recover_entry_name(raw: &[u8], encoding: LegacyEncoding) -> String {
    let name = match std::str::from_utf8(raw) {
        Ok(name) => Cow::Borrowed(name),
        Err(_) => encoding.decode(raw),
    };
    decode_percent_escapes(&name)
}

fn decode_percent_escapes(name: &str) -> String {
    match percent_decode_str(name).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        // Escapes that decode to invalid UTF-8 were never percent-encoding
        Err(_) => name.to_string(),
    }
}
