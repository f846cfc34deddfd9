use std::borrow::Cow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes text files as UTF-8, falling back to Latin-1.
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback never fails.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(e) => {
            tracing::debug!("not valid UTF-8 ({e}), decoding as Latin-1");
            Cow::Owned(bytes.iter().copied().map(char::from).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_is_borrowed() {
        let text = decode_text("café=coffee".as_bytes());
        assert!(matches!(text, Cow::Borrowed("café=coffee")));
    }

    #[test]
    fn strips_bom() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFcat"), "cat");
    }

    #[test]
    fn latin1_fallback() {
        // "café" with é as a single Latin-1 byte
        assert_eq!(decode_text(b"caf\xE9"), "café");
    }
}
