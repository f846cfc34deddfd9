use unicode_normalization::UnicodeNormalization;

/// Canonical form used for every key and translation stored in a tree.
pub fn normalize(text: &str) -> String {
    let text = text.trim();

    if text.is_empty() {
        return String::new();
    }

    // NFKC first so compatibility forms (ligatures, full-width letters) fold before lowercasing
    let text: String = text.nfkc().collect();

    text.replace(['\n', '\r'], " ").trim().to_lowercase()
}

/// Normalizes `text`, rejecting input that is empty once normalized.
pub(crate) fn normalize_required(text: &str) -> Option<String> {
    let normalized = normalize(text);
    (!normalized.is_empty()).then_some(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Hello "), "hello");
        assert_eq!(normalize("S'il Vous Plaît"), "s'il vous plaît");
    }

    #[test]
    fn folds_compatibility_forms() {
        // U+FB01 LATIN SMALL LIGATURE FI
        assert_eq!(normalize("\u{FB01}n"), "fin");
        // decomposed e + combining acute composes to é
        assert_eq!(normalize("cafe\u{301}"), "café");
    }

    #[test]
    fn blank_input_is_rejected() {
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize_required("\n\t"), None);
        assert_eq!(normalize_required("Oui"), Some("oui".to_string()));
    }
}
