use lexi_core::WordPair;

/// Phrases loaded at start-up unless seeding is disabled
pub const SAMPLE_PAIRS: [(&str, &str); 10] = [
    ("hello", "bonjour"),
    ("goodbye", "au revoir"),
    ("thanks", "merci"),
    ("please", "s'il vous plaît"),
    ("yes", "oui"),
    ("no", "non"),
    ("good morning", "bonjour"),
    ("good evening", "bonsoir"),
    ("good night", "bonne nuit"),
    ("how are you", "comment allez-vous"),
];

pub fn sample_pairs() -> Vec<WordPair> {
    SAMPLE_PAIRS.iter().copied().map(WordPair::from).collect()
}
