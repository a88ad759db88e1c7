//! Keyword tables for question classification and polarity.
//!
//! Entries are lower-case word sequences matched on whole-word
//! boundaries.

use crate::domain::Domain;

/// Keywords per domain, indexed by `domain.index()`.
pub const DOMAIN_KEYWORDS: [&[&str]; 8] = [
    // Love
    &[
        "love", "date", "dating", "relationship", "partner", "boyfriend", "girlfriend", "crush",
        "romance", "romantic", "marry", "marriage", "propose", "kiss", "ex", "flirt", "breakup",
        "break up", "wedding", "spouse", "husband", "wife", "text him", "text her",
    ],
    // Career
    &[
        "job", "career", "boss", "work", "promotion", "interview", "resume", "apply", "raise",
        "office", "project", "client", "business", "quit", "hire", "coworker", "meeting",
        "pitch", "startup",
    ],
    // Money
    &[
        "money", "invest", "investment", "buy", "purchase", "spend", "loan", "debt", "savings",
        "stock", "stocks", "crypto", "budget", "salary", "rent", "mortgage", "sell", "bet",
        "lend",
    ],
    // Health
    &[
        "health", "doctor", "exercise", "workout", "gym", "diet", "run", "running", "sleep",
        "surgery", "medication", "therapy", "sick", "yoga", "marathon", "fast", "detox",
    ],
    // Social
    &[
        "friend", "friends", "party", "social", "family", "call", "invite", "hang out",
        "meet up", "network", "networking", "reunion", "go out", "event", "host",
    ],
    // Decisions
    &[
        "decide", "decision", "choose", "choice", "contract", "commit", "move", "moving",
        "relocate", "plan", "agree", "deal", "sign the", "next step",
    ],
    // Creativity
    &[
        "create", "write", "writing", "paint", "painting", "art", "music", "design", "draw",
        "creative", "book", "song", "film", "photography", "craft", "perform", "publish",
    ],
    // Spiritual
    &[
        "meditate", "meditation", "pray", "prayer", "spiritual", "retreat", "tarot", "journal",
        "ritual", "manifest", "temple", "church", "soul", "purpose", "universe",
    ],
];

/// Phrases marking a withdrawing ("pull") action.
pub const PULL_PHRASES: &[&str] = &[
    "rest", "wait", "stay home", "stay in", "hold off", "take a break", "postpone", "skip",
    "cancel", "pause", "relax", "slow down", "sleep in", "delay", "step back", "lie low",
];

/// Phrases marking a negated question ("should I not ...").
pub const NEGATION_PHRASES: &[&str] = &[
    "should i not",
    "shouldn't i",
    "should i avoid",
    "is it bad to",
    "should i refrain",
    "should i stop",
];

/// Keywords of one domain.
pub fn keywords(domain: Domain) -> &'static [&'static str] {
    DOMAIN_KEYWORDS[domain.index()]
}

/// Lower-case text reduced to single-space separated words and padded
/// with a space on each side, so `" kw "` lookups match whole words.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' => '\'',
            c if c.is_alphanumeric() || c == '\'' => c,
            _ => ' ',
        })
        .collect();
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    format!(" {} ", words.join(" "))
}

/// Whether a phrase occurs on word boundaries in normalized text.
pub fn contains_phrase(normalized: &str, phrase: &str) -> bool {
    normalized.contains(&format!(" {phrase} "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ALL_DOMAINS;

    #[test]
    fn normalize_strips_punctuation() {
        assert_eq!(normalize("Should I  text HIM?!"), " should i text him ");
        assert_eq!(normalize("Shouldn’t I go?"), " shouldn't i go ");
    }

    #[test]
    fn whole_word_only() {
        let t = normalize("I love working out");
        assert!(contains_phrase(&t, "love"));
        assert!(!contains_phrase(&t, "work"));
        assert!(!contains_phrase(&t, "workout"));
    }

    #[test]
    fn keywords_are_normalized_lower_case() {
        for d in ALL_DOMAINS {
            for kw in keywords(d) {
                assert_eq!(normalize(kw).trim(), *kw, "{kw}");
            }
        }
        for p in PULL_PHRASES.iter().chain(NEGATION_PHRASES) {
            assert_eq!(normalize(p).trim(), *p);
        }
    }
}
