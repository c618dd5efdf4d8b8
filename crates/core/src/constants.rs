//! Constants used throughout the symcheck core crate.
//!
//! Built-in term lists live here as named constants so that callers (and tests) can pass
//! substitutes by reference instead of relying on module-level state.

/// Terms scanned for when neither segment matching nor the whole-text scan found anything.
pub const DEFAULT_FALLBACK_TERMS: &[&str] = &[
    "fever",
    "headache",
    "nausea",
    "pain",
    "fatigue",
    "dizziness",
    "cough",
    "sore throat",
    "cold",
    "runny nose",
];

/// Words that separate candidate phrases in a query, alongside `,` and `;`.
pub const DELIMITER_WORDS: &[&str] = &["and", "with", "plus", "also"];

/// Default vocabulary file when no explicit path is configured.
pub const DEFAULT_VOCABULARY_PATH: &str = "data/symptoms.json";

/// Number of vocabulary terms offered when a query could not be matched.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Example phrasings shown alongside suggestions.
pub const EXAMPLE_PHRASINGS: &[&str] = &[
    "I have fever and headache",
    "Experiencing nausea and dizziness",
    "Pain in chest and shortness of breath",
];

/// Environment variable naming the vocabulary file.
pub const VOCABULARY_ENV: &str = "SYMCHECK_VOCABULARY";

/// Environment variable selecting the fallback policy.
pub const FALLBACK_POLICY_ENV: &str = "SYMCHECK_FALLBACK_POLICY";

/// Environment variable bounding the number of suggestions.
pub const SUGGESTION_LIMIT_ENV: &str = "SYMCHECK_SUGGESTION_LIMIT";
