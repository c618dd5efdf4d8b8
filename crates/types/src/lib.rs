//! Validated text primitives shared across the symcheck crates.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Case-folds text for comparison: trims surrounding whitespace and lowercases.
///
/// Every comparison in the matcher goes through this function so that the query side and the
/// vocabulary side are folded identically.
pub fn fold(input: &str) -> String {
    input.trim().to_lowercase()
}

/// A vocabulary term.
///
/// A `Term` keeps the text exactly as it was supplied, which is what callers get back from a
/// match, alongside a folded key used for every comparison. The folded key is guaranteed to be
/// non-empty: a blank term would be contained in every query and so could never be matched
/// meaningfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    text: String,
    key: String,
}

impl Term {
    /// Creates a new `Term` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `Err(TextError::Empty)` if the input is empty or contains only whitespace.
    pub fn new(input: impl Into<String>) -> Result<Self, TextError> {
        let text = input.into();
        let key = fold(&text);
        if key.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self { text, key })
    }

    /// Returns the term exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the folded comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl serde::Serialize for Term {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> serde::Deserialize<'de> for Term {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Term::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_verbatim_text_and_folds_key() {
        let term = Term::new("  Sore Throat ").expect("valid term");
        assert_eq!(term.as_str(), "  Sore Throat ");
        assert_eq!(term.key(), "sore throat");
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(Term::new(""), Err(TextError::Empty));
        assert_eq!(Term::new(" \t\n"), Err(TextError::Empty));
    }

    #[test]
    fn deserialize_rejects_blank_term() {
        let err = serde_json::from_str::<Term>("\"   \"").expect_err("should reject blank");
        assert!(err.to_string().contains("cannot be empty"));

        let term: Term = serde_json::from_str("\"Cough\"").expect("valid term");
        assert_eq!(serde_json::to_string(&term).expect("serialize"), "\"Cough\"");
    }
}
