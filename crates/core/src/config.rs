//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services. Nothing
//! in the core reads process-wide environment variables while matching; the parse helpers below
//! take the raw values so binaries decide where they come from and tests never touch the
//! environment.

use crate::constants::{DEFAULT_SUGGESTION_LIMIT, DEFAULT_VOCABULARY_PATH};
use crate::matcher::{FallbackPolicy, KeywordMatcher};
use crate::{VocabularyError, VocabularyResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    vocabulary_path: PathBuf,
    fallback_policy: FallbackPolicy,
    suggestion_limit: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(
        vocabulary_path: PathBuf,
        fallback_policy: FallbackPolicy,
        suggestion_limit: usize,
    ) -> VocabularyResult<Self> {
        if vocabulary_path.as_os_str().is_empty() {
            return Err(VocabularyError::InvalidInput(
                "vocabulary_path cannot be empty".into(),
            ));
        }
        if suggestion_limit == 0 {
            return Err(VocabularyError::InvalidInput(
                "suggestion_limit must be at least 1".into(),
            ));
        }

        Ok(Self {
            vocabulary_path,
            fallback_policy,
            suggestion_limit,
        })
    }

    /// Build a `CoreConfig` from raw (typically environment) values.
    ///
    /// Missing or blank values fall back to the defaults.
    pub fn from_values(
        vocabulary_path: Option<String>,
        fallback_policy: Option<String>,
        suggestion_limit: Option<String>,
    ) -> VocabularyResult<Self> {
        Self::new(
            vocabulary_path_from_env_value(vocabulary_path),
            fallback_policy_from_env_value(fallback_policy)?,
            suggestion_limit_from_env_value(suggestion_limit)?,
        )
    }

    /// Returns this configuration with a different fallback policy.
    pub fn with_fallback_policy(mut self, fallback_policy: FallbackPolicy) -> Self {
        self.fallback_policy = fallback_policy;
        self
    }

    pub fn vocabulary_path(&self) -> &Path {
        &self.vocabulary_path
    }

    pub fn fallback_policy(&self) -> FallbackPolicy {
        self.fallback_policy
    }

    pub fn suggestion_limit(&self) -> usize {
        self.suggestion_limit
    }

    /// A matcher using the built-in fallback list and the configured policy.
    pub fn matcher(&self) -> KeywordMatcher<'static> {
        KeywordMatcher::new().with_fallback_policy(self.fallback_policy)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolve the vocabulary path, defaulting when `value` is `None` or blank.
pub fn vocabulary_path_from_env_value(value: Option<String>) -> PathBuf {
    non_blank(value)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_VOCABULARY_PATH))
}

/// Parse the fallback policy from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default policy.
pub fn fallback_policy_from_env_value(value: Option<String>) -> VocabularyResult<FallbackPolicy> {
    non_blank(value)
        .map(|v| v.parse::<FallbackPolicy>())
        .transpose()
        .map(Option::unwrap_or_default)
        .map_err(VocabularyError::InvalidInput)
}

/// Parse the suggestion limit from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_SUGGESTION_LIMIT`].
pub fn suggestion_limit_from_env_value(value: Option<String>) -> VocabularyResult<usize> {
    let Some(value) = non_blank(value) else {
        return Ok(DEFAULT_SUGGESTION_LIMIT);
    };

    match value.parse::<usize>() {
        Ok(0) => Err(VocabularyError::InvalidInput(
            "suggestion limit must be at least 1".into(),
        )),
        Ok(limit) => Ok(limit),
        Err(e) => Err(VocabularyError::InvalidInput(format!(
            "invalid suggestion limit '{value}': {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_missing_and_blank_values() {
        let config = CoreConfig::from_values(None, Some("  ".into()), None).expect("defaults");
        assert_eq!(config.vocabulary_path(), Path::new(DEFAULT_VOCABULARY_PATH));
        assert_eq!(config.fallback_policy(), FallbackPolicy::Permissive);
        assert_eq!(config.suggestion_limit(), DEFAULT_SUGGESTION_LIMIT);
    }

    #[test]
    fn explicit_values_are_used() {
        let config = CoreConfig::from_values(
            Some("/srv/vocab.yaml".into()),
            Some("STRICT".into()),
            Some("3".into()),
        )
        .expect("valid config");
        assert_eq!(config.vocabulary_path(), Path::new("/srv/vocab.yaml"));
        assert_eq!(config.fallback_policy(), FallbackPolicy::Strict);
        assert_eq!(config.matcher().fallback_policy(), FallbackPolicy::Strict);
        assert_eq!(config.suggestion_limit(), 3);
    }

    #[test]
    fn with_fallback_policy_keeps_other_settings() {
        let config = CoreConfig::from_values(Some("vocab.yaml".into()), None, Some("4".into()))
            .expect("valid config")
            .with_fallback_policy(FallbackPolicy::Strict);
        assert_eq!(config.fallback_policy(), FallbackPolicy::Strict);
        assert_eq!(config.matcher().fallback_policy(), FallbackPolicy::Strict);
        assert_eq!(config.vocabulary_path(), Path::new("vocab.yaml"));
        assert_eq!(config.suggestion_limit(), 4);
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = fallback_policy_from_env_value(Some("loose".into())).expect_err("unknown");
        assert!(matches!(err, VocabularyError::InvalidInput(msg) if msg.contains("loose")));
    }

    #[test]
    fn rejects_bad_suggestion_limits() {
        let err = suggestion_limit_from_env_value(Some("0".into())).expect_err("zero");
        assert!(matches!(err, VocabularyError::InvalidInput(msg) if msg.contains("at least 1")));

        let err = suggestion_limit_from_env_value(Some("ten".into())).expect_err("not a number");
        assert!(matches!(err, VocabularyError::InvalidInput(msg) if msg.contains("'ten'")));
    }

    #[test]
    fn new_rejects_empty_path() {
        let err = CoreConfig::new(PathBuf::new(), FallbackPolicy::Strict, 10).expect_err("empty");
        assert!(matches!(err, VocabularyError::InvalidInput(msg) if msg.contains("cannot be empty")));
    }
}
