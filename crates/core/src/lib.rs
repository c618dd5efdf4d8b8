//! # symcheck core
//!
//! Core logic for turning free-text symptom descriptions into known vocabulary terms.
//!
//! This crate contains pure data operations:
//! - vocabulary construction and loading from JSON/YAML files
//! - the keyword matcher and its strategy chain
//! - browsing (search and categories), selections and clarification prompts
//!
//! **No transport concerns**: fetching a vocabulary over HTTP or rendering results belongs in the
//! calling application.

pub mod browse;
pub mod clarify;
pub mod config;
pub mod constants;
pub mod error;
pub mod matcher;
pub mod selection;
pub mod vocabulary;

pub use config::CoreConfig;
pub use error::{VocabularyError, VocabularyResult};
pub use matcher::{
    match_keywords, FallbackPolicy, KeywordMatcher, Match, MatchOutcome, MatchRule, Strategy,
};
pub use vocabulary::{load_vocabulary, Vocabulary};

use browse::CategoryFilter;
use clarify::Clarification;
use symcheck_types::Term;

/// A loaded vocabulary plus the configuration it was loaded with.
///
/// Built once per session; every query afterwards borrows it immutably.
#[derive(Clone, Debug)]
pub struct SymptomService {
    config: CoreConfig,
    vocabulary: Vocabulary,
}

impl SymptomService {
    /// Creates a service around an already-built vocabulary.
    pub fn new(config: CoreConfig, vocabulary: Vocabulary) -> Self {
        if vocabulary.is_empty() {
            tracing::warn!("vocabulary is empty; every query will return no matches");
        }
        Self { config, vocabulary }
    }

    /// Loads the vocabulary named by `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`VocabularyError`] if the vocabulary file cannot be read or parsed.
    pub fn load(config: CoreConfig) -> VocabularyResult<Self> {
        let vocabulary = load_vocabulary(config.vocabulary_path())?;
        Ok(Self::new(config, vocabulary))
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Matches one submitted message.
    pub fn match_query(&self, query: &str) -> MatchOutcome {
        self.config.matcher().match_query(query, &self.vocabulary)
    }

    /// Clarification prompt for an outcome with no matches.
    pub fn clarify(&self, outcome: &MatchOutcome) -> Option<Clarification> {
        clarify::clarify(outcome, &self.vocabulary, self.config.suggestion_limit())
    }

    pub fn browse(&self, needle: &str, filter: CategoryFilter) -> Vec<&Term> {
        browse::browse(&self.vocabulary, needle, filter)
    }
}
