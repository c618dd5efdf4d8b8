//! Free-text keyword matching against a vocabulary.
//!
//! Free text is noisy: users type "fever, headache and nausea" or "I have a bad cough". The
//! matcher runs an ordered chain of strategies and stops at the first one that finds anything:
//!
//! 1. [`Strategy::Segment`] splits the query on `,`, `;` and the words "and", "with", "plus",
//!    "also", then matches each phrase exactly or by substring containment in either direction.
//! 2. [`Strategy::WholeText`] looks for every vocabulary term anywhere in the query.
//! 3. [`Strategy::Fallback`] scans the query for a fixed list of common terms.
//!
//! Every comparison is case-insensitive. Matching is a pure function of its inputs.

use crate::constants::{DEFAULT_FALLBACK_TERMS, DELIMITER_WORDS};
use crate::vocabulary::Vocabulary;
use regex::Regex;
use std::sync::LazyLock;
use symcheck_types::fold;

static SEGMENT_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    let words = DELIMITER_WORDS.join("|");
    Regex::new(&format!(r"(?i)[,;]|\b(?:{words})\b")).expect("delimiter pattern is valid")
});

/// One strategy in the ordered fallback chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Segment,
    WholeText,
    Fallback,
}

impl Strategy {
    /// Strategies in the order they are tried.
    pub const CHAIN: [Strategy; 3] = [Strategy::Segment, Strategy::WholeText, Strategy::Fallback];
}

/// The rule that confirmed a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// A phrase equalled a vocabulary term.
    ExactSegment,
    /// A phrase and a vocabulary term contained one another.
    SubstringSegment,
    /// A vocabulary term occurred somewhere in the query.
    WholeTextScan,
    /// A built-in fallback term occurred somewhere in the query.
    FixedFallback,
}

/// Whether fallback terms outside the vocabulary may be returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Return any fallback term found in the query, even if it is not a vocabulary term.
    #[default]
    Permissive,
    /// Only return fallback terms that are also vocabulary terms, in the vocabulary's spelling.
    Strict,
}

impl std::str::FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(FallbackPolicy::Permissive),
            "strict" => Ok(FallbackPolicy::Strict),
            other => Err(format!(
                "unknown fallback policy '{other}' (expected 'permissive' or 'strict')"
            )),
        }
    }
}

/// A vocabulary (or, under [`FallbackPolicy::Permissive`], built-in fallback) term found in a
/// query, tagged with the rule that found it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Match {
    pub term: String,
    pub rule: MatchRule,
}

/// The result of matching one query.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct MatchOutcome {
    pub matches: Vec<Match>,
    /// The strategy that produced the matches, `None` when nothing matched.
    pub strategy: Option<Strategy>,
}

impl MatchOutcome {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matched terms in discovery order.
    pub fn terms(&self) -> Vec<String> {
        self.matches.iter().map(|m| m.term.clone()).collect()
    }

    /// Returns true when every matched term is a member of `vocabulary`.
    pub fn within_vocabulary(&self, vocabulary: &Vocabulary) -> bool {
        self.matches
            .iter()
            .all(|m| vocabulary.terms().iter().any(|t| t.as_str() == m.term))
    }
}

/// Collects matches in discovery order, ignoring terms already recorded.
#[derive(Default)]
struct Recorder {
    matches: Vec<Match>,
}

impl Recorder {
    fn has(&self, term: &str) -> bool {
        self.matches.iter().any(|m| m.term == term)
    }

    fn record(&mut self, term: &str, rule: MatchRule) {
        if !self.has(term) {
            self.matches.push(Match {
                term: term.to_owned(),
                rule,
            });
        }
    }
}

/// Splits a query into trimmed, non-empty candidate phrases.
pub fn segment(query: &str) -> Vec<&str> {
    SEGMENT_DELIMITERS
        .split(query)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Matches free text against a vocabulary.
///
/// The fallback list is borrowed so callers can substitute their own.
#[derive(Clone, Copy, Debug)]
pub struct KeywordMatcher<'a> {
    fallback_terms: &'a [&'a str],
    fallback_policy: FallbackPolicy,
}

impl Default for KeywordMatcher<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordMatcher<'static> {
    pub fn new() -> Self {
        Self {
            fallback_terms: DEFAULT_FALLBACK_TERMS,
            fallback_policy: FallbackPolicy::default(),
        }
    }
}

impl<'a> KeywordMatcher<'a> {
    pub fn with_fallback_terms<'b>(self, fallback_terms: &'b [&'b str]) -> KeywordMatcher<'b> {
        KeywordMatcher {
            fallback_terms,
            fallback_policy: self.fallback_policy,
        }
    }

    pub fn with_fallback_policy(mut self, fallback_policy: FallbackPolicy) -> Self {
        self.fallback_policy = fallback_policy;
        self
    }

    pub fn fallback_policy(&self) -> FallbackPolicy {
        self.fallback_policy
    }

    /// Matches `query` against `vocabulary`.
    ///
    /// Never fails: an empty query, an empty vocabulary or text with nothing recognisable all
    /// produce an empty outcome.
    pub fn match_query(&self, query: &str, vocabulary: &Vocabulary) -> MatchOutcome {
        if vocabulary.is_empty() {
            tracing::debug!("empty vocabulary, skipping match");
            return MatchOutcome::default();
        }

        for strategy in Strategy::CHAIN {
            let matches = self.run(strategy, query, vocabulary);
            if !matches.is_empty() {
                tracing::debug!(
                    "strategy {:?} matched {} term(s)",
                    strategy,
                    matches.len()
                );
                return MatchOutcome {
                    matches,
                    strategy: Some(strategy),
                };
            }
            tracing::trace!("strategy {:?} found nothing", strategy);
        }

        MatchOutcome::default()
    }

    /// Runs a single strategy in isolation.
    pub fn run(&self, strategy: Strategy, query: &str, vocabulary: &Vocabulary) -> Vec<Match> {
        match strategy {
            Strategy::Segment => match_segments(query, vocabulary),
            Strategy::WholeText => scan_whole_text(query, vocabulary),
            Strategy::Fallback => self.scan_fallback(query, vocabulary),
        }
    }

    /// Scans the query for the fallback terms, in fallback-list order.
    ///
    /// Under [`FallbackPolicy::Strict`] only vocabulary members are kept. Any such member in the
    /// query is already found by [`Strategy::WholeText`], so through [`Self::match_query`] the
    /// strict scan never returns anything; it only yields matches via
    /// `run(Strategy::Fallback, ..)`.
    fn scan_fallback(&self, query: &str, vocabulary: &Vocabulary) -> Vec<Match> {
        let folded = fold(query);
        let mut recorder = Recorder::default();

        for &candidate in self.fallback_terms {
            let key = fold(candidate);
            if key.is_empty() || !folded.contains(&key) {
                continue;
            }
            match self.fallback_policy {
                FallbackPolicy::Permissive => recorder.record(candidate, MatchRule::FixedFallback),
                FallbackPolicy::Strict => {
                    if let Some(term) = vocabulary.get(candidate) {
                        recorder.record(term.as_str(), MatchRule::FixedFallback);
                    }
                }
            }
        }

        recorder.matches
    }
}

fn match_segments(query: &str, vocabulary: &Vocabulary) -> Vec<Match> {
    let mut recorder = Recorder::default();

    // A query that is itself a term wins outright, even if the term contains a delimiter.
    if let Some(term) = vocabulary.get(query) {
        recorder.record(term.as_str(), MatchRule::ExactSegment);
        return recorder.matches;
    }

    for phrase in segment(query) {
        let phrase = fold(phrase);

        if let Some(term) = vocabulary.iter().find(|t| t.key() == phrase) {
            recorder.record(term.as_str(), MatchRule::ExactSegment);
            continue;
        }

        let partial = vocabulary
            .iter()
            .find(|t| t.key().contains(phrase.as_str()) || phrase.contains(t.key()));
        if let Some(term) = partial {
            recorder.record(term.as_str(), MatchRule::SubstringSegment);
        }
    }

    recorder.matches
}

fn scan_whole_text(query: &str, vocabulary: &Vocabulary) -> Vec<Match> {
    let folded = fold(query);
    let mut recorder = Recorder::default();

    for term in vocabulary {
        if folded.contains(term.key()) {
            recorder.record(term.as_str(), MatchRule::WholeTextScan);
        }
    }

    recorder.matches
}

/// Matches `query` against `vocabulary` with the default fallback list and policy.
pub fn match_keywords<I, S>(query: &str, vocabulary: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let vocabulary = Vocabulary::from_terms(vocabulary);
    KeywordMatcher::new().match_query(query, &vocabulary).terms()
}
