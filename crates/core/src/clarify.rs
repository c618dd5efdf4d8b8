//! Prompting the user when nothing in their message was recognised.

use crate::constants::EXAMPLE_PHRASINGS;
use crate::matcher::MatchOutcome;
use crate::vocabulary::Vocabulary;
use std::fmt;

/// Prompt shown when a message yielded no matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clarification {
    /// Leading vocabulary terms offered as a starting point.
    pub suggestions: Vec<String>,
    /// True when the vocabulary holds more terms than were suggested.
    pub truncated: bool,
}

/// Builds a clarification prompt for an empty outcome, or `None` when something matched.
pub fn clarify(outcome: &MatchOutcome, vocabulary: &Vocabulary, limit: usize) -> Option<Clarification> {
    if !outcome.is_empty() {
        return None;
    }

    let suggestions = vocabulary
        .iter()
        .take(limit)
        .map(|term| term.as_str().to_owned())
        .collect::<Vec<_>>();

    Some(Clarification {
        truncated: vocabulary.len() > suggestions.len(),
        suggestions,
    })
}

impl fmt::Display for Clarification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "I couldn't identify specific symptoms in your message. Please describe your symptoms clearly, such as:"
        )?;
        writeln!(f)?;
        for example in EXAMPLE_PHRASINGS {
            writeln!(f, "- \"{example}\"")?;
        }
        if !self.suggestions.is_empty() {
            writeln!(f)?;
            write!(
                f,
                "You can also select from common symptoms: {}",
                self.suggestions.join(", ")
            )?;
            if self.truncated {
                write!(f, "...")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
