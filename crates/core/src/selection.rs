//! A user's working set of chosen terms.

use crate::matcher::MatchOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Ordered set of selected terms. Selection order is preserved and a term is held at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    terms: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `term` if absent, removes it if present.
    pub fn toggle(&mut self, term: &str) -> Toggle {
        if let Some(index) = self.terms.iter().position(|t| t == term) {
            self.terms.remove(index);
            Toggle::Removed
        } else {
            self.terms.push(term.to_owned());
            Toggle::Added
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    /// Adds every matched term that is not selected yet. Returns how many were added.
    pub fn extend_from_outcome(&mut self, outcome: &MatchOutcome) -> usize {
        let mut added = 0;
        for m in &outcome.matches {
            if !self.contains(&m.term) {
                self.terms.push(m.term.clone());
                added += 1;
            }
        }
        added
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }
}
