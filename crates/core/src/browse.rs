//! Searching and categorising the vocabulary for browsing.

use crate::vocabulary::Vocabulary;
use symcheck_types::{fold, Term};

/// Coarse body-system grouping, assigned by keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Respiratory,
    Neurological,
    Gastrointestinal,
    Musculoskeletal,
    General,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Respiratory,
        Category::Neurological,
        Category::Gastrointestinal,
        Category::Musculoskeletal,
        Category::General,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Respiratory => &["cough", "breath", "chest", "throat"],
            Category::Neurological => &["headache", "dizziness", "seizure", "memory"],
            Category::Gastrointestinal => &["nausea", "vomit", "stomach", "diarrhea"],
            Category::Musculoskeletal => &["pain", "ache", "joint", "muscle"],
            Category::General => &["fever", "fatigue", "weakness", "weight"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Respiratory => "respiratory",
            Category::Neurological => "neurological",
            Category::Gastrointestinal => "gastrointestinal",
            Category::Musculoskeletal => "musculoskeletal",
            Category::General => "general",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Respiratory => "Respiratory",
            Category::Neurological => "Neurological",
            Category::Gastrointestinal => "Gastrointestinal",
            Category::Musculoskeletal => "Musculoskeletal",
            Category::General => "General",
        }
    }

    /// Returns true when any keyword of this category occurs in `term`.
    pub fn matches(self, term: &str) -> bool {
        let folded = fold(term);
        self.keywords().iter().any(|k| folded.contains(k))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categories a term belongs to; a term may belong to several or none.
pub fn classify(term: &str) -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|category| category.matches(term))
        .collect()
}

/// Restricts browsing to one category, or lets every term through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn accepts(self, term: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => category.matches(term),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "all" {
            return Ok(CategoryFilter::All);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .map(CategoryFilter::Only)
            .ok_or_else(|| format!("unknown category '{wanted}'"))
    }
}

/// Case-insensitive substring search over the vocabulary, in vocabulary order.
///
/// A blank needle returns every term.
pub fn search<'v>(vocabulary: &'v Vocabulary, needle: &str) -> Vec<&'v Term> {
    let needle = fold(needle);
    vocabulary
        .iter()
        .filter(|term| term.key().contains(needle.as_str()))
        .collect()
}

/// Search followed by a category filter.
pub fn browse<'v>(vocabulary: &'v Vocabulary, needle: &str, filter: CategoryFilter) -> Vec<&'v Term> {
    search(vocabulary, needle)
        .into_iter()
        .filter(|term| filter.accepts(term.as_str()))
        .collect()
}

/// Term counts for the "all" view and for each category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub all: usize,
    pub by_category: Vec<(Category, usize)>,
}

/// Counts terms per category. A term matching several categories is counted in each.
pub fn category_counts(vocabulary: &Vocabulary) -> CategoryCounts {
    let by_category = Category::ALL
        .into_iter()
        .map(|category| {
            let count = vocabulary
                .iter()
                .filter(|term| category.matches(term.as_str()))
                .count();
            (category, count)
        })
        .collect();

    CategoryCounts {
        all: vocabulary.len(),
        by_category,
    }
}
