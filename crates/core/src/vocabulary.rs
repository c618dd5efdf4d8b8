//! The vocabulary of known terms.
//!
//! A vocabulary is loaded once per session (typically from the "list known symptoms" payload of
//! a backend, saved to disk) and then shared immutably by every query.

use crate::{VocabularyError, VocabularyResult};
use serde::Deserialize;
use std::path::Path;
use symcheck_types::{fold, Term};

/// An ordered, de-duplicated sequence of known terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<Term>,
}

impl Vocabulary {
    /// Builds a vocabulary from raw strings.
    ///
    /// Insertion order is preserved. Blank entries and case-insensitive duplicates are dropped
    /// (the first spelling wins), so construction never fails.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self::default();
        for raw in terms {
            let raw = raw.into();
            match Term::new(raw.as_str()) {
                Ok(term) => {
                    if vocabulary.contains(term.key()) {
                        tracing::debug!("dropping duplicate vocabulary term: {:?}", raw);
                        continue;
                    }
                    vocabulary.terms.push(term);
                }
                Err(_) => tracing::debug!("dropping blank vocabulary term"),
            }
        }
        vocabulary
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns true when `text` folds to the key of a known term.
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    /// Looks up the stored term whose key equals the folded `text`.
    pub fn get(&self, text: &str) -> Option<&Term> {
        let key = fold(text);
        self.terms.iter().find(|term| term.key() == key)
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

/// Wire shapes accepted for a vocabulary document.
///
/// Either a bare list of strings or the `{ "symptoms": [...] }` object returned by the symptom
/// listing endpoint.
#[derive(Deserialize)]
#[serde(untagged)]
enum VocabularyWire {
    List(Vec<String>),
    Object(VocabularyObjectWire),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VocabularyObjectWire {
    symptoms: Vec<String>,
}

impl VocabularyWire {
    fn into_terms(self) -> Vec<String> {
        match self {
            VocabularyWire::List(terms) => terms,
            VocabularyWire::Object(object) => object.symptoms,
        }
    }
}

fn translation_error<E: std::fmt::Display>(err: serde_path_to_error::Error<E>) -> VocabularyError {
    let path = err.path().to_string();
    let source = err.into_inner();
    let path = if path.is_empty() || path == "." {
        "<root>"
    } else {
        path.as_str()
    };
    VocabularyError::Translation(format!("{path}: {source}"))
}

/// Parses a vocabulary from JSON text.
pub fn parse_json(text: &str) -> VocabularyResult<Vocabulary> {
    // Untagged enums hide the failing element, so try the list shape through the path tracker
    // first and only then the object shape.
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| VocabularyError::Translation(format!("<root>: {e}")))?;

    let terms = if value.is_array() {
        serde_path_to_error::deserialize::<_, Vec<String>>(value).map_err(translation_error)?
    } else {
        serde_path_to_error::deserialize::<_, VocabularyObjectWire>(value)
            .map_err(translation_error)?
            .symptoms
    };

    Ok(Vocabulary::from_terms(terms))
}

/// Parses a vocabulary from YAML text.
pub fn parse_yaml(text: &str) -> VocabularyResult<Vocabulary> {
    let value: serde_yaml::Value = serde_yaml::from_str(text)
        .map_err(|e| VocabularyError::Translation(format!("<root>: {e}")))?;

    let terms = match value {
        serde_yaml::Value::Sequence(_) => {
            serde_path_to_error::deserialize::<_, Vec<String>>(value).map_err(translation_error)?
        }
        serde_yaml::Value::Mapping(_) => {
            serde_path_to_error::deserialize::<_, VocabularyObjectWire>(value)
                .map_err(translation_error)?
                .symptoms
        }
        other => serde_yaml::from_value::<VocabularyWire>(other)
            .map_err(|e| VocabularyError::Translation(format!("<root>: {e}")))?
            .into_terms(),
    };

    Ok(Vocabulary::from_terms(terms))
}

/// Loads a vocabulary file, choosing the parser by extension.
///
/// # Errors
///
/// - `UnsupportedFormat` for extensions other than `.json`, `.yaml` and `.yml`
/// - `FileRead` if the file cannot be read
/// - `Translation` if the contents do not match an accepted shape
pub fn load_vocabulary(path: &Path) -> VocabularyResult<Vocabulary> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let parse: fn(&str) -> VocabularyResult<Vocabulary> = match extension.as_str() {
        "json" => parse_json,
        "yaml" | "yml" => parse_yaml,
        _ => {
            return Err(VocabularyError::UnsupportedFormat(
                path.display().to_string(),
            ))
        }
    };

    let contents = std::fs::read_to_string(path).map_err(VocabularyError::FileRead)?;
    let vocabulary = parse(&contents)?;
    tracing::info!(
        "loaded {} vocabulary terms from {}",
        vocabulary.len(),
        path.display()
    );
    Ok(vocabulary)
}
