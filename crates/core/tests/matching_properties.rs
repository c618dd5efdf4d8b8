use symcheck_core::{match_keywords, FallbackPolicy, KeywordMatcher, Strategy, Vocabulary};

const VOCABULARIES: &[&[&str]] = &[
    &["fever", "cough", "nausea"],
    &["sore throat", "runny nose", "cold"],
    &["Chest Pain", "pain", "shortness of breath and wheezing", "headache"],
    &["back pain", "pain", "plus-size clothing"],
];

#[test]
fn querying_a_term_returns_exactly_that_term() {
    for vocabulary in VOCABULARIES {
        for term in *vocabulary {
            assert_eq!(
                match_keywords(term, vocabulary.iter().copied()),
                vec![term.to_string()],
                "query {term:?} against {vocabulary:?}"
            );
        }
    }
}

#[test]
fn empty_query_returns_nothing() {
    for vocabulary in VOCABULARIES {
        assert!(match_keywords("", vocabulary.iter().copied()).is_empty());
    }
}

#[test]
fn matching_is_idempotent_and_never_duplicates() {
    let queries = [
        "fever, fever, fever",
        "cough with cough plus more cough",
        "pain and back pain and pain",
        "runny nose; sore throat and a cold",
    ];
    for vocabulary in VOCABULARIES {
        let vocabulary = Vocabulary::from_terms(vocabulary.iter().copied());
        let matcher = KeywordMatcher::new();
        for query in queries {
            let first = matcher.match_query(query, &vocabulary);
            let second = matcher.match_query(query, &vocabulary);
            assert_eq!(first, second);

            let terms = first.terms();
            let mut unique = terms.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(terms.len(), unique.len(), "duplicates in {terms:?}");
        }
    }
}

#[test]
fn segment_and_whole_text_stay_within_vocabulary() {
    let queries = [
        "I feel a pain in my chest",
        "nausea since this morning",
        "runny nose plus fever",
        "coughing fits",
    ];
    for vocabulary in VOCABULARIES {
        let vocabulary = Vocabulary::from_terms(vocabulary.iter().copied());
        let outcome_matcher = KeywordMatcher::new();
        for query in queries {
            let outcome = outcome_matcher.match_query(query, &vocabulary);
            if outcome.strategy != Some(Strategy::Fallback) {
                assert!(outcome.within_vocabulary(&vocabulary), "{query:?}");
            }

            let strict = outcome_matcher
                .with_fallback_policy(FallbackPolicy::Strict)
                .match_query(query, &vocabulary);
            assert!(strict.within_vocabulary(&vocabulary), "{query:?}");
        }
    }
}

#[test]
fn discovery_order_wins_over_vocabulary_order() {
    assert_eq!(
        match_keywords("I have cough and fever", ["fever", "cough", "nausea"]),
        vec!["cough", "fever"]
    );
}

#[test]
fn comma_separated_exact_terms() {
    assert_eq!(
        match_keywords("sore throat, runny nose", ["sore throat", "runny nose"]),
        vec!["sore throat", "runny nose"]
    );
}

#[test]
fn paraphrase_without_literal_overlap_matches_nothing() {
    assert!(match_keywords("my head really hurts", ["headache"]).is_empty());
}

#[test]
fn nauseous_is_not_nausea() {
    // "nausea" is not a substring of "nauseous", so no tier fires.
    let vocabulary = Vocabulary::from_terms(["dizziness"]);
    let outcome = KeywordMatcher::new().match_query("feeling dizzy and nauseous", &vocabulary);
    assert!(outcome.is_empty());
    assert_eq!(outcome.strategy, None);
}

#[test]
fn fallback_fires_only_after_vocabulary_tiers() {
    let vocabulary = Vocabulary::from_terms(["dizziness"]);
    let outcome = KeywordMatcher::new().match_query("feeling dizzy with nausea", &vocabulary);
    assert_eq!(outcome.terms(), vec!["nausea"]);
    assert_eq!(outcome.strategy, Some(Strategy::Fallback));
}

#[test]
fn fallback_hits_follow_fallback_list_order() {
    // "nausea" is seen first and twice, but "fever" precedes it in the fallback list.
    assert_eq!(
        match_keywords("nausea then a fever, NAUSEA again", ["rash"]),
        vec!["fever", "nausea"]
    );
}

#[test]
fn empty_vocabulary_is_not_an_error() {
    let empty: [&str; 0] = [];
    assert!(match_keywords("fever and cough", empty).is_empty());
}
