//! Free-text country resolution. Strips query scaffolding, then fuzzy-matches
//! what remains against a process-wide index of country names and aliases.
//! This path only runs for input that is not number-shaped.

use log::trace;
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32String};
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::i18n::{self, Country};
use crate::sources::SourceFragment;

/// Matches below this similarity are rejected.
pub const ACCEPT_THRESHOLD: f64 = 0.70;

/// Query scaffolding removed before matching.
const STOP_WORDS: &[&str] = &[
    "code", "dial", "dialing", "phone", "number", "for", "of", "what", "is",
    "the", "country", "call", "location", "lookup",
];

/// Lowercased official names and aliases, each pointing at its country.
/// Built once at startup, read-only afterwards.
static NAME_INDEX: Lazy<Vec<(String, &'static Country)>> = Lazy::new(|| {
    let mut index = Vec::new();
    for country in i18n::all_countries() {
        index.push((country.name.to_lowercase(), country));
        for alias in country.aliases {
            index.push((alias.to_string(), country));
        }
    }
    index
});

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TextMatchError {
    #[error("Could not understand text query")]
    EmptyQuery,
    #[error("No country found for '{0}'")]
    NoMatch(String),
}

/// Fuzzy-matches free text against the country-name index.
///
/// Similarity is the pattern score against a candidate normalized by the
/// query's score against itself, so an exact (case-insensitive) name or
/// alias lands at 1.0. The single best candidate above
/// [`ACCEPT_THRESHOLD`] wins.
pub fn match_text(raw: &str) -> Result<SourceFragment, TextMatchError> {
    let lowered = raw.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty() && !STOP_WORDS.contains(t))
        .collect();
    if tokens.is_empty() {
        return Err(TextMatchError::EmptyQuery);
    }
    let query = tokens.join(" ");

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::parse(&query, CaseMatching::Ignore, Normalization::Smart);

    let self_haystack = Utf32String::from(query.as_str());
    let self_score = pattern
        .score(self_haystack.slice(..), &mut matcher)
        .unwrap_or(0);
    if self_score == 0 {
        return Err(TextMatchError::NoMatch(raw.to_string()));
    }

    // On equal scores the shorter candidate wins: an exact alias ("uk") must
    // beat a longer name it happens to prefix ("ukraine").
    let best = NAME_INDEX
        .iter()
        .filter_map(|(name, country)| {
            let haystack = Utf32String::from(name.as_str());
            pattern
                .score(haystack.slice(..), &mut matcher)
                .map(|score| (score, std::cmp::Reverse(name.len()), *country))
        })
        .max_by_key(|(score, shortness, _)| (*score, *shortness));

    let (score, _, country) = match best {
        Some(found) => found,
        None => return Err(TextMatchError::NoMatch(raw.to_string())),
    };

    let similarity = (score as f64 / self_score as f64).min(1.0);
    trace!(
        "text query {:?} best match {} at {:.2}",
        query, country.name, similarity
    );
    if similarity <= ACCEPT_THRESHOLD {
        return Err(TextMatchError::NoMatch(raw.to_string()));
    }

    Ok(SourceFragment {
        country: Some(country.name.to_string()),
        calling_code: Some(format!("+{}", country.calling_code)),
        confidence: Some(similarity),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_stop_words_and_matches_exactly() {
        let fragment = match_text("what is the country code for france").unwrap();
        assert_eq!(fragment.country.as_deref(), Some("France"));
        assert_eq!(fragment.calling_code.as_deref(), Some("+33"));
        assert!(fragment.confidence.unwrap() > 0.99);
    }

    #[test]
    fn resolves_aliases() {
        let fragment = match_text("dial code uae").unwrap();
        assert_eq!(fragment.country.as_deref(), Some("United Arab Emirates"));

        let fragment = match_text("uk phone code").unwrap();
        assert_eq!(fragment.country.as_deref(), Some("United Kingdom"));
    }

    #[test]
    fn stop_words_only_is_not_understandable() {
        assert_eq!(
            match_text("what is the number for"),
            Err(TextMatchError::EmptyQuery)
        );
    }

    #[test]
    fn gibberish_finds_no_country() {
        let err = match_text("xqzwv kjjy").unwrap_err();
        assert!(matches!(err, TextMatchError::NoMatch(_)));
    }

    #[test]
    fn confidence_stays_in_unit_interval() {
        let fragment = match_text("germany").unwrap();
        let confidence = fragment.confidence.unwrap();
        assert!((0.0..=1.0).contains(&confidence));
    }
}
