use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct ErrorInvalidRegex(#[from] regex::Error);

/// Process-wide cache of compiled patterns. Numbering-plan tables store their
/// patterns as plain `&'static str`; compilation happens on first use and the
/// compiled regex is shared by every request afterwards.
pub struct PatternCache {
    cache: DashMap<&'static str, Arc<regex::Regex>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn get_regex(
        &self,
        pattern: &'static str,
    ) -> Result<Arc<regex::Regex>, ErrorInvalidRegex> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self
                .cache
                .entry(pattern)
                .or_try_insert_with(|| regex::Regex::new(pattern).map(Arc::new))?;
            Ok(entry.value().clone())
        }
    }

    /// Whether `s` is matched by `pattern` in its entirety.
    pub fn full_match(&self, pattern: &'static str, s: &str) -> bool {
        let regex = match self.get_regex(pattern) {
            Ok(regex) => regex,
            Err(err) => {
                // Plan tables are reviewed constants, a bad pattern is a crate bug.
                log::error!("invalid pattern in static table {:?}: {}", pattern, err);
                return false;
            }
        };
        match regex.find(s) {
            Some(matched) => matched.start() == 0 && matched.end() == s.len(),
            None => false,
        }
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}
