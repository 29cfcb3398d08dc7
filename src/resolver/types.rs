use std::collections::BTreeMap;

use serde::Serialize;

use crate::validator::LineType;

/// Immutable per-request input: the raw user string and whether the optional
/// upstream lookups should run on top of the offline validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberQuery {
    pub raw: String,
    pub deep_search: bool,
}

impl NumberQuery {
    pub fn new(raw: impl Into<String>, deep_search: bool) -> Self {
        Self {
            raw: raw.into(),
            deep_search,
        }
    }
}

/// The merged output of one resolution. Built fresh per request, mutated
/// field by field while fragments merge in precedence order, immutable once
/// handed back. Serialized as-is by the out-of-scope HTTP layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolutionResult {
    pub success: bool,
    pub valid: bool,
    pub country: String,
    /// `+`-prefixed country calling code, e.g. `+91`.
    pub calling_code: String,
    /// International display format.
    pub formatted: String,
    /// In-country dialing format.
    pub local_format: String,
    pub carrier: String,
    pub line_type: LineType,
    pub region: String,
    pub flag: String,
    pub timezones: Vec<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// In [0, 1] after the final clamp.
    pub confidence: f64,
    /// In [0, 1] after the final clamp; never decreased by merge signals.
    pub risk: f64,
    /// Ordered provenance: every source that actually contributed, once.
    pub sources: Vec<String>,
    /// Highest-precedence contributor, for diagnostics only.
    pub method: String,
    pub message: Option<String>,
    /// Field-level diagnostics (`<source>_error`) for skipped/failed lookups.
    pub diagnostics: BTreeMap<String, String>,
}

impl ResolutionResult {
    /// The degraded terminal outcome: structurally invalid number or
    /// unmatched text query.
    pub fn failure(method: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            valid: false,
            confidence: 0.0,
            method: method.to_string(),
            message: Some(message.into()),
            ..Default::default()
        }
    }
}
