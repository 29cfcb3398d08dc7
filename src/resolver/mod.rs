//! The aggregation and scoring engine. Always runs the offline validator (or
//! the text matcher, depending on input shape), refines the region, and only
//! on request walks the configured upstream sources in a fixed precedence
//! order, merging each successful fragment into the running result and
//! recomputing confidence/risk along the way. Every branch degrades to a
//! lower-confidence result; nothing here aborts a request except empty input.

mod errors;
mod types;

pub use errors::ResolveError;
pub use types::{NumberQuery, ResolutionResult};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::i18n;
use crate::region;
use crate::sources::{SourceError, SourceFragment, UpstreamSource};
use crate::textmatch;
use crate::validator::{LineType, NumberValidator, ParsedNumber, UNKNOWN_CARRIER};

/// Starting confidence for a structurally valid number.
pub const BASELINE_CONFIDENCE: f64 = 0.8;
const UNKNOWN_CARRIER_CONFIDENCE_PENALTY: f64 = 0.2;
const UNKNOWN_CARRIER_RISK_PENALTY: f64 = 0.3;
const VOIP_RISK_PENALTY: f64 = 0.6;
const VOIP_CONFIDENCE_PENALTY: f64 = 0.1;
/// Added once per fragment that supplies a verified display name.
const VERIFIED_NAME_BONUS: f64 = 0.15;
/// Provider spam indicators above this pin risk to [`SPAM_RISK_FLOOR`].
const SPAM_SCORE_THRESHOLD: f64 = 10.0;
const SPAM_RISK_FLOOR: f64 = 0.8;

/// Per-call bound on every upstream lookup.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(8);

const VALIDATION_PROVENANCE: &str = "ValidationEngine";
const TEXT_PROVENANCE: &str = "CountryIndex";
const METHOD_NUMBER: &str = "number_validation";
const METHOD_TEXT: &str = "fuzzy_country_match";
const METHOD_DIRECT_CODE: &str = "direct_code_lookup";

/// A bare calling code identifies its country almost certainly, but is not a
/// dialable number.
const DIRECT_CODE_CONFIDENCE: f64 = 0.99;

/// A sequence of digits with an optional leading `+` and internal spaces.
/// Input shape alone selects number-mode vs text-mode.
static NUMBER_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d+(\s\d+)*$").expect("static shape pattern"));

/// One engine instance serves many concurrent requests; all per-request
/// state lives in the [`ResolutionResult`] threaded through the merge steps.
pub struct Resolver {
    validator: NumberValidator,
    /// Fixed precedence order, least authoritative first: later sources win
    /// overwrites of the same field.
    sources: Vec<Arc<dyn UpstreamSource>>,
    upstream_timeout: Duration,
}

impl Resolver {
    pub fn new(sources: Vec<Arc<dyn UpstreamSource>>) -> Self {
        for source in &sources {
            if source.is_configured() {
                info!("upstream source {} is configured", source.id());
            } else {
                warn!("upstream source {} is not configured and will be skipped", source.id());
            }
        }
        Self {
            validator: NumberValidator::new(),
            sources,
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }

    /// Engine with no upstream sources; deep search degrades to validation.
    pub fn offline() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    /// The single entry point: resolves a raw user string into one merged,
    /// scored record.
    pub async fn resolve(
        &self,
        raw: &str,
        deep_search: bool,
    ) -> Result<ResolutionResult, ResolveError> {
        self.resolve_query(&NumberQuery::new(raw, deep_search)).await
    }

    pub async fn resolve_query(
        &self,
        query: &NumberQuery,
    ) -> Result<ResolutionResult, ResolveError> {
        let raw = query.raw.trim();
        if raw.is_empty() {
            return Err(ResolveError::EmptyInput);
        }

        if !NUMBER_SHAPE.is_match(raw) {
            // Deep analysis is undefined for text queries.
            return Ok(resolve_text(raw));
        }

        let parsed = self.validator.validate(raw);
        if !parsed.valid {
            // Number-shaped but too short to be a number: it may still be a
            // bare calling code ("+91", "91", "0091").
            if let Some(result) = resolve_bare_code(raw) {
                return Ok(result);
            }
            debug!("{:?} is not a structurally valid number", raw);
            return Ok(ResolutionResult::failure(METHOD_NUMBER, "Invalid Number Format"));
        }

        let mut result = baseline_result(&parsed);
        apply_baseline_heuristics(&mut result);

        if query.deep_search {
            self.deep_merge(&parsed, &mut result).await;
        }

        clamp_scores(&mut result);
        Ok(result)
    }

    /// Walks the source chain in precedence order, sequentially: each source
    /// sees the country resolved so far as a hint, and call order defines
    /// which source wins an overwrite. Failures only cost that source its
    /// contribution; nothing is retried.
    async fn deep_merge(&self, parsed: &ParsedNumber, result: &mut ResolutionResult) {
        let e164 = format!("+{}{}", parsed.calling_code, parsed.national_number);

        for source in &self.sources {
            let id = source.id();
            if !source.is_configured() {
                warn!("skipping unconfigured source {}", id);
                record_diagnostic(result, id, &SourceError::NotConfigured);
                continue;
            }

            let outcome =
                match tokio::time::timeout(self.upstream_timeout, source.lookup(&e164, &result.country))
                    .await
                {
                    Ok(outcome) => outcome,
                    Err(_) => Err(SourceError::TimedOut),
                };

            match outcome {
                Ok(fragment) => {
                    debug!("source {} contributed {:?}", id, fragment);
                    merge_fragment(result, id, &fragment);
                }
                Err(err) => {
                    debug!("source {} failed: {}", id, err);
                    record_diagnostic(result, id, &err);
                }
            }
        }
    }
}

/// Terminal fallback for number-shaped input that failed validation: when
/// the digits are exactly a known calling code, resolve to that country.
/// Leading zeros beyond a `00` international prefix do not count, and deep
/// analysis is undefined here just as for text queries.
fn resolve_bare_code(raw: &str) -> Option<ResolutionResult> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact
        .strip_prefix('+')
        .or_else(|| compact.strip_prefix("00"))
        .unwrap_or(&compact);

    let code: u16 = digits.parse().ok()?;
    // String equality rejects "091" while keeping "91".
    if code.to_string() != digits {
        return None;
    }
    let country = i18n::country_for_calling_code(code)?;

    debug!("{:?} resolved as bare calling code +{}", raw, code);
    let calling_code = format!("+{}", code);
    Some(ResolutionResult {
        success: true,
        valid: false,
        country: country.name.to_string(),
        // A code prefix has no number to format; display the code itself.
        formatted: calling_code.clone(),
        calling_code,
        carrier: "N/A".to_string(),
        region: "All Regions".to_string(),
        flag: country.flag(),
        timezones: vec!["Multiple".to_string()],
        confidence: DIRECT_CODE_CONFIDENCE,
        sources: vec![VALIDATION_PROVENANCE.to_string()],
        method: METHOD_DIRECT_CODE.to_string(),
        ..Default::default()
    })
}

/// Text-mode terminal states: a country match or a degraded failure.
fn resolve_text(raw: &str) -> ResolutionResult {
    match textmatch::match_text(raw) {
        Ok(fragment) => {
            let country = fragment.country.unwrap_or_default();
            let flag = i18n::all_countries()
                .iter()
                .find(|c| c.name == country)
                .map(|c| c.flag())
                .unwrap_or_default();
            let calling_code = fragment.calling_code.unwrap_or_default();
            ResolutionResult {
                success: true,
                valid: false,
                country,
                // A text query resolves to a dialing code, not a number.
                formatted: calling_code.clone(),
                calling_code,
                carrier: "N/A".to_string(),
                region: "N/A".to_string(),
                flag,
                confidence: fragment.confidence.unwrap_or_default(),
                sources: vec![TEXT_PROVENANCE.to_string()],
                method: METHOD_TEXT.to_string(),
                ..Default::default()
            }
        }
        Err(err) => ResolutionResult::failure(METHOD_TEXT, err.to_string()),
    }
}

/// Seeds the running result from the validator's record, with the region
/// already refined. Confidence starts high for a valid number.
fn baseline_result(parsed: &ParsedNumber) -> ResolutionResult {
    let region = region::refine(
        parsed.calling_code,
        &parsed.national_number,
        &parsed.region_label,
    );
    let flag = i18n::country_for_calling_code(parsed.calling_code)
        .map(|c| c.flag())
        .unwrap_or_default();

    ResolutionResult {
        success: true,
        valid: true,
        country: parsed.country.clone(),
        calling_code: format!("+{}", parsed.calling_code),
        formatted: parsed.international_format.clone(),
        local_format: parsed.national_format.clone(),
        carrier: parsed.carrier.clone(),
        line_type: parsed.line_type,
        region,
        flag,
        timezones: parsed.timezones.iter().map(|tz| tz.to_string()).collect(),
        confidence: BASELINE_CONFIDENCE,
        risk: 0.0,
        sources: vec![VALIDATION_PROVENANCE.to_string()],
        method: METHOD_NUMBER.to_string(),
        ..Default::default()
    }
}

/// Heuristic penalties applied once, before any deep merge, in this fixed
/// order. Additive and not mutually exclusive.
fn apply_baseline_heuristics(result: &mut ResolutionResult) {
    if result.carrier == UNKNOWN_CARRIER {
        result.confidence -= UNKNOWN_CARRIER_CONFIDENCE_PENALTY;
        result.risk += UNKNOWN_CARRIER_RISK_PENALTY;
    }
    if result.line_type == LineType::VoIP {
        result.risk += VOIP_RISK_PENALTY;
        result.confidence -= VOIP_CONFIDENCE_PENALTY;
    }
}

/// Sparse merge of one successful fragment: only fields the fragment
/// actually provides overwrite the running result; absent fields never clear
/// anything. Risk only ever increases here.
fn merge_fragment(result: &mut ResolutionResult, source_id: &str, fragment: &SourceFragment) {
    if fragment.is_empty() {
        debug!("source {} returned an empty fragment, nothing to merge", source_id);
        return;
    }

    if let Some(name) = &fragment.name {
        result.name = Some(name.clone());
        result.confidence += VERIFIED_NAME_BONUS;
    }
    if let Some(carrier) = &fragment.carrier {
        result.carrier = carrier.clone();
    }
    if let Some(fragment_region) = &fragment.region {
        result.region = fragment_region.clone();
    }
    if let Some(email) = &fragment.email {
        result.email = Some(email.clone());
    }
    if let Some(spam_score) = fragment.spam_score {
        if spam_score > SPAM_SCORE_THRESHOLD {
            result.risk = result.risk.max(SPAM_RISK_FLOOR);
        }
    }

    if !result.sources.iter().any(|s| s == source_id) {
        result.sources.push(source_id.to_string());
    }
    // Sources run in ascending precedence, so the last contributor is the
    // highest-precedence one.
    result.method = source_id.to_string();
}

fn record_diagnostic(result: &mut ResolutionResult, source_id: &str, err: &SourceError) {
    result
        .diagnostics
        .insert(format!("{}_error", source_id), err.to_string());
}

/// The only place bounds are enforced; individual adjustments may transiently
/// leave [0, 1].
fn clamp_scores(result: &mut ResolutionResult) {
    result.confidence = result.confidence.clamp(0.0, 1.0);
    result.risk = result.risk.clamp(0.0, 1.0);
}
