//! Uniform contract over heterogeneous optional lookup providers. The
//! aggregation engine only ever sees this trait and the sparse fragments it
//! yields; HTTP clients, scrapers and credential handling live behind it and
//! are out of scope for this crate.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// A partial, possibly empty set of identity/location fields from one data
/// source. Absent fields mean "this source does not know", never "clear it".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceFragment {
    pub name: Option<String>,
    pub carrier: Option<String>,
    pub region: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub calling_code: Option<String>,
    /// Provider-scale spam indicator; compared against the engine's fixed
    /// threshold, not normalized here.
    pub spam_score: Option<f64>,
    /// Similarity-derived confidence, only set by the text matcher.
    pub confidence: Option<f64>,
}

impl SourceFragment {
    /// True when the fragment carries none of the fields the deep merge
    /// consumes: name, carrier, region, email, spam score. `country`,
    /// `calling_code` and `confidence` are text-matcher outputs and do not
    /// count; a fragment holding only those earns no provenance entry.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.carrier.is_none()
            && self.region.is_none()
            && self.email.is_none()
            && self.spam_score.is_none()
    }
}

/// Typed failure of one upstream lookup. Missing configuration is distinct
/// from "looked and found nothing" so the engine can skip silently vs.
/// surface a diagnostic.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SourceError {
    #[error("not configured")]
    NotConfigured,
    #[error("no data found: {0}")]
    NoData(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("timed out")]
    TimedOut,
}

/// One optional, independently failable, rate-limited external provider.
///
/// Implementations normalize the number to their own required shape and must
/// never let a raw I/O fault escape: every outcome is a fragment or a
/// [`SourceError`].
#[async_trait]
pub trait UpstreamSource: Send + Sync {
    /// Stable provenance tag, also used for `<id>_error` diagnostics.
    fn id(&self) -> &'static str;

    /// Checked once before any lookup; unconfigured sources are skipped
    /// without being invoked.
    fn is_configured(&self) -> bool;

    /// Best-effort lookup of `number` (E.164), with the country resolved so
    /// far as a hint. Attempted at most once per request.
    async fn lookup(
        &self,
        number: &str,
        country_hint: &str,
    ) -> Result<SourceFragment, SourceError>;
}
