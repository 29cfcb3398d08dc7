//! Fixture upstream sources for resolver flow tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::sources::{SourceError, SourceFragment, UpstreamSource};

/// Scripted source: fixed id, fixed configuration state, fixed outcome, and
/// a call counter to prove (non-)invocation.
pub struct FixtureSource {
    id: &'static str,
    configured: bool,
    outcome: Result<SourceFragment, SourceError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl FixtureSource {
    pub fn new(id: &'static str, outcome: Result<SourceFragment, SourceError>) -> Self {
        Self {
            id,
            configured: true,
            outcome,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unconfigured(id: &'static str) -> Self {
        Self {
            id,
            configured: false,
            outcome: Err(SourceError::NotConfigured),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamSource for FixtureSource {
    fn id(&self) -> &'static str {
        self.id
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn lookup(
        &self,
        _number: &str,
        _country_hint: &str,
    ) -> Result<SourceFragment, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}

/// Fragment with just a verified display name.
pub fn name_fragment(name: &str) -> SourceFragment {
    SourceFragment {
        name: Some(name.to_string()),
        ..Default::default()
    }
}
