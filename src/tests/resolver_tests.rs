use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;

use crate::resolver::{ResolveError, Resolver, BASELINE_CONFIDENCE};
use crate::sources::{SourceError, SourceFragment, UpstreamSource};
use crate::validator::LineType;

use super::support::{name_fragment, FixtureSource};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn resolves_us_number_offline() {
    init_logs();
    let resolver = Resolver::offline();
    let result = resolver.resolve("+14155552671", false).await.unwrap();

    assert!(result.success);
    assert!(result.valid);
    assert_eq!(result.country, "United States");
    assert_eq!(result.calling_code, "+1");
    assert_eq!(result.line_type, LineType::FixedLineOrMobile);
    assert_eq!(result.region, "San Francisco, CA");
    // Carrier known via the series table and not VoIP: no penalty fires.
    assert_eq!(result.confidence, BASELINE_CONFIDENCE);
    assert_eq!(result.risk, 0.0);
    assert_eq!(result.sources, vec!["ValidationEngine"]);
    assert_eq!(result.method, "number_validation");
}

#[tokio::test]
async fn resolves_indian_mobile_with_refined_circle() {
    let resolver = Resolver::offline();
    let result = resolver.resolve("+91 98100 12345", false).await.unwrap();

    assert!(result.success);
    assert_eq!(result.country, "India");
    assert_eq!(result.region, "Delhi");
    assert_eq!(result.carrier, "Airtel");
    assert_eq!(result.line_type, LineType::Mobile);
    assert_eq!(result.formatted, "+91 98100 12345");
    assert_eq!(result.confidence, BASELINE_CONFIDENCE);
}

#[tokio::test]
async fn text_query_matches_country() {
    let resolver = Resolver::offline();
    let result = resolver
        .resolve("what is the country code for france", false)
        .await
        .unwrap();

    assert!(result.success);
    assert!(!result.valid);
    assert_eq!(result.country, "France");
    assert_eq!(result.calling_code, "+33");
    assert_eq!(result.formatted, "+33");
    assert_eq!(result.method, "fuzzy_country_match");
    assert!(result.confidence > 0.99);
}

#[tokio::test]
async fn unmatched_text_degrades_without_error() {
    let resolver = Resolver::offline();
    let result = resolver.resolve("xqzwv kjjy", false).await.unwrap();

    assert!(!result.success);
    assert_eq!(result.confidence, 0.0);
    assert!(result.message.unwrap().contains("No country found"));
}

#[tokio::test]
async fn empty_input_is_a_request_level_error() {
    let resolver = Resolver::offline();
    assert_eq!(
        resolver.resolve("   ", true).await,
        Err(ResolveError::EmptyInput)
    );
}

#[tokio::test]
async fn bare_calling_code_resolves_directly() {
    let source = Arc::new(FixtureSource::new(
        "identity_lookup",
        Ok(name_fragment("Nobody")),
    ));
    let resolver = Resolver::new(vec![source.clone() as Arc<dyn UpstreamSource>]);

    for raw in ["+91", "91", "0091"] {
        let result = resolver.resolve(raw, true).await.unwrap();
        assert!(result.success, "input {:?}", raw);
        assert!(!result.valid);
        assert_eq!(result.country, "India");
        assert_eq!(result.calling_code, "+91");
        assert_eq!(result.formatted, "+91");
        assert_eq!(result.region, "All Regions");
        assert_eq!(result.method, "direct_code_lookup");
        assert!((result.confidence - 0.99).abs() < 1e-9);
    }
    // A code prefix has no number to look up, even with deep search on.
    assert_eq!(source.calls(), 0);

    for raw in ["091", "+999"] {
        let result = resolver.resolve(raw, false).await.unwrap();
        assert!(!result.success, "input {:?}", raw);
        assert_eq!(result.message.as_deref(), Some("Invalid Number Format"));
    }
}

#[tokio::test]
async fn invalid_number_never_reaches_sources() {
    let source = Arc::new(FixtureSource::new(
        "identity_lookup",
        Ok(name_fragment("Somebody")),
    ));
    let resolver = Resolver::new(vec![source.clone() as Arc<dyn UpstreamSource>]);

    let result = resolver.resolve("123", true).await.unwrap();
    assert!(!result.success);
    assert!(!result.valid);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn deep_merge_follows_precedence_and_scores() {
    init_logs();
    let carrier_lookup = Arc::new(FixtureSource::new(
        "carrier_lookup",
        Ok(SourceFragment {
            carrier: Some("IDEA".to_string()),
            region: Some("Andhra Pradesh".to_string()),
            ..Default::default()
        }),
    ));
    let region_trace = Arc::new(FixtureSource::unconfigured("region_trace"));
    let identity_lookup = Arc::new(FixtureSource::new(
        "identity_lookup",
        Ok(SourceFragment {
            name: Some("Lokesh Agarwal".to_string()),
            carrier: Some("Airtel".to_string()),
            spam_score: Some(42.0),
            ..Default::default()
        }),
    ));

    let resolver = Resolver::new(vec![
        carrier_lookup.clone() as Arc<dyn UpstreamSource>,
        region_trace.clone() as Arc<dyn UpstreamSource>,
        identity_lookup.clone() as Arc<dyn UpstreamSource>,
    ]);

    let result = resolver.resolve("+919154151265", true).await.unwrap();

    assert!(result.success);
    // Identity ran last, so its carrier wins the overwrite.
    assert_eq!(result.carrier, "Airtel");
    assert_eq!(result.region, "Andhra Pradesh");
    assert_eq!(result.name.as_deref(), Some("Lokesh Agarwal"));
    assert_eq!(result.method, "identity_lookup");
    // The unconfigured source was skipped without invocation and is absent
    // from provenance; its only trace is a single diagnostic.
    assert_eq!(region_trace.calls(), 0);
    assert_eq!(
        result.sources,
        vec!["ValidationEngine", "carrier_lookup", "identity_lookup"]
    );
    assert_eq!(
        result.diagnostics.get("region_trace_error").map(String::as_str),
        Some("not configured")
    );
    // One verified-name bonus on top of the baseline; spam pins the risk.
    assert!((result.confidence - 0.95).abs() < 1e-9);
    assert!((result.risk - 0.8).abs() < 1e-9);
    assert_eq!(carrier_lookup.calls(), 1);
    assert_eq!(identity_lookup.calls(), 1);
}

#[tokio::test]
async fn failed_source_only_costs_its_own_contribution() {
    let flaky = Arc::new(FixtureSource::new(
        "carrier_lookup",
        Err(SourceError::Transport("connection reset".to_string())),
    ));
    let identity = Arc::new(FixtureSource::new(
        "identity_lookup",
        Ok(name_fragment("Jane Doe")),
    ));
    let resolver = Resolver::new(vec![
        flaky.clone() as Arc<dyn UpstreamSource>,
        identity.clone() as Arc<dyn UpstreamSource>,
    ]);

    let result = resolver.resolve("+14155552671", true).await.unwrap();

    assert!(result.success);
    assert_eq!(result.sources, vec!["ValidationEngine", "identity_lookup"]);
    assert!(result
        .diagnostics
        .get("carrier_lookup_error")
        .unwrap()
        .contains("connection reset"));
    // Attempted exactly once, never retried.
    assert_eq!(flaky.calls(), 1);
}

#[tokio::test]
async fn timeout_is_indistinguishable_from_failure() {
    let slow = Arc::new(
        FixtureSource::new("identity_lookup", Ok(name_fragment("Too Late")))
            .with_delay(Duration::from_millis(200)),
    );
    let resolver = Resolver::new(vec![slow.clone() as Arc<dyn UpstreamSource>])
        .with_upstream_timeout(Duration::from_millis(10));

    let result = resolver.resolve("+14155552671", true).await.unwrap();

    assert!(result.success);
    assert_eq!(result.name, None);
    assert_eq!(result.sources, vec!["ValidationEngine"]);
    assert_eq!(
        result.diagnostics.get("identity_lookup_error").map(String::as_str),
        Some("timed out")
    );
    assert_eq!(result.confidence, BASELINE_CONFIDENCE);
}

#[tokio::test]
async fn name_bonus_applies_per_fragment_and_clamps() {
    let first = Arc::new(FixtureSource::new(
        "carrier_lookup",
        Ok(name_fragment("First Name")),
    ));
    let second = Arc::new(FixtureSource::new(
        "identity_lookup",
        Ok(name_fragment("Second Name")),
    ));
    let resolver = Resolver::new(vec![
        first.clone() as Arc<dyn UpstreamSource>,
        second.clone() as Arc<dyn UpstreamSource>,
    ]);

    let result = resolver.resolve("+14155552671", true).await.unwrap();

    // 0.8 + 0.15 + 0.15 transiently exceeds 1.0 and is clamped at the end.
    assert_eq!(result.confidence, 1.0);
    assert_eq!(result.name.as_deref(), Some("Second Name"));
}

#[tokio::test]
async fn risk_is_monotonic_and_bounded() {
    let spammy = Arc::new(FixtureSource::new(
        "identity_lookup",
        Ok(SourceFragment {
            spam_score: Some(99.0),
            ..Default::default()
        }),
    ));
    let resolver = Resolver::new(vec![spammy.clone() as Arc<dyn UpstreamSource>]);

    // Unknown carrier series: baseline risk 0.3, confidence 0.6.
    let baseline = resolver.resolve("+919440012345", false).await.unwrap();
    let deep = resolver.resolve("+919440012345", true).await.unwrap();

    assert!(deep.risk >= baseline.risk);
    for result in [&baseline, &deep] {
        assert!((0.0..=1.0).contains(&result.confidence));
        assert!((0.0..=1.0).contains(&result.risk));
    }
    assert!((deep.risk - 0.8).abs() < 1e-9);
}

#[tokio::test]
async fn voip_and_unknown_carrier_penalties_bound_scores() {
    let resolver = Resolver::offline();
    // French 9-series is VoIP, and no carrier series entry exists for it.
    let result = resolver.resolve("+33950000000", false).await.unwrap();

    assert_eq!(result.line_type, LineType::VoIP);
    assert!((result.confidence - 0.5).abs() < 1e-9);
    assert!((result.risk - 0.9).abs() < 1e-9);
}

#[tokio::test]
async fn resolution_is_idempotent() {
    let identity = Arc::new(FixtureSource::new(
        "identity_lookup",
        Ok(name_fragment("Jane Doe")),
    ));
    let resolver = Resolver::new(vec![identity.clone() as Arc<dyn UpstreamSource>]);

    let first = resolver.resolve("+919810012345", true).await.unwrap();
    let second = resolver.resolve("+919810012345", true).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn result_serializes_for_the_boundary() {
    let resolver = Resolver::offline();
    let result = resolver.resolve("+14155552671", false).await.unwrap();

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["country"], "United States");
    assert_eq!(value["line_type"], "FixedLineOrMobile");
    assert_eq!(value["confidence"], 0.8);
    assert!(value["sources"].is_array());
}
