//! Architecture contract tests.

mod support;

use support::architecture::{
    lines_containing, non_export_lines_in_mod_files, path_exists, read_relative,
};

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::application",
            "crate::infrastructure",
            "crate::port",
            "tokio::",
            "reqwest::",
            "tracing::",
        ],
        &[],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = lines_containing(
        "src/application",
        &["crate::adapter::", "crate::infrastructure::", "reqwest::"],
        &[],
    );
    assert!(
        hits.is_empty(),
        "application layer should only reach the source through its port: {hits:#?}"
    );
}

#[test]
fn engine_is_synchronous() {
    let hits = lines_containing(
        "src/application/engine",
        &["async fn", ".await", "tokio::", "RecordSource"],
        &[],
    );
    assert!(
        hits.is_empty(),
        "aggregation engine should be pure functions over a snapshot: {hits:#?}"
    );
}

#[test]
fn cli_reaches_infrastructure_only_from_composition_points() {
    let hits = lines_containing(
        "src/adapter/inbound/cli",
        &["crate::infrastructure"],
        &[
            "src/adapter/inbound/cli/run.rs",
            "src/adapter/inbound/cli/config.rs",
        ],
    );

    assert!(
        hits.is_empty(),
        "report handlers should only talk to the application layer: {hits:#?}"
    );
}

#[test]
fn record_source_contract_lives_in_outbound_port() {
    assert!(path_exists("src/port/outbound/record_source.rs"));

    let client = read_relative("src/adapter/outbound/league_api/client.rs");
    assert!(
        client.contains("impl RecordSource for LeagueApiClient"),
        "REST client should implement the outbound port"
    );
}

#[test]
fn league_api_never_writes() {
    let hits = lines_containing(
        "src/adapter/outbound/league_api",
        &[".post(", ".put(", ".patch(", ".delete("],
        &[],
    );
    assert!(hits.is_empty(), "league API adapter must stay read-only: {hits:#?}");
}

#[test]
fn mod_rs_is_export_only() {
    let violations = non_export_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}
