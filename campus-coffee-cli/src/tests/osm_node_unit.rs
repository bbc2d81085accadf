//! Focused unit tests covering `osm-node` configuration and output.

use super::*;
use crate::osm_node::{
    OsmDataServiceBuilder, OsmNodeConfig, config_from_layers_for_test, run_osm_node_with,
};
use campus_coffee_core::test_support::StubOsmDataService;
use campus_coffee_core::{OsmDataError, OsmDataService, OsmNode, PosType};
use campus_coffee_data::osm::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, HttpOsmDataServiceConfig};
use rstest::rstest;
use std::time::Duration;

struct StubBuilder {
    template: Option<OsmNode>,
}

impl OsmDataServiceBuilder for StubBuilder {
    fn build(
        &self,
        _config: &HttpOsmDataServiceConfig,
    ) -> Result<Box<dyn OsmDataService>, CliError> {
        let service = match self.template.clone() {
            Some(node) => StubOsmDataService::with_node(node),
            None => StubOsmDataService::missing(),
        };
        Ok(Box::new(service))
    }
}

fn args_for(node_id: u64) -> OsmNodeArgs {
    OsmNodeArgs {
        node_id: Some(node_id),
        ..OsmNodeArgs::default()
    }
}

#[rstest]
fn converting_without_node_id_errors() {
    let err = OsmNodeConfig::try_from(OsmNodeArgs::default()).expect_err("missing id should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_NODE_ID);
            assert_eq!(env, ENV_NODE_ID);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn missing_node_id_message_names_the_positional() {
    let err = OsmNodeConfig::try_from(OsmNodeArgs::default()).expect_err("missing id should error");
    assert_eq!(
        err.to_string(),
        "missing <id> (pass it as an argument or set CAMPUS_COFFEE_CMDS_OSM_NODE_NODE_ID)"
    );
}

#[rstest]
fn config_falls_back_to_public_api_defaults() {
    let config = OsmNodeConfig::try_from(args_for(42)).expect("config should build");

    assert_eq!(config.node_id, 42);
    assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.service.user_agent, DEFAULT_USER_AGENT);
}

#[rstest]
fn config_applies_overrides() {
    let args = OsmNodeArgs {
        node_id: Some(7),
        osm_base_url: Some("http://localhost:8080/api/0.6".into()),
        timeout_secs: Some(3),
        user_agent: Some("campus-coffee-tests/1.0".into()),
    };

    let config = OsmNodeConfig::try_from(args).expect("config should build");

    assert_eq!(config.service.base_url, "http://localhost:8080/api/0.6");
    assert_eq!(config.service.timeout, Duration::from_secs(3));
    assert_eq!(config.service.user_agent, "campus-coffee-tests/1.0");
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "node_id": "not-a-number" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "osm_base_url": "http://from-file/api/0.6",
            "timeout_secs": 5,
        }),
        None,
    );
    composer.push_environment(json!({
        "node_id": 11,
        "osm_base_url": "http://from-env/api/0.6",
    }));
    composer.push_cli(json!({ "node_id": 12 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.node_id, 12);
    assert_eq!(config.service.base_url, "http://from-env/api/0.6");
    assert_eq!(config.service.timeout, Duration::from_secs(5));
}

#[rstest]
fn prints_node_as_json() {
    let builder = StubBuilder {
        template: Some(OsmNode {
            name: Some("Café X".into()),
            house_number: Some("12a".into()),
            pos_type: Some(PosType::Cafe),
            ..OsmNode::new(0)
        }),
    };
    let mut stdout = Vec::new();

    run_osm_node_with(args_for(5_589_879_349), &builder, &mut stdout)
        .expect("lookup should succeed");

    let printed: serde_json::Value =
        serde_json::from_slice(&stdout).expect("output should be JSON");
    assert_eq!(
        printed,
        serde_json::json!({
            "node_id": 5_589_879_349_u64,
            "name": "Café X",
            "house_number": "12a",
            "type": "CAFE",
        })
    );
}

#[rstest]
fn missing_node_surfaces_lookup_error() {
    let builder = StubBuilder { template: None };
    let mut stdout = Vec::new();

    let err = run_osm_node_with(args_for(9), &builder, &mut stdout)
        .expect_err("missing node should fail");

    match err {
        CliError::FetchNode(OsmDataError::NodeNotFound { node_id }) => assert_eq!(node_id, 9),
        other => panic!("expected FetchNode, found {other:?}"),
    }
    assert!(stdout.is_empty());
}
