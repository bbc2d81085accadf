//! Behaviour-driven step definitions driving the `osm-node` CLI scenarios.

use super::*;
use crate::osm_node::{OsmDataServiceBuilder, run_osm_node_with};
use campus_coffee_core::test_support::StubOsmDataService;
use campus_coffee_core::{OsmDataError, OsmDataService, OsmNode};
use campus_coffee_data::osm::HttpOsmDataServiceConfig;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug, Default)]
struct OsmNodeWorld {
    known_name: RefCell<Option<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl OsmNodeWorld {
    fn run(&self, argv: &[String]) {
        let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::OsmNode(args) => {
                let builder = StubBuilder {
                    known_name: self.known_name.borrow().clone(),
                };
                let mut buffer = self.stdout.borrow_mut();
                run_osm_node_with(args, &builder, &mut *buffer)
            }
        });
        self.result.replace(Some(outcome));
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> OsmNodeWorld {
    OsmNodeWorld::default()
}

struct StubBuilder {
    known_name: Option<String>,
}

impl OsmDataServiceBuilder for StubBuilder {
    fn build(
        &self,
        _config: &HttpOsmDataServiceConfig,
    ) -> Result<Box<dyn OsmDataService>, CliError> {
        let service = match &self.known_name {
            Some(name) => StubOsmDataService::with_node(OsmNode {
                name: Some(name.clone()),
                ..OsmNode::new(0)
            }),
            None => StubOsmDataService::missing(),
        };
        Ok(Box::new(service))
    }
}

fn command_line(extra: &[String]) -> Vec<String> {
    let mut argv = vec!["campus-coffee".to_owned(), "osm-node".to_owned()];
    argv.extend(extra.iter().cloned());
    argv
}

#[given("the OSM API knows the node as {name}")]
fn api_knows_node(#[from(world)] world: &OsmNodeWorld, name: String) {
    world
        .known_name
        .replace(Some(name.trim_matches('"').to_owned()));
}

#[given("the OSM API does not know the node")]
fn api_does_not_know_node(#[from(world)] world: &OsmNodeWorld) {
    world.known_name.replace(None);
}

#[when("I run the osm-node command for node {node_id}")]
fn run_for_node(#[from(world)] world: &OsmNodeWorld, node_id: u64) {
    world.run(&command_line(&[node_id.to_string()]));
}

#[when("I run the osm-node command without a node id")]
fn run_without_node(#[from(world)] world: &OsmNodeWorld) {
    world.run(&command_line(&[]));
}

#[then("the command succeeds and prints the node as JSON")]
fn command_prints_node(#[from(world)] world: &OsmNodeWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let node: OsmNode = serde_json::from_str(&stdout).expect("output should be an OSM node");
    assert_eq!(node.node_id, 5_589_879_349);
    assert_eq!(node.name.as_deref(), Some("Café X"));
}

#[then("the command fails because node {node_id} was not found")]
fn command_reports_missing_node(#[from(world)] world: &OsmNodeWorld, node_id: u64) {
    match &*world.error() {
        CliError::FetchNode(OsmDataError::NodeNotFound { node_id: missing }) => {
            assert_eq!(*missing, node_id);
        }
        other => panic!("expected FetchNode, found {other:?}"),
    }
}

#[then("the command fails because the node id is missing")]
fn command_reports_missing_node_id(#[from(world)] world: &OsmNodeWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_NODE_ID),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_osm_node_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/osm_node_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: OsmNodeWorld) {
            let _ = world;
        }
    };
}

register_osm_node_scenario!(osm_node_known, "printing a known node");
register_osm_node_scenario!(osm_node_unknown, "reporting an unknown node");
register_osm_node_scenario!(osm_node_missing_id, "rejecting a missing node id");
