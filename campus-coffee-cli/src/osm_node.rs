//! `osm-node` command implementation.

use std::io::Write;
use std::time::Duration;

use campus_coffee_core::{OsmDataService, OsmNode};
use campus_coffee_data::osm::{HttpOsmDataService, HttpOsmDataServiceConfig};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_NODE_ID, ARG_OSM_BASE_URL, ARG_TIMEOUT_SECS, ARG_USER_AGENT, CliError, ENV_NODE_ID,
};

/// CLI arguments for the `osm-node` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Fetch a single node from the OpenStreetMap API and print the \
                 fields a point of sale needs (name, address, type, campus) \
                 as JSON. Any lookup failure is reported as a missing node.",
    about = "Look up an OpenStreetMap node"
)]
#[ortho_config(prefix = "CAMPUS_COFFEE")]
pub(crate) struct OsmNodeArgs {
    /// Id of the OSM node to fetch.
    #[arg(value_name = ARG_NODE_ID)]
    #[serde(default)]
    pub(crate) node_id: Option<u64>,
    /// Base URL of the OSM API (e.g. "https://www.openstreetmap.org/api/0.6").
    #[arg(long = ARG_OSM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osm_base_url: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// User agent sent with the request.
    #[arg(long = ARG_USER_AGENT, value_name = "agent")]
    #[serde(default)]
    pub(crate) user_agent: Option<String>,
}

impl OsmNodeArgs {
    pub(crate) fn into_config(self) -> Result<OsmNodeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OsmNodeConfig::try_from(merged)
    }
}

/// Resolved `osm-node` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OsmNodeConfig {
    pub(crate) node_id: u64,
    pub(crate) service: HttpOsmDataServiceConfig,
}

impl TryFrom<OsmNodeArgs> for OsmNodeConfig {
    type Error = CliError;

    fn try_from(args: OsmNodeArgs) -> Result<Self, Self::Error> {
        let node_id = args.node_id.ok_or(CliError::MissingArgument {
            field: ARG_NODE_ID,
            env: ENV_NODE_ID,
        })?;

        let mut service = HttpOsmDataServiceConfig::default();
        if let Some(base_url) = args.osm_base_url {
            service.base_url = base_url;
        }
        if let Some(secs) = args.timeout_secs {
            service.timeout = Duration::from_secs(secs);
        }
        if let Some(user_agent) = args.user_agent {
            service.user_agent = user_agent;
        }

        Ok(Self { node_id, service })
    }
}

/// Builds the lookup service for the current invocation.
pub(crate) trait OsmDataServiceBuilder {
    fn build(
        &self,
        config: &HttpOsmDataServiceConfig,
    ) -> Result<Box<dyn OsmDataService>, CliError>;
}

pub(crate) struct HttpOsmDataServiceBuilder;

impl OsmDataServiceBuilder for HttpOsmDataServiceBuilder {
    fn build(
        &self,
        config: &HttpOsmDataServiceConfig,
    ) -> Result<Box<dyn OsmDataService>, CliError> {
        let service = HttpOsmDataService::with_config(config.clone()).map_err(|source| {
            CliError::BuildOsmDataService {
                base_url: config.base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(service))
    }
}

pub(crate) fn run_osm_node(args: OsmNodeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_osm_node_with(args, &HttpOsmDataServiceBuilder, &mut stdout)
}

pub(crate) fn run_osm_node_with(
    args: OsmNodeArgs,
    builder: &dyn OsmDataServiceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let service = builder.build(&config.service)?;
    let node = service.fetch_node(config.node_id)?;
    info!("Resolved OSM node {}", node.node_id);
    write_node(writer, &node)
}

fn write_node(writer: &mut dyn Write, node: &OsmNode) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(node).map_err(CliError::SerialiseNode)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OsmNodeConfig, CliError> {
    let merged = OsmNodeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OsmNodeConfig::try_from(merged)
}
