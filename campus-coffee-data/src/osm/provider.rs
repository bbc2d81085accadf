//! HTTP-based `OsmDataService` using the OSM API v0.6.
//!
//! This module provides [`HttpOsmDataService`], an implementation of the
//! [`OsmDataService`] trait that reads a single node from the OpenStreetMap
//! API and extracts its point-of-sale fields.
//!
//! # Architecture
//!
//! The [`OsmDataService`] trait is synchronous so the domain stays usable
//! from plain threads. This service bridges the async HTTP client to that
//! interface by blocking on a Tokio runtime internally.
//!
//! Every failure (404, other HTTP statuses, transport errors, blank bodies,
//! unreadable documents) is logged with its cause and then reported as
//! [`OsmDataError::NodeNotFound`].
//!
//! # Example
//!
//! ```no_run
//! use campus_coffee_data::osm::HttpOsmDataService;
//! use campus_coffee_core::OsmDataService;
//!
//! let service = HttpOsmDataService::new()?;
//! let node = service.fetch_node(5_589_879_349)?;
//! println!("{:?}", node.name);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use campus_coffee_core::{OsmDataError, OsmDataService, OsmNode};
use log::{debug, error, info, warn};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::document::parse_node_document;

/// Error type for [`HttpOsmDataService`] construction failures.
#[derive(Debug, Error)]
pub enum HttpOsmDataServiceBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Default base URL of the OSM API.
pub const DEFAULT_BASE_URL: &str = "https://www.openstreetmap.org/api/0.6";

/// Default user agent for OSM API requests.
///
/// The OSM API usage policy asks clients to identify themselves.
pub const DEFAULT_USER_AGENT: &str = "campus-coffee-osm/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpOsmDataService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOsmDataServiceConfig {
    /// Base URL of the OSM API (e.g., `"https://www.openstreetmap.org/api/0.6"`).
    pub base_url: String,
    /// Connect and total request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpOsmDataServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpOsmDataServiceConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP-based node lookup against the OSM API.
///
/// The service owns a Tokio runtime that is reused across calls. One
/// request is made per lookup; nothing is cached or retried.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the service uses its own
/// stored runtime. When called from within a multi-threaded Tokio runtime
/// (detected via [`Handle::try_current()`] and
/// [`RuntimeFlavor::MultiThread`]), it uses that runtime's handle with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics. From a
/// `current_thread` runtime it drives its own runtime on a scoped helper
/// thread, blocking the calling runtime until the request finishes.
///
/// The stored runtime is shut down in the background on drop, so the
/// service may be dropped from async code.
pub struct HttpOsmDataService {
    client: Client,
    config: HttpOsmDataServiceConfig,
    // Only `None` once `Drop` has taken it.
    runtime: Option<Runtime>,
}

impl std::fmt::Debug for HttpOsmDataService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpOsmDataService")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &self.runtime.as_ref().map(|_| "<tokio::runtime::Runtime>"))
            .finish()
    }
}

impl HttpOsmDataService {
    /// Create a service talking to the public OSM API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new() -> Result<Self, HttpOsmDataServiceBuildError> {
        Self::with_config(HttpOsmDataServiceConfig::default())
    }

    /// Create a service with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(
        config: HttpOsmDataServiceConfig,
    ) -> Result<Self, HttpOsmDataServiceBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(HttpOsmDataServiceBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(HttpOsmDataServiceBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime: Some(runtime),
        })
    }

    /// The configuration this service was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpOsmDataServiceConfig {
        &self.config
    }

    /// Build the node URL: `{base_url}/node/{node_id}`.
    fn build_node_url(&self, node_id: u64) -> String {
        format!(
            "{}/node/{node_id}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Fetch and parse the node asynchronously.
    async fn fetch_node_async(&self, node_id: u64) -> Result<OsmNode, OsmDataError> {
        let not_found = OsmDataError::NodeNotFound { node_id };
        let url = self.build_node_url(node_id);
        info!("Fetching OSM node {node_id} from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| self.report_transport_error(node_id, &err))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!("OSM node {node_id} not found (404)");
            return Err(not_found);
        }
        if !status.is_success() {
            error!("HTTP error while fetching OSM node {node_id}: status {status}");
            return Err(not_found);
        }

        let body = response
            .text()
            .await
            .map_err(|err| self.report_transport_error(node_id, &err))?;
        if body.trim().is_empty() {
            warn!("OSM node {node_id} response body was empty");
            return Err(not_found);
        }

        match parse_node_document(node_id, &body) {
            Ok(node) => {
                debug!("Parsed OSM node {node_id}: {node:?}");
                Ok(node)
            }
            Err(err) => {
                error!("Failed to parse OSM node XML for id {node_id}: {err}");
                Err(not_found)
            }
        }
    }

    /// Log a reqwest failure and collapse it into `NodeNotFound`.
    fn report_transport_error(&self, node_id: u64, err: &reqwest::Error) -> OsmDataError {
        if err.is_timeout() {
            error!(
                "Timed out after {}s while fetching OSM node {node_id}: {err}",
                self.config.timeout.as_secs()
            );
        } else {
            error!("Unexpected error while fetching OSM node {node_id}: {err}");
        }
        OsmDataError::NodeNotFound { node_id }
    }
}

impl OsmDataService for HttpOsmDataService {
    /// Fetch the node with `node_id` from the OSM API.
    ///
    /// A zero id is rejected without a request since OSM ids start at one.
    ///
    /// # Runtime requirements
    ///
    /// Inside a multi-threaded Tokio runtime the request runs on that runtime
    /// via `block_in_place`. Inside a `current_thread` runtime the call blocks
    /// that runtime while the request runs on the service's own runtime in a
    /// helper thread.
    fn fetch_node(&self, node_id: u64) -> Result<OsmNode, OsmDataError> {
        if node_id == 0 {
            warn!("Refusing to fetch OSM node 0: ids are positive");
            return Err(OsmDataError::NodeNotFound { node_id });
        }

        let Some(runtime) = self.runtime.as_ref() else {
            error!("OSM data service runtime is gone; cannot fetch node {node_id}");
            return Err(OsmDataError::NodeNotFound { node_id });
        };

        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(self.fetch_node_async(node_id)))
            }
            // A current_thread runtime cannot be blocked on from its own thread.
            Ok(_) => std::thread::scope(|scope| {
                scope
                    .spawn(|| runtime.block_on(self.fetch_node_async(node_id)))
                    .join()
                    .unwrap_or_else(|_| {
                        error!("Lookup thread for OSM node {node_id} panicked");
                        Err(OsmDataError::NodeNotFound { node_id })
                    })
            }),
            Err(_) => runtime.block_on(self.fetch_node_async(node_id)),
        }
    }
}

impl Drop for HttpOsmDataService {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
