//! Shared test harness modules for the campus coffee CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod osm_node_steps;
mod osm_node_unit;
