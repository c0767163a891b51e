#![doc = include_str!("../README.md")]

#[cfg(test)]
#[macro_use]
pub mod test_util;

#[macro_use]
pub mod macros;
pub mod args;
pub mod client;
pub mod config;
pub mod logger;
pub mod model;
pub mod report;

pub use crate::client::{CallOutcome, FetchError, RoutingApiClient};
pub use crate::config::Config;
pub use crate::model::{PeerReport, PeerSession};
pub use crate::report::OutputFormat;
pub use clap::Parser;

/// Exit status for bad arguments, bad configuration or an unusable endpoint
pub const EXIT_USAGE: u8 = 1;

/// Exit status when the gobgp call fails
pub const EXIT_RPC_FAILURE: u8 = 2;
