//! Command line arguments

use crate::config::Config;
use crate::report::OutputFormat;
use clap::Parser;
use gobgp_client_grpc::TransportSecurity;

/// Usage line printed when no gobgp address is given
pub fn usage(program: &str) -> String {
    format!("Usage: {} [gobgp address]", program)
}

/// struct holding cli configuration options
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "Shows the BGP peer sessions of a gobgp daemon")]
pub struct Cli {
    /// gobgp address
    pub address: Option<String>,

    /// gRPC port of the daemon, overrides GOBGP_PORT_GRPC
    #[arg(long)]
    pub port: Option<u16>,

    /// Connect with TLS, overrides TRANSPORT_SECURITY
    #[arg(long)]
    pub tls: bool,

    /// Print the sessions as JSON
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Print neighbor addresses only
    #[arg(long, short)]
    pub quiet: bool,
}

impl Cli {
    /// Applies command line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.gobgp_port_grpc = port;
        }
        if self.tls {
            config.transport_security = TransportSecurity::Tls;
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        match (self.json, self.quiet) {
            (true, _) => OutputFormat::Json,
            (_, true) => OutputFormat::Quiet,
            _ => OutputFormat::Text,
        }
    }
}
