//! Routing daemon API client

use crate::config::Config;
use crate::model::PeerReport;
use crate::report::render_outcome;
use gobgp_client_grpc::prelude::*;
use gobgp_client_grpc::{grpc_debug, grpc_info, grpc_warn, SERVICE_NAME};
use snafu::prelude::*;
use tonic::Status;

/// A failed `GetNeighbor` call
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum FetchError {
    #[snafu(display("gRPC call failed with code {code}: {message}"))]
    Rpc {
        /// Numeric gRPC status code
        code: i32,
        message: String,
        /// Status details, empty when the daemon sent none
        details: String,
    },
}

impl From<Status> for FetchError {
    fn from(status: Status) -> Self {
        FetchError::Rpc {
            code: status.code() as i32,
            message: status.message().to_owned(),
            details: String::from_utf8_lossy(status.details()).into_owned(),
        }
    }
}

/// Result of one peer query
pub type CallOutcome = Result<PeerReport, FetchError>;

/// Queries a routing daemon for its peer sessions.
///
/// Holds a shared handle to an already built channel. Building the client
/// never touches the network; an unreachable daemon only shows up as a
/// [`FetchError`] when a call is made.
#[derive(Debug, Clone)]
pub struct RoutingApiClient<S = GobgpApiClient<Channel>> {
    service: S,
}

impl RoutingApiClient<GobgpApiClient<Channel>> {
    /// Creates a client over `channel`, which the caller keeps ownership of.
    pub fn new(channel: Channel) -> Self {
        Self::with_service(GobgpApiClient::new(channel))
    }
}

impl<S: PeerService> RoutingApiClient<S> {
    /// Creates a client over any [`PeerService`] implementation
    pub fn with_service(service: S) -> Self {
        RoutingApiClient { service }
    }

    /// Requests the full peer set once and converts the answer.
    ///
    /// Sessions keep the order the daemon sent them in. There is no client
    /// side timeout or retry.
    pub async fn fetch_peers(&self) -> CallOutcome {
        grpc_debug!("(fetch_peers) entry.");

        // Call scoped state lives on a clone of the service handle.
        let mut service = self.service.clone();
        match service.list_peers().await {
            Ok(peers) => {
                let report = PeerReport::from(peers);
                grpc_info!("(fetch_peers) received {} peer sessions.", report.len());
                Ok(report)
            }
            Err(status) => {
                let error = FetchError::from(status);
                grpc_warn!("(fetch_peers) {}.", error);
                Err(error)
            }
        }
    }

    /// Requests the peer set and renders it as text.
    ///
    /// Failures are rendered as the three line status block instead of
    /// being returned as an error.
    pub async fn fetch_peer_report(&self) -> String {
        render_outcome(&self.fetch_peers().await)
    }
}

/// Builds the gobgp endpoint for `host` using the configured port and
/// transport security.
pub fn gobgp_endpoint(host: &str, config: &Config) -> Result<GrpcClient, ClientError> {
    GrpcClient::new_client(
        host,
        config.gobgp_port_grpc,
        SERVICE_NAME,
        config.transport_security,
    )
}
