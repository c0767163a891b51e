//! Peer session listing over the gobgp API

use crate::client::gobgp_api_client::GobgpApiClient;
use crate::client::{GetNeighborRequest, Peer};
use tonic::transport::Channel;
use tonic::Status;

/// Name used in log lines emitted by the gobgp client
pub const SERVICE_NAME: &str = "gobgp";

/// Lists the BGP peer sessions known to a routing daemon.
///
/// Implementors are cheap to clone; callers clone the handle for every call
/// so no request state leaks between calls.
#[tonic::async_trait]
pub trait PeerService: Clone + Send + 'static {
    /// Requests the full peer set, returned in the order the daemon sends it.
    async fn list_peers(&mut self) -> Result<Vec<Peer>, Status>;
}

#[tonic::async_trait]
impl PeerService for GobgpApiClient<Channel> {
    async fn list_peers(&mut self) -> Result<Vec<Peer>, Status> {
        grpc_info!("(list_peers) {} client.", SERVICE_NAME);

        // An empty address asks for every neighbor.
        let request = GetNeighborRequest {
            enable_advertised: false,
            address: String::new(),
        };
        grpc_debug!("(list_peers) request: {:?}", request);

        match self.get_neighbor(request).await {
            Ok(response) => {
                let peers = response.into_inner().peers;
                grpc_debug!("(list_peers) received {} peers.", peers.len());
                Ok(peers)
            }
            Err(status) => {
                grpc_warn!(
                    "(list_peers) request failed: {:?} {}.",
                    status.code(),
                    status.message()
                );
                Err(status)
            }
        }
    }
}
