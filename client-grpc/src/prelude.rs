//! Re-export of used objects

pub use super::client as gobgp;
pub use super::connection::{ClientError, GrpcClient, TransportSecurity};
pub use super::service::PeerService;
pub use gobgp::gobgp_api_client::GobgpApiClient;

pub use tonic::transport::Channel;
