//! gobgp gRPC client
//!
//! Exposes the `gobgpapi.GobgpApi` messages and client, the [`PeerService`]
//! trait used to list a daemon's peer sessions and the [`GrpcClient`]
//! helper that turns a host and port into a tonic channel.

#[macro_use]
pub mod macros;
pub mod connection;
pub mod prelude;
pub mod service;

#[cfg(feature = "stub_server")]
pub mod stub;

/// Client Library: gobgp API messages, client and server stubs
pub mod client {
    #![allow(unused_qualifications)]
    include!("gobgpapi.rs");
}

pub use connection::{ClientError, GrpcClient, TransportSecurity};
pub use service::{PeerService, SERVICE_NAME};
