//! Connection helper for the gobgp gRPC endpoint
//!
//! Builds the endpoint address from a host, a port and the transport
//! security policy, and hands out lazily connected [`Channel`]s. Nothing
//! touches the network until the first request is sent.

use serde::Deserialize;
use snafu::prelude::*;
use std::net::{IpAddr, Ipv6Addr};
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

/// Transport security applied to the gRPC channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportSecurity {
    /// Plain text HTTP/2, gobgp's out of the box setup
    #[default]
    None,
    /// TLS, verified against the system trust roots
    Tls,
}

impl TransportSecurity {
    /// URI scheme matching the security policy
    pub fn scheme(&self) -> &'static str {
        match self {
            TransportSecurity::None => "http",
            TransportSecurity::Tls => "https",
        }
    }
}

/// Errors raised while building a client connection
#[derive(Debug, Snafu)]
pub enum ClientError {
    #[snafu(display("Invalid gRPC endpoint address [{address}]: {source}."))]
    InvalidEndpoint {
        address: String,
        source: tonic::transport::Error,
    },

    #[snafu(display("TLS needs a DNS name to verify, got IP address [{host}]."))]
    TlsIpHost { host: String },

    #[snafu(display("Could not configure TLS for [{address}]: {source}."))]
    TlsConfig {
        address: String,
        source: tonic::transport::Error,
    },
}

/// A named gRPC endpoint
#[derive(Debug, Clone)]
pub struct GrpcClient {
    name: String,
    target: String,
    address: String,
    endpoint: Endpoint,
}

impl GrpcClient {
    /// Creates the endpoint for `host:port` without connecting.
    ///
    /// # Example
    /// ```
    /// use gobgp_client_grpc::{GrpcClient, TransportSecurity};
    ///
    /// let client = GrpcClient::new_client("10.0.0.1", 50051, "gobgp", TransportSecurity::None).unwrap();
    /// assert_eq!(client.get_target(), "10.0.0.1:50051");
    /// assert_eq!(client.get_address(), "http://10.0.0.1:50051");
    /// ```
    pub fn new_client(
        host: &str,
        port: u16,
        name: &str,
        security: TransportSecurity,
    ) -> Result<Self, ClientError> {
        let target = endpoint_target(host, port);
        let address = format!("{}://{}", security.scheme(), target);

        let mut endpoint = Endpoint::from_shared(address.clone()).context(InvalidEndpointSnafu {
            address: address.clone(),
        })?;

        if security == TransportSecurity::Tls {
            let domain = host.trim_start_matches('[').trim_end_matches(']');
            // rustls only verifies certificates against DNS names.
            ensure!(
                domain.parse::<IpAddr>().is_err(),
                TlsIpHostSnafu {
                    host: host.to_owned()
                }
            );
            endpoint = endpoint
                .tls_config(ClientTlsConfig::new().domain_name(domain))
                .context(TlsConfigSnafu {
                    address: address.clone(),
                })?;
        }

        grpc_debug!(
            "(new_client) {} client endpoint created for [{}].",
            name,
            address
        );

        Ok(GrpcClient {
            name: name.to_owned(),
            target,
            address,
            endpoint,
        })
    }

    /// Name of the service this client talks to
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// `host:port` as dialed
    pub fn get_target(&self) -> &str {
        &self.target
    }

    /// Full endpoint URI, scheme included
    pub fn get_address(&self) -> &str {
        &self.address
    }

    /// Returns a channel that connects on first use.
    ///
    /// Must be called from within a tokio runtime.
    pub fn channel(&self) -> Channel {
        grpc_debug!("(channel) {} lazy channel to [{}].", self.name, self.address);
        self.endpoint.connect_lazy()
    }
}

/// Joins host and port, bracketing bare IPv6 literals.
pub fn endpoint_target(host: &str, port: u16) -> String {
    match host.parse::<Ipv6Addr>() {
        Ok(_) => format!("[{}]:{}", host, port),
        Err(_) => format!("{}:{}", host, port),
    }
}
