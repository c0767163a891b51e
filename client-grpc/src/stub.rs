//! In-process gobgp stub server, only use for tests!

use crate::client::gobgp_api_server::{GobgpApi, GobgpApiServer};
use crate::client::{GetNeighborRequest, GetNeighborResponse, Peer};
use crate::service::SERVICE_NAME;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codegen::Bytes;
use tonic::{Code, Request, Response, Status};

/// Reply given to every `GetNeighbor` call
#[derive(Debug, Clone)]
pub enum StubReply {
    /// Answer with these peers, in this order
    Peers(Vec<Peer>),
    /// Fail the call with this status
    Failure {
        code: Code,
        message: String,
        details: String,
    },
}

/// gobgp API implementation answering from a fixed [`StubReply`]
#[derive(Debug, Clone)]
pub struct StubGobgpApi {
    reply: StubReply,
}

impl StubGobgpApi {
    pub fn new(reply: StubReply) -> Self {
        StubGobgpApi { reply }
    }
}

#[tonic::async_trait]
impl GobgpApi for StubGobgpApi {
    async fn get_neighbor(
        &self,
        request: Request<GetNeighborRequest>,
    ) -> Result<Response<GetNeighborResponse>, Status> {
        grpc_info!("(get_neighbor) (MOCK) {} server.", SERVICE_NAME);
        grpc_debug!("(get_neighbor) request: {:?}", request.get_ref());

        match &self.reply {
            StubReply::Peers(peers) => Ok(Response::new(GetNeighborResponse {
                peers: peers.clone(),
            })),
            StubReply::Failure {
                code,
                message,
                details,
            } => Err(Status::with_details(
                *code,
                message.clone(),
                Bytes::from(details.clone()),
            )),
        }
    }
}

/// Serves a [`StubGobgpApi`] on an ephemeral localhost port.
///
/// The server runs on a background task until the runtime shuts down.
pub async fn spawn_stub_server(reply: StubReply) -> std::io::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let service = GobgpApiServer::new(StubGobgpApi::new(reply));

    grpc_info!("(spawn_stub_server) (MOCK) hosted at {}.", addr);
    tokio::spawn(async move {
        if let Err(e) = tonic::transport::Server::builder()
            .add_service(service)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
        {
            grpc_error!("(spawn_stub_server) (MOCK) server stopped: {}.", e);
        }
    });

    Ok(addr)
}
