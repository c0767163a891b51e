//! Helpers shared by unit tests

use crate::model::PeerSession;
use gobgp_client_grpc::client as gobgp;
use gobgp_client_grpc::PeerService;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tonic::codegen::Bytes;
use tonic::{Code, Status};

/// Writes an info! message to the app::unit_test logger
macro_rules! ut_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::unit_test", $($arg)+);
    };
}

/// Writes a debug! message to the app::unit_test logger
macro_rules! ut_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::unit_test", $($arg)+);
    };
}

/// Text block of [`example_peer`]
pub const EXAMPLE_BLOCK: &str = "BGP neighbor is: 192.168.1.1, remote AS: 65001
\tBGP version: 4, remote route ID 10.0.0.1
\tBGP state = 6, up for 120
\tBGP OutQ = 0, Flops = 0
\tHold time is 90, keepalive interval is 30seconds
\tConfigured hold time is 90
";

/// An established peer as gobgp would send it
pub fn example_peer() -> gobgp::Peer {
    gobgp::Peer {
        families: vec![65537],
        conf: Some(gobgp::PeerConf {
            neighbor_address: String::from("192.168.1.1"),
            peer_as: 65001,
            id: String::from("10.0.0.1"),
            local_as: 64512,
            ..Default::default()
        }),
        info: Some(gobgp::PeerState {
            neighbor_address: String::from("192.168.1.1"),
            peer_as: 65001,
            bgp_state: String::from("6"),
            out_q: 0,
            flops: 0,
            ..Default::default()
        }),
        timers: Some(gobgp::Timers {
            config: Some(gobgp::TimersConfig {
                hold_time: 90,
                keepalive_interval: 30,
                connect_retry: 120,
            }),
            state: Some(gobgp::TimersState {
                uptime: 120,
                negotiated_hold_time: 90,
                keepalive_interval: 30,
                ..Default::default()
            }),
        }),
    }
}

pub fn example_session() -> PeerSession {
    PeerSession::from(example_peer())
}

#[derive(Debug, Clone)]
enum MockReply {
    Peers(Vec<gobgp::Peer>),
    Failure {
        code: Code,
        message: String,
        details: String,
    },
}

/// [`PeerService`] answering from memory and counting calls
#[derive(Debug, Clone)]
pub struct MockPeerService {
    reply: MockReply,
    calls: Arc<AtomicUsize>,
}

impl MockPeerService {
    pub fn peers(peers: Vec<gobgp::Peer>) -> Self {
        MockPeerService {
            reply: MockReply::Peers(peers),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failure(code: Code, message: &str, details: &str) -> Self {
        MockPeerService {
            reply: MockReply::Failure {
                code,
                message: message.to_owned(),
                details: details.to_owned(),
            },
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of calls made through this mock or any of its clones
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[tonic::async_trait]
impl PeerService for MockPeerService {
    async fn list_peers(&mut self) -> Result<Vec<gobgp::Peer>, Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            MockReply::Peers(peers) => Ok(peers.clone()),
            MockReply::Failure {
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
