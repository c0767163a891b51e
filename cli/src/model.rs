//! Peer session snapshots
//!
//! Values are built from one `GetNeighbor` response and dropped once the
//! report is rendered. Sub-messages missing from the response are treated
//! as zeroed records.

use gobgp_client_grpc::client as gobgp;
use serde::Serialize;

/// Configured identity of a neighbor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeerConfig {
    /// Neighbor address
    pub neighbor_address: String,
    /// Remote autonomous system number
    pub peer_as: u32,
    /// Router identifier announced by the remote side
    pub id: String,
}

/// Live session state of a neighbor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeerState {
    /// Address the session is established with
    pub neighbor_address: String,
    /// Session state code, as sent by the daemon
    pub bgp_state: String,
    /// Messages queued for the peer but not yet sent
    pub out_q: u32,
    /// Number of session flaps
    pub flops: u32,
}

/// Negotiated timer values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimersState {
    pub uptime: u64,
    pub negotiated_hold_time: u64,
    pub keepalive_interval: u64,
}

/// Configured timer values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimersConfig {
    pub hold_time: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionTimers {
    pub state: TimersState,
    pub config: TimersConfig,
}

/// One configured BGP neighbor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeerSession {
    pub conf: PeerConfig,
    pub info: PeerState,
    pub timers: SessionTimers,
}

impl PeerSession {
    /// Session address, or the configured one when the daemon sent no state
    pub fn address(&self) -> &str {
        if self.info.neighbor_address.is_empty() {
            &self.conf.neighbor_address
        } else {
            &self.info.neighbor_address
        }
    }
}

/// Every peer session returned by one query, in daemon order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PeerReport {
    sessions: Vec<PeerSession>,
}

impl PeerReport {
    pub fn new(sessions: Vec<PeerSession>) -> Self {
        PeerReport { sessions }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PeerSession> {
        self.sessions.iter()
    }

    pub fn sessions(&self) -> &[PeerSession] {
        &self.sessions
    }
}

impl<'a> IntoIterator for &'a PeerReport {
    type Item = &'a PeerSession;
    type IntoIter = std::slice::Iter<'a, PeerSession>;

    fn into_iter(self) -> Self::IntoIter {
        self.sessions.iter()
    }
}

impl From<gobgp::PeerConf> for PeerConfig {
    fn from(conf: gobgp::PeerConf) -> Self {
        PeerConfig {
            neighbor_address: conf.neighbor_address,
            peer_as: conf.peer_as,
            id: conf.id,
        }
    }
}

impl From<gobgp::PeerState> for PeerState {
    fn from(info: gobgp::PeerState) -> Self {
        PeerState {
            neighbor_address: info.neighbor_address,
            bgp_state: info.bgp_state,
            out_q: info.out_q,
            flops: info.flops,
        }
    }
}

impl From<gobgp::Timers> for SessionTimers {
    fn from(timers: gobgp::Timers) -> Self {
        let state = timers.state.unwrap_or_default();
        let config = timers.config.unwrap_or_default();

        SessionTimers {
            state: TimersState {
                uptime: state.uptime,
                negotiated_hold_time: state.negotiated_hold_time,
                keepalive_interval: state.keepalive_interval,
            },
            config: TimersConfig {
                hold_time: config.hold_time,
            },
        }
    }
}

impl From<gobgp::Peer> for PeerSession {
    fn from(peer: gobgp::Peer) -> Self {
        PeerSession {
            conf: peer.conf.unwrap_or_default().into(),
            info: peer.info.unwrap_or_default().into(),
            timers: peer.timers.unwrap_or_default().into(),
        }
    }
}

impl From<Vec<gobgp::Peer>> for PeerReport {
    fn from(peers: Vec<gobgp::Peer>) -> Self {
        PeerReport::new(peers.into_iter().map(PeerSession::from).collect())
    }
}
