use std::sync::atomic::{AtomicU64, Ordering};

use crate::{dsn::Dsn, rtte::RttEstimate};

static NEXT_CONNECTION_TOKEN: AtomicU64 = AtomicU64::new(0);

/// Identity of one connection. A scheduler binds to exactly one token for its
/// lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionToken(u64);

impl ConnectionToken {
    /// Allocate a process-unique token.
    pub fn next() -> Self {
        Self(NEXT_CONNECTION_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ConnectionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn#{}", self.0)
    }
}

impl std::fmt::Debug for ConnectionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

/// Stable identifier of a path (subflow). Unlike the index into the active
/// set, it survives other paths joining or leaving.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct PathId(pub u32);

impl std::fmt::Display for PathId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "path#{}", self.0)
    }
}

/// Read-only view of one active path, as the scheduler sees it.
///
/// Window and RTT come from the path's own congestion control and RTT
/// estimation; the scheduler only reads them.
pub trait Path {
    fn id(&self) -> PathId;

    /// Bytes this path currently permits to be outstanding.
    fn available_window(&self) -> usize;

    /// Negotiated maximum segment size. Must be positive.
    fn max_segment_size(&self) -> usize;

    fn rtt_estimate(&self) -> RttEstimate;

    /// Transport-level admission check for sending `size` bytes now
    /// (silly-window avoidance, pending ACK and similar). May have side effects
    /// inside the implementation, hence no guarantee two identical calls agree.
    fn can_accept(&self, size: usize) -> bool;
}

/// The connection-level (meta) view the scheduler reads on every call.
///
/// The active set must stay stable for the duration of one scheduler call,
/// but may change arbitrarily between calls.
pub trait Connection {
    fn token(&self) -> ConnectionToken;

    fn active_path_count(&self) -> usize;

    /// Active path at `index`, in rotation order. Index 0 is the default
    /// control path.
    fn active_path(&self, index: usize) -> Option<&dyn Path>;

    /// Aggregate window: min of local and peer-advertised window, net of
    /// in-flight bytes. May be negative, which means zero.
    fn available_window(&self) -> i64;

    /// First DSN not yet covered by any mapping.
    fn next_tx_sequence(&self) -> Dsn;

    /// Buffered, not yet mapped bytes starting at `dsn`.
    fn buffered_from(&self, dsn: Dsn) -> usize;
}
