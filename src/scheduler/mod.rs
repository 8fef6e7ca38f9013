//! Data schedulers: decide which bytes of the connection-level stream go on
//! which path, and how many.
//!
//! A scheduler never sends anything and never mutates paths or the
//! connection. It reads a fresh snapshot of the active set on every call and
//! returns a decision; `Ok(None)` means "nothing to schedule right now", which
//! is a normal outcome. `Err` is reserved for caller bugs (see [`Error`]).

pub mod fastest_rtt;
pub mod round_robin;
pub mod tracing;


use std::str::FromStr;

use ::tracing::debug;

use crate::{
    dsn::Dsn,
    error::{Error, Result},
    mapping::{Mapping, SelectedPath, aggregate_window_bytes},
    metrics::METRICS,
    traits::{Connection, ConnectionToken, Path},
};

use self::{fastest_rtt::FastestRtt, round_robin::RoundRobin, tracing::TracingScheduler};

/// The fixed capability set every scheduling policy implements.
///
/// All selection methods must be called with the connection the scheduler was
/// bound to via [`Scheduler::bind`].
pub trait Scheduler: Send + Sync + core::fmt::Debug {
    fn kind(&self) -> SchedulerKind;

    /// Bind to a connection. Allowed exactly once per scheduler.
    fn bind(&mut self, token: ConnectionToken) -> Result<()>;

    /// The default path for control-only segments (e.g. pure ACKs): the first
    /// active path. Fails with [`Error::NoActivePath`] on an empty active set.
    fn select_control_path(&self, conn: &dyn Connection) -> Result<SelectedPath>;

    /// Pick a path to send on immediately. The path must have a positive
    /// window and accept `min(path window, aggregate_window)` bytes.
    ///
    /// `candidate_size` is advisory and only logged: neither the path choice
    /// nor the admission query depends on it.
    fn select_send_path(
        &mut self,
        conn: &dyn Connection,
        candidate_size: usize,
        aggregate_window: i64,
    ) -> Result<Option<SelectedPath>>;

    /// Map the next slice of unsent data onto a path.
    fn generate_mapping(&mut self, conn: &dyn Connection) -> Result<Option<Mapping>>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulerKind {
    /// Rotate across active paths; fairness oriented.
    #[default]
    RoundRobin,
    /// Lowest RTT path with free window; latency oriented.
    FastestRtt,
}

impl SchedulerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchedulerKind::RoundRobin => "round-robin",
            SchedulerKind::FastestRtt => "fastest-rtt",
        }
    }
}

impl std::fmt::Display for SchedulerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchedulerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "round-robin" | "roundrobin" | "rr" => Ok(SchedulerKind::RoundRobin),
            "fastest-rtt" | "fastest" | "min-rtt" => Ok(SchedulerKind::FastestRtt),
            _ => Err(Error::UnknownSchedulerKind(s.to_owned())),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SchedulerConfig {
    pub kind: SchedulerKind,
    /// Log every decision (rate limited for no-decision outcomes).
    pub tracing: bool,
}

impl SchedulerConfig {
    pub fn create(&self) -> Box<dyn Scheduler> {
        match (self.kind, self.tracing) {
            (SchedulerKind::RoundRobin, true) => {
                debug!("enabling scheduler tracing");
                Box::new(TracingScheduler::new(RoundRobin::new()))
            }
            (SchedulerKind::RoundRobin, false) => Box::new(RoundRobin::new()),
            (SchedulerKind::FastestRtt, true) => {
                debug!("enabling scheduler tracing");
                Box::new(TracingScheduler::new(FastestRtt::new()))
            }
            (SchedulerKind::FastestRtt, false) => Box::new(FastestRtt::new()),
        }
    }
}

/// One-time binding of a scheduler to a connection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    #[default]
    Unbound,
    Bound(ConnectionToken),
}

impl Binding {
    pub fn bind(&mut self, token: ConnectionToken) -> Result<()> {
        match *self {
            Binding::Bound(bound) => Err(usage_error(Error::AlreadyBound { bound })),
            Binding::Unbound => {
                *self = Binding::Bound(token);
                Ok(())
            }
        }
    }

    pub fn check(&self, conn: &dyn Connection) -> Result<()> {
        match *self {
            Binding::Unbound => Err(usage_error(Error::NotBound)),
            Binding::Bound(bound) if bound == conn.token() => Ok(()),
            Binding::Bound(bound) => Err(usage_error(Error::WrongConnection {
                bound,
                got: conn.token(),
            })),
        }
    }
}

fn usage_error(e: Error) -> Error {
    METRICS.usage_errors.increment(1);
    e
}

/// Active path at `index`, which the caller got from `active_path_count()`
/// within the same call.
pub(crate) fn path_at(conn: &dyn Connection, index: usize) -> Result<&dyn Path> {
    conn.active_path(index)
        .ok_or_else(|| Error::BugActivePathMissing {
            index,
            count: conn.active_path_count(),
        })
}

pub(crate) fn selected(index: usize, path: &dyn Path) -> SelectedPath {
    SelectedPath {
        index,
        id: path.id(),
    }
}

pub(crate) fn control_path(conn: &dyn Connection) -> Result<SelectedPath> {
    if conn.active_path_count() == 0 {
        return Err(usage_error(Error::NoActivePath));
    }
    let path = path_at(conn, 0)?;
    METRICS.control_path_selections.increment(1);
    Ok(selected(0, path))
}

/// What a mapping may cover, before any path is considered.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingSend {
    pub next_dsn: Dsn,
    pub pending: usize,
    pub aggregate_window: usize,
}

impl PendingSend {
    /// `None` if there is nothing to send or no aggregate window.
    pub fn read(conn: &dyn Connection) -> Option<Self> {
        let next_dsn = conn.next_tx_sequence();
        let pending = conn.buffered_from(next_dsn);
        let window = conn.available_window();
        ::tracing::trace!(?next_dsn, pending, window, "pending send");

        if pending == 0 {
            debug!("nothing to send");
            METRICS.no_data.increment(1);
            return None;
        }

        let aggregate_window = aggregate_window_bytes(window);
        if aggregate_window == 0 {
            debug!(window, "no aggregate window available");
            METRICS.no_window.increment(1);
            return None;
        }

        Some(Self {
            next_dsn,
            pending,
            aggregate_window,
        })
    }
}

pub(crate) fn emit_mapping(
    path: SelectedPath,
    dsn: Dsn,
    len: std::num::NonZeroUsize,
) -> Mapping {
    METRICS.mappings.increment(1);
    METRICS.mapped_bytes.increment(len.get() as u64);
    METRICS.mapping_len.record(len.get() as f64);
    Mapping { path, dsn, len }
}

pub(crate) fn no_path() {
    debug!("no path qualifies");
    METRICS.no_path.increment(1);
}
