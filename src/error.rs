use crate::traits::ConnectionToken;

/// Usage errors. These indicate an integration bug in the caller, never a
/// transient runtime condition: "nothing to schedule right now" is `Ok(None)`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("scheduler already bound to connection {bound}")]
    AlreadyBound { bound: ConnectionToken },

    #[error("scheduler used before being bound to a connection")]
    NotBound,

    #[error("scheduler bound to connection {bound}, but called with connection {got}")]
    WrongConnection {
        bound: ConnectionToken,
        got: ConnectionToken,
    },

    #[error("connection has no active paths")]
    NoActivePath,

    #[error(
        "bug: active path {index} disappeared during a scheduling call (active_path_count={count})"
    )]
    BugActivePathMissing { index: usize, count: usize },

    #[error("unknown scheduler kind {0:?}, expected \"round-robin\" or \"fastest-rtt\"")]
    UnknownSchedulerKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;
