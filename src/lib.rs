#[macro_use]
mod macros;

mod constants;
mod dsn;
mod error;
mod mapping;
mod metrics;
mod rtte;
pub mod scheduler;
#[cfg(test)]
mod test_util;
mod traits;

pub use dsn::Dsn;
pub use error::{Error, Result};
pub use mapping::{Mapping, SelectedPath};
pub use rtte::RttEstimate;
pub use scheduler::{
    Binding, Scheduler, SchedulerConfig, SchedulerKind, fastest_rtt::FastestRtt,
    round_robin::RoundRobin, tracing::TracingScheduler,
};
pub use traits::{Connection, ConnectionToken, Path, PathId};
