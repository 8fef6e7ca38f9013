// The scheduler's output: which path, which bytes of the stream, how many.
use std::num::NonZeroUsize;

use crate::{dsn::Dsn, traits::PathId};

/// A path picked from the active set.
///
/// `index` is the position in the active set as read during the call that
/// produced it, and is only valid against that snapshot. Use `id` to refer to
/// the path later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedPath {
    pub index: usize,
    pub id: PathId,
}

/// Assignment of the contiguous range `[dsn, dsn + len)` of the logical stream
/// to one path. Registering and transmitting it, and advancing the
/// connection's next DSN, is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub path: SelectedPath,
    pub dsn: Dsn,
    pub len: NonZeroUsize,
}

impl Mapping {
    /// First DSN past this mapping.
    pub fn end(&self) -> Dsn {
        self.dsn + self.len.get() as u64
    }
}

/// Usable bytes of an aggregate window. Negative means zero.
pub(crate) fn aggregate_window_bytes(window: i64) -> usize {
    if window <= 0 {
        return 0;
    }
    usize::try_from(window).unwrap_or(usize::MAX)
}

/// Final mapping length: the minimum of every limit. Zero is not a mapping.
pub(crate) fn mapping_len(
    path_window: usize,
    aggregate_window: usize,
    pending: usize,
    mss: usize,
) -> Option<NonZeroUsize> {
    NonZeroUsize::new(path_window.min(aggregate_window).min(pending).min(mss))
}
