// Fastest-RTT: latency oriented. Always places data on the path with the lowest
// RTT estimate among those with free window. Keeps no state besides the
// binding.
//
// Admission asymmetry: when generating a mapping the admission check is asked
// about the path window alone; the aggregate window only clamps the final
// length. select_send_path clamps to both before asking.
use tracing::trace;

use crate::{
    error::Result,
    mapping::{Mapping, SelectedPath, aggregate_window_bytes, mapping_len},
    metrics::METRICS,
    rtte::RttEstimate,
    traits::{Connection, ConnectionToken, Path},
};

use super::{
    Binding, PendingSend, Scheduler, SchedulerKind, control_path, emit_mapping, no_path, path_at,
    selected,
};

#[derive(Debug, Default)]
pub struct FastestRtt {
    binding: Binding,
}

impl FastestRtt {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Strictly lowest RTT among paths with a positive window. On ties the lowest
/// index wins. Unmeasured paths are eligible but lose to any measured one.
fn find_fastest_with_free_window(conn: &dyn Connection) -> Result<Option<(usize, &dyn Path)>> {
    let mut best: Option<(usize, &dyn Path, RttEstimate)> = None;

    for index in 0..conn.active_path_count() {
        let path = path_at(conn, index)?;
        if path.available_window() == 0 {
            continue;
        }
        let rtt = path.rtt_estimate();
        trace!(index, id=%path.id(), ?rtt, window=path.available_window(), "fastest-rtt: candidate");
        if best.is_none_or(|(_, _, lowest)| rtt < lowest) {
            best = Some((index, path, rtt));
        }
    }

    Ok(best.map(|(index, path, _)| (index, path)))
}

impl Scheduler for FastestRtt {
    fn kind(&self) -> SchedulerKind {
        SchedulerKind::FastestRtt
    }

    fn bind(&mut self, token: ConnectionToken) -> Result<()> {
        self.binding.bind(token)
    }

    fn select_control_path(&self, conn: &dyn Connection) -> Result<SelectedPath> {
        self.binding.check(conn)?;
        control_path(conn)
    }

    fn select_send_path(
        &mut self,
        conn: &dyn Connection,
        candidate_size: usize,
        aggregate_window: i64,
    ) -> Result<Option<SelectedPath>> {
        self.binding.check(conn)?;
        let aggregate_window = aggregate_window_bytes(aggregate_window);
        trace!(candidate_size, aggregate_window, "fastest-rtt: select send path");

        let Some((index, path)) = find_fastest_with_free_window(conn)? else {
            no_path();
            return Ok(None);
        };

        let can_send = path.available_window().min(aggregate_window);
        if can_send > 0 && path.can_accept(can_send) {
            METRICS.send_path_selections.increment(1);
            return Ok(Some(selected(index, path)));
        }

        trace!(index, id=%path.id(), can_send, "fastest path can't send");
        if can_send > 0 {
            METRICS.admission_rejected.increment(1);
        }
        no_path();
        Ok(None)
    }

    fn generate_mapping(&mut self, conn: &dyn Connection) -> Result<Option<Mapping>> {
        self.binding.check(conn)?;
        let Some(send) = PendingSend::read(conn) else {
            return Ok(None);
        };

        let Some((index, path)) = find_fastest_with_free_window(conn)? else {
            no_path();
            return Ok(None);
        };

        // Not clamped to the aggregate window before the admission check.
        let can_send = path.available_window();
        if !path.can_accept(can_send) {
            // No fallback to the second fastest path within one call.
            trace!(index, id=%path.id(), can_send, "fastest-rtt: admission rejected");
            METRICS.admission_rejected.increment(1);
            return Ok(None);
        }

        let Some(len) = mapping_len(
            can_send,
            send.aggregate_window,
            send.pending,
            path.max_segment_size(),
        ) else {
            trace!(index, id=%path.id(), "fastest-rtt: nothing sendable");
            no_path();
            return Ok(None);
        };

        trace!(index, id=%path.id(), dsn=?send.next_dsn, len = len.get(), "fastest-rtt: mapped");
        Ok(Some(emit_mapping(selected(index, path), send.next_dsn, len)))
    }
}
