// Round-robin: fairness oriented. Each call starts scanning right after the
// last path used, so with N active paths every path is revisited within N
// successful calls.
use tracing::trace;

use crate::{
    error::Result,
    mapping::{Mapping, SelectedPath, aggregate_window_bytes, mapping_len},
    metrics::METRICS,
    traits::{Connection, ConnectionToken},
};

use super::{
    Binding, PendingSend, Scheduler, SchedulerKind, control_path, emit_mapping, no_path, path_at,
    selected,
};

#[derive(Debug, Default)]
pub struct RoundRobin {
    binding: Binding,
    // Index (into the active set) of the last path used. None points one
    // before the first path, so the first selection lands on index 0.
    // Only advanced when a path is actually selected.
    last_used: Option<usize>,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_used(&self) -> Option<usize> {
        self.last_used
    }
}

// Indices to try, in order: one full cycle starting after `last_used`.
// The active set may have shrunk since the cursor was set, hence the modulo.
fn scan_order(last_used: Option<usize>, count: usize) -> impl Iterator<Item = usize> {
    let start = match (last_used, count) {
        (_, 0) | (None, _) => 0,
        (Some(last), count) => (last + 1) % count,
    };
    (0..count).map(move |offset| (start + offset) % count)
}

impl Scheduler for RoundRobin {
    fn kind(&self) -> SchedulerKind {
        SchedulerKind::RoundRobin
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
        let count = conn.active_path_count();
        trace!(count, candidate_size, aggregate_window, last_used=?self.last_used, "round-robin: select send path");

        for index in scan_order(self.last_used, count) {
            let path = path_at(conn, index)?;
            let can_send = path.available_window().min(aggregate_window);
            if can_send == 0 {
                trace!(index, id=%path.id(), "no window");
                continue;
            }
            if !path.can_accept(can_send) {
                trace!(index, id=%path.id(), can_send, "admission rejected");
                METRICS.admission_rejected.increment(1);
                continue;
            }
            self.last_used = Some(index);
            METRICS.send_path_selections.increment(1);
            return Ok(Some(selected(index, path)));
        }

        no_path();
        Ok(None)
    }

    fn generate_mapping(&mut self, conn: &dyn Connection) -> Result<Option<Mapping>> {
        self.binding.check(conn)?;
        let Some(send) = PendingSend::read(conn) else {
            return Ok(None);
        };
        let count = conn.active_path_count();
        trace!(count, last_used=?self.last_used, "round-robin: choosing between paths");

        for index in scan_order(self.last_used, count) {
            let path = path_at(conn, index)?;
            let path_window = path.available_window();
            let can_send = path_window.min(send.aggregate_window);
            let Some(len) = mapping_len(
                can_send,
                send.aggregate_window,
                send.pending,
                path.max_segment_size(),
            ) else {
                trace!(index, id=%path.id(), path_window, "nothing sendable on path");
                continue;
            };
            if !path.can_accept(len.get()) {
                trace!(index, id=%path.id(), len = len.get(), "admission rejected");
                METRICS.admission_rejected.increment(1);
                continue;
            }

            self.last_used = Some(index);
            trace!(index, id=%path.id(), dsn=?send.next_dsn, len = len.get(), "round-robin: mapped");
            return Ok(Some(emit_mapping(
                selected(index, path),
                send.next_dsn,
                len,
            )));
        }

        no_path();
        Ok(None)
    }
}
