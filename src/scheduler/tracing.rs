use tracing::error;

use crate::{
    constants::{NO_DECISION_LOG_EVERY_MS, SCHEDULER_TRACING_LOG_LEVEL},
    error::Result,
    mapping::{Mapping, SelectedPath},
    traits::{Connection, ConnectionToken},
};

use super::{Scheduler, SchedulerKind};

/// Logs every decision of the wrapped scheduler. Usage errors go out at ERROR,
/// repeated no-decision outcomes are rate limited.
#[derive(Debug)]
pub struct TracingScheduler<S> {
    inner: S,
}

impl<S> TracingScheduler<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

fn log_error<T>(kind: SchedulerKind, op: &'static str, res: &Result<T>) {
    if let Err(e) = res {
        error!(%kind, op, "scheduler usage error: {e:#}");
    }
}

impl<S> Scheduler for TracingScheduler<S>
where
    S: Scheduler,
{
    fn kind(&self) -> SchedulerKind {
        self.inner.kind()
    }

    fn bind(&mut self, token: ConnectionToken) -> Result<()> {
        let res = self.inner.bind(token);
        if res.is_ok() {
            tracing::event!(SCHEDULER_TRACING_LOG_LEVEL, kind=%self.kind(), %token, "bound");
        }
        log_error(self.kind(), "bind", &res);
        res
    }

    fn select_control_path(&self, conn: &dyn Connection) -> Result<SelectedPath> {
        let res = self.inner.select_control_path(conn);
        log_error(self.kind(), "select_control_path", &res);
        res
    }

    fn select_send_path(
        &mut self,
        conn: &dyn Connection,
        candidate_size: usize,
        aggregate_window: i64,
    ) -> Result<Option<SelectedPath>> {
        let res = self
            .inner
            .select_send_path(conn, candidate_size, aggregate_window);
        match &res {
            Ok(Some(p)) => tracing::event!(
                SCHEDULER_TRACING_LOG_LEVEL,
                kind=%self.kind(),
                index=p.index,
                id=%p.id,
                candidate_size,
                aggregate_window,
                "selected send path"
            ),
            Ok(None) => {
                log_every_ms!(
                    NO_DECISION_LOG_EVERY_MS,
                    SCHEDULER_TRACING_LOG_LEVEL,
                    kind=%self.kind(),
                    candidate_size,
                    aggregate_window,
                    "no send path"
                );
            }
            Err(_) => log_error(self.kind(), "select_send_path", &res),
        }
        res
    }

    fn generate_mapping(&mut self, conn: &dyn Connection) -> Result<Option<Mapping>> {
        let res = self.inner.generate_mapping(conn);
        match &res {
            Ok(Some(m)) => tracing::event!(
                SCHEDULER_TRACING_LOG_LEVEL,
                kind=%self.kind(),
                index=m.path.index,
                id=%m.path.id,
                dsn=?m.dsn,
                len=m.len.get(),
                "mapping"
            ),
            Ok(None) => {
                log_every_ms!(
                    NO_DECISION_LOG_EVERY_MS,
                    SCHEDULER_TRACING_LOG_LEVEL,
                    kind=%self.kind(),
                    next_dsn=?conn.next_tx_sequence(),
                    window=conn.available_window(),
                    "no mapping"
                );
            }
            Err(_) => log_error(self.kind(), "generate_mapping", &res),
        }
        res
    }
}
