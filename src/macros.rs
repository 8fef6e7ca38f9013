// Emits the event at most once per `$dur` milliseconds per call site, with the
// number of suppressed events attached. Evaluates to whether it was emitted.
macro_rules! log_every_ms {
    ($dur:expr, $level:expr, $($rest:tt)*) => {{
        use ::std::sync::atomic::{AtomicU64, Ordering};

        static LAST_EMIT_MS: AtomicU64 = AtomicU64::new(0);
        static SUPPRESSED: AtomicU64 = AtomicU64::new(0);

        let now_ms = ::std::time::SystemTime::now()
            .duration_since(::std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let last = LAST_EMIT_MS.load(Ordering::Relaxed);

        let emit = now_ms.saturating_sub(last) > $dur
            && LAST_EMIT_MS
                .compare_exchange(last, now_ms, Ordering::Relaxed, Ordering::Relaxed)
                .is_ok();
        if emit {
            let suppressed = SUPPRESSED.swap(0, Ordering::Relaxed);
            ::tracing::event!($level, suppressed, $($rest)*);
        } else {
            SUPPRESSED.fetch_add(1, Ordering::Relaxed);
        }
        emit
    }};
}
