use lazy_static::lazy_static;
use metrics::{Counter, Histogram, counter, histogram};

pub struct Metrics {
    pub admission_rejected: Counter,
    pub control_path_selections: Counter,
    pub mapped_bytes: Counter,
    pub mapping_len: Histogram,
    pub mappings: Counter,
    pub no_data: Counter,
    pub no_path: Counter,
    pub no_window: Counter,
    pub send_path_selections: Counter,
    pub usage_errors: Counter,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            admission_rejected: counter!("mptcp_sched_admission_rejected"),
            control_path_selections: counter!("mptcp_sched_control_path_selections"),
            mapped_bytes: counter!("mptcp_sched_mapped_bytes"),
            mapping_len: histogram!("mptcp_sched_mapping_len"),
            mappings: counter!("mptcp_sched_mappings"),
            no_data: counter!("mptcp_sched_no_data"),
            no_path: counter!("mptcp_sched_no_path"),
            no_window: counter!("mptcp_sched_no_window"),
            send_path_selections: counter!("mptcp_sched_send_path_selections"),
            usage_errors: counter!("mptcp_sched_usage_errors"),
        }
    }
}

lazy_static! {
    pub static ref METRICS: Metrics = Metrics::new();
}
