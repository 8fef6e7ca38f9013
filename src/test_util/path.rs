use parking_lot::Mutex;

use crate::{
    rtte::RttEstimate,
    traits::{Path, PathId},
};

pub struct MockPath {
    pub id: PathId,
    pub window: usize,
    pub mss: usize,
    pub rtt: RttEstimate,
    // Admission accepts sizes up to this.
    pub max_accept: usize,
    admission_queries: Mutex<Vec<usize>>,
}

impl MockPath {
    pub fn new(id: u32) -> Self {
        Self {
            id: PathId(id),
            window: 64 * 1024,
            mss: 1460,
            rtt: RttEstimate::UNKNOWN,
            max_accept: usize::MAX,
            admission_queries: Default::default(),
        }
    }

    pub fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn mss(mut self, mss: usize) -> Self {
        self.mss = mss;
        self
    }

    pub fn rtt_ms(mut self, ms: u64) -> Self {
        self.rtt = RttEstimate::from_millis(ms);
        self
    }

    pub fn max_accept(mut self, max_accept: usize) -> Self {
        self.max_accept = max_accept;
        self
    }

    pub fn reject_all(self) -> Self {
        self.max_accept(0)
    }

    /// Sizes passed to `can_accept`, oldest first.
    pub fn admission_queries(&self) -> Vec<usize> {
        self.admission_queries.lock().clone()
    }
}

impl Path for MockPath {
    fn id(&self) -> PathId {
        self.id
    }

    fn available_window(&self) -> usize {
        self.window
    }

    fn max_segment_size(&self) -> usize {
        self.mss
    }

    fn rtt_estimate(&self) -> RttEstimate {
        self.rtt
    }

    fn can_accept(&self, size: usize) -> bool {
        self.admission_queries.lock().push(size);
        size <= self.max_accept
    }
}
