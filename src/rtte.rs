use std::time::Duration;

/// A path's current round-trip time estimate, as produced by whatever
/// estimator the path runs.
///
/// Totally ordered. [`RttEstimate::UNKNOWN`] (no sample yet) compares worse
/// than any measured value, so an unmeasured path is never preferred over a
/// measured one, but is still eligible when it is the only choice.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RttEstimate {
    // Stored in microseconds; u64::MAX is reserved for "unknown".
    micros: u64,
}

impl RttEstimate {
    pub const UNKNOWN: RttEstimate = RttEstimate { micros: u64::MAX };

    pub fn from_duration(d: Duration) -> Self {
        // Saturate one below the sentinel so a huge measurement stays "known".
        let micros = u64::try_from(d.as_micros())
            .unwrap_or(u64::MAX)
            .min(u64::MAX - 1);
        Self { micros }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::from_duration(Duration::from_millis(ms))
    }

    pub fn is_known(&self) -> bool {
        self.micros != u64::MAX
    }

    pub fn as_duration(&self) -> Option<Duration> {
        self.is_known().then(|| Duration::from_micros(self.micros))
    }
}

impl Default for RttEstimate {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl From<Duration> for RttEstimate {
    fn from(value: Duration) -> Self {
        Self::from_duration(value)
    }
}

impl From<Option<Duration>> for RttEstimate {
    fn from(value: Option<Duration>) -> Self {
        value.map(Self::from_duration).unwrap_or(Self::UNKNOWN)
    }
}

impl std::fmt::Debug for RttEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_duration() {
            Some(d) => d.fmt(f),
            None => f.write_str("unknown"),
        }
    }
}

impl std::fmt::Display for RttEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
