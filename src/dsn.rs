use std::ops::Deref;

/// Data sequence number: a position in the connection-level byte stream,
/// independent of any path's own sequence numbering.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct Dsn(pub u64);

impl Deref for Dsn {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<u64> for Dsn {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Dsn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::fmt::Debug for Dsn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::ops::Add<u64> for Dsn {
    type Output = Dsn;

    fn add(self, rhs: u64) -> Self::Output {
        Self(self.0.wrapping_add(rhs))
    }
}

impl std::ops::AddAssign<u64> for Dsn {
    fn add_assign(&mut self, rhs: u64) {
        *self = *self + rhs;
    }
}

// Distance in bytes. Callers only subtract an earlier DSN from a later one.
impl std::ops::Sub<Dsn> for Dsn {
    type Output = u64;

    fn sub(self, rhs: Dsn) -> Self::Output {
        self.0.wrapping_sub(rhs.0)
    }
}
