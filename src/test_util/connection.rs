use crate::{
    dsn::Dsn,
    mapping::Mapping,
    traits::{Connection, ConnectionToken, Path},
};

use super::MockPath;

pub struct MockConnection {
    pub token: ConnectionToken,
    pub paths: Vec<MockPath>,
    pub window: i64,
    pub next_dsn: Dsn,
    // End of the data written by the user so far.
    pub buffered_end: Dsn,
}

impl MockConnection {
    pub fn new(paths: Vec<MockPath>) -> Self {
        Self {
            token: ConnectionToken::next(),
            paths,
            window: 1024 * 1024,
            next_dsn: Dsn(0),
            buffered_end: Dsn(0),
        }
    }

    pub fn with_window(mut self, window: i64) -> Self {
        self.window = window;
        self
    }

    pub fn with_buffered(mut self, bytes: u64) -> Self {
        self.buffered_end = self.next_dsn + bytes;
        self
    }

    pub fn with_next_dsn(mut self, dsn: u64) -> Self {
        let pending = self.buffered_end - self.next_dsn;
        self.next_dsn = Dsn(dsn);
        self.buffered_end = self.next_dsn + pending;
        self
    }

    pub fn path(&self, index: usize) -> &MockPath {
        &self.paths[index]
    }

    pub fn path_mut(&mut self, index: usize) -> &mut MockPath {
        &mut self.paths[index]
    }

    /// What the connection does with a mapping: register it, transmit it and
    /// consume the windows it used.
    #[track_caller]
    pub fn apply(&mut self, m: &Mapping) {
        assert_eq!(m.dsn, self.next_dsn, "mapping must start at next_dsn");
        let len = m.len.get();
        self.next_dsn = m.end();
        self.window -= len as i64;
        let path = &mut self.paths[m.path.index];
        assert_eq!(path.id, m.path.id);
        path.window = path.window.checked_sub(len).expect("path window overrun");
    }
}

impl Connection for MockConnection {
    fn token(&self) -> ConnectionToken {
        self.token
    }

    fn active_path_count(&self) -> usize {
        self.paths.len()
    }

    fn active_path(&self, index: usize) -> Option<&dyn Path> {
        self.paths.get(index).map(|p| p as &dyn Path)
    }

    fn available_window(&self) -> i64 {
        self.window
    }

    fn next_tx_sequence(&self) -> Dsn {
        self.next_dsn
    }

    fn buffered_from(&self, dsn: Dsn) -> usize {
        if dsn >= self.buffered_end {
            return 0;
        }
        (self.buffered_end - dsn) as usize
    }
}
