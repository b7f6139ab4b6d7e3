//! Shared helpers for integration tests

#![allow(dead_code)]

use sqllint::reporter::api::ConsoleReporter;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Cloneable in-memory sink for reporter output
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Console reporter writing into a buffer the test can read back
pub fn buffered_reporter() -> (Arc<ConsoleReporter>, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let reporter = Arc::new(ConsoleReporter::with_writer(Box::new(buffer.clone())));
    (reporter, buffer)
}

/// Write `contents` to `name` inside `dir` and return the path as a unit id
pub fn write_sql(dir: &tempfile::TempDir, name: &str, contents: &str) -> String {
    let path: PathBuf = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().to_string()
}
