//! Build log boundary. The host decides where lines end up, and none of
//! these calls may fail observably as far as the exporter can tell. Calls can
//! arrive off the host's interactive thread; a UI-facing implementation must
//! marshal them itself.

use std::sync::Mutex;

pub trait LogSink {
    /// Append one line of build output.
    fn append(&self, line: &str);

    /// Replace the status message; `None` clears it.
    fn message(&self, text: Option<&str>);

    /// Overall progress, 0..=100.
    fn percent(&self, value: u32);
}

/// Discards everything.
pub struct NullLog;

impl LogSink for NullLog {
    fn append(&self, _line: &str) {}
    fn message(&self, _text: Option<&str>) {}
    fn percent(&self, _value: u32) {}
}

/// Records every call, for tests and headless hosts.
#[derive(Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
    messages: Mutex<Vec<Option<String>>>,
    percents: Mutex<Vec<u32>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<Option<String>> {
        self.messages.lock().unwrap().clone()
    }

    pub fn percents(&self) -> Vec<u32> {
        self.percents.lock().unwrap().clone()
    }
}

impl LogSink for MemoryLog {
    fn append(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }

    fn message(&self, text: Option<&str>) {
        self.messages.lock().unwrap().push(text.map(str::to_string));
    }

    fn percent(&self, value: u32) {
        self.percents.lock().unwrap().push(value);
    }
}
