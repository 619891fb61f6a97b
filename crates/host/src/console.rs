//! Console facility
//!
//! The host-provided logging surface scripts emit diagnostic lines to.

/// Sink for script diagnostic output
pub trait Console {
    /// Emit one line of output
    fn log(&mut self, message: &str);
}

/// Console that writes to stdout and mirrors to the log
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn log(&mut self, message: &str) {
        log::info!("[page] {}", message);
        println!("[console] {}", message);
    }
}

/// Console that records every emitted line, for deterministic assertions
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: Vec<String>,
}

impl RecordingConsole {
    /// Create an empty recording console
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines emitted so far, in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Console for RecordingConsole {
    fn log(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
