//! Modal dialog facility
//!
//! In a real user agent `alert` blocks interaction until dismissed. This
//! host has no windowing, so the standard implementation prints and
//! returns immediately.

/// Host modal surface
pub trait Modal {
    /// Show a modal alert with the given message
    fn alert(&mut self, message: &str);
}

/// Modal that writes the alert to stdout
#[derive(Debug, Default)]
pub struct StdModal;

impl Modal for StdModal {
    fn alert(&mut self, message: &str) {
        log::info!("[page] alert: {}", message);
        println!("[alert] {}", message);
    }
}

/// Modal that records every shown message, for deterministic assertions
#[derive(Debug, Default)]
pub struct RecordingModal {
    alerts: Vec<String>,
}

impl RecordingModal {
    /// Create an empty recording modal
    pub fn new() -> Self {
        Self::default()
    }

    /// All alert messages shown so far, in order
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Modal for RecordingModal {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
