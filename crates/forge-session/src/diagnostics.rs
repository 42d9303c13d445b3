//! In-memory log of rendering faults.
//!
//! A derivation that fails while a sheet is being rendered is recorded here
//! and the affected part renders as nothing, so one bad record never stops
//! the rest of the sheet from showing.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

/// One recorded fault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// When the fault happened.
    pub timestamp: DateTime<Utc>,
    /// What was being rendered.
    pub context: String,
    /// The error message.
    pub message: String,
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format("%H:%M:%S"),
            self.context,
            self.message
        )
    }
}

/// A chronological list of rendering faults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorLog {
    entries: Vec<ErrorEntry>,
}

impl ErrorLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fault.
    pub fn record(&mut self, context: &str, message: impl fmt::Display) {
        let message = message.to_string();
        error!(context, %message, "rendering fault");
        self.entries.push(ErrorEntry {
            timestamp: Utc::now(),
            context: context.to_string(),
            message,
        });
    }

    /// Run a fallible derivation, recording its error and returning `None` on failure.
    pub fn guard<T, E: fmt::Display>(
        &mut self,
        context: &str,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Option<T> {
        match f() {
            Ok(value) => Some(value),
            Err(e) => {
                self.record(context, e);
                None
            }
        }
    }

    /// All recorded faults, oldest first.
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// Number of faults.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has gone wrong.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every recorded fault.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_passes_success_through() {
        let mut log = ErrorLog::new();
        let value = log.guard("sum", || Ok::<_, String>(2 + 2));
        assert_eq!(value, Some(4));
        assert!(log.is_empty());
    }

    #[test]
    fn guard_records_failure() {
        let mut log = ErrorLog::new();
        let value: Option<i32> = log.guard("characteristics", || Err("bad array"));
        assert_eq!(value, None);
        assert_eq!(log.len(), 1);
        let entry = &log.entries()[0];
        assert_eq!(entry.context, "characteristics");
        assert_eq!(entry.message, "bad array");
        assert!(entry.to_string().ends_with("characteristics: bad array"));

        log.clear();
        assert!(log.is_empty());
    }
}
