//! Append-only trace surface for matrices and walk steps.

use serde_json::Value;

use crate::types::now_millis;

/// Append-only sink for trace lines and structured values.
pub trait TraceSink {
    /// Append one plain line.
    fn line(&mut self, message: &str);

    /// Append a structured value, pretty-printed with 2-space indentation
    /// and stable field order.
    fn value(&mut self, value: &Value) {
        let rendered = serde_json::to_string_pretty(value).unwrap_or_default();
        self.line(&rendered);
    }
}

/// Writes trace lines to stdout, optionally prefixed with wall-clock time.
#[derive(Debug, Default)]
pub struct ConsoleTrace {
    timestamps: bool,
}

impl ConsoleTrace {
    /// Plain stdout sink.
    pub fn new() -> Self {
        Self { timestamps: false }
    }

    /// Stdout sink prefixing each line with epoch milliseconds.
    pub fn with_timestamps() -> Self {
        Self { timestamps: true }
    }
}

impl TraceSink for ConsoleTrace {
    fn line(&mut self, message: &str) {
        if self.timestamps {
            println!("[{}] {}", now_millis(), message);
        } else {
            println!("{}", message);
        }
    }
}

/// Collects trace lines in memory, for tests and output aggregation.
#[derive(Debug, Default)]
pub struct MemoryTrace {
    lines: Vec<String>,
}

impl MemoryTrace {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything appended so far, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl TraceSink for MemoryTrace {
    fn line(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
