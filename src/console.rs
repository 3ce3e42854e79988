//! Local diagnostic console trace
//!
//! Best-effort human-readable echo of each record for whoever is watching
//! the terminal. Independent of delivery: a trace that cannot be written is
//! discarded and never influences the queue.

use crate::core::log_level::LogLevel;
use crate::core::record::LogRecord;
use colored::Colorize;
use std::io::Write;

pub struct ConsoleTrace {
    use_colors: bool,
}

impl ConsoleTrace {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Echo one record: ERROR and WARN to the error channel, everything
    /// else to the info channel. Write failures are discarded.
    pub fn trace(&self, record: &LogRecord) {
        let line = self.format_line(record);
        match record.level {
            LogLevel::Error | LogLevel::Warn => {
                let _ = writeln!(std::io::stderr(), "{}", line);
            }
            _ => {
                let _ = writeln!(std::io::stdout(), "{}", line);
            }
        }
    }

    fn format_line(&self, record: &LogRecord) -> String {
        let level_str = if self.use_colors {
            format!("{:5}", record.level.to_str())
                .color(record.level.color_code())
                .to_string()
        } else {
            format!("{:5}", record.level.to_str())
        };

        let mut line = format!(
            "[{}] [{}] {} {}: {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            level_str,
            record.stack,
            record.package,
            record.message
        );

        if !record.meta.is_empty() {
            line.push_str(" | ");
            line.push_str(&record.meta.format_fields());
        }

        line
    }
}

impl Default for ConsoleTrace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::meta::RecordMeta;

    #[test]
    fn test_format_line_contains_record_fields() {
        let trace = ConsoleTrace::with_colors(false);
        let record = LogRecord::new(LogLevel::Warn, "UI", "redirect", "unknown code")
            .with_meta(RecordMeta::new().with_field("code", "ab3xZ"));

        let line = trace.format_line(&record);
        assert!(line.contains("WARN"));
        assert!(line.contains("UI redirect: unknown code"));
        assert!(line.contains("code=ab3xZ"));
    }

    #[test]
    fn test_trace_never_panics() {
        let trace = ConsoleTrace::new();
        trace.trace(&LogRecord::new(LogLevel::Error, "UI", "pkg", "boom"));
        trace.trace(&LogRecord::new(LogLevel::Trace, "UI", "pkg", "fine"));
    }
}
