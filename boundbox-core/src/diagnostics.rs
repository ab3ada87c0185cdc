//! Diagnostics channel for non-fatal conditions
//!
//! Algorithms surface recoverable conditions (degenerate buckets, fallback
//! segmentations, rejected layouts) as reports rather than errors, so a batch
//! never stops for them. Hosts choose where reports go by picking a
//! [`Reporter`] implementation.

/// Severity of a diagnostic report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Sink for (severity, message) diagnostic reports
pub trait Reporter {
    fn report(&mut self, severity: Severity, message: &str);

    fn info(&mut self, message: &str) {
        self.report(Severity::Info, message);
    }

    fn warn(&mut self, message: &str) {
        self.report(Severity::Warning, message);
    }
}

/// Reporter that forwards to the `log` facade
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => log::info!("{}", message),
            Severity::Warning => log::warn!("{}", message),
        }
    }
}

/// Reporter that collects reports in memory, mainly for tests and batch
/// summaries
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub reports: Vec<(Severity, String)>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collected warnings
    pub fn warning_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|(s, _)| *s == Severity::Warning)
            .count()
    }

    /// Whether any collected report contains the given fragment
    pub fn contains(&self, fragment: &str) -> bool {
        self.reports.iter().any(|(_, m)| m.contains(fragment))
    }
}

impl Reporter for MemoryReporter {
    fn report(&mut self, severity: Severity, message: &str) {
        self.reports.push((severity, message.to_string()));
    }
}

/// Reporter that discards everything
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _severity: Severity, _message: &str) {}
}
