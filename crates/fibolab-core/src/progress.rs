//! Progress notifications from the harnesses.
//!
//! A harness calls its reporter once before each strategy is measured, so a
//! front end can show which strategy is running. Reporting is optional and
//! never affects measurements beyond the callback's own cost, which falls
//! outside the timed sections.

use std::fmt::Display;

/// Function type for receiving progress updates.
pub type ProgressReporter = Box<dyn Fn(&Progress<'_>) + Send + Sync>;

/// Which harness stage is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Oracle vector checks.
    Testing,
    /// Fixed-index or range timing.
    Profiling,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Testing => write!(f, "Testing"),
            Stage::Profiling => write!(f, "Profiling"),
        }
    }
}

/// One progress update: strategy `name` is about to run as number
/// `position` (zero-based) of `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress<'a> {
    pub stage: Stage,
    pub name: &'a str,
    pub position: usize,
    pub total: usize,
}

impl Display for Progress<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}...", self.stage, self.name)
    }
}

/// Invokes `reporter`, if any.
#[inline]
pub fn report(reporter: &Option<ProgressReporter>, progress: &Progress<'_>) {
    if let Some(reporter) = reporter {
        reporter(progress);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn display_reads_like_a_status_line() {
        let p = Progress {
            stage: Stage::Testing,
            name: "binet",
            position: 0,
            total: 3,
        };
        assert_eq!(p.to_string(), "Testing binet...");
    }

    #[test]
    fn report_without_reporter_is_noop() {
        let p = Progress {
            stage: Stage::Testing,
            name: "x",
            position: 0,
            total: 1,
        };
        report(&None, &p);
    }

    #[test]
    fn report_forwards_to_callback() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let reporter: Option<ProgressReporter> = Some(Box::new(move |p: &Progress<'_>| {
            sink.lock().unwrap().push(p.name.to_string());
        }));

        let p = Progress {
            stage: Stage::Profiling,
            name: "tail_call",
            position: 1,
            total: 2,
        };
        report(&reporter, &p);

        assert_eq!(*seen.lock().unwrap(), vec!["tail_call".to_string()]);
    }
}
