//! Correctness and timing harnesses over a strategy set.
//!
//! Both harnesses borrow the strategy set read-only and are independent of
//! each other. Every measurement becomes a [`BenchmarkResult`], and each run
//! returns a [`Report`] sorted fastest first.

use std::hint::black_box;
use std::ops::Range;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::progress::{self, Progress, ProgressReporter, Stage};
use crate::{BenchmarkResult, FibError, FibStrategy, Report};

/// Known-correct `(index, value)` pairs every strategy must reproduce.
pub const ORACLE: [(u64, u64); 8] = [
    (0, 0),
    (1, 1),
    (2, 1),
    (3, 2),
    (4, 3),
    (5, 5),
    (6, 8),
    (30, 832_040),
];

/// Title of a passing correctness report.
pub const VERIFY_TITLE: &str =
    "All unit tests passed!\n\nAlgorithms sorted by the total run time of unit tests";

/// Runs the oracle vector once against `strategy`, in order.
///
/// # Errors
/// `FibError::CorrectnessFailure` with the first mismatching entry.
pub fn check_oracle<S: FibStrategy + ?Sized>(strategy: &S) -> Result<(), FibError> {
    for (index, expected) in ORACLE {
        let actual = strategy.compute(index);
        if actual != expected {
            return Err(FibError::CorrectnessFailure {
                strategy: strategy.name().to_string(),
                index,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Wall time of one full, passing oracle run.
///
/// # Errors
/// Same as [`check_oracle`].
pub fn time_oracle<S: FibStrategy + ?Sized>(strategy: &S) -> Result<Duration, FibError> {
    let start = Instant::now();
    check_oracle(strategy)?;
    Ok(start.elapsed())
}

/// Total time of `reps` calls at `index`.
pub fn profile<S: FibStrategy + ?Sized>(strategy: &S, index: u64, reps: u64) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..reps {
        let start = Instant::now();
        black_box(strategy.compute(black_box(index)));
        total += start.elapsed();
    }
    total
}

/// Total time of one call per index in `range`, repeated `reps` times.
///
/// An empty range takes no time.
pub fn profile_range<S: FibStrategy + ?Sized>(
    strategy: &S,
    range: Range<u64>,
    reps: u64,
) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..reps {
        for index in range.clone() {
            let start = Instant::now();
            black_box(strategy.compute(black_box(index)));
            total += start.elapsed();
        }
    }
    total
}

#[inline]
fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

// ============================================================================
// Harness
// ============================================================================

/// Runs a strategy set through the correctness and timing harnesses.
///
/// # Example
///
/// ```
/// use fibolab_core::{Harness, Strategy};
///
/// let strategies = [Strategy::ForLoop, Strategy::Matrix, Strategy::Binet];
/// let harness = Harness::new(&strategies);
///
/// let report = harness.verify().expect("built-in strategies pass");
/// assert_eq!(report.results().len(), 3);
///
/// let report = harness.profile(20, 5);
/// println!("{}", report);
/// ```
pub struct Harness<'a, S> {
    strategies: &'a [S],
    reporter: Option<ProgressReporter>,
}

impl<'a, S: FibStrategy> Harness<'a, S> {
    pub fn new(strategies: &'a [S]) -> Self {
        Self {
            strategies,
            reporter: None,
        }
    }

    /// Attaches a callback invoked before each strategy runs.
    pub fn with_reporter(mut self, reporter: ProgressReporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    fn notify(&self, stage: Stage, position: usize, strategy: &S) {
        progress::report(
            &self.reporter,
            &Progress {
                stage,
                name: strategy.name(),
                position,
                total: self.strategies.len(),
            },
        );
    }

    /// Checks every strategy against [`ORACLE`] and reports how long each
    /// full pass took.
    ///
    /// # Errors
    /// `FibError::CorrectnessFailure` for the first failing strategy; the
    /// remaining strategies are not run.
    pub fn verify(&self) -> Result<Report, FibError> {
        let mut results = Vec::with_capacity(self.strategies.len());

        for (position, strategy) in self.strategies.iter().enumerate() {
            self.notify(Stage::Testing, position, strategy);

            let elapsed = time_oracle(strategy).inspect_err(|err| {
                warn!(strategy = strategy.name(), %err, "oracle check failed");
            })?;
            let elapsed_ms = millis(elapsed);
            debug!(strategy = strategy.name(), elapsed_ms, "oracle passed");

            results.push(BenchmarkResult::new(strategy.name(), elapsed_ms));
        }

        info!(strategies = results.len(), "all oracle checks passed");
        Ok(Report::new(VERIFY_TITLE, results))
    }

    /// Fixed-index mode: `reps` calls per strategy at `index`.
    ///
    /// Outputs are not checked.
    pub fn profile(&self, index: u64, reps: u64) -> Report {
        let results = self.measure(|strategy| profile(strategy, index, reps));
        info!(index, reps, "fixed-index profile finished");
        Report::new(
            format!("Profile for index: {} reps: {}", index, reps),
            results,
        )
    }

    /// Range mode: one call per index in `[begin, end)`, repeated `reps`
    /// times per strategy.
    ///
    /// Outputs are not checked.
    pub fn profile_range(&self, begin: u64, end: u64, reps: u64) -> Report {
        let results = self.measure(|strategy| profile_range(strategy, begin..end, reps));
        info!(begin, end, reps, "range profile finished");
        Report::new(
            format!(
                "Range profile for begin: {} end: {} reps: {}",
                begin, end, reps
            ),
            results,
        )
    }

    fn measure(&self, mut time: impl FnMut(&S) -> Duration) -> Vec<BenchmarkResult> {
        self.strategies
            .iter()
            .enumerate()
            .map(|(position, strategy)| {
                self.notify(Stage::Profiling, position, strategy);
                let elapsed_ms = millis(time(strategy));
                debug!(strategy = strategy.name(), elapsed_ms, "profiled");
                BenchmarkResult::new(strategy.name(), elapsed_ms)
            })
            .collect()
    }
}
