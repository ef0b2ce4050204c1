use std::fmt::Display;

use thiserror::Error;

use crate::algo;
use crate::config::limits;

/// Error type for strategy evaluation, harness runs and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FibError {
    /// A strategy disagreed with an oracle entry.
    #[error("{strategy} failed unit test f({index}) == {expected} with {actual}")]
    CorrectnessFailure {
        strategy: String,
        index: u64,
        expected: u64,
        actual: u64,
    },
    /// Index past the range where the strategy returns the exact value.
    #[error("index {index} is out of range for {strategy} (max exact index: {max})")]
    IndexOutOfRange {
        strategy: String,
        index: u64,
        max: u64,
    },
    /// Profiling parameter past the exact `u64` domain.
    #[error("{label} {value} is out of range (max: {max})")]
    ParamOutOfRange { label: String, value: u64, max: u64 },
    /// No strategy with this name exists.
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),
    /// Interactive input that does not parse as a non-negative integer.
    #[error("'{input}' is not a number for {label}")]
    InvalidNumericInput { label: String, input: String },
}

/// The single capability every strategy provides: a name and a pure
/// `index -> value` function.
///
/// Both harnesses are generic over this trait, so callers can run their own
/// strategies through them alongside (or instead of) [`Strategy`].
pub trait FibStrategy {
    /// Name used for identity and in reports.
    fn name(&self) -> &str;

    /// Computes `F(index)`.
    fn compute(&self, index: u64) -> u64;
}

impl<T: FibStrategy + ?Sized> FibStrategy for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn compute(&self, index: u64) -> u64 {
        (**self).compute(index)
    }
}

// ============================================================================
// Built-in Strategy Set
// ============================================================================

/// Built-in Fibonacci strategies, in declaration order.
///
/// Each variant is a different computational technique for the same
/// function. `compute` is only defined for `index <= max_exact_index()`;
/// use [`Strategy::try_compute`] when the index comes from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Naive recursion with an `if`: $O(\varphi^n)$, the slow baseline.
    SimpleIf,
    /// Naive recursion spelled with `match`.
    SimpleMatch,
    /// Accumulator pair threaded through a call in tail position.
    TailCall,
    /// Recursion over a per-call memo table seeded with `{0: 0, 1: 1}`.
    Memoized,
    /// `for` loop over `(now, next)`.
    ForLoop,
    /// `while` loop over `(now, next)`.
    WhileLoop,
    /// Binet's closed form in `f64`. Exact up to index 70.
    Binet,
    /// First `index + 1` terms collected into a `Vec`.
    Collect,
    /// Pulls `index + 1` values from a lazy sequence.
    Generator,
    /// 2x2 matrix multiplied `index` times.
    MatrixNaive,
    /// 2x2 matrix power by repeated squaring.
    Matrix,
    /// Loops for small indices, closed form above.
    Branched,
}

impl Strategy {
    /// Every built-in strategy in declaration order.
    pub const ALL: [Strategy; 12] = [
        Strategy::SimpleIf,
        Strategy::TailCall,
        Strategy::SimpleMatch,
        Strategy::Memoized,
        Strategy::ForLoop,
        Strategy::WhileLoop,
        Strategy::Binet,
        Strategy::Collect,
        Strategy::Generator,
        Strategy::MatrixNaive,
        Strategy::Matrix,
        Strategy::Branched,
    ];

    /// Report name of the strategy.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::SimpleIf => "simple_if",
            Strategy::SimpleMatch => "simple_match",
            Strategy::TailCall => "tail_call",
            Strategy::Memoized => "memoized",
            Strategy::ForLoop => "for_loop",
            Strategy::WhileLoop => "while_loop",
            Strategy::Binet => "binet",
            Strategy::Collect => "collect",
            Strategy::Generator => "generator",
            Strategy::MatrixNaive => "matrix_naive",
            Strategy::Matrix => "matrix",
            Strategy::Branched => "branched",
        }
    }

    /// Looks a strategy up by its report name.
    ///
    /// # Errors
    /// `FibError::UnknownStrategy` if no built-in strategy has that name.
    pub fn from_name(name: &str) -> Result<Self, FibError> {
        Self::ALL
            .into_iter()
            .find(|s| Strategy::name(*s) == name)
            .ok_or_else(|| FibError::UnknownStrategy(name.to_string()))
    }

    /// Largest index for which this strategy returns the exact value.
    pub const fn max_exact_index(self) -> u64 {
        match self {
            Strategy::Binet | Strategy::Branched => limits::BINET_MAX_EXACT_INDEX,
            _ => limits::MAX_EXACT_INDEX,
        }
    }

    /// Whether the running time grows exponentially with the index.
    pub const fn is_exponential(self) -> bool {
        matches!(self, Strategy::SimpleIf | Strategy::SimpleMatch)
    }

    /// Computes `F(index)` with this strategy.
    ///
    /// The caller must keep `index <= self.max_exact_index()`. Integer
    /// strategies overflow past that bound; the closed form silently loses
    /// precision.
    #[inline]
    pub fn compute(self, index: u64) -> u64 {
        match self {
            Strategy::SimpleIf => algo::fibo_simple_if(index),
            Strategy::SimpleMatch => algo::fibo_simple_match(index),
            Strategy::TailCall => algo::fibo_tail_call(index),
            Strategy::Memoized => algo::fibo_memoized(index),
            Strategy::ForLoop => algo::fibo_for_loop(index),
            Strategy::WhileLoop => algo::fibo_while_loop(index),
            Strategy::Binet => algo::fibo_binet(index),
            Strategy::Collect => algo::fibo_collect(index),
            Strategy::Generator => algo::fibo_generator(index),
            Strategy::MatrixNaive => algo::fibo_matrix_naive(index),
            Strategy::Matrix => algo::fibo_matrix(index),
            Strategy::Branched => algo::fibo_branched(index),
        }
    }

    /// Computes `F(index)`, rejecting indices past the exact bound.
    ///
    /// # Errors
    /// `FibError::IndexOutOfRange` if `index > self.max_exact_index()`.
    ///
    /// # Example
    /// ```
    /// use fibolab_core::{FibError, Strategy};
    ///
    /// assert_eq!(Strategy::Matrix.try_compute(50), Ok(12_586_269_025));
    /// assert!(matches!(
    ///     Strategy::Binet.try_compute(71),
    ///     Err(FibError::IndexOutOfRange { max: 70, .. })
    /// ));
    /// ```
    pub fn try_compute(self, index: u64) -> Result<u64, FibError> {
        let max = self.max_exact_index();
        if index > max {
            return Err(FibError::IndexOutOfRange {
                strategy: self.name().to_string(),
                index,
                max,
            });
        }
        Ok(self.compute(index))
    }
}

impl FibStrategy for Strategy {
    fn name(&self) -> &str {
        Strategy::name(*self)
    }

    fn compute(&self, index: u64) -> u64 {
        Strategy::compute(*self, index)
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Measurements
// ============================================================================

/// One timing measurement: a strategy name and the wall time it took.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    name: String,
    elapsed_ms: f64,
}

impl BenchmarkResult {
    /// Creates a result. Negative or NaN times are clamped to zero.
    pub fn new(name: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            name: name.into(),
            elapsed_ms: if elapsed_ms.is_nan() { 0.0 } else { elapsed_ms.max(0.0) },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elapsed wall time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = Strategy::ALL.into_iter().map(Strategy::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Strategy::ALL.len());
    }

    #[test]
    fn from_name_round_trips_every_strategy() {
        for s in Strategy::ALL {
            assert_eq!(Strategy::from_name(s.name()), Ok(s));
        }
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(
            Strategy::from_name("bogo"),
            Err(FibError::UnknownStrategy("bogo".to_string()))
        );
    }

    #[test]
    fn display_uses_report_name() {
        assert_eq!(Strategy::MatrixNaive.to_string(), "matrix_naive");
    }

    #[test]
    fn try_compute_accepts_bound_and_rejects_past_it() {
        assert_eq!(
            Strategy::ForLoop.try_compute(92),
            Ok(7_540_113_804_746_346_429)
        );
        assert_eq!(
            Strategy::ForLoop.try_compute(93),
            Err(FibError::IndexOutOfRange {
                strategy: "for_loop".to_string(),
                index: 93,
                max: 92,
            })
        );
        assert!(Strategy::Branched.try_compute(70).is_ok());
        assert!(Strategy::Branched.try_compute(71).is_err());
    }

    #[test]
    fn only_naive_recursion_is_exponential() {
        let exponential: Vec<Strategy> = Strategy::ALL
            .into_iter()
            .filter(|s| s.is_exponential())
            .collect();
        assert_eq!(exponential, [Strategy::SimpleIf, Strategy::SimpleMatch]);
    }

    #[test]
    fn correctness_failure_message_names_the_triple() {
        let err = FibError::CorrectnessFailure {
            strategy: "broken".to_string(),
            index: 30,
            expected: 832_040,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "broken failed unit test f(30) == 832040 with 1"
        );
    }

    #[test]
    fn benchmark_result_clamps_negative_time() {
        assert_eq!(BenchmarkResult::new("x", -1.0).elapsed_ms(), 0.0);
        assert_eq!(BenchmarkResult::new("x", f64::NAN).elapsed_ms(), 0.0);
        assert_eq!(BenchmarkResult::new("x", 2.5).elapsed_ms(), 2.5);
    }

    #[test]
    fn trait_object_dispatch() {
        let boxed: Box<dyn FibStrategy> = Box::new(Strategy::Memoized);
        assert_eq!(boxed.name(), "memoized");
        assert_eq!(boxed.compute(10), 55);
    }
}
