//! # FibLab Core
//!
//! A collection of interchangeable Fibonacci implementations, plus the
//! harnesses that check them against known values and time them.
//!
//! ## Strategies
//!
//! Every strategy computes the same function, $F(n)$ for a `u64` index,
//! with a different technique:
//!
//! - **Naive recursion** (`simple_if`, `simple_match`): $O(\varphi^n)$, the baseline.
//! - **Tail call** (`tail_call`): accumulator pair passed in tail position.
//! - **Memoized** (`memoized`): recursion over a per-call lookup table.
//! - **Loops** (`for_loop`, `while_loop`): $O(n)$ walk over `(now, next)`.
//! - **Collected** (`collect`): the first $n+1$ terms gathered into a vector.
//! - **Lazy sequence** (`generator`): pulls from [`FibIter`].
//! - **Closed form** (`binet`, `branched`): Binet's formula in `f64`.
//! - **Matrix** (`matrix_naive`, `matrix`): powers of the Q-matrix.
//!
//! Values are `u64`. Integer strategies are exact up to index 92 and the
//! closed form up to index 70; see [`config::limits`].
//!
//! ## Usage
//!
//! ```rust
//! use fibolab_core::{Harness, Strategy};
//!
//! assert_eq!(Strategy::Matrix.compute(30), 832_040);
//!
//! let harness = Harness::new(&Strategy::ALL);
//! let report = harness.verify().expect("every strategy matches the oracle");
//! println!("{}", report);
//!
//! println!("{}", harness.profile(20, 10));
//! println!("{}", harness.profile_range(3, 20, 10));
//! ```
//!
//! ### Custom strategies
//!
//! The harnesses accept anything implementing [`FibStrategy`]:
//!
//! ```rust
//! use fibolab_core::{FibStrategy, Harness};
//!
//! struct Lookup;
//!
//! impl FibStrategy for Lookup {
//!     fn name(&self) -> &str {
//!         "lookup"
//!     }
//!
//!     fn compute(&self, index: u64) -> u64 {
//!         const TABLE: [u64; 8] = [0, 1, 1, 2, 3, 5, 8, 13];
//!         match index {
//!             30 => 832_040,
//!             n => TABLE[n as usize],
//!         }
//!     }
//! }
//!
//! assert!(Harness::new(&[Lookup]).verify().is_ok());
//! ```

pub mod algo;
pub mod config;
pub mod harness;
pub mod iterators;
pub mod progress;
pub mod report;
pub mod types;

// Re-export types
pub use types::{BenchmarkResult, FibError, FibStrategy, Strategy};

pub use config::{Param, ProfileArgs, ProfileConfig, Prompter};
pub use harness::{Harness, ORACLE};
pub use iterators::FibIter;
pub use progress::{Progress, ProgressReporter, Stage};
pub use report::Report;
