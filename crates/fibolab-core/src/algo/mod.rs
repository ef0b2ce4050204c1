//! Fibonacci implementations, one function per technique.
//!
//! Every function here has the same shape, `fn(u64) -> u64`, and is exposed
//! to the harnesses through [`crate::Strategy`].
//!
//! # Strategies
//!
//! - **Recursive (`recursive`)**: naive recursion, tail-call accumulator and
//!   per-call memoization.
//! - **Iterative (`iterative`)**: `for`/`while` loops, a collected vector and
//!   pulls from the lazy [`crate::FibIter`] sequence.
//! - **Closed form (`closed_form`)**: Binet's formula and the size-branched
//!   hybrid built on it.
//! - **Matrix (`matrix`)**: Q-matrix powers, naive and by repeated squaring.

pub mod closed_form;
pub mod iterative;
pub mod matrix;
pub mod recursive;

pub use closed_form::{fibo_binet, fibo_branched};
pub use iterative::{fibo_collect, fibo_for_loop, fibo_generator, fibo_while_loop};
pub use matrix::{fibo_matrix, fibo_matrix_naive};
pub use recursive::{fibo_memoized, fibo_simple_if, fibo_simple_match, fibo_tail_call};
