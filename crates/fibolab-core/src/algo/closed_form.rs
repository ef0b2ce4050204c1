use super::iterative::{fibo_for_loop, fibo_while_loop};

/// Golden ratio $\varphi = (1 + \sqrt{5}) / 2$.
const PHI: f64 = 1.618_033_988_749_895;

/// $\sqrt{5}$.
const SQRT_5: f64 = 2.236_067_977_499_79;

/// Binet's closed form: $\operatorname{round}\left((\varphi^n + \varphi^{-n}) / \sqrt{5}\right)$.
///
/// `f64` carries 53 bits of mantissa, and rounding recovers the exact integer
/// only up to `index == 70`; past that the result drifts (see
/// [`crate::config::limits::BINET_MAX_EXACT_INDEX`]).
///
/// Index 0 is special-cased: the formula gives $2 / \sqrt{5} \approx 0.89$,
/// which rounds to 1.
pub fn fibo_binet(index: u64) -> u64 {
    if index == 0 {
        return 0;
    }

    let q = 1.0 / PHI;
    let n = index as f64;

    ((PHI.powf(n) + q.powf(n)) / SQRT_5).round() as u64
}

/// Picks a technique by index: `while` loop below 7, `for` loop below 15,
/// closed form above.
///
/// Inherits the closed form's exactness bound.
pub fn fibo_branched(index: u64) -> u64 {
    match index {
        0..=6 => fibo_while_loop(index),
        7..=14 => fibo_for_loop(index),
        _ => fibo_binet(index),
    }
}
