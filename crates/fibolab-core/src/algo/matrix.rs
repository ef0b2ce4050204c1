//! Matrix exponentiation.
//!
//! $\begin{pmatrix}1 & 1\\ 1 & 0\end{pmatrix}^n = \begin{pmatrix}F(n+1) & F(n)\\ F(n) & F(n-1)\end{pmatrix}$,
//! so $F(n)$ is entry `[0][1]` of the $n$-th power.

/// Row-major 2x2 matrix.
pub type Matrix2 = [[u64; 2]; 2];

/// The Fibonacci Q-matrix.
pub const Q_MATRIX: Matrix2 = [[1, 1], [1, 0]];

const IDENTITY: Matrix2 = [[1, 0], [0, 1]];

/// Multiplies two 2x2 matrices.
#[inline]
pub fn multiply(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    [
        [
            a[0][0] * b[0][0] + a[0][1] * b[1][0],
            a[0][0] * b[0][1] + a[0][1] * b[1][1],
        ],
        [
            a[1][0] * b[0][0] + a[1][1] * b[1][0],
            a[1][0] * b[0][1] + a[1][1] * b[1][1],
        ],
    ]
}

/// `base^exp` by `exp` successive multiplications.
pub fn power_naive(base: &Matrix2, exp: u64) -> Matrix2 {
    let mut result = IDENTITY;
    for _ in 0..exp {
        result = multiply(&result, base);
    }
    result
}

/// `base^exp` by repeated squaring: $O(\log \text{exp})$ multiplications.
///
/// The base is only squared while bits remain, so no power above the
/// highest set bit of `exp` is ever formed.
pub fn power(base: &Matrix2, exp: u64) -> Matrix2 {
    let mut result = IDENTITY;
    let mut square = *base;
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            result = multiply(&result, &square);
        }
        exp >>= 1;
        if exp > 0 {
            square = multiply(&square, &square);
        }
    }

    result
}

/// $F(n)$ from the Q-matrix multiplied `index` times.
pub fn fibo_matrix_naive(index: u64) -> u64 {
    power_naive(&Q_MATRIX, index)[0][1]
}

/// $F(n)$ from the Q-matrix raised by repeated squaring.
pub fn fibo_matrix(index: u64) -> u64 {
    power(&Q_MATRIX, index)[0][1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::fibo_for_loop;

    #[test]
    fn zeroth_power_is_identity() {
        assert_eq!(power(&Q_MATRIX, 0), IDENTITY);
        assert_eq!(power_naive(&Q_MATRIX, 0), IDENTITY);
    }

    #[test]
    fn power_layout() {
        // Q^10 = [[F(11), F(10)], [F(10), F(9)]]
        assert_eq!(power(&Q_MATRIX, 10), [[89, 55], [55, 34]]);
    }

    #[test]
    fn naive_and_squaring_agree() {
        for exp in 0..=60 {
            assert_eq!(
                power(&Q_MATRIX, exp),
                power_naive(&Q_MATRIX, exp),
                "exp={}",
                exp
            );
        }
    }

    #[test]
    fn matrix_strategies_match_iterative() {
        for n in 0..=40 {
            assert_eq!(fibo_matrix(n), fibo_for_loop(n), "matrix n={}", n);
            assert_eq!(fibo_matrix_naive(n), fibo_for_loop(n), "naive n={}", n);
        }
    }

    #[test]
    fn squaring_reaches_u64_bound() {
        // 92 = 0b1011100: squares up to Q^64 without overflowing.
        assert_eq!(fibo_matrix(92), 7_540_113_804_746_346_429);
        assert_eq!(fibo_matrix_naive(92), 7_540_113_804_746_346_429);
    }
}
