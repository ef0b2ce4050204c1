use std::collections::HashMap;

/// Naive recursion with an `if`.
///
/// Exponential time: $F(n)$ makes $2F(n+1) - 1$ calls. Kept as the slow
/// baseline every other strategy is compared against.
pub fn fibo_simple_if(index: u64) -> u64 {
    if index < 2 {
        return index;
    }

    fibo_simple_if(index - 1) + fibo_simple_if(index - 2)
}

/// Naive recursion written as a `match` on the index.
pub fn fibo_simple_match(index: u64) -> u64 {
    match index {
        0 | 1 => index,
        _ => fibo_simple_match(index - 1) + fibo_simple_match(index - 2),
    }
}

/// Tail-recursive accumulator walk.
///
/// The recursive call is in tail position, so the shape allows frame reuse;
/// Rust does not guarantee it, but the depth is at most `index + 1`.
pub fn fibo_tail_call(index: u64) -> u64 {
    fn step(now: u64, next: u64, remaining: u64) -> u64 {
        if remaining == 0 {
            return now;
        }
        step(next, now + next, remaining - 1)
    }

    step(0, 1, index)
}

/// Memoized recursion.
///
/// The table lives for one top-level call only, so repeated calls do not
/// share state; each index is computed at most once per call tree.
pub fn fibo_memoized(index: u64) -> u64 {
    fn lookup(index: u64, memo: &mut HashMap<u64, u64>) -> u64 {
        if let Some(&value) = memo.get(&index) {
            return value;
        }

        let value = lookup(index - 1, memo) + lookup(index - 2, memo);
        memo.insert(index, value);
        value
    }

    let mut memo = HashMap::from([(0, 0), (1, 1)]);
    lookup(index, &mut memo)
}
