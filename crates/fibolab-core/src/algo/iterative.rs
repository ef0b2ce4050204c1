use crate::FibIter;

/// `for` loop over the pair `(now, next)`, updated exactly `index` times.
#[inline]
pub fn fibo_for_loop(index: u64) -> u64 {
    let (mut now, mut next) = (0u64, 1u64);

    for _ in 0..index {
        (now, next) = (next, now + next);
    }

    now
}

/// Same walk as [`fibo_for_loop`] with an explicit counter.
#[inline]
pub fn fibo_while_loop(index: u64) -> u64 {
    let (mut now, mut next) = (0u64, 1u64);
    let mut count = 0;

    while count < index {
        (now, next) = (next, now + next);
        count += 1;
    }

    now
}

/// Materialises $F(0) \dots F(\text{index})$ into a `Vec` and indexes it.
pub fn fibo_collect(index: u64) -> u64 {
    let terms: Vec<u64> = std::iter::successors(Some((0u64, 1u64)), |&(now, next)| {
        now.checked_add(next).map(|after| (next, after))
    })
    .map(|(now, _)| now)
    .take(index as usize + 1)
    .collect();

    terms[index as usize]
}

/// Pulls `index + 1` values from a fresh [`FibIter`] and returns the last.
pub fn fibo_generator(index: u64) -> u64 {
    let mut seq = FibIter::new();
    for _ in 0..index {
        seq.next();
    }

    seq.next().expect("index is within the u64 Fibonacci sequence")
}
