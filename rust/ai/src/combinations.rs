//! Iterative k-combinations over a slice, in lexicographic index order.

/// Yields every `k`-element combination of `pool` exactly once.
///
/// Driven by an index array rather than recursion. `k == 0` yields a single
/// empty combination and `k > pool.len()` yields nothing.
///
/// # Examples
///
/// ```
/// use holdem_ai::combinations::Combinations;
///
/// let picks: Vec<Vec<char>> = Combinations::new(&['a', 'b', 'c'], 2).collect();
/// assert_eq!(picks, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    pool: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T: Copy> Combinations<'a, T> {
    pub fn new(pool: &'a [T], k: usize) -> Self {
        Self {
            pool,
            indices: (0..k).collect(),
            done: k > pool.len(),
        }
    }

    fn advance(&mut self) {
        let n = self.pool.len();
        let k = self.indices.len();
        // rightmost index that can still move right
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            self.done = true;
            return;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl<T: Copy> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let item = self.indices.iter().map(|&i| self.pool[i]).collect();
        self.advance();
        Some(item)
    }
}

/// `n choose k`, saturating at `u64::MAX`.
pub fn count(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    (0..k).fold(1u64, |acc, i| acc.saturating_mul(n - i) / (i + 1))
}
