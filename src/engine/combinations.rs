//! Index-based k-combination generator.
//!
//! Yields the k-element subsets of `0..n` as index tuples in lexicographic
//! order, one at a time, without materializing the full combination list.
//! Enumeration over a deck is C(N, k) candidates, so the generator keeps a
//! single cursor and clones only the small index tuple per step.

use smallvec::SmallVec;

/// Indices of one combination. Inline up to the default group size.
pub type ComboIndices = SmallVec<[usize; 4]>;

/// Lazy generator of the k-combinations of `0..n`.
///
/// ## Example
///
/// ```
/// use setfinder::engine::Combinations;
///
/// let combos: Vec<_> = Combinations::new(4, 2).collect();
/// assert_eq!(combos.len(), 6);
/// assert_eq!(combos[0].as_slice(), [0, 1]);
/// assert_eq!(combos[5].as_slice(), [2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: ComboIndices,
    started: bool,
}

impl Combinations {
    /// Create a generator over the k-combinations of `0..n`.
    ///
    /// Yields nothing when `k > n`, and the single empty combination when
    /// `k == 0`.
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
        }
    }
}

impl Iterator for Combinations {
    type Item = ComboIndices;

    fn next(&mut self) -> Option<ComboIndices> {
        if self.k > self.n {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        // Find the rightmost index that can still advance.
        let mut i = self.k;
        loop {
            if i == 0 {
                return None;
            }
            i -= 1;
            if self.indices[i] != i + self.n - self.k {
                break;
            }
        }

        self.indices[i] += 1;
        for j in i + 1..self.k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}
