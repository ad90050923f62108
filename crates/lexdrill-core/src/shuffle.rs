//! Unbiased shuffling for term and question ordering.

use rand::Rng;

/// Return a new `Vec` holding a uniformly random permutation of `input`.
/// The input is never mutated.
pub fn shuffled<T: Clone>(input: &[T]) -> Vec<T> {
    shuffled_with(input, &mut rand::thread_rng())
}

/// Shuffle with a caller-supplied RNG; deterministic under a seeded one.
///
/// Fisher–Yates swap walk: for each index i from the end down to 1, swap
/// with a random j in [0, i].
pub fn shuffled_with<T: Clone, R: Rng>(input: &[T], rng: &mut R) -> Vec<T> {
    let mut out = input.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}
