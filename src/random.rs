//! Source of randomness for sampling and shuffling.
//!
//! Everything random in question generation goes through `RandomSource`, so tests
//! can swap in a deterministic source and pin down option order exactly.

use rand::rngs::ThreadRng;
use rand::Rng;

pub trait RandomSource {
  /// Draw `min(k, len)` distinct indices from `0..len`, in random order.
  fn draw_distinct(&mut self, len: usize, k: usize) -> Vec<usize>;
}

/// Adapter for any `rand` generator.
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
  fn draw_distinct(&mut self, len: usize, k: usize) -> Vec<usize> {
    rand::seq::index::sample(&mut self.0, len, k.min(len)).into_vec()
  }
}

/// Thread-local generator; each request thread gets its own state.
pub fn thread_source() -> RngSource<ThreadRng> {
  RngSource(rand::thread_rng())
}

/// Pick `k` distinct items (by position) from `pool`.
pub fn choose_distinct<'a, T>(rng: &mut dyn RandomSource, pool: &'a [T], k: usize) -> Vec<&'a T> {
  rng
    .draw_distinct(pool.len(), k)
    .into_iter()
    .map(|i| &pool[i])
    .collect()
}

/// Shuffle in place using a full draw as the permutation.
pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut Vec<T>) {
  let order = rng.draw_distinct(items.len(), items.len());
  let mut slots: Vec<Option<T>> = items.drain(..).map(Some).collect();
  items.extend(order.into_iter().filter_map(|i| slots[i].take()));
}
