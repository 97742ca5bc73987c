//! Reproducible pseudo-random draws for quest content.
//!
//! A plain linear congruential generator. Not suitable for anything that
//! needs unpredictability; its only job is that a given seed yields the
//! same sequence everywhere, so a shared quest regenerates identically on
//! another device.
//!
//! `state * MULTIPLIER` stays below 2^52 for every reachable state, so the
//! whole step fits exactly in `u64`.

const MODULUS: u64 = 2_147_483_647;
const MULTIPLIER: u64 = 1_664_525;
const INCREMENT: u64 = 1_013_904_223;

#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom { state: seed }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        // Large user seeds are reduced first so the product cannot overflow.
        self.state = ((self.state % MODULUS) * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Inclusive uniform integer in `min..=max`.
    pub fn between(&mut self, min: i64, max: i64) -> i64 {
        let span = (max - min + 1) as f64;
        (self.next_f64() * span).floor() as i64 + min
    }

    /// One element, or `None` for an empty slice (no draw is consumed).
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.between(0, items.len() as i64 - 1) as usize;
        items.get(idx)
    }

    /// Up to `count` distinct elements, in shuffled order.
    pub fn pick_multiple<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        let mut shuffled = self.shuffle(items);
        shuffled.truncate(count.min(items.len()));
        shuffled
    }

    /// Fisher-Yates shuffle from the back, returning a new vector.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = self.between(0, i as i64) as usize;
            out.swap(i, j);
        }
        out
    }

    pub fn boolean(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Cumulative-weight selection. Returns the last item when rounding
    /// leaves residue, and `None` only for an empty slice.
    pub fn weighted<'a, T>(&mut self, items: &'a [(T, u32)]) -> Option<&'a T> {
        let (last, _) = items.last()?;
        let total: f64 = items.iter().map(|(_, w)| f64::from(*w)).sum();
        let mut roll = self.next_f64() * total;
        for (item, weight) in items {
            roll -= f64::from(*weight);
            if roll <= 0.0 {
                return Some(item);
            }
        }
        Some(last)
    }
}
