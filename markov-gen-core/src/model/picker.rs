use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform selection from a non-empty ordered sequence.
///
/// The generator draws every random choice (start context and each
/// transition) through this trait, so a deterministic implementation
/// can replace real entropy in tests or for reproducible runs.
pub trait Picker {
	/// Returns an index uniformly drawn from `0..len`.
	///
	/// Callers guarantee `len > 0`.
	fn pick(&mut self, len: usize) -> usize;
}

impl<P: Picker + ?Sized> Picker for Box<P> {
	fn pick(&mut self, len: usize) -> usize {
		(**self).pick(len)
	}
}

/// Picker backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomPicker;

impl RandomPicker {
	pub fn new() -> Self {
		Self
	}
}

impl Picker for RandomPicker {
	fn pick(&mut self, len: usize) -> usize {
		rand::rng().random_range(0..len)
	}
}

/// Picker backed by a seeded RNG, for reproducible generation.
///
/// The same seed over the same model walks the same path.
#[derive(Debug)]
pub struct SeededPicker {
	rng: StdRng,
}

impl SeededPicker {
	pub fn new(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}
}

impl Picker for SeededPicker {
	fn pick(&mut self, len: usize) -> usize {
		self.rng.random_range(0..len)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn random_picker_stays_in_bounds() {
		let mut picker = RandomPicker::new();
		for len in 1..=16 {
			let index = picker.pick(len);
			assert!(index < len);
		}
	}

	#[test]
	fn seeded_picker_is_reproducible() {
		let mut a = SeededPicker::new(42);
		let mut b = SeededPicker::new(42);
		let picks_a: Vec<usize> = (0..32).map(|_| a.pick(10)).collect();
		let picks_b: Vec<usize> = (0..32).map(|_| b.pick(10)).collect();
		assert_eq!(picks_a, picks_b);
	}
}
