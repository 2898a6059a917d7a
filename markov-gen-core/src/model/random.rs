use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indexes used during generation.
///
/// The model only ever asks for an index in `[0, bound)`; any other
/// capability of the underlying generator stays out of reach.
pub trait RandomSource {
	/// Returns a value uniformly distributed in `[0, bound)`.
	///
	/// Callers guarantee `bound > 0`.
	fn next(&mut self, bound: usize) -> usize;
}

/// A random source whose state can be replaced by a seed.
///
/// Seeds are unsigned; a signed seed converts with `seed as u64` and keeps
/// its reproducibility (`-1` maps to `u64::MAX`).
pub trait Reseed {
	/// Restarts the sequence of draws from `seed`.
	fn reseed(&mut self, seed: u64);
}

/// Default random source, backed by `StdRng`.
///
/// - `Randomizer::new()` draws its seed from the OS (nondeterministic)
/// - `Randomizer::seeded(seed)` yields a reproducible sequence
#[derive(Clone, Debug)]
pub struct Randomizer {
	rng: StdRng,
}

impl Randomizer {
	/// Creates an unseeded source.
	pub fn new() -> Self {
		Self { rng: StdRng::from_os_rng() }
	}

	/// Creates a source producing a reproducible sequence.
	///
	/// The seed is unsigned, see `Reseed`.
	pub fn seeded(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}
}

impl Default for Randomizer {
	fn default() -> Self {
		Self::new()
	}
}

impl RandomSource for Randomizer {
	fn next(&mut self, bound: usize) -> usize {
		self.rng.random_range(0..bound)
	}
}

impl Reseed for Randomizer {
	fn reseed(&mut self, seed: u64) {
		self.rng = StdRng::seed_from_u64(seed);
	}
}

/// Adapter exposing any `rand` generator as a `RandomSource`.
///
/// Useful to plug a `SmallRng`, a `ChaCha` generator or `rand::rng()`
/// into a model without going through `Randomizer`.
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
	fn next(&mut self, bound: usize) -> usize {
		self.0.random_range(0..bound)
	}
}

impl<R: Rng + SeedableRng> Reseed for RngSource<R> {
	fn reseed(&mut self, seed: u64) {
		self.0 = R::seed_from_u64(seed);
	}
}
