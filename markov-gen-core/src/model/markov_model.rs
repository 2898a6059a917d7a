use std::path::Path;

use log::debug;

use crate::io;
use super::chain::Chain;
use super::error::{ModelError, Result};
use super::random::{RandomSource, Randomizer, Reseed};
use super::unit::Unit;

/// Order-k Markov model generating text one unit at a time.
///
/// The unit type `U` selects the granularity (`char` or `String` words) and
/// the random source `R` provides every generation-time draw.
///
/// # Lifecycle
/// - Constructed with a fixed context length (untrained)
/// - Trained any number of times, each call replacing the corpus
/// - Queried any number of times
///
/// # Invariants
/// - `context_length` is > 0 and never changes
/// - An untrained model refuses lookups and generation with `UntrainedModel`
#[derive(Clone, Debug)]
pub struct MarkovModel<U: Unit, R = Randomizer> {
	/// Number of units forming a context key.
	context_length: usize,
	/// `None` until the first training call.
	chain: Option<Chain<U>>,
	/// Source of every random draw.
	random: R,
}

/// Model working on single characters.
pub type CharModel = MarkovModel<char>;

/// Model working on space-separated words.
pub type WordModel = MarkovModel<String>;

impl<U: Unit> MarkovModel<U, Randomizer> {
	/// Creates an untrained model with an unseeded random source.
	///
	/// # Errors
	/// Returns an error if `context_length == 0`.
	pub fn new(context_length: usize) -> Result<Self> {
		Self::with_random(context_length, Randomizer::new())
	}

	/// Creates an untrained model whose draws are reproducible from `seed`.
	///
	/// # Errors
	/// Returns an error if `context_length == 0`.
	pub fn seeded(context_length: usize, seed: u64) -> Result<Self> {
		Self::with_random(context_length, Randomizer::seeded(seed))
	}
}

impl<U: Unit, R: RandomSource> MarkovModel<U, R> {
	/// Creates an untrained model drawing from an injected random source.
	///
	/// # Errors
	/// Returns an error if `context_length == 0`.
	pub fn with_random(context_length: usize, random: R) -> Result<Self> {
		if context_length == 0 {
			return Err(ModelError::InvalidContextLength(context_length));
		}
		Ok(Self { context_length, chain: None, random })
	}

	/// Returns the number of units forming a context key.
	pub fn context_length(&self) -> usize {
		self.context_length
	}

	/// Returns `true` once a training text has been set.
	pub fn is_trained(&self) -> bool {
		self.chain.is_some()
	}

	/// Returns the training corpus, `None` if the model is untrained.
	pub fn training_corpus(&self) -> Option<&[U]> {
		self.chain.as_ref().map(Chain::corpus)
	}

	/// Gives mutable access to the random source.
	pub fn random_mut(&mut self) -> &mut R {
		&mut self.random
	}

	/// Sets the training text, replacing any previous corpus.
	///
	/// # Notes
	/// - No check against the context length happens here; a corpus too short
	///   for the context surfaces as `InvalidRange` at generation time.
	pub fn set_training(&mut self, text: &str) {
		let chain = Chain::train(text, self.context_length);
		debug!(
			"Trained on {} units, {} distinct keys (context length {})",
			chain.corpus().len(),
			chain.key_count(),
			self.context_length
		);
		self.chain = Some(chain);
	}

	/// Reads a text file and uses its whole content as training text.
	///
	/// # Errors
	/// Returns an error if the file cannot be read. The previous corpus, if
	/// any, is kept in that case.
	pub fn set_training_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
		let text = io::read_training_text(path)?;
		self.set_training(&text);
		Ok(())
	}

	/// Returns every unit following an occurrence of `key` in the corpus.
	///
	/// Successors come in left-to-right occurrence order, once per occurrence,
	/// overlapping occurrences included. An absent key yields an empty list.
	///
	/// # Errors
	/// Returns `UntrainedModel` if no training text was set.
	pub fn get_follows(&self, key: &[U]) -> Result<Vec<U>> {
		let chain = self.chain.as_ref().ok_or(ModelError::UntrainedModel)?;
		Ok(chain.follows(key, self.context_length))
	}

	/// Generates up to `target_length` units using the model's random source.
	///
	/// The output may be shorter than requested when the chain reaches a
	/// context with no observed continuation.
	///
	/// # Errors
	/// - `UntrainedModel` if no training text was set
	/// - `InvalidRange` if the corpus is not longer than the context length
	pub fn get_random_text(&mut self, target_length: usize) -> Result<String> {
		let chain = self.chain.as_ref().ok_or(ModelError::UntrainedModel)?;
		chain.generate(self.context_length, target_length, &mut self.random)
	}

	/// Same as `get_random_text`, drawing from the given source instead.
	///
	/// The model's own source is left untouched.
	pub fn get_random_text_with<S>(&self, target_length: usize, random: &mut S) -> Result<String>
	where
		S: RandomSource + ?Sized,
	{
		let chain = self.chain.as_ref().ok_or(ModelError::UntrainedModel)?;
		chain.generate(self.context_length, target_length, random)
	}
}

impl<U: Unit, R: RandomSource + Reseed> MarkovModel<U, R> {
	/// Reseeds the random source. The corpus is not affected.
	///
	/// Seeds are unsigned; convert a signed seed with `seed as u64`.
	pub fn set_random(&mut self, seed: u64) {
		debug!("Random source reseeded with {}", seed);
		self.random.reseed(seed);
	}
}

impl<R: RandomSource> MarkovModel<char, R> {
	/// Returns the trimmed training text, `None` if the model is untrained.
	pub fn training_text(&self) -> Option<String> {
		self.training_corpus().map(|corpus| corpus.iter().collect())
	}
}

impl<R: RandomSource> MarkovModel<String, R> {
	/// Returns the training words, `None` if the model is untrained.
	pub fn training_words(&self) -> Option<&[String]> {
		self.training_corpus()
	}
}
