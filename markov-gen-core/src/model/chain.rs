use log::trace;

use super::error::{ModelError, Result};
use super::random::RandomSource;
use super::transition_table::TransitionTable;
use super::unit::Unit;

/// A trained corpus together with its successor index.
///
/// Holds no randomness: every draw comes from the source passed to
/// `generate`, so the same chain can serve several independent generators.
#[derive(Clone, Debug)]
pub(crate) struct Chain<U: Unit> {
	corpus: Vec<U>,
	table: TransitionTable<U>,
}

impl<U: Unit> Chain<U> {
	/// Segments `text` and indexes it for keys of `context_length` units.
	pub(crate) fn train(text: &str, context_length: usize) -> Self {
		let corpus = U::segment(text);
		let table = TransitionTable::build(&corpus, context_length);
		Self { corpus, table }
	}

	pub(crate) fn corpus(&self) -> &[U] {
		&self.corpus
	}

	/// Number of distinct context keys with at least one successor.
	pub(crate) fn key_count(&self) -> usize {
		self.table.len()
	}

	/// Returns every unit following an occurrence of `key`, left to right.
	///
	/// Keys of the context length are answered from the index; other keys
	/// fall back to a linear scan, which yields the same result.
	pub(crate) fn follows(&self, key: &[U], context_length: usize) -> Vec<U> {
		if key.len() == context_length {
			self.table.follows(key).to_vec()
		} else {
			scan_follows(&self.corpus, key)
		}
	}

	/// Generates up to `target_length` units.
	///
	/// 1. Pick a random start in `[0, corpus_len - context_length)` and emit that key
	/// 2. Up to `target_length - context_length` times: sample a successor of the
	///    current key, emit it and slide the key by one unit
	/// 3. Stop early when the current key has no successor
	///
	/// # Errors
	/// `InvalidRange` if the corpus is not longer than the context.
	pub(crate) fn generate<R>(
		&self,
		context_length: usize,
		target_length: usize,
		random: &mut R,
	) -> Result<String>
	where
		R: RandomSource + ?Sized,
	{
		let corpus_len = self.corpus.len();
		let range = corpus_len
			.checked_sub(context_length)
			.filter(|range| *range > 0)
			.ok_or(ModelError::InvalidRange { corpus_len, context_length })?;

		let start = random.next(range);
		let mut key: Vec<U> = self.corpus[start..start + context_length].to_vec();

		let mut output = String::new();
		for unit in &key {
			unit.render(&mut output);
		}

		for step in 0..target_length.saturating_sub(context_length) {
			let follows = self.table.follows(&key);
			if follows.is_empty() {
				trace!("Generation stalled after {} generated units", step);
				break;
			}

			let successor = follows[random.next(follows.len())].clone();
			successor.render(&mut output);

			// Slide the key
			key.remove(0);
			key.push(successor);
		}

		Ok(output)
	}
}

/// Finds every unit immediately following an occurrence of `key` in `corpus`.
///
/// - Scans left to right; overlapping occurrences are all found
/// - One entry per occurrence, so duplicates are kept
/// - An occurrence at the very end of the corpus contributes nothing
pub(crate) fn scan_follows<U: Unit>(corpus: &[U], key: &[U]) -> Vec<U> {
	corpus
		.windows(key.len() + 1)
		.filter(|window| window[..key.len()] == *key)
		.map(|window| window[key.len()].clone())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Replays a fixed list of draws, each reduced modulo the bound.
	struct Scripted(Vec<usize>);

	impl RandomSource for Scripted {
		fn next(&mut self, bound: usize) -> usize {
			let value = if self.0.is_empty() { 0 } else { self.0.remove(0) };
			value % bound
		}
	}

	fn chars(s: &str) -> Vec<char> {
		s.chars().collect()
	}

	#[test]
	fn test_scan_follows_overlapping() {
		assert_eq!(scan_follows(&chars("abcabcabd"), &chars("ab")), chars("ccd"));
		assert_eq!(scan_follows(&chars("aaaa"), &chars("aa")), chars("aa"));
		assert_eq!(scan_follows(&chars("aaaa"), &chars("aaa")), chars("a"));
	}

	#[test]
	fn test_scan_follows_no_match() {
		assert!(scan_follows(&chars("abcabc"), &chars("zz")).is_empty());
		assert!(scan_follows(&chars("abcd"), &chars("cd")).is_empty());
		assert!(scan_follows(&chars("ab"), &chars("abcd")).is_empty());
	}

	#[test]
	fn test_index_matches_scan() {
		let text = "the quick brown fox jumps over the lazy dog, then the fox sleeps";
		let chain: Chain<char> = Chain::train(text, 3);
		let corpus = chain.corpus().to_vec();
		for window in corpus.windows(3) {
			assert_eq!(chain.follows(window, 3), scan_follows(&corpus, window));
		}

		let chain: Chain<String> = Chain::train(text, 1);
		let corpus = chain.corpus().to_vec();
		for window in corpus.windows(1) {
			assert_eq!(chain.follows(window, 1), scan_follows(&corpus, window));
		}
	}

	#[test]
	fn test_off_length_key_uses_scan() {
		let chain: Chain<char> = Chain::train("abcabcabd", 2);
		assert_eq!(chain.follows(&chars("a"), 2), chars("bbb"));
		assert_eq!(chain.follows(&chars("abc"), 2), chars("aa"));
	}

	#[test]
	fn test_off_length_word_key_uses_scan() {
		let words = |s: &str| s.split(' ').map(str::to_owned).collect::<Vec<String>>();
		let chain: Chain<String> = Chain::train("the cat sat the cat ran", 2);
		assert_eq!(chain.follows(&words("cat"), 2), words("sat ran"));
		assert_eq!(chain.follows(&words("the cat sat"), 2), words("the"));
		assert!(chain.follows(&words("dog"), 2).is_empty());

		// An empty key is followed by every unit
		assert_eq!(chain.follows(&[], 2), words("the cat sat the cat ran"));
	}

	#[test]
	fn test_huge_context_length() {
		let chain: Chain<char> = Chain::train("abc", usize::MAX);
		assert!(chain.follows(&chars("ab"), usize::MAX).is_empty());
		let mut random = Scripted(vec![]);
		assert!(matches!(
			chain.generate(usize::MAX, 10, &mut random),
			Err(ModelError::InvalidRange { corpus_len: 3, context_length: usize::MAX })
		));
	}

	#[test]
	fn test_generate_follows_script() {
		let chain: Chain<char> = Chain::train("abcd", 2);
		let mut random = Scripted(vec![0]);
		assert_eq!(chain.generate(2, 10, &mut random).unwrap(), "abcd");
	}

	#[test]
	fn test_generate_degenerate_target() {
		let chain: Chain<char> = Chain::train("abcdefg", 2);
		let mut random = Scripted(vec![3]);
		assert_eq!(chain.generate(2, 2, &mut random).unwrap(), "de");

		let mut random = Scripted(vec![3]);
		assert_eq!(chain.generate(2, 0, &mut random).unwrap(), "de");
	}

	#[test]
	fn test_generate_invalid_range() {
		let chain: Chain<char> = Chain::train("ab", 2);
		let mut random = Scripted(vec![]);
		assert!(matches!(
			chain.generate(2, 5, &mut random),
			Err(ModelError::InvalidRange { corpus_len: 2, context_length: 2 })
		));

		let chain: Chain<char> = Chain::train("a", 2);
		assert!(matches!(
			chain.generate(2, 5, &mut random),
			Err(ModelError::InvalidRange { corpus_len: 1, context_length: 2 })
		));
	}
}
