use std::collections::HashMap;

use super::unit::Unit;

/// Precomputed successor index of a corpus.
///
/// Maps every context key (a window of `context_length` units) to the units
/// observed right after it. Conceptually each entry is a node of the Markov
/// chain whose outgoing edges are listed once per observation.
///
/// ## Invariants
/// - Every key has exactly `context_length` units
/// - Successors are stored in occurrence order, left to right
/// - A successor appears once per occurrence, so duplicates encode frequency
/// - A key only present at the very end of the corpus has no entry
#[derive(Clone, Debug)]
pub(crate) struct TransitionTable<U: Unit> {
	/// Number of units in each key.
	context_length: usize,
	/// Successors indexed by key.
	/// Example: { ['a', 'b'] => ['c', 'c', 'd'] }
	transitions: HashMap<Vec<U>, Vec<U>>,
}

impl<U: Unit> TransitionTable<U> {
	/// Builds the table from a corpus.
	///
	/// Every window of `context_length + 1` units contributes one transition,
	/// which is what an overlapping left-to-right scan would find.
	/// A corpus not longer than the context yields an empty table.
	pub(crate) fn build(corpus: &[U], context_length: usize) -> Self {
		let mut transitions: HashMap<Vec<U>, Vec<U>> = HashMap::new();
		if context_length >= corpus.len() {
			return Self { context_length, transitions };
		}

		for window in corpus.windows(context_length + 1) {
			let (key, next) = window.split_at(context_length);
			transitions
				.entry(key.to_vec())
				.or_default()
				.push(next[0].clone());
		}

		Self { context_length, transitions }
	}

	/// Returns the successors of `key`, empty if the key was never followed.
	pub(crate) fn follows(&self, key: &[U]) -> &[U] {
		if key.len() != self.context_length {
			return &[];
		}
		self.transitions.get(key).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Number of distinct keys having at least one successor.
	pub(crate) fn len(&self) -> usize {
		self.transitions.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn chars(s: &str) -> Vec<char> {
		s.chars().collect()
	}

	#[test]
	fn test_successors_keep_order_and_duplicates() {
		let table = TransitionTable::build(&chars("abcabcabd"), 2);
		assert_eq!(table.follows(&chars("ab")), &['c', 'c', 'd']);
		assert_eq!(table.follows(&chars("ca")), &['b', 'b']);
	}

	#[test]
	fn test_overlapping_keys() {
		let table = TransitionTable::build(&chars("aaaa"), 2);
		assert_eq!(table.follows(&chars("aa")), &['a', 'a']);
	}

	#[test]
	fn test_trailing_key_has_no_entry() {
		let table = TransitionTable::build(&chars("abcd"), 2);
		assert!(table.follows(&chars("cd")).is_empty());
		assert_eq!(table.len(), 2);
	}

	#[test]
	fn test_wrong_key_length_is_empty() {
		let table = TransitionTable::build(&chars("abcabc"), 2);
		assert!(table.follows(&chars("a")).is_empty());
		assert!(table.follows(&chars("abc")).is_empty());
	}

	#[test]
	fn test_corpus_shorter_than_key() {
		let table = TransitionTable::build(&chars("ab"), 3);
		assert_eq!(table.len(), 0);
	}

	#[test]
	fn test_huge_context_length() {
		let table = TransitionTable::build(&chars("abc"), usize::MAX);
		assert_eq!(table.len(), 0);
		assert!(table.follows(&chars("ab")).is_empty());

		let table = TransitionTable::build(&chars("abc"), 3);
		assert_eq!(table.len(), 0);
	}
}
