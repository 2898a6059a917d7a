use std::fmt::Debug;
use std::hash::Hash;

/// A single element of a Markov chain: one character or one word.
///
/// A unit type decides how raw training text is cut into a corpus and how
/// generated units are written back out. Everything else (context keys,
/// successor lookup, sampling) is shared by every granularity.
pub trait Unit: Clone + Eq + Hash + Debug {
	/// Splits raw training text into the corpus of units.
	fn segment(text: &str) -> Vec<Self>;

	/// Appends this unit to the generated output.
	fn render(&self, out: &mut String);
}

/// Character granularity.
///
/// - Leading and trailing whitespace is trimmed before segmentation
/// - Characters are emitted without separators
impl Unit for char {
	fn segment(text: &str) -> Vec<Self> {
		text.trim().chars().collect()
	}

	fn render(&self, out: &mut String) {
		out.push(*self);
	}
}

/// Word granularity.
///
/// - Text is split on the single space character, no trimming
/// - Consecutive spaces yield empty words
/// - Every emitted word is followed by one space (including the last)
impl Unit for String {
	fn segment(text: &str) -> Vec<Self> {
		text.split(' ').map(str::to_owned).collect()
	}

	fn render(&self, out: &mut String) {
		out.push_str(self);
		out.push(' ');
	}
}
