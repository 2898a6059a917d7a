use thiserror::Error;

/// Errors raised by a Markov model.
///
/// Only usage errors are represented here: a trained model never fails a
/// successor lookup, and a generation that stalls returns partial output.
#[derive(Debug, Error)]
pub enum ModelError {
	/// Generation or lookup attempted before any training text was set.
	#[error("Training text is not initialised")]
	UntrainedModel,

	/// The corpus is too short to pick a starting context.
	#[error("Invalid range: corpus has {corpus_len} units, context length is {context_length}")]
	InvalidRange {
		corpus_len: usize,
		context_length: usize,
	},

	/// A model was constructed with a context length of zero.
	#[error("Context length must be > 0, got {0}")]
	InvalidContextLength(usize),

	/// Training text could not be read from disk.
	#[error("Failed to read training text: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type used across the model module.
pub type Result<T> = std::result::Result<T, ModelError>;
