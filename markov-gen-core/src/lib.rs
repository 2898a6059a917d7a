//! Markov chain text generation library.
//!
//! This crate provides an order-k Markov model that learns a training text
//! and generates new text from observed transitions:
//! - Character-level and word-level granularity behind one generic model
//! - Successor lookup preserving occurrence order and frequency
//! - Reproducible generation through an injectable random source
//! - Internal utilities for loading training text
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Markov models and generation logic.
///
/// This module exposes the model, its unit and random source abstractions
/// while keeping the chain representation private.
pub mod model;

/// I/O utilities (training text loading).
///
/// Not exposed
pub(crate) mod io;

pub use model::error::{ModelError, Result};
pub use model::markov_model::{CharModel, MarkovModel, WordModel};
pub use model::random::{RandomSource, Randomizer, Reseed, RngSource};
pub use model::unit::Unit;
