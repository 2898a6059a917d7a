//! Top-level module for the Markov generation system.
//!
//! This module provides:
//! - A generic order-k model (`MarkovModel`)
//! - Granularity abstraction (`Unit`, for `char` and `String` words)
//! - Random source abstraction (`RandomSource`, `Randomizer`)
//! - Internal corpus and successor index (`Chain`, `TransitionTable`)

/// Public model interface: training, successor lookup and generation.
pub mod markov_model;

/// Error type shared by every model operation.
pub mod error;

/// Unit abstraction: how text is segmented and how output is joined.
pub mod unit;

/// Injectable random sources.
///
/// `Randomizer` is the default, seedable source.
pub mod random;

/// Trained corpus, successor scan and generation loop.
/// This module is not exposed publicly.
mod chain;

/// Precomputed key to successors index.
/// This module is not exposed publicly.
mod transition_table;
