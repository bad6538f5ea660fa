//! Second-order Markov chain text generation library.
//!
//! This crate builds a word-level Markov chain from an input text and
//! generates new, statistically similar text by randomly walking that
//! chain:
//! - Chain construction from whitespace-tokenized text
//! - Frequency-weighted random-walk generation
//! - Injectable random selection for reproducible output
//!
//! The core consumes one string of input text and produces one string
//! of output text. Reading files and writing results are left to the
//! callers; the library holds no ambient state.

/// Chain model, picker abstraction and generation logic.
pub mod model;

/// Error conditions surfaced by generation.
pub mod error;
