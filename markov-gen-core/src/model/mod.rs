//! Top-level module for the Markov chain generation system.
//!
//! This module provides a second-order, word-level Markov chain:
//! - The chain model itself (`ChainModel`) and its context keys (`Context`)
//! - Uniform random selection as an injectable capability (`Picker`)
//! - A high-level generation interface (`Generator`)

/// Second-order chain model built from tokenized text.
///
/// Maps each ordered pair of consecutive tokens to the ordered,
/// duplicate-preserving list of tokens observed to follow it.
pub mod chain;

/// High-level interface for generating token sequences from a chain.
///
/// Exposes random-start and fixed-start walks with a configurable
/// random source.
pub mod generator;

/// Uniform random selection abstraction.
///
/// Lets the generator draw indices from a real RNG, a seeded RNG, or
/// a scripted source in tests.
pub mod picker;
