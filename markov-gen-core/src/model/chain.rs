use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::debug;

/// An ordered pair of consecutive tokens, used as a chain lookup key.
///
/// Equality is structural: two contexts holding the same two tokens in
/// the same order are the same key, wherever they occurred in the text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Context {
	first: String,
	second: String,
}

impl Context {
	/// Creates a context from two consecutive tokens.
	pub fn new<S: Into<String>>(first: S, second: S) -> Self {
		Self { first: first.into(), second: second.into() }
	}

	/// First token of the pair.
	pub fn first(&self) -> &str {
		&self.first
	}

	/// Second token of the pair.
	pub fn second(&self) -> &str {
		&self.second
	}

	/// Returns the follow-up context after emitting `next`.
	///
	/// The walk advances one token at a time: the new pair is the old
	/// second token followed by the token just selected.
	pub fn shift(&self, next: &str) -> Self {
		Self { first: self.second.clone(), second: next.to_owned() }
	}
}

/// A second-order Markov chain over whitespace-delimited tokens.
///
/// # Responsibilities
/// - Tokenize input text (whitespace runs, no normalization)
/// - Record, for every pair of consecutive tokens, the ordered list of
///   tokens observed to follow that pair
/// - Serve read-only lookups during generation
///
/// # Invariants
/// - Every key maps to a non-empty successor list
/// - Successor lists preserve source order and duplicates, so a uniform
///   index into the list is frequency-weighted selection
/// - End of text is `None`; a key never contains the sentinel, the last
///   real pair simply maps to it
/// - `contexts` holds every key exactly once, in first-occurrence order
#[derive(Debug, Default)]
pub struct ChainModel {
	/// Mapping from a token pair to its observed successors.
	chains: HashMap<Context, Vec<Option<String>>>,

	/// Keys in first-occurrence order, for uniform start selection.
	contexts: Vec<Context>,
}

impl ChainModel {
	/// Builds a chain from free-form text.
	///
	/// Tokens are whitespace runs; case and punctuation are kept as-is.
	pub fn from_text(text: &str) -> Self {
		let tokens: Vec<&str> = text.split_whitespace().collect();
		Self::from_tokens(&tokens)
	}

	/// Builds a chain from an already tokenized sequence.
	///
	/// With the end-of-text sentinel conceptually appended after the
	/// last token, every consecutive pair of real tokens becomes a key
	/// and the element two places after the pair's start becomes a
	/// successor. The final real pair maps to the sentinel; the pair
	/// that would end at the sentinel is never added.
	///
	/// # Notes
	/// - Fewer than 2 tokens yields an empty model; the generator
	///   reports that as `InsufficientInput`, not the builder.
	pub fn from_tokens(tokens: &[&str]) -> Self {
		let mut model = Self::default();
		if tokens.len() < 2 {
			return model;
		}

		// For each consecutive pair
		for i in 0..tokens.len() - 1 {
			let context = Context::new(tokens[i], tokens[i + 1]);
			// One past the end is the sentinel
			let successor = tokens.get(i + 2).map(|t| (*t).to_owned());
			model.record(context, successor);
		}

		debug!(
			"built chain model: {} tokens, {} contexts",
			tokens.len(),
			model.len()
		);
		model
	}

	/// Records one observed transition, creating the key if needed.
	fn record(&mut self, context: Context, successor: Option<String>) {
		match self.chains.entry(context) {
			Entry::Occupied(mut entry) => entry.get_mut().push(successor),
			Entry::Vacant(entry) => {
				self.contexts.push(entry.key().clone());
				entry.insert(vec![successor]);
			}
		}
	}

	/// True if the model holds no contexts.
	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	/// Total number of recorded transitions, duplicates included.
	pub fn transition_count(&self) -> usize {
		self.chains.values().map(Vec::len).sum()
	}

	/// The context at `index` in first-occurrence order.
	///
	/// # Panics
	/// Panics if `index >= self.len()`; callers index with a value
	/// drawn from `0..self.len()`.
	pub fn context_at(&self, index: usize) -> &Context {
		&self.contexts[index]
	}

	/// Iterates over the keys in first-occurrence order.
	pub fn contexts(&self) -> impl Iterator<Item = &Context> {
		self.contexts.iter()
	}

	/// Successor list for `context`, in source order.
	///
	/// `None` entries in the returned slice mark end of text. Returns
	/// `None` (no slice) if the context is not a key.
	pub fn successors(&self, context: &Context) -> Option<&[Option<String>]> {
		self.chains.get(context).map(Vec::as_slice)
	}
}
