use log::trace;

use crate::error::GenerateError;
use crate::model::chain::{ChainModel, Context};
use crate::model::picker::{Picker, RandomPicker};

/// High-level interface for walking a chain model into new text.
///
/// # Responsibilities
/// - Pick a starting context (random or caller-supplied)
/// - Walk the chain, selecting each successor uniformly from the
///   stored occurrence list, until the end-of-text sentinel is drawn
/// - Surface empty models and broken lookups as typed errors
///
/// The generator only reads the model; two calls over the same model
/// may differ in output but never in the model's contents. All
/// randomness flows through the injected [`Picker`].
#[derive(Debug)]
pub struct Generator<P = RandomPicker> {
	picker: P,
}

impl Generator<RandomPicker> {
	/// Creates a generator drawing from the thread-local RNG.
	pub fn new() -> Self {
		Self::with_picker(RandomPicker::new())
	}
}

impl Default for Generator<RandomPicker> {
	fn default() -> Self {
		Self::new()
	}
}

impl<P: Picker> Generator<P> {
	/// Creates a generator with a caller-supplied random source.
	pub fn with_picker(picker: P) -> Self {
		Self { picker }
	}

	/// Generates a token sequence from a random starting context.
	///
	/// The start is drawn uniformly from the model's contexts in
	/// first-occurrence order; the walk then follows [`Self::generate_from`].
	///
	/// # Errors
	/// - `InsufficientInput` if the model holds no contexts.
	pub fn generate(&mut self, model: &ChainModel) -> Result<Vec<String>, GenerateError> {
		if model.is_empty() {
			return Err(GenerateError::InsufficientInput);
		}
		let start = model.context_at(self.picker.pick(model.len())).clone();
		self.walk(model, start)
	}

	/// Generates a token sequence from a caller-chosen starting context.
	///
	/// # Errors
	/// - `InsufficientInput` if the model holds no contexts.
	/// - `MissingContext` if `start` (or, defensively, any context
	///   reached mid-walk) is not a key of `model`. Unreachable
	///   mid-walk for contexts taken from the model itself.
	pub fn generate_from(
		&mut self,
		model: &ChainModel,
		start: &Context,
	) -> Result<Vec<String>, GenerateError> {
		if model.is_empty() {
			return Err(GenerateError::InsufficientInput);
		}
		self.walk(model, start.clone())
	}

	/// Generates text from a random starting context.
	///
	/// Joins the token sequence with single spaces; this is the core's
	/// output contract.
	pub fn generate_text(&mut self, model: &ChainModel) -> Result<String, GenerateError> {
		Ok(self.generate(model)?.join(" "))
	}

	/// Walks the chain from `start` until the sentinel is drawn.
	///
	/// Selection is a direct index into the stored successor list, so
	/// tokens observed more often are proportionally more likely. The
	/// sentinel terminates the walk and is never emitted. Revisiting a
	/// context is allowed; the sentinel is the only absorbing state.
	fn walk(&mut self, model: &ChainModel, start: Context) -> Result<Vec<String>, GenerateError> {
		let mut words = vec![start.first().to_owned(), start.second().to_owned()];
		let mut context = start;

		loop {
			let successors = model
				.successors(&context)
				.ok_or_else(|| GenerateError::MissingContext(context.clone()))?;

			match &successors[self.picker.pick(successors.len())] {
				Some(word) => {
					context = context.shift(word);
					words.push(word.clone());
				}
				None => break,
			}
		}

		trace!("walk finished: {} tokens", words.len());
		Ok(words)
	}
}
