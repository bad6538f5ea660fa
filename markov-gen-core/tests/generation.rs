//! End-to-end checks: text in, chain built, text out.

use markov_gen_core::error::GenerateError;
use markov_gen_core::model::chain::{ChainModel, Context};
use markov_gen_core::model::generator::Generator;
use markov_gen_core::model::picker::SeededPicker;

const CORPUS: &str = "I would not like them here or there. \
	I would not like them anywhere. \
	I do not like green eggs and ham. \
	I do not like them, Sam-I-am.";

#[test]
fn every_input_bigram_becomes_a_key() {
	let tokens: Vec<&str> = CORPUS.split_whitespace().collect();
	let model = ChainModel::from_text(CORPUS);

	for window in tokens.windows(3) {
		let successors = model
			.successors(&Context::new(window[0], window[1]))
			.expect("every consecutive bigram is a key");
		assert!(successors.contains(&Some(window[2].to_owned())));
	}

	// The final bigram maps to the sentinel.
	let last = Context::new(tokens[tokens.len() - 2], tokens[tokens.len() - 1]);
	assert_eq!(model.successors(&last), Some(&[None][..]));
}

#[test]
fn generated_text_only_walks_observed_transitions() {
	let model = ChainModel::from_text(CORPUS);

	for seed in 0..64 {
		let mut generator = Generator::with_picker(SeededPicker::new(seed));
		let text = generator.generate_text(&model).unwrap();
		let words: Vec<&str> = text.split(' ').collect();
		assert!(words.len() >= 2);

		// Every emitted word was drawn from its context's successor list.
		for window in words.windows(3) {
			let successors = model
				.successors(&Context::new(window[0], window[1]))
				.expect("walked context must be a key");
			assert!(successors.contains(&Some(window[2].to_owned())));
		}
	}
}

#[test]
fn same_seed_same_output() {
	let model = ChainModel::from_text(CORPUS);

	let mut first = Generator::with_picker(SeededPicker::new(1234));
	let mut second = Generator::with_picker(SeededPicker::new(1234));
	assert_eq!(
		first.generate_text(&model).unwrap(),
		second.generate_text(&model).unwrap()
	);
}

#[test]
fn looping_corpus_still_terminates() {
	// Heavy bigram repetition makes revisits the common case.
	let model = ChainModel::from_text("badger badger badger badger mushroom");

	for seed in 0..64 {
		let mut generator = Generator::with_picker(SeededPicker::new(seed));
		assert!(generator.generate(&model).is_ok());
	}
}

#[test]
fn short_input_reports_insufficient_input() {
	let mut generator = Generator::new();
	for text in ["", "   ", "word"] {
		let model = ChainModel::from_text(text);
		assert_eq!(generator.generate(&model), Err(GenerateError::InsufficientInput));
	}
}
