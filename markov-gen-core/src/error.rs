use std::error::Error;
use std::fmt;

use crate::model::chain::Context;

/// Errors produced by a generation attempt.
///
/// Generation is single-shot: any of these aborts the attempt and is
/// reported to the caller as a terminal condition. There are no retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
	/// The model holds no contexts, so there is nothing to walk.
	///
	/// Raised when the source text had fewer than two tokens after
	/// whitespace splitting.
	InsufficientInput,

	/// A context reached during the walk is absent from the model.
	///
	/// Unreachable for a model walked from one of its own contexts;
	/// checked defensively so a corrupted or hand-built model fails
	/// with a diagnosable error instead of an opaque lookup panic.
	MissingContext(Context),
}

impl fmt::Display for GenerateError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InsufficientInput => {
				write!(f, "insufficient input: fewer than two tokens, no chain to walk")
			}
			Self::MissingContext(context) => {
				write!(
					f,
					"internal consistency error: context ({:?}, {:?}) is not in the model",
					context.first(),
					context.second()
				)
			}
		}
	}
}

impl Error for GenerateError {}
