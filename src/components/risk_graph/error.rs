use std::fmt;

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Faults while producing a graph artifact. Shown to the user, never fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
	#[error("the graph canvas is not mounted")]
	CanvasMissing,

	#[error("2D drawing context unavailable: {0}")]
	Context(String),

	#[error("node `{0}` has a non-finite layout position")]
	InvalidPosition(&'static str),

	#[error("image export failed: {0}")]
	Export(String),

	#[error("failed to serialize graph document")]
	Markup(#[from] fmt::Error),
}

impl RenderError {
	/// Text shown in place of the graph.
	pub fn user_message(&self) -> String {
		format!("Could not render graph: {}", self)
	}

	pub(crate) fn context(err: JsValue) -> Self {
		RenderError::Context(js_message(&err))
	}

	pub(crate) fn export(err: JsValue) -> Self {
		RenderError::Export(js_message(&err))
	}
}

fn js_message(err: &JsValue) -> String {
	err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_message_names_the_failure() {
		assert_eq!(
			RenderError::InvalidPosition("Gold").user_message(),
			"Could not render graph: node `Gold` has a non-finite layout position"
		);
		assert_eq!(
			RenderError::CanvasMissing.user_message(),
			"Could not render graph: the graph canvas is not mounted"
		);
	}

	#[test]
	fn markup_failures_convert_from_fmt() {
		let err: RenderError = fmt::Error.into();
		assert_eq!(
			err.user_message(),
			"Could not render graph: failed to serialize graph document"
		);
	}
}
