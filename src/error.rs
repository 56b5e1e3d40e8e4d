use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong in this crate.
///
/// A missing document or window is never reported through this type.
/// [`Environment::debounce`](`crate::Environment::debounce`) only fails where there is no JavaScript host at all.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
	/// Anything thrown by the host page, passed through unchanged.
	#[error("platform error: {0:?}")]
	Platform(JsValue),

	#[error("URL resolution failed: {0}")]
	Url(#[from] url::ParseError),

	/// Malformed embedded JSON.
	#[error("embedded JSON could not be parsed: {0}")]
	Json(#[from] serde_json::Error),

	/// There is no JavaScript host to schedule timers on.
	#[error("no host timer source is available")]
	NoTimers,
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		Self::Platform(value)
	}
}
