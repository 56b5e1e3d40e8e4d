use crate::{Environment, Error};
use serde::de::DeserializeOwned;
use tracing::{instrument, trace};

impl Environment {
	/// Parses the text content of the element with the given `id` as JSON.
	///
	/// This is meant for data the server embeds into the page, typically in a `<script type="application/json">`.
	///
	/// A missing element (including without a document) or missing text reads as `Ok(None)`.
	///
	/// # Errors
	///
	/// [`Error::Json`] iff the text is present but not valid JSON for `T`.
	#[instrument(skip(self))]
	pub fn load_json<T: DeserializeOwned>(&self, id: &str) -> Result<Option<T>, Error> {
		parse_text_content(self.by_id(id).and_then(|element| element.text_content()))
	}
}

fn parse_text_content<T: DeserializeOwned>(text: Option<String>) -> Result<Option<T>, Error> {
	let text = match text {
		Some(text) => text,
		None => {
			trace!("No embedded text.");
			return Ok(None);
		}
	};

	if cfg!(feature = "dangerous-logging") {
		trace!(%text, "Parsing embedded JSON.");
	} else {
		trace!(len = text.len(), "Parsing embedded JSON.");
	}
	Ok(Some(serde_json::from_str(&text)?))
}
