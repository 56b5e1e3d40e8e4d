use crate::{Environment, Error};
use core::fmt::Display;
use tracing::{instrument, trace};
use url::Url;

/// What relative URLs resolve against without a window.
pub const PLACEHOLDER_ORIGIN: &str = "http://localhost";

impl Environment {
	/// Resolves `base` against the current location (or [`PLACEHOLDER_ORIGIN`] without a window)
	/// and then sets each of `params` on its query, in iteration order.
	///
	/// Setting follows [***URLSearchParams.set()***](https://developer.mozilla.org/en-US/docs/Web/API/URLSearchParams/set):
	/// an existing parameter of the same name is overwritten in place, any further duplicates are removed,
	/// and new names are appended. Values are stringified with [`Display`].
	///
	/// An empty `base` means the current location itself.
	///
	/// # Errors
	///
	/// Iff the location can't be read or `base` doesn't resolve to a valid URL.
	#[instrument(skip(self, params))]
	pub fn url<K, V>(&self, base: &str, params: impl IntoIterator<Item = (K, V)>) -> Result<String, Error>
	where
		K: AsRef<str>,
		V: Display,
	{
		let location = match self.window() {
			Some(window) => window.location().href()?,
			None => PLACEHOLDER_ORIGIN.to_owned(),
		};

		let mut url = Url::parse(&location)?.join(base)?;
		for (name, value) in params {
			set_query_param(&mut url, name.as_ref(), &value.to_string());
		}

		trace!(%url, "Built URL.");
		Ok(url.into())
	}
}

fn set_query_param(url: &mut Url, name: &str, value: &str) {
	let mut replaced = false;
	let mut pairs = Vec::new();
	for (k, v) in url.query_pairs().into_owned() {
		if k != name {
			pairs.push((k, v));
		} else if !replaced {
			pairs.push((k, value.to_owned()));
			replaced = true;
		}
	}
	if !replaced {
		pairs.push((name.to_owned(), value.to_owned()));
	}

	url.query_pairs_mut().clear().extend_pairs(pairs);
}

#[cfg(test)]
mod tests {
	use super::set_query_param;
	use url::Url;

	#[test]
	fn appends_new_names() {
		let mut url = Url::parse("http://localhost/p").unwrap();
		set_query_param(&mut url, "a", "1");
		set_query_param(&mut url, "b", "2");
		assert_eq!(url.as_str(), "http://localhost/p?a=1&b=2");
	}

	#[test]
	fn overwrites_in_place_and_drops_duplicates() {
		let mut url = Url::parse("http://localhost/p?a=0&b=1&a=2").unwrap();
		set_query_param(&mut url, "a", "3");
		assert_eq!(url.as_str(), "http://localhost/p?a=3&b=1");
	}

	#[test]
	fn encodes_form_style() {
		let mut url = Url::parse("http://localhost/").unwrap();
		set_query_param(&mut url, "q", "a b&c");
		assert_eq!(url.as_str(), "http://localhost/?q=a+b%26c");
	}
}
