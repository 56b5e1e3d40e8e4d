use crate::{Environment, Error};
use tracing::instrument;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCollection, NodeList};

/// The result of [`Environment::by_class`] or [`Environment::by_name`].
///
/// The two non-empty variants are **live**: they reflect DOM mutations made after the lookup.
/// [`Environment::select_all`] instead returns a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveCollection {
	Classes(HtmlCollection),
	Names(NodeList),
	/// Returned when there is no document.
	Empty,
}

impl LiveCollection {
	#[must_use]
	pub fn len(&self) -> usize {
		match self {
			Self::Classes(collection) => collection.length() as usize,
			Self::Names(list) => list.length() as usize,
			Self::Empty => 0,
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Items of a [`NodeList`] that aren't [`Element`]s read as [`None`].
	#[must_use]
	pub fn get(&self, index: usize) -> Option<Element> {
		#[allow(clippy::cast_possible_truncation)]
		let index = index as u32;
		match self {
			Self::Classes(collection) => collection.item(index),
			Self::Names(list) => list.item(index).and_then(|node| node.dyn_into().ok()),
			Self::Empty => None,
		}
	}

	/// Iterates the collection as it is at each step.
	pub fn iter(&self) -> impl Iterator<Item = Element> + '_ {
		(0..self.len()).filter_map(move |i| self.get(i))
	}

	/// Materialises the current contents.
	#[must_use]
	pub fn to_vec(&self) -> Vec<Element> {
		self.iter().collect()
	}
}

impl Environment {
	/// Equivalent to `document.getElementById(id)`, [`None`] without a document.
	#[must_use]
	pub fn by_id(&self, id: &str) -> Option<Element> {
		self.document()?.get_element_by_id(id)
	}

	/// Equivalent to `document.getElementsByClassName(names)` (live), empty without a document.
	#[must_use]
	pub fn by_class(&self, names: &str) -> LiveCollection {
		self.document()
			.map_or(LiveCollection::Empty, |document| LiveCollection::Classes(document.get_elements_by_class_name(names)))
	}

	/// Equivalent to `document.getElementsByName(name)` (live), empty without a document.
	#[must_use]
	pub fn by_name(&self, name: &str) -> LiveCollection {
		self.document()
			.map_or(LiveCollection::Empty, |document| LiveCollection::Names(document.get_elements_by_name(name)))
	}

	/// Equivalent to `Array.from(document.querySelectorAll(selectors))`: a snapshot in document order.
	///
	/// Empty without a document.
	///
	/// # Errors
	///
	/// Iff `selectors` isn't a valid selector list.
	#[instrument(skip(self))]
	pub fn select_all(&self, selectors: &str) -> Result<Vec<Element>, Error> {
		let document = match self.document() {
			Some(document) => document,
			None => return Ok(Vec::new()),
		};

		let list = document.query_selector_all(selectors)?;
		Ok((0..list.length()).filter_map(|i| list.item(i)).filter_map(|node| node.dyn_into().ok()).collect())
	}
}
