use crate::{Environment, Error};
use core::iter::FromIterator;
use tracing::{instrument, trace};
use web_sys::{Element, Node, Text};

/// A single entry of a children sequence: either a DOM [`Node`] or a plain string.
///
/// Strings are appended as text by the host (like [***ParentNode.append()***](https://developer.mozilla.org/en-US/docs/Web/API/Element/append) does),
/// and stand in for text nodes where there is no document to create them with.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
	Node(Node),
	Text(String),
}

impl Child {
	/// The DOM node, if this is one.
	#[must_use]
	pub fn as_node(&self) -> Option<&Node> {
		match self {
			Self::Node(node) => Some(node),
			Self::Text(_) => None,
		}
	}

	#[must_use]
	pub fn into_node(self) -> Option<Node> {
		match self {
			Self::Node(node) => Some(node),
			Self::Text(_) => None,
		}
	}

	pub(crate) fn append_to(&self, parent: &Element) -> Result<(), Error> {
		match self {
			Self::Node(node) => parent.append_with_node_1(node)?,
			Self::Text(text) => parent.append_with_str_1(text)?,
		}
		Ok(())
	}
}

impl From<Node> for Child {
	fn from(node: Node) -> Self {
		Self::Node(node)
	}
}

impl From<Element> for Child {
	fn from(element: Element) -> Self {
		Self::Node(element.into())
	}
}

impl From<Text> for Child {
	fn from(text: Text) -> Self {
		Self::Node(text.into())
	}
}

impl From<String> for Child {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<&str> for Child {
	fn from(text: &str) -> Self {
		Self::Text(text.to_owned())
	}
}

/// An ordered children sequence.
///
/// Single children and sequences of them both convert into this, so callers can pass either.
/// `None` (as produced by the element factory without a document) contributes nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Children(Vec<Child>);

impl Children {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> core::slice::Iter<'_, Child> {
		self.0.iter()
	}
}

impl IntoIterator for Children {
	type Item = Child;
	type IntoIter = std::vec::IntoIter<Child>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl From<()> for Children {
	fn from((): ()) -> Self {
		Self::new()
	}
}

impl From<Child> for Children {
	fn from(child: Child) -> Self {
		Self(vec![child])
	}
}

impl From<Option<Child>> for Children {
	fn from(child: Option<Child>) -> Self {
		Self(child.into_iter().collect())
	}
}

impl From<Node> for Children {
	fn from(node: Node) -> Self {
		Child::from(node).into()
	}
}

impl From<Element> for Children {
	fn from(element: Element) -> Self {
		Child::from(element).into()
	}
}

impl From<Text> for Children {
	fn from(text: Text) -> Self {
		Child::from(text).into()
	}
}

impl From<String> for Children {
	fn from(text: String) -> Self {
		Child::from(text).into()
	}
}

impl From<&str> for Children {
	fn from(text: &str) -> Self {
		Child::from(text).into()
	}
}

impl<T: Into<Child>> From<Vec<T>> for Children {
	fn from(children: Vec<T>) -> Self {
		children.into_iter().collect()
	}
}

impl<T: Into<Child>, const N: usize> From<[T; N]> for Children {
	fn from(children: [T; N]) -> Self {
		Vec::from(children).into()
	}
}

impl<T: Into<Child>> FromIterator<T> for Children {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

impl Environment {
	/// Wraps `text` as a text node, or returns it unchanged (as [`Child::Text`]) without a document.
	#[must_use]
	pub fn text(&self, text: &str) -> Child {
		match self.document() {
			Some(document) => document.create_text_node(text).into(),
			None => Child::Text(text.to_owned()),
		}
	}
}

/// Removes all child nodes of `parent`, last to first.
///
/// # Errors
///
/// Iff the host refuses to remove a child.
#[instrument(skip(parent))]
pub fn clear(parent: &Node) -> Result<(), Error> {
	let mut removed = 0_usize;
	while let Some(last) = parent.last_child() {
		parent.remove_child(&last)?;
		removed += 1;
	}
	trace!("Removed {} child node(s).", removed);
	Ok(())
}
