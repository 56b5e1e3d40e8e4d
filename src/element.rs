use crate::{Child, Children, Environment, Error};
use core::{
	fmt::{self, Debug, Formatter},
	iter::FromIterator,
	mem,
};
use hashbrown::HashMap;
use js_sys::{Reflect, TypeError};
use std::borrow::Cow;
use tracing::{instrument, trace};
use wasm_bindgen::JsValue;
use web_sys::Element;

/// A scalar assignable onto an element property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
	Str(String),
	Number(f64),
	Bool(bool),
	Null,
}

impl PropertyValue {
	#[must_use]
	pub fn to_js(&self) -> JsValue {
		match self {
			Self::Str(value) => JsValue::from_str(value),
			Self::Number(value) => JsValue::from_f64(*value),
			Self::Bool(value) => JsValue::from_bool(*value),
			Self::Null => JsValue::NULL,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(value) => Some(value),
			_ => None,
		}
	}
}

impl From<&str> for PropertyValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl From<String> for PropertyValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<f64> for PropertyValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<i32> for PropertyValue {
	fn from(value: i32) -> Self {
		Self::Number(value.into())
	}
}

impl From<u32> for PropertyValue {
	fn from(value: u32) -> Self {
		Self::Number(value.into())
	}
}

impl From<bool> for PropertyValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

/// A mapping from element property name to value, applied in insertion order.
///
/// Note that these are *properties* (`className`, `htmlFor`, `textContent`…), not attributes.
/// Inserting a name twice replaces the value but keeps the name's original position,
/// so order-sensitive pairs like `type` before `value` are assigned the way they were written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
	entries: Vec<(Cow<'static, str>, PropertyValue)>,
	positions: HashMap<Cow<'static, str>, usize>,
}

impl Properties {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style [`insert`](`Properties::insert`).
	#[must_use]
	pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<PropertyValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Returns the previous value of `name`, if any.
	pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
		let name = name.into();
		let value = value.into();
		match self.positions.get(&name) {
			Some(&position) => Some(mem::replace(&mut self.entries[position].1, value)),
			None => {
				self.positions.insert(name.clone(), self.entries.len());
				self.entries.push((name, value));
				None
			}
		}
	}

	#[must_use]
	pub fn get(&self, name: &str) -> Option<&PropertyValue> {
		self.positions.get(name).map(|&position| &self.entries[position].1)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// In insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> + '_ {
		self.entries.iter().map(|(name, value)| (name.as_ref(), value))
	}
}

impl From<()> for Properties {
	fn from((): ()) -> Self {
		Self::new()
	}
}

impl<K, V> FromIterator<(K, V)> for Properties
where
	K: Into<Cow<'static, str>>,
	V: Into<PropertyValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut properties = Self::new();
		for (name, value) in iter {
			properties.insert(name, value);
		}
		properties
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Properties
where
	K: Into<Cow<'static, str>>,
	V: Into<PropertyValue>,
{
	fn from(entries: [(K, V); N]) -> Self {
		Vec::from(entries).into_iter().collect()
	}
}

/// What the element factory builds: a tag name or a component function.
pub enum Descriptor<'a> {
	Tag(&'a str),
	/// Called with the properties only. Children passed alongside a component are dropped.
	///
	/// Errors the component returns, for example from a nested [`Environment::tag`] call, are passed through as-is.
	Component(Box<dyn FnOnce(Properties) -> Result<Option<Child>, Error> + 'a>),
}

impl<'a> Descriptor<'a> {
	pub fn component(component: impl FnOnce(Properties) -> Result<Option<Child>, Error> + 'a) -> Self {
		Self::Component(Box::new(component))
	}
}

impl<'a> From<&'a str> for Descriptor<'a> {
	fn from(tag: &'a str) -> Self {
		Self::Tag(tag)
	}
}

impl Debug for Descriptor<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
			Self::Component(_) => f.debug_tuple("Component").finish_non_exhaustive(),
		}
	}
}

impl Environment {
	/// The element factory.
	///
	/// - A [`Descriptor::Component`] is called with `properties` and its result returned as-is, with or without a document.
	///   `children` are ignored in that case.
	/// - A [`Descriptor::Tag`] yields `Ok(None)` without a document.
	/// - Otherwise, a new element is created, each property assigned onto it, and `children` appended in order.
	///
	/// No sanitisation takes place.
	///
	/// # Errors
	///
	/// Iff the host rejects the tag name, a property assignment or a child.
	pub fn element<'a>(
		&self,
		descriptor: impl Into<Descriptor<'a>>,
		properties: impl Into<Properties>,
		children: impl Into<Children>,
	) -> Result<Option<Child>, Error> {
		match descriptor.into() {
			Descriptor::Component(component) => component(properties.into()),
			Descriptor::Tag(tag) => Ok(self.tag(tag, properties, children)?.map(Child::from)),
		}
	}

	/// The tag-name half of [`element`](`Environment::element`), returning the [`Element`] itself.
	///
	/// # Errors
	///
	/// Iff the host rejects the tag name, a property assignment or a child.
	#[instrument(skip(self, properties, children))]
	pub fn tag(&self, name: &str, properties: impl Into<Properties>, children: impl Into<Children>) -> Result<Option<Element>, Error> {
		let document = match self.document() {
			Some(document) => document,
			None => return Ok(None),
		};

		let element = document.create_element(name)?;
		let properties = properties.into();
		for (property, value) in properties.iter() {
			if !Reflect::set(&element, &JsValue::from_str(property), &value.to_js())? {
				return Err(Error::Platform(TypeError::new(&format!("Cannot assign to property {:?} of <{}>", property, name)).into()));
			}
		}

		let children = children.into();
		for child in children.iter() {
			child.append_to(&element)?;
		}

		trace!("Created <{}> with {} properties and {} children.", name, properties.len(), children.len());
		Ok(Some(element))
	}
}
