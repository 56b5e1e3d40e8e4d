use core::{
	cell::RefCell,
	fmt::{self, Debug, Formatter},
};
use std::rc::Rc;

/// Creates an independent state cell holding `initial`, returning its reader and writer.
///
/// This is a bare mutable slot: writing doesn't notify anyone or re-render anything.
///
/// ```
/// let (count, set_count) = xeact_dom::use_state(0);
/// set_count.set(count.get() + 1);
/// assert_eq!(count.get(), 1);
/// ```
pub fn use_state<T>(initial: T) -> (StateReader<T>, StateWriter<T>) {
	let cell = Rc::new(RefCell::new(initial));
	(StateReader(Rc::clone(&cell)), StateWriter(cell))
}

/// [`use_state`] starting from `T::default()`, for when there's no meaningful initial value.
#[must_use]
pub fn use_state_default<T: Default>() -> (StateReader<T>, StateWriter<T>) {
	use_state(T::default())
}

/// The reading half of a state cell.
pub struct StateReader<T>(Rc<RefCell<T>>);

/// The writing half of a state cell.
pub struct StateWriter<T>(Rc<RefCell<T>>);

impl<T> StateReader<T> {
	/// Borrows the current value.
	///
	/// # Panics
	///
	/// Iff the matching [`StateWriter`] is used inside `f`.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.0.borrow())
	}
}

impl<T: Clone> StateReader<T> {
	/// Returns (a clone of) the most recently written value.
	#[must_use]
	pub fn get(&self) -> T {
		self.0.borrow().clone()
	}
}

impl<T> StateWriter<T> {
	/// Overwrites the current value.
	///
	/// # Panics
	///
	/// Iff called from within [`StateReader::with`] on the same cell.
	pub fn set(&self, value: T) {
		drop(self.0.replace(value));
	}
}

impl<T> Clone for StateReader<T> {
	fn clone(&self) -> Self {
		Self(Rc::clone(&self.0))
	}
}

impl<T> Clone for StateWriter<T> {
	fn clone(&self) -> Self {
		Self(Rc::clone(&self.0))
	}
}

impl<T: Debug> Debug for StateReader<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("StateReader").field(&self.0.borrow()).finish()
	}
}

impl<T> Debug for StateWriter<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("StateWriter").finish_non_exhaustive()
	}
}
