//! One-shot timers behind a small trait, so that [`Debouncer`](`crate::Debouncer`) runs against the host's event loop
//! or against a deterministic virtual clock.

use crate::Error;
use gloo_timers::callback::Timeout;
use core::{
	cell::{Cell, RefCell},
	fmt::{self, Debug, Formatter},
};
use std::{collections::BTreeMap, rc::Rc};
use tracing::{instrument, trace};

/// A source of cancellable one-shot timers.
pub trait Timers {
	/// Identifies one pending timeout.
	type Handle;

	/// Schedules `action` to run once after `delay_ms` milliseconds.
	///
	/// # Errors
	///
	/// Iff the host refuses to schedule the timer.
	fn set_timeout(&self, delay_ms: u32, action: Box<dyn FnOnce()>) -> Result<Self::Handle, Error>;

	/// Discards the timeout behind `handle` unless it has already fired.
	fn clear_timeout(&self, handle: Self::Handle);
}

impl<T: Timers + ?Sized> Timers for Rc<T> {
	type Handle = T::Handle;

	fn set_timeout(&self, delay_ms: u32, action: Box<dyn FnOnce()>) -> Result<Self::Handle, Error> {
		(**self).set_timeout(delay_ms, action)
	}

	fn clear_timeout(&self, handle: Self::Handle) {
		(**self).clear_timeout(handle);
	}
}

/// The host's global [***setTimeout()***](https://developer.mozilla.org/en-US/docs/Web/API/setTimeout),
/// available in pages, workers and other JavaScript hosts alike.
#[derive(Debug, Clone, Copy)]
pub struct GlobalTimers {
	_private: (),
}

impl GlobalTimers {
	/// [`Some`] iff there is a JavaScript host to schedule on, which is never the case outside of `wasm32`.
	#[must_use]
	pub fn detect() -> Option<Self> {
		if cfg!(target_arch = "wasm32") {
			Some(Self { _private: () })
		} else {
			None
		}
	}
}

impl Timers for GlobalTimers {
	/// Cancels the timeout when dropped.
	type Handle = Timeout;

	fn set_timeout(&self, delay_ms: u32, action: Box<dyn FnOnce()>) -> Result<Self::Handle, Error> {
		Ok(Timeout::new(delay_ms, action))
	}

	fn clear_timeout(&self, handle: Self::Handle) {
		drop(handle.cancel());
	}
}

/// Identifies a timeout scheduled on [`VirtualTimers`].
///
/// Ordered by due time, then by scheduling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualTimeout {
	due_ms: u64,
	order: u64,
}

impl VirtualTimeout {
	#[must_use]
	pub fn due_ms(self) -> u64 {
		self.due_ms
	}
}

/// A deterministic virtual clock for headless hosts and tests.
///
/// Time only moves through [`advance`](`VirtualTimers::advance`).
#[derive(Default)]
pub struct VirtualTimers {
	now_ms: Cell<u64>,
	next_order: Cell<u64>,
	queue: RefCell<BTreeMap<VirtualTimeout, Box<dyn FnOnce()>>>,
}

impl VirtualTimers {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn now_ms(&self) -> u64 {
		self.now_ms.get()
	}

	/// The number of timeouts that have neither fired nor been cleared.
	#[must_use]
	pub fn pending(&self) -> usize {
		self.queue.borrow().len()
	}

	/// Moves the clock forward by `delta_ms`, running every timeout that comes due on the way, in order.
	///
	/// The clock reads each timeout's due time while its action runs.
	/// Timeouts scheduled by those actions also run if they come due within the same span.
	///
	/// Returns how many timeouts ran.
	#[instrument(skip(self))]
	pub fn advance(&self, delta_ms: u64) -> usize {
		let target = self.now_ms.get().saturating_add(delta_ms);
		let mut ran = 0;
		while let Some((timeout, action)) = self.pop_due(target) {
			self.now_ms.set(timeout.due_ms.max(self.now_ms.get()));
			trace!(?timeout, "Running virtual timeout.");
			action();
			ran += 1;
		}
		self.now_ms.set(target);
		ran
	}

	fn pop_due(&self, limit_ms: u64) -> Option<(VirtualTimeout, Box<dyn FnOnce()>)> {
		let mut queue = self.queue.borrow_mut();
		let next = *queue.keys().next().filter(|timeout| timeout.due_ms <= limit_ms)?;
		queue.remove_entry(&next)
	}
}

impl Debug for VirtualTimers {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("VirtualTimers")
			.field("now_ms", &self.now_ms.get())
			.field("pending", &self.pending())
			.finish()
	}
}

impl Timers for VirtualTimers {
	type Handle = VirtualTimeout;

	fn set_timeout(&self, delay_ms: u32, action: Box<dyn FnOnce()>) -> Result<Self::Handle, Error> {
		let order = self.next_order.get();
		self.next_order.set(order + 1);
		let timeout = VirtualTimeout {
			due_ms: self.now_ms.get().saturating_add(delay_ms.into()),
			order,
		};
		self.queue.borrow_mut().insert(timeout, action);
		Ok(timeout)
	}

	fn clear_timeout(&self, handle: Self::Handle) {
		if self.queue.borrow_mut().remove(&handle).is_some() {
			trace!(timeout = ?handle, "Cleared virtual timeout.");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{GlobalTimers, Timers, VirtualTimers};
	use std::{cell::RefCell, rc::Rc};

	#[test]
	#[cfg(not(target_arch = "wasm32"))]
	fn no_global_timers_outside_wasm() {
		assert!(GlobalTimers::detect().is_none());
	}

	#[test]
	fn fires_in_due_order() {
		let timers = VirtualTimers::new();
		let log = Rc::new(RefCell::new(Vec::new()));
		for &(delay, name) in &[(30, "c"), (10, "a"), (20, "b"), (10, "a2")] {
			let log = Rc::clone(&log);
			timers.set_timeout(delay, Box::new(move || log.borrow_mut().push(name))).unwrap();
		}

		assert_eq!(timers.advance(9), 0);
		assert_eq!(timers.advance(11), 3);
		assert_eq!(*log.borrow(), ["a", "a2", "b"]);
		assert_eq!(timers.pending(), 1);
		assert_eq!(timers.now_ms(), 20);
	}

	#[test]
	fn cleared_timeouts_never_fire() {
		let timers = VirtualTimers::new();
		let fired = Rc::new(RefCell::new(false));
		let handle = {
			let fired = Rc::clone(&fired);
			timers.set_timeout(5, Box::new(move || *fired.borrow_mut() = true)).unwrap()
		};
		timers.clear_timeout(handle);
		assert_eq!(timers.advance(100), 0);
		assert!(!*fired.borrow());
	}

	#[test]
	fn nested_timeouts_run_within_the_span() {
		let timers = Rc::new(VirtualTimers::new());
		let seen = Rc::new(RefCell::new(Vec::new()));
		{
			let inner_timers = Rc::clone(&timers);
			let seen = Rc::clone(&seen);
			timers
				.set_timeout(
					10,
					Box::new(move || {
						seen.borrow_mut().push(inner_timers.now_ms());
						let seen = Rc::clone(&seen);
						let clock = Rc::clone(&inner_timers);
						inner_timers
							.set_timeout(5, Box::new(move || seen.borrow_mut().push(clock.now_ms())))
							.unwrap();
					}),
				)
				.unwrap();
		}

		assert_eq!(timers.advance(20), 2);
		assert_eq!(*seen.borrow(), [10, 15]);
	}
}
