use crate::{Environment, Error, GlobalTimers, Timers};
use core::{
	cell::RefCell,
	fmt::{self, Debug, Formatter},
};
use tracing::{instrument, trace};

/// Coalesces rapid [`schedule`](`Debouncer::schedule`) calls into the last one, run after a quiet period.
///
/// There is at most one pending action per instance.
/// Scheduling again (or [cancelling](`Debouncer::cancel`), or dropping the [`Debouncer`]) discards it without running it.
pub struct Debouncer<T: Timers> {
	timers: T,
	delay_ms: u32,
	pending: RefCell<Option<T::Handle>>,
}

impl<T: Timers> Debouncer<T> {
	#[must_use]
	pub fn new(timers: T, delay_ms: u32) -> Self {
		Self {
			timers,
			delay_ms,
			pending: RefCell::new(None),
		}
	}

	#[must_use]
	pub fn delay_ms(&self) -> u32 {
		self.delay_ms
	}

	#[must_use]
	pub fn timers(&self) -> &T {
		&self.timers
	}

	/// Replaces any pending action with `action`, which runs once [`delay_ms`](`Debouncer::delay_ms`) pass without another call.
	///
	/// # Errors
	///
	/// Iff the timer can't be started. The previously pending action is discarded regardless.
	#[instrument(skip(self, action), fields(delay_ms = self.delay_ms))]
	pub fn schedule(&self, action: impl FnOnce() + 'static) -> Result<(), Error> {
		self.cancel();
		let handle = self.timers.set_timeout(self.delay_ms, Box::new(action))?;
		*self.pending.borrow_mut() = Some(handle);
		Ok(())
	}

	/// Discards the pending action, if any.
	pub fn cancel(&self) {
		let superseded = self.pending.borrow_mut().take();
		if let Some(handle) = superseded {
			trace!("Superseding debounced action.");
			self.timers.clear_timeout(handle);
		}
	}
}

impl<T: Timers> Drop for Debouncer<T> {
	fn drop(&mut self) {
		self.cancel();
	}
}

impl<T: Timers + Debug> Debug for Debouncer<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Debouncer")
			.field("timers", &self.timers)
			.field("delay_ms", &self.delay_ms)
			.finish_non_exhaustive()
	}
}

impl Environment {
	/// A [`Debouncer`] on the host's global `setTimeout`.
	///
	/// This doesn't need a window or document, so it also works in workers and other JavaScript hosts.
	///
	/// # Errors
	///
	/// [`Error::NoTimers`] outside of `wasm32`, where there is no JavaScript host.
	/// Use [`Debouncer::new`] with [`VirtualTimers`](`crate::VirtualTimers`) there instead.
	pub fn debounce(&self, delay_ms: u32) -> Result<Debouncer<GlobalTimers>, Error> {
		let timers = GlobalTimers::detect().ok_or(Error::NoTimers)?;
		Ok(Debouncer::new(timers, delay_ms))
	}
}
