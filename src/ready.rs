use crate::{Environment, Error};
use tracing::{instrument, trace};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::AddEventListenerOptions;

impl Environment {
	/// Runs `callback` once `DOMContentLoaded` fires, or right away without a window.
	///
	/// With a window, this returns immediately and the listener is removed after its first call.
	/// There is no timeout: if the event never fires (for example because it already has), neither does `callback`.
	///
	/// # Errors
	///
	/// Iff the listener can't be registered.
	#[instrument(skip(self, callback))]
	pub fn ready(&self, callback: impl FnOnce() + 'static) -> Result<(), Error> {
		let window = match self.window() {
			Some(window) => window,
			None => {
				trace!("No window. Running callback synchronously.");
				callback();
				return Ok(());
			}
		};

		let options = AddEventListenerOptions::new();
		options.set_once(true);
		let listener = Closure::once_into_js(callback);
		window.add_event_listener_with_callback_and_add_event_listener_options("DOMContentLoaded", listener.unchecked_ref(), &options)?;
		trace!("Registered DOMContentLoaded listener.");
		Ok(())
	}
}
