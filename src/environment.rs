use tracing::{instrument, trace};
use web_sys::{Document, Window};

thread_local! {
	static CURRENT: Environment = Environment::detect();
}

/// The capability flags every environment-dependent operation consults.
///
/// An [`Environment`] is a pair of optional handles: the document-like environment (a [`Document`])
/// and the window-like environment (a [`Window`]).
/// Each operation that needs either of them falls back to a neutral result when it's absent,
/// so the same calling code runs unchanged in a page and in a headless host.
///
/// Use [`Environment::current`] (or [`with_environment`]) for the instance detected once per thread,
/// or construct one explicitly to pin the behaviour in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
	document: Option<Document>,
	window: Option<Window>,
}

impl Environment {
	#[must_use]
	pub fn new(document: Option<Document>, window: Option<Window>) -> Self {
		Self { document, window }
	}

	/// An environment without document or window.
	#[must_use]
	pub fn headless() -> Self {
		Self::default()
	}

	/// Probes the host once.
	///
	/// Outside of `wasm32` there is no host page to ask, so this is always [headless](`Environment::headless`).
	#[must_use]
	#[instrument]
	pub fn detect() -> Self {
		#[cfg(target_arch = "wasm32")]
		let environment = {
			let window = web_sys::window();
			let document = window.as_ref().and_then(Window::document);
			Self { document, window }
		};

		#[cfg(not(target_arch = "wasm32"))]
		let environment = Self::headless();

		trace!(has_document = environment.has_document(), has_window = environment.has_window(), "Detected environment.");
		environment
	}

	/// A handle to the environment detected for the current thread.
	#[must_use]
	pub fn current() -> Self {
		CURRENT.with(Clone::clone)
	}

	#[must_use]
	pub fn has_document(&self) -> bool {
		self.document.is_some()
	}

	#[must_use]
	pub fn has_window(&self) -> bool {
		self.window.is_some()
	}

	#[must_use]
	pub fn document(&self) -> Option<&Document> {
		self.document.as_ref()
	}

	#[must_use]
	pub fn window(&self) -> Option<&Window> {
		self.window.as_ref()
	}
}

/// Runs `f` with the environment detected for the current thread, without cloning it.
pub fn with_environment<R>(f: impl FnOnce(&Environment) -> R) -> R {
	CURRENT.with(f)
}
