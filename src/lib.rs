#![doc(html_root_url = "https://docs.rs/xeact-dom/0.1.0")]
#![warn(clippy::pedantic)]
//! A tiny imperative DOM toolkit for server-rendered pages with a few interactive bits.
//!
//! Everything that touches the page goes through an [`Environment`],
//! which falls back to neutral results (`None`, empty collections, synchronous callbacks) where there is no document or window.

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

mod debounce;
mod element;
mod environment;
mod error;
mod json;
pub mod link;
mod node;
mod ready;
pub mod select;
mod state;
pub mod timers;

pub use debounce::Debouncer;
pub use element::{Descriptor, Properties, PropertyValue};
pub use environment::{with_environment, Environment};
pub use error::Error;
pub use node::{clear, Child, Children};
pub use select::LiveCollection;
pub use state::{use_state, use_state_default, StateReader, StateWriter};
pub use timers::{GlobalTimers, Timers, VirtualTimers};
