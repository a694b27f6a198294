//! Adapter utilities for the `wordphabet` crate.
//!
//! The `wordphabet` crate only decides where headers go. This crate provides small,
//! framework-neutral helpers a host needs around it:
//!
//! - [`ListLayout`]: a simulated vertical scroll container that produces geometry snapshots
//!   (prefix sums over item sizes, overscan, reserved header space, per-item translation)
//! - [`HeaderRenderer`] styles over a [`Canvas`]: baseline text and filled bands
//! - [`Controller`]: dataset → index → layout → plans → renderer, once per frame
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod fenwick;
mod layout;
mod renderer;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use layout::ListLayout;
pub use renderer::{
    BaselineTextRenderer, Canvas, DrawCommand, FilledRectRenderer, HeaderRenderer,
    RecordingCanvas,
};
