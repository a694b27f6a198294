//! Headless sticky section headers for virtualized lists.
//!
//! For host-side utilities (a simulated scroll container, header renderers, a frame controller),
//! see the `wordphabet-adapter` crate.
//!
//! This crate answers one question per frame: given the items a list currently shows and where
//! they are, which section labels should be drawn on top of the list and at what vertical offset?
//! Headers stay pinned at the top of the viewport, get pushed upward by the next section's
//! incoming header, and fall back to the enclosing section when its first item has scrolled off.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the full ordered dataset once (to build a [`SectionIndex`])
//! - a [`GeometrySnapshot`] of the realized items each frame
//! - the viewport height and the [`HeaderMetrics`] of its header style
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod key;
mod metrics;
mod positioner;
mod section_index;
mod snapshot;
mod types;


pub use key::first_letter_uppercase;
pub use metrics::{HeaderMetrics, ReferencePoint};
pub use positioner::StickyHeaderPositioner;
pub use section_index::SectionIndex;
pub use snapshot::GeometrySnapshot;
pub use types::{DrawPlan, PlanKind, Viewport, VisibleItemGeometry};
