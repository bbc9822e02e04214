//! A headless flow layout engine for scrollable collections.
//!
//! Items are packed greedily into successive lines (rows for vertical
//! scrolling, columns for horizontal scrolling), word-wrap style, with a
//! next-fit policy: a line accumulates items until it runs out of
//! main-axis capacity, then is sealed and a new line opens after it.
//!
//! The crate focuses on the core placement math: total content size, the
//! rectangle of any single item, and rectangle queries with two-level
//! culling for partial redraws.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the item count and each item's intrinsic size on demand
//! - the viewport's usable main-axis length (extent minus insets)
//! - the scroll direction and spacing configuration
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod layout;
mod line;
mod options;
mod types;


pub use error::LayoutError;
pub use layout::FlowLayout;
pub use line::Line;
pub use options::{FlowLayoutOptions, ItemSizeProvider};
pub use types::{AxisRect, AxisSize, Placement, Rect, ScrollAxis, Size};
