use alloc::sync::Arc;

use crate::{ScrollAxis, Size};

/// The external item size provider.
///
/// Called exactly once per item per [`crate::FlowLayout::reload`], in
/// increasing index order. Item content may change between reloads, so
/// sizes are never cached across them.
pub type ItemSizeProvider = Arc<dyn Fn(usize) -> Size + Send + Sync>;

/// Configuration for [`crate::FlowLayout`].
///
/// This type is cheap to clone: the size provider is stored in an `Arc`,
/// so adapters can tweak a few fields and call
/// [`crate::FlowLayout::set_options`] without reallocating closures.
///
/// Changes take effect at the next explicit reload; the engine never
/// re-packs on its own.
pub struct FlowLayoutOptions {
    /// Number of items in the collection.
    pub count: usize,

    /// Returns the intrinsic size of the item at an ordinal index.
    pub item_size: ItemSizeProvider,

    /// The scroll direction. Lines stack along this axis.
    pub axis: ScrollAxis,

    /// Usable viewport length along the packing axis (viewport extent
    /// minus insets). Every line's capacity.
    pub available_main: f64,

    /// Gap between consecutive lines along the scroll axis.
    pub line_spacing: f64,

    /// Gap between consecutive items within a line.
    pub item_spacing: f64,
}

impl FlowLayoutOptions {
    /// Creates options for a vertically scrolling collection with no
    /// spacing.
    ///
    /// `item_size(i)` should return the intrinsic size of item `i`; it is
    /// consulted once per item on every reload.
    pub fn new(
        count: usize,
        available_main: f64,
        item_size: impl Fn(usize) -> Size + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            item_size: Arc::new(item_size),
            axis: ScrollAxis::Vertical,
            available_main,
            line_spacing: 0.0,
            item_spacing: 0.0,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_axis(mut self, axis: ScrollAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_available_main(mut self, available_main: f64) -> Self {
        self.available_main = available_main;
        self
    }

    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn with_item_spacing(mut self, item_spacing: f64) -> Self {
        self.item_spacing = item_spacing;
        self
    }
}

impl Clone for FlowLayoutOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            item_size: Arc::clone(&self.item_size),
            axis: self.axis,
            available_main: self.available_main,
            line_spacing: self.line_spacing,
            item_spacing: self.item_spacing,
        }
    }
}

impl core::fmt::Debug for FlowLayoutOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlowLayoutOptions")
            .field("count", &self.count)
            .field("axis", &self.axis)
            .field("available_main", &self.available_main)
            .field("line_spacing", &self.line_spacing)
            .field("item_spacing", &self.item_spacing)
            .finish_non_exhaustive()
    }
}
