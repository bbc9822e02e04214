use alloc::vec::Vec;

use crate::line::Line;
use crate::{AxisSize, FlowLayoutOptions, LayoutError, Placement, Rect, ScrollAxis, Size};

/// A headless flow layout engine.
///
/// Owns the sequence of [`Line`]s and the item → line index, and derives
/// total content size from them. The engine is intentionally UI-agnostic:
/// it holds no UI objects, and a host adapter drives it by providing item
/// sizes and viewport geometry through [`FlowLayoutOptions`].
///
/// Lifecycle: the engine starts empty; [`FlowLayout::reload`] rebuilds
/// the full line cache from scratch, after which every query is served
/// read-only from that cache until the next reload. There is no
/// incremental re-layout and no reaction to viewport changes without an
/// explicit reload.
#[derive(Clone, Debug)]
pub struct FlowLayout {
    options: FlowLayoutOptions,
    /// Axis the current cache was packed for. Options may change between
    /// reloads; queries must keep using the cache's own axis.
    axis: ScrollAxis,
    lines: Vec<Line>,
    item_lines: Vec<usize>,
    prepared: bool,
}

impl FlowLayout {
    pub fn new(options: FlowLayoutOptions) -> Self {
        ldebug!(
            count = options.count,
            available_main = options.available_main,
            "FlowLayout::new"
        );
        Self {
            axis: options.axis,
            options,
            lines: Vec::new(),
            item_lines: Vec::new(),
            prepared: false,
        }
    }

    pub fn options(&self) -> &FlowLayoutOptions {
        &self.options
    }

    /// Replaces the configuration.
    ///
    /// The new options take effect at the next [`FlowLayout::reload`];
    /// until then, queries keep answering from the current line cache.
    pub fn set_options(&mut self, options: FlowLayoutOptions) {
        ltrace!(
            count = options.count,
            available_main = options.available_main,
            "FlowLayout::set_options"
        );
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to
    /// [`FlowLayout::set_options`].
    pub fn update_options(&mut self, f: impl FnOnce(&mut FlowLayoutOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Host-facing entry point: (re)builds the layout.
    pub fn prepare(&mut self) {
        self.reload();
    }

    /// Rebuilds the line cache from scratch.
    ///
    /// Discards every line, re-queries the size provider for each item in
    /// index order, and re-packs with a next-fit policy: an item joins the
    /// current tail line if it fits, otherwise the tail line is sealed and
    /// a new line opens after it. Earlier lines are never revisited, and
    /// item order is preserved.
    ///
    /// An item too long for even an empty line is a host misconfiguration;
    /// it is force-placed alone in its own line (the line's remaining
    /// capacity goes negative) rather than dropped, so every index stays
    /// covered.
    pub fn reload(&mut self) {
        let count = self.options.count;
        let available = self.options.available_main;
        let item_spacing = self.options.item_spacing;
        let line_spacing = self.options.line_spacing;
        self.axis = self.options.axis;

        self.lines.clear();
        self.item_lines.clear();
        self.item_lines.reserve_exact(count);
        self.lines.push(Line::new(0.0, available, item_spacing));

        for index in 0..count {
            let size = self.axis.to_axis((self.options.item_size)(index));
            let appended = match self.lines.last_mut() {
                Some(tail) => tail.try_append(index, size),
                None => false,
            };
            if !appended {
                let cross_origin = match self.lines.last() {
                    Some(sealed) => sealed.cross_end() + line_spacing,
                    None => 0.0,
                };
                let mut fresh = Line::new(cross_origin, available, item_spacing);
                if !fresh.try_append(index, size) {
                    lwarn!(
                        index,
                        main = size.main,
                        capacity = available,
                        "item longer than an empty line; force-placing it alone"
                    );
                    fresh.append(index, size);
                }
                self.lines.push(fresh);
            }
            self.item_lines.push(self.lines.len() - 1);
        }

        self.prepared = true;
        ldebug!(count, lines = self.lines.len(), "FlowLayout::reload");
    }

    /// Whether a reload has completed and queries are servable.
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Number of items covered by the current cache.
    pub fn item_count(&self) -> usize {
        self.item_lines.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// The line number owning `index`, per the current cache.
    pub fn line_for_item(&self, index: usize) -> Option<usize> {
        self.item_lines.get(index).copied()
    }

    /// The total content extent the viewport must scroll over.
    ///
    /// The main-axis extent is the viewport length the cache was packed
    /// for and never depends on content; the cross-axis extent is the sum
    /// of line thicknesses plus the gaps between lines. Zero before the
    /// first reload.
    pub fn content_size(&self) -> Size {
        if !self.prepared {
            return Size::ZERO;
        }
        match self.lines.last() {
            Some(last) => self.axis.from_axis(AxisSize {
                main: last.main_extent(),
                cross: last.cross_end(),
            }),
            None => Size::ZERO,
        }
    }

    /// Computes the placement rectangle of a single item.
    ///
    /// O(1) line lookup plus an O(position-in-line) offset scan. Fails
    /// with [`LayoutError::NotPrepared`] before the first reload and
    /// [`LayoutError::OutOfRangeItem`] for an index the last reload did
    /// not cover; out-of-range indexes are never clamped.
    pub fn placement_for(&self, index: usize) -> Result<Rect, LayoutError> {
        if !self.prepared {
            return Err(LayoutError::NotPrepared);
        }
        let count = self.item_lines.len();
        let Some(&line_index) = self.item_lines.get(index) else {
            return Err(LayoutError::OutOfRangeItem { index, count });
        };
        self.lines
            .get(line_index)
            .and_then(|line| line.placement_for(index))
            .map(|placed| self.axis.rect_from_axis(placed))
            .ok_or(LayoutError::OutOfRangeItem { index, count })
    }

    /// Calls `f` with the placement of every item whose rectangle
    /// intersects `rect`.
    ///
    /// Two-level culling: lines whose band misses `rect` are skipped
    /// without touching their items; each surviving line runs its
    /// single-pass batch placement and every item rectangle is tested
    /// individually. Emits nothing before the first reload.
    pub fn for_each_placement_in_rect(&self, rect: Rect, mut f: impl FnMut(Placement)) {
        if !self.prepared {
            return;
        }
        let query = self.axis.rect_to_axis(rect);
        for line in &self.lines {
            if !line.frame().intersects(&query) {
                continue;
            }
            line.for_each_placement(|index, placed| {
                if placed.intersects(&query) {
                    f(Placement {
                        index,
                        rect: self.axis.rect_from_axis(placed),
                    });
                }
            });
        }
    }

    /// Collects the placements intersecting `rect` into `out` (clears
    /// `out` first).
    ///
    /// Convenience wrapper around
    /// [`FlowLayout::for_each_placement_in_rect`]; adapters that care
    /// about allocations should reuse a scratch buffer.
    pub fn collect_placements_in_rect(&self, rect: Rect, out: &mut Vec<Placement>) {
        out.clear();
        self.for_each_placement_in_rect(rect, |placement| out.push(placement));
    }

    /// Whether a viewport bounds change requires a re-layout.
    ///
    /// Always `false`: scroll-driven bounds deltas never repack. When
    /// geometry that feeds the packing actually changes (the available
    /// main-axis length), the host updates the options and calls
    /// [`FlowLayout::reload`] explicitly.
    pub fn should_relayout_on_bounds_change(&self, _new_bounds: Rect) -> bool {
        false
    }
}
