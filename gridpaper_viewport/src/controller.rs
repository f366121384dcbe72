// Copyright 2025 the Grid Paper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use log::{debug, trace};

use crate::axis::{Axis, Span};
use crate::config::{GridLevel, ViewportConfig};
use crate::error::{HostProblem, ViewportError, check_bound, check_canvas};
use crate::range_bar::{ListenerId, RangeBar, RangeChange, SpanLimits};

/// Viewport over a bounded world plane, kept in sync with two range bars.
///
/// The controller owns:
/// - the immutable world **bound**,
/// - the **display rect**, the part of the bound currently shown, which never
///   leaves the bound,
/// - one [`RangeBar`] per [`Axis`], whose `[lower, upper]` window is the
///   display rect's extent expressed as a fraction of the bound.
///
/// User drags enter through [`set_bar_range`](Self::set_bar_range) and
/// friends: the bar is updated (notifying its listeners) and the display rect
/// follows. Every write the controller makes to a bar afterwards is silent,
/// so listeners only ever see user-driven changes.
#[derive(Debug)]
pub struct ViewportController {
    container_id: String,
    bound: Rect,
    display_rect: Rect,
    canvas: Size,
    aspect_lock: bool,
    min_span: f64,
    horizontal: RangeBar,
    vertical: RangeBar,
    grid_series: Vec<GridLevel>,
}

impl ViewportController {
    /// Creates a controller for a canvas of `canvas` pixels.
    ///
    /// With the aspect lock off the display rect starts out as the whole
    /// bound. With the lock on it starts as the largest canvas-shaped
    /// rectangle centered in the bound.
    pub fn new(config: ViewportConfig, canvas: Size) -> Result<Self, ViewportError> {
        let bound = check_bound(config.bound)?;
        let canvas = check_canvas(canvas)?;
        if config.container_id.is_empty() {
            return Err(HostProblem::MissingContainer.into());
        }
        if !(config.min_span > 0.0 && config.min_span <= 1.0) {
            return Err(ViewportError::InvalidSpanLimit {
                min_span: config.min_span,
            });
        }

        let mut vp = Self {
            container_id: config.container_id,
            bound,
            display_rect: bound,
            canvas,
            aspect_lock: config.aspect_lock,
            min_span: config.min_span,
            horizontal: RangeBar::default(),
            vertical: RangeBar::default(),
            grid_series: config.grid_series,
        };
        vp.refresh_limits();
        vp.display_rect = vp.home_rect();
        vp.push_bars();
        debug!(
            "viewport `{}` created: bound {:?}, canvas {:?}, aspect lock {}",
            vp.container_id, vp.bound, vp.canvas, vp.aspect_lock
        );
        Ok(vp)
    }

    /// Identifier of the host container.
    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// The world bound.
    #[must_use]
    pub fn bound(&self) -> Rect {
        self.bound
    }

    /// The world rectangle currently displayed.
    #[must_use]
    pub fn display_rect(&self) -> Rect {
        self.display_rect
    }

    /// Canvas size in pixels.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Canvas aspect ratio, width over height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.canvas.width / self.canvas.height
    }

    /// Returns whether the aspect lock is on.
    #[must_use]
    pub fn aspect_lock(&self) -> bool {
        self.aspect_lock
    }

    /// Configured grid levels, finest first.
    #[must_use]
    pub fn grid_series(&self) -> &[GridLevel] {
        &self.grid_series
    }

    /// The range bar for `axis`.
    #[must_use]
    pub fn bar(&self, axis: Axis) -> &RangeBar {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    /// The horizontal range bar.
    #[must_use]
    pub fn horizontal_bar(&self) -> &RangeBar {
        &self.horizontal
    }

    /// The vertical range bar.
    #[must_use]
    pub fn vertical_bar(&self) -> &RangeBar {
        &self.vertical
    }

    /// Registers a listener for user-driven changes of one bar.
    pub fn on_bar_change(
        &mut self,
        axis: Axis,
        listener: impl FnMut(&RangeChange) + 'static,
    ) -> ListenerId {
        self.bar_mut(axis).on_change(listener)
    }

    /// Removes a listener registered with [`on_bar_change`](Self::on_bar_change).
    pub fn remove_bar_listener(&mut self, axis: Axis, id: ListenerId) -> bool {
        self.bar_mut(axis).remove_listener(id)
    }

    /// Normalized `(lower, upper)` positions describing the display rect on `axis`.
    ///
    /// Horizontally this is the fraction of the bound width from the left
    /// edge. Vertically the bar is inverted: `lower` measures from the top
    /// (`bound.max_y`) down to the display rect's `max_y`.
    #[must_use]
    pub fn bar_positions(&self, axis: Axis) -> (f64, f64) {
        Span::of(self.display_rect, axis).to_bar(Span::of(self.bound, axis), axis)
    }

    /// User drag of the lower handle of one bar.
    ///
    /// Returns `true` if the bar moved, in which case the display rect has
    /// been updated from it.
    pub fn set_bar_lower(&mut self, axis: Axis, value: f64) -> bool {
        let moved = self.bar_mut(axis).set_lower(value);
        if moved {
            self.sync_view_from_bar(axis);
        }
        moved
    }

    /// User drag of the upper handle of one bar.
    pub fn set_bar_upper(&mut self, axis: Axis, value: f64) -> bool {
        let moved = self.bar_mut(axis).set_upper(value);
        if moved {
            self.sync_view_from_bar(axis);
        }
        moved
    }

    /// User drag of a whole bar window.
    pub fn set_bar_range(&mut self, axis: Axis, lower: f64, upper: f64) -> bool {
        let moved = self.bar_mut(axis).set_range(lower, upper);
        if moved {
            self.sync_view_from_bar(axis);
        }
        moved
    }

    /// Recomputes the display rect's X extent from the horizontal bar.
    pub fn sync_view_from_horizontal_bar(&mut self) {
        self.sync_view_from_bar(Axis::Horizontal);
    }

    /// Recomputes the display rect's Y extent from the vertical bar.
    pub fn sync_view_from_vertical_bar(&mut self) {
        self.sync_view_from_bar(Axis::Vertical);
    }

    /// Recomputes the display rect's extent on `axis` from that axis's bar.
    ///
    /// With the aspect lock on, the companion axis is resized to keep the
    /// canvas aspect ratio, centered on its current midpoint and pinned to
    /// the bound edge it would cross. The companion bar is then updated
    /// silently.
    pub fn sync_view_from_bar(&mut self, axis: Axis) {
        let bar = self.bar(axis);
        let span = Span::from_bar(bar.lower(), bar.upper(), Span::of(self.bound, axis), axis);
        span.write_to(&mut self.display_rect, axis);
        if self.aspect_lock {
            self.fit_companion(axis);
        }
        trace!("{axis:?} bar moved, display rect now {:?}", self.display_rect);
        self.push_bar(axis.companion());
    }

    /// Replaces the display rect.
    ///
    /// Edges are reordered, each axis's extent is clamped into its bar's span
    /// limits around the requested center and then moved inside the bound.
    /// With the aspect lock on, the horizontal extent is kept and the
    /// vertical one re-derived. Both bars are updated silently. Non-finite
    /// rectangles are ignored.
    pub fn set_display_rect(&mut self, rect: Rect) {
        if ![rect.x0, rect.x1, rect.y0, rect.y1]
            .iter()
            .all(|v| v.is_finite())
        {
            debug!("ignoring non-finite display rect {rect:?}");
            return;
        }
        let rect = rect.abs();
        let mut next = rect;
        for axis in Axis::ALL {
            let bound = Span::of(self.bound, axis);
            let span = Span::of(rect, axis);
            let fraction = self.bar(axis).limits().clamp(span.length() / bound.length());
            Span::centered_within(span.mid(), fraction * bound.length(), bound)
                .write_to(&mut next, axis);
        }
        self.display_rect = next;
        if self.aspect_lock {
            self.fit_companion(Axis::Horizontal);
        }
        self.push_bars();
    }

    /// Turns the aspect lock on or off.
    ///
    /// The bar span limits are re-derived. Turning the lock on re-derives the
    /// vertical extent from the horizontal one.
    pub fn set_aspect_lock(&mut self, aspect_lock: bool) {
        if self.aspect_lock == aspect_lock {
            return;
        }
        debug!("aspect lock {}", if aspect_lock { "on" } else { "off" });
        self.aspect_lock = aspect_lock;
        self.refresh_limits();
        self.set_display_rect(self.display_rect);
    }

    /// Updates the canvas pixel size.
    ///
    /// Span limits are re-derived and the display rect re-validated against
    /// them.
    pub fn set_canvas_size(&mut self, canvas: Size) -> Result<(), ViewportError> {
        let canvas = check_canvas(canvas)?;
        if canvas == self.canvas {
            return Ok(());
        }
        debug!("canvas resized to {canvas:?}");
        self.canvas = canvas;
        self.refresh_limits();
        self.set_display_rect(self.display_rect);
        Ok(())
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            bound: self.bound,
            display_rect: self.display_rect,
            canvas: self.canvas,
            aspect_lock: self.aspect_lock,
            horizontal: (self.horizontal.lower(), self.horizontal.upper()),
            vertical: (self.vertical.lower(), self.vertical.upper()),
            horizontal_limits: self.horizontal.limits(),
            vertical_limits: self.vertical.limits(),
            zoom_factor: self.zoom_factor(),
        }
    }

    /// The display rect the viewport starts from.
    pub(crate) fn home_rect(&self) -> Rect {
        if !self.aspect_lock {
            return self.bound;
        }
        let aspect = self.aspect_ratio();
        let (width, height) = if self.bound.width() / self.bound.height() > aspect {
            (self.bound.height() * aspect, self.bound.height())
        } else {
            (self.bound.width(), self.bound.width() / aspect)
        };
        Rect::from_center_size(self.bound.center(), Size::new(width, height))
    }

    /// World length on the companion of `axis` matching `length` on `axis`
    /// at the canvas aspect ratio.
    pub(crate) fn companion_length(&self, axis: Axis, length: f64) -> f64 {
        match axis {
            Axis::Horizontal => length / self.aspect_ratio(),
            Axis::Vertical => length * self.aspect_ratio(),
        }
    }

    pub(crate) fn bar_mut(&mut self, axis: Axis) -> &mut RangeBar {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// Stores an already validated display rect and silently updates both bars.
    pub(crate) fn replace_display_rect(&mut self, rect: Rect) {
        self.display_rect = rect;
        self.push_bars();
    }

    /// Silently writes the display rect's position on `axis` into its bar.
    pub(crate) fn push_bar(&mut self, axis: Axis) {
        let (lower, upper) = self.bar_positions(axis);
        self.bar_mut(axis).set_range_silently(lower, upper);
    }

    pub(crate) fn push_bars(&mut self) {
        for axis in Axis::ALL {
            self.push_bar(axis);
        }
    }

    /// Resizes the companion of `axis` to the canvas aspect ratio.
    fn fit_companion(&mut self, axis: Axis) {
        let companion = axis.companion();
        let length = self.companion_length(axis, Span::of(self.display_rect, axis).length());
        let mid = Span::of(self.display_rect, companion).mid();
        Span::centered_within(mid, length, Span::of(self.bound, companion))
            .write_to(&mut self.display_rect, companion);
    }

    /// Span limits per axis, horizontal first.
    ///
    /// With the aspect lock on, the denser axis (more pixels per world unit)
    /// gets a proportionally larger minimum and the sparser axis a smaller
    /// maximum, so both bars reach their limits at the same zoom level.
    ///
    /// If the canvas is so much denser along one axis that `min_span` on the
    /// sparse axis would need more than the whole bound on the dense one, the
    /// dense axis is fixed at the full bound and the sparse axis at the
    /// matching span.
    fn derived_limits(&self) -> (SpanLimits, SpanLimits) {
        let base = self.min_span;
        if !self.aspect_lock {
            let limits = SpanLimits::new(base, 1.0);
            return (limits, limits);
        }
        let rx = self.canvas.width / self.bound.width();
        let ry = self.canvas.height / self.bound.height();
        if rx > ry {
            let v_max = ry / rx;
            (
                SpanLimits::new((base * rx / ry).min(1.0), 1.0),
                SpanLimits::new(base.min(v_max), v_max),
            )
        } else {
            let h_max = rx / ry;
            (
                SpanLimits::new(base.min(h_max), h_max),
                SpanLimits::new((base * ry / rx).min(1.0), 1.0),
            )
        }
    }

    fn refresh_limits(&mut self) {
        let (horizontal, vertical) = self.derived_limits();
        self.horizontal.set_limits(horizontal);
        self.vertical.set_limits(vertical);
    }
}

/// Debug snapshot of a [`ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// World bound.
    pub bound: Rect,
    /// Displayed world rectangle.
    pub display_rect: Rect,
    /// Canvas size in pixels.
    pub canvas: Size,
    /// Whether the aspect lock is on.
    pub aspect_lock: bool,
    /// Horizontal bar `(lower, upper)`.
    pub horizontal: (f64, f64),
    /// Vertical bar `(lower, upper)`.
    pub vertical: (f64, f64),
    /// Horizontal bar span limits.
    pub horizontal_limits: SpanLimits,
    /// Vertical bar span limits.
    pub vertical_limits: SpanLimits,
    /// See [`ViewportController::zoom_factor`].
    pub zoom_factor: f64,
}
