// Copyright 2025 the Grid Paper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom and scroll operations on [`ViewportController`].

use kurbo::Rect;
use log::debug;

use crate::ViewportController;
use crate::axis::{Axis, Span};

/// Zoom factors this close to `1` change nothing.
const ZOOM_EPSILON: f64 = 1e-9;

impl ViewportController {
    /// Fraction of the bound width currently displayed, in `(0, 1]`.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.display_rect().width() / self.bound().width()
    }

    /// Zooms around a world-space point.
    ///
    /// `scale > 1` zooms in: the displayed extent is divided by `scale` while
    /// `(world_x, world_y)` keeps its place. `scale < 1` zooms out.
    ///
    /// The factor is limited so that neither bar span drops below its
    /// minimum or grows past its maximum. At the maximum zoom (or when
    /// already showing the full extent) the call is a no-op. The zoomed rect
    /// is then moved back inside the bound, Y before X; if it is larger than
    /// the bound on an axis it is pinned to the bound there and, with the
    /// aspect lock on, the other axis is re-derived from it.
    ///
    /// Returns `true` if the display rect changed. Bars are updated silently.
    pub fn zoom_at(&mut self, world_x: f64, world_y: f64, scale: f64) -> bool {
        if !(scale.is_finite() && scale > 0.0 && world_x.is_finite() && world_y.is_finite()) {
            debug!("ignoring zoom by {scale} at ({world_x}, {world_y})");
            return false;
        }
        if scale == 1.0 {
            return false;
        }
        let zooming_in = scale > 1.0;
        let factor = self.limit_zoom(scale);
        let no_change = if zooming_in {
            factor <= 1.0 + ZOOM_EPSILON
        } else {
            factor >= 1.0 - ZOOM_EPSILON
        };
        if no_change {
            debug!(
                "zoom by {scale} rejected: already at the {} zoom",
                if zooming_in { "maximum" } else { "minimum" }
            );
            return false;
        }
        if factor != scale {
            debug!("zoom by {scale} limited to {factor}");
        }

        let rect = self.display_rect();
        let mut candidate = rect;
        for (axis, anchor) in [(Axis::Horizontal, world_x), (Axis::Vertical, world_y)] {
            Span::of(rect, axis)
                .scaled_about(anchor, factor, Span::of(self.bound(), axis))
                .write_to(&mut candidate, axis);
        }
        let clamped = self.clamp_to_bound(candidate);
        self.replace_display_rect(clamped);
        true
    }

    /// Scrolls the display rect along X by `offset` world units.
    ///
    /// The offset is reduced so that the rect stops exactly at the bound.
    /// Returns `true` if the rect moved.
    pub fn scroll_horizontally(&mut self, offset: f64) -> bool {
        self.scroll(Axis::Horizontal, offset)
    }

    /// Scrolls the display rect along Y by `offset` world units.
    ///
    /// Positive offsets move the view up in world space, which moves the
    /// vertical bar toward its `lower` end.
    pub fn scroll_vertically(&mut self, offset: f64) -> bool {
        self.scroll(Axis::Vertical, offset)
    }

    /// Scrolls the display rect along `axis`.
    pub fn scroll(&mut self, axis: Axis, offset: f64) -> bool {
        if offset.is_nan() || offset == 0.0 {
            return false;
        }
        let bound = Span::of(self.bound(), axis);
        let span = Span::of(self.display_rect(), axis);
        let to_min = bound.min - span.min;
        let to_max = bound.max - span.max;
        let clamped = offset.max(to_min).min(to_max);
        if clamped == 0.0 {
            return false;
        }
        if clamped != offset {
            debug!("{axis:?} scroll by {offset} stopped at the bound");
        }
        // Edges that reach the bound take its value exactly.
        let moved = if clamped == to_max {
            Span::new(span.min + clamped, bound.max)
        } else if clamped == to_min {
            Span::new(bound.min, span.max + clamped)
        } else {
            Span::new(span.min + clamped, span.max + clamped)
        };
        let mut rect = self.display_rect();
        moved.write_to(&mut rect, axis);
        self.replace_display_rect(rect);
        true
    }

    /// Returns to the initial display rect.
    pub fn reset_view(&mut self) {
        let home = self.home_rect();
        self.replace_display_rect(home);
    }

    /// Factor by which zooming with `scale` may actually shrink the extent.
    fn limit_zoom(&self, scale: f64) -> f64 {
        let mut factor = scale;
        for axis in Axis::ALL {
            let fraction = Span::of(self.display_rect(), axis).length()
                / Span::of(self.bound(), axis).length();
            let limits = self.bar(axis).limits();
            factor = if scale > 1.0 {
                factor.min(fraction / limits.min)
            } else {
                factor.max(fraction / limits.max)
            };
        }
        factor
    }

    /// Moves `rect` inside the bound, Y before X.
    ///
    /// An axis that still overflows is pinned to the bound. With the aspect
    /// lock on, the other axis is then re-derived around its midpoint; a
    /// re-derived Y is moved back inside the bound once more.
    fn clamp_to_bound(&self, mut rect: Rect) -> Rect {
        let bound = self.bound();

        let (y, y_pinned) =
            Span::of(rect, Axis::Vertical).shifted_into(Span::of(bound, Axis::Vertical));
        y.write_to(&mut rect, Axis::Vertical);
        if y_pinned && self.aspect_lock() {
            self.rederive_companion(&mut rect, Axis::Vertical);
        }

        let (x, x_pinned) =
            Span::of(rect, Axis::Horizontal).shifted_into(Span::of(bound, Axis::Horizontal));
        x.write_to(&mut rect, Axis::Horizontal);
        if x_pinned && self.aspect_lock() {
            self.rederive_companion(&mut rect, Axis::Horizontal);
            let (y, _) =
                Span::of(rect, Axis::Vertical).shifted_into(Span::of(bound, Axis::Vertical));
            y.write_to(&mut rect, Axis::Vertical);
        }
        rect
    }

    /// Resizes the companion of `axis` to the canvas aspect, keeping its midpoint.
    fn rederive_companion(&self, rect: &mut Rect, axis: Axis) {
        let companion = axis.companion();
        let length = self.companion_length(axis, Span::of(*rect, axis).length());
        let mid = Span::of(*rect, companion).mid();
        Span::new(mid - length * 0.5, mid + length * 0.5).write_to(rect, companion);
    }
}
