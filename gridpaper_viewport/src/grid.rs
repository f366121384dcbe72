// Copyright 2025 the Grid Paper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background grid helpers.
//!
//! A grid series is a ladder of [`GridLevel`]s. At any zoom only the levels
//! whose lines are far enough apart on screen are worth drawing; the
//! controller picks them with
//! [`ViewportController::visible_grid_levels`] and enumerates their lines in
//! the display rect with [`ViewportController::grid_lines`].

use core::ops::Range;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::axis::{Axis, Span};
use crate::{GridLevel, ViewportController};

/// World coordinates of the multiples of `spacing` inside `range`, ascending.
///
/// Empty for non-positive or non-finite spacing and for empty ranges.
pub fn grid_lines(range: Range<f64>, spacing: f64) -> impl Iterator<Item = f64> {
    let valid = spacing > 0.0
        && spacing.is_finite()
        && range.start.is_finite()
        && range.end.is_finite()
        && range.start <= range.end;
    let (first, last) = if valid {
        (
            to_index((range.start / spacing).ceil()),
            to_index((range.end / spacing).floor()),
        )
    } else {
        (1, 0)
    };
    (first..=last).map(move |k| k as f64 * spacing)
}

fn to_index(value: f64) -> i64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Saturating cast; the callers clamp ranges to the world bound"
    )]
    {
        value as i64
    }
}

impl ViewportController {
    /// Grid levels whose on-screen spacing is at least `min_pixel_gap`.
    pub fn visible_grid_levels(&self, min_pixel_gap: f64) -> impl Iterator<Item = GridLevel> + '_ {
        let d = self.display_rect();
        let canvas = self.canvas_size();
        let pixels_per_unit = (canvas.width / d.width()).min(canvas.height / d.height());
        self.grid_series()
            .iter()
            .copied()
            .filter(move |level| level.spacing * pixels_per_unit >= min_pixel_gap)
    }

    /// Lines of `level` crossing `axis` inside the display rect.
    ///
    /// For [`Axis::Horizontal`] these are the X coordinates of vertical lines,
    /// for [`Axis::Vertical`] the Y coordinates of horizontal lines.
    pub fn grid_lines(&self, axis: Axis, level: GridLevel) -> impl Iterator<Item = f64> {
        let span = Span::of(self.display_rect(), axis);
        grid_lines(span.min..span.max, level.spacing)
    }
}
