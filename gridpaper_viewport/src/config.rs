// Copyright 2025 the Grid Paper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

/// One level of the background grid: line spacing and stroke width, both in
/// world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLevel {
    /// Distance between neighboring lines.
    pub spacing: f64,
    /// Stroke width of the lines.
    pub stroke_width: f64,
}

impl GridLevel {
    /// Creates a grid level.
    #[must_use]
    pub const fn new(spacing: f64, stroke_width: f64) -> Self {
        Self {
            spacing,
            stroke_width,
        }
    }
}

/// Grid series used when none is configured, finest level first.
pub const DEFAULT_GRID_SERIES: [GridLevel; 7] = [
    GridLevel::new(0.1, 0.1),
    GridLevel::new(0.2, 0.2),
    GridLevel::new(0.5, 0.1),
    GridLevel::new(1.0, 0.5),
    GridLevel::new(2.0, 2.0),
    GridLevel::new(5.0, 1.0),
    GridLevel::new(10.0, 1.0),
];

/// Construction-time settings for a [`ViewportController`](crate::ViewportController).
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Identifier of the host element the viewport is mounted in.
    pub container_id: String,
    /// Largest world rectangle that can ever be displayed.
    pub bound: Rect,
    /// Keep the display rect at the canvas aspect ratio.
    pub aspect_lock: bool,
    /// Smallest bar span (fraction of the bound) on the less dense axis.
    ///
    /// This sets the maximum zoom-in level. Must be in `(0, 1]`.
    pub min_span: f64,
    /// Grid levels, finest first.
    pub grid_series: Vec<GridLevel>,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            container_id: String::from("preview"),
            bound: Rect::new(-4000.0, -6000.0, 4000.0, 6000.0),
            aspect_lock: true,
            min_span: 0.1,
            grid_series: DEFAULT_GRID_SERIES.to_vec(),
        }
    }
}

impl ViewportConfig {
    /// Default configuration with a different bound.
    #[must_use]
    pub fn with_bound(bound: Rect) -> Self {
        Self {
            bound,
            ..Self::default()
        }
    }

    /// Sets the aspect lock.
    #[must_use]
    pub fn aspect_lock(mut self, aspect_lock: bool) -> Self {
        self.aspect_lock = aspect_lock;
        self
    }

    /// Sets the minimum bar span.
    #[must_use]
    pub fn min_span(mut self, min_span: f64) -> Self {
        self.min_span = min_span;
        self
    }

    /// Replaces the grid series.
    #[must_use]
    pub fn grid_series(mut self, series: impl IntoIterator<Item = GridLevel>) -> Self {
        self.grid_series = series.into_iter().collect();
        self
    }
}
