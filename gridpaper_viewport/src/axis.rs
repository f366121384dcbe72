// Copyright 2025 the Grid Paper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// One of the two axes of the viewport, each driven by its own range bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// World X, shown by the horizontal range bar.
    Horizontal,
    /// World Y, shown by the vertical range bar.
    ///
    /// The vertical bar runs top to bottom while world Y grows upward, so its
    /// `lower` end corresponds to the rectangle's `max_y`.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Returns the other axis.
    #[must_use]
    pub fn companion(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A closed world-space interval `[min, max]` along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Span {
    pub(crate) min: f64,
    pub(crate) max: f64,
}

impl Span {
    pub(crate) fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub(crate) fn of(rect: Rect, axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::new(rect.x0, rect.x1),
            Axis::Vertical => Self::new(rect.y0, rect.y1),
        }
    }

    pub(crate) fn write_to(self, rect: &mut Rect, axis: Axis) {
        match axis {
            Axis::Horizontal => {
                rect.x0 = self.min;
                rect.x1 = self.max;
            }
            Axis::Vertical => {
                rect.y0 = self.min;
                rect.y1 = self.max;
            }
        }
    }

    pub(crate) fn length(self) -> f64 {
        self.max - self.min
    }

    pub(crate) fn mid(self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// A span of `length` centered on `mid`, pinned against `bound`.
    ///
    /// If the centered window pokes out below `bound.min` it starts at
    /// `bound.min`; if it pokes out above `bound.max` it ends there. A length
    /// larger than the bound is capped to the bound.
    pub(crate) fn centered_within(mid: f64, length: f64, bound: Self) -> Self {
        let length = length.min(bound.length());
        let half = length * 0.5;
        if mid - half < bound.min {
            Self::new(bound.min, bound.min + length)
        } else if mid + half > bound.max {
            Self::new(bound.max - length, bound.max)
        } else {
            Self::new(mid - half, mid + half)
        }
    }

    /// Moves the span into `bound` without resizing it.
    ///
    /// Returns the shifted span and whether it still overflowed, in which case
    /// both edges have been pinned to the bound.
    pub(crate) fn shifted_into(self, bound: Self) -> (Self, bool) {
        if self.length() >= bound.length() {
            let overflowed = self.length() > bound.length();
            return (bound, overflowed);
        }
        if self.min < bound.min {
            (Self::new(bound.min, bound.min + self.length()), false)
        } else if self.max > bound.max {
            (Self::new(bound.max - self.length(), bound.max), false)
        } else {
            (self, false)
        }
    }

    /// This span scaled down by `factor` around `anchor`.
    ///
    /// The length is exactly `length / factor`. A result lying wholly beyond
    /// one side of `bound` is parked against that side, which keeps far-away
    /// anchors from swallowing the length in rounding. Callers still move the
    /// result inside `bound`.
    pub(crate) fn scaled_about(self, anchor: f64, factor: f64, bound: Self) -> Self {
        let length = self.length() / factor;
        let min = anchor + (self.min - anchor) / factor;
        let min = if min > bound.max {
            bound.max
        } else if min + length < bound.min {
            bound.min - length
        } else {
            min
        };
        Self::new(min, min + length)
    }

    /// Normalized `(lower, upper)` bar positions of this span within `bound`.
    pub(crate) fn to_bar(self, bound: Self, axis: Axis) -> (f64, f64) {
        let extent = bound.length();
        match axis {
            Axis::Horizontal => (
                (self.min - bound.min) / extent,
                (self.max - bound.min) / extent,
            ),
            Axis::Vertical => (
                (bound.max - self.max) / extent,
                (bound.max - self.min) / extent,
            ),
        }
    }

    /// World span described by normalized bar positions within `bound`.
    pub(crate) fn from_bar(lower: f64, upper: f64, bound: Self, axis: Axis) -> Self {
        let extent = bound.length();
        match axis {
            Axis::Horizontal => Self::new(bound.min + lower * extent, bound.min + upper * extent),
            Axis::Vertical => Self::new(bound.max - upper * extent, bound.max - lower * extent),
        }
    }
}
