// Copyright 2025 the Grid Paper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// Errors reported while configuring a [`ViewportController`](crate::ViewportController).
///
/// Only configuration can fail. Out-of-range bar positions, rect edges, zoom
/// factors and scroll offsets are clamped to the nearest valid state instead.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ViewportError {
    /// The bound is empty, inverted or has non-finite edges.
    #[error("invalid bound {bound:?}: min must be strictly less than max on both axes")]
    InvalidBound {
        /// The rejected bound.
        bound: Rect,
    },
    /// The host cannot carry a viewport.
    #[error("unusable host environment: {reason}")]
    HostEnvironment {
        /// What is wrong with the host.
        reason: HostProblem,
    },
    /// The configured minimum bar span is outside `(0, 1]`.
    #[error("minimum span {min_span} is outside (0, 1]")]
    InvalidSpanLimit {
        /// The rejected minimum span.
        min_span: f64,
    },
}

/// The specific reason behind [`ViewportError::HostEnvironment`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum HostProblem {
    /// The canvas has a zero, negative or non-finite pixel size.
    #[error("canvas size {0:?} is not positive and finite")]
    CanvasSize(Size),
    /// No container identifier was configured.
    #[error("empty container identifier")]
    MissingContainer,
}

impl From<HostProblem> for ViewportError {
    fn from(reason: HostProblem) -> Self {
        Self::HostEnvironment { reason }
    }
}

pub(crate) fn check_bound(bound: Rect) -> Result<Rect, ViewportError> {
    let finite = [bound.x0, bound.x1, bound.y0, bound.y1]
        .iter()
        .all(|v| v.is_finite());
    if finite && bound.x0 < bound.x1 && bound.y0 < bound.y1 {
        Ok(bound)
    } else {
        Err(ViewportError::InvalidBound { bound })
    }
}

pub(crate) fn check_canvas(size: Size) -> Result<Size, ViewportError> {
    let usable = size.width.is_finite()
        && size.height.is_finite()
        && size.width > 0.0
        && size.height > 0.0;
    if usable {
        Ok(size)
    } else {
        Err(HostProblem::CanvasSize(size).into())
    }
}
