// Copyright 2025 the Grid Paper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};

use crate::ViewportController;

/// A drawing surface whose view transform follows the display rect.
///
/// The controller never renders. After changing the display rect, callers
/// hand the surface to [`ViewportController::present`].
pub trait RenderSurface {
    /// Replaces the surface's world → device transform.
    fn set_view_transform(&mut self, transform: Affine);
}

impl ViewportController {
    /// World → device transform mapping the display rect onto the canvas.
    ///
    /// World Y grows upward and device Y downward, so `display_rect.max_y`
    /// lands on the top pixel row. There is no rotation or shear.
    #[must_use]
    pub fn render_transform(&self) -> Affine {
        let d = self.display_rect();
        let canvas = self.canvas_size();
        Affine::new([
            canvas.width / (d.x1 - d.x0),
            0.0,
            0.0,
            canvas.height / (d.y0 - d.y1),
            canvas.width * d.x0 / (d.x0 - d.x1),
            canvas.height * d.y1 / (d.y1 - d.y0),
        ])
    }

    /// Applies [`render_transform`](Self::render_transform) to `surface`.
    pub fn present(&self, surface: &mut impl RenderSurface) {
        surface.set_view_transform(self.render_transform());
    }

    /// Converts a world-space point into device pixels.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.render_transform() * pt
    }

    /// Converts a device pixel position into world space.
    ///
    /// Use this to turn a pointer position into the anchor of
    /// [`zoom_at`](Self::zoom_at).
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.render_transform().inverse() * pt
    }

    /// Device pixels per world unit along X.
    #[must_use]
    pub fn pixels_per_unit(&self) -> f64 {
        self.canvas_size().width / self.display_rect().width()
    }
}
