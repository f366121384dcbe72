// Copyright 2025 the Grid Paper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gridpaper_viewport --heading-base-level=0

//! Grid Paper Viewport: a bounded 2D viewport driven by two range bars.
//!
//! A grid paper canvas shows part of a fixed world rectangle, the **bound**.
//! The visible part, the **display rect**, is controlled by a horizontal and
//! a vertical range bar whose normalized `[lower, upper]` windows mirror the
//! display rect's extent as a fraction of the bound. This crate keeps the
//! three in sync:
//! - Dragging a bar moves the display rect. With the aspect lock on, the
//!   other axis follows so the display rect keeps the canvas aspect ratio,
//!   and the other bar is updated silently.
//! - Zooming and scrolling move the display rect, always inside the bound
//!   and within the zoom range the bars allow, and both bars follow.
//!
//! It does **not** own any widget or rendering backend. Callers are expected
//! to:
//! - Forward slider drags to [`ViewportController::set_bar_range`] (or the
//!   lower/upper variants) and mirror bars back with [`RangeBar::mirror_to`].
//! - Apply [`ViewportController::render_transform`] to their drawing surface,
//!   for example through [`ViewportController::present`].
//! - Turn pointer positions into world coordinates with
//!   [`ViewportController::view_to_world_point`] before zooming.
//!
//! ## Minimal example
//!
//! ```rust
//! use gridpaper_viewport::{Axis, ViewportConfig, ViewportController};
//! use kurbo::Size;
//!
//! // World bound -4000..4000 by -6000..6000 on an 800x600 canvas.
//! let mut vp = ViewportController::new(ViewportConfig::default(), Size::new(800.0, 600.0))?;
//!
//! // The user drags the horizontal bar to the middle half of the world.
//! vp.set_bar_range(Axis::Horizontal, 0.25, 0.75);
//! let rect = vp.display_rect();
//! assert_eq!((rect.x0, rect.x1), (-2000.0, 2000.0));
//!
//! // Zoom in 2x around the origin.
//! vp.zoom_at(0.0, 0.0, 2.0);
//! assert!((vp.zoom_factor() - 0.25).abs() < 1e-12);
//! # Ok::<(), gridpaper_viewport::ViewportError>(())
//! ```
//!
//! ## Bars and feedback
//!
//! Listeners registered with [`ViewportController::on_bar_change`] see only
//! user-driven bar changes. Every bar write the controller performs while
//! following the display rect goes through the silent setters of
//! [`RangeBar`], so a programmatic update never looks like a drag and never
//! triggers another sync.
//!
//! ## Logging
//!
//! Rejected or limited zooms, clamped scrolls and configuration changes are
//! reported through the [`log`] facade at `debug` level; bar syncs at
//! `trace` level. The crate never installs a logger.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod axis;
mod config;
mod controller;
mod error;
mod grid;
mod navigation;
mod range_bar;
mod surface;

pub use axis::Axis;
pub use config::{DEFAULT_GRID_SERIES, GridLevel, ViewportConfig};
pub use controller::{ViewportController, ViewportDebugInfo};
pub use error::{HostProblem, ViewportError};
pub use grid::grid_lines;
pub use range_bar::{ListenerId, RangeBar, RangeChange, RangeListener, RangeWidget, SpanLimits};
pub use surface::RenderSurface;
