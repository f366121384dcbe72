// Copyright 2025 the Grid Paper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenario tests for `gridpaper_viewport`.
//!
//! These drive a `ViewportController` the way a host would: bar drags,
//! wheel zooms and scrolls, and check the bound invariant, the bar mapping
//! and the absence of feedback between the two bars.

use std::cell::RefCell;
use std::rc::Rc;

use gridpaper_viewport::{Axis, RangeChange, RenderSurface, ViewportConfig, ViewportController};
use kurbo::{Affine, Point, Rect, Size};

const CANVAS: Size = Size::new(800.0, 600.0);

fn bound() -> Rect {
    Rect::new(-4000.0, -6000.0, 4000.0, 6000.0)
}

fn controller(aspect_lock: bool) -> ViewportController {
    let config = ViewportConfig::with_bound(bound()).aspect_lock(aspect_lock);
    ViewportController::new(config, CANVAS).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn assert_inside(vp: &ViewportController) {
    let (b, d) = (vp.bound(), vp.display_rect());
    assert!(
        b.x0 <= d.x0 && d.x0 <= d.x1 && d.x1 <= b.x1,
        "{d:?} leaves {b:?} horizontally"
    );
    assert!(
        b.y0 <= d.y0 && d.y0 <= d.y1 && d.y1 <= b.y1,
        "{d:?} leaves {b:?} vertically"
    );
}

fn record(vp: &mut ViewportController, axis: Axis) -> Rc<RefCell<Vec<RangeChange>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    vp.on_bar_change(axis, move |change| sink.borrow_mut().push(*change));
    log
}

#[test]
fn horizontal_drag_with_aspect_lock() {
    let mut vp = controller(true);
    let horizontal = record(&mut vp, Axis::Horizontal);
    let vertical = record(&mut vp, Axis::Vertical);

    assert!(vp.set_bar_range(Axis::Horizontal, 0.25, 0.75));

    let rect = vp.display_rect();
    assert_close(rect.x0, -2000.0);
    assert_close(rect.x1, 2000.0);
    // 4000 / (800 / 600) = 3000 tall, centered on the previous midpoint.
    assert_close(rect.y0, -1500.0);
    assert_close(rect.y1, 1500.0);

    // The vertical bar is inverted: lower is measured from the top.
    assert_close(vp.vertical_bar().lower(), 0.375);
    assert_close(vp.vertical_bar().upper(), 0.625);

    // One user change on the dragged bar, nothing on the companion.
    assert_eq!(horizontal.borrow().len(), 1);
    assert!(vertical.borrow().is_empty());
}

#[test]
fn zoom_in_from_full_extent() {
    let mut vp = controller(false);
    assert!(vp.zoom_at(0.0, 0.0, 2.0));
    assert_eq!(vp.display_rect(), Rect::new(-2000.0, -3000.0, 2000.0, 3000.0));
    assert_eq!(vp.bar_positions(Axis::Horizontal), (0.25, 0.75));
    assert_eq!(vp.bar_positions(Axis::Vertical), (0.25, 0.75));
}

#[test]
fn bar_positions_roundtrip_without_aspect_lock() {
    let rects = [
        Rect::new(-4000.0, -6000.0, 4000.0, 6000.0),
        Rect::new(-1000.0, 2000.0, 3500.0, 5900.0),
        Rect::new(-3999.5, -6000.0, -3000.0, -4000.0),
        Rect::new(123.25, -77.5, 2000.75, 1500.0),
    ];
    for rect in rects {
        let mut source = controller(false);
        source.set_display_rect(rect);
        assert_eq!(source.display_rect(), rect);

        let (h_lower, h_upper) = source.bar_positions(Axis::Horizontal);
        let (v_lower, v_upper) = source.bar_positions(Axis::Vertical);

        let mut rebuilt = controller(false);
        rebuilt.set_bar_range(Axis::Horizontal, h_lower, h_upper);
        rebuilt.set_bar_range(Axis::Vertical, v_lower, v_upper);
        let back = rebuilt.display_rect();
        assert_close(back.x0, rect.x0);
        assert_close(back.x1, rect.x1);
        assert_close(back.y0, rect.y0);
        assert_close(back.y1, rect.y1);
    }
}

#[test]
fn unit_zoom_changes_nothing() {
    let mut vp = controller(true);
    vp.set_bar_range(Axis::Vertical, 0.1, 0.3);
    let rect = vp.display_rect();
    let bars = (
        vp.bar_positions(Axis::Horizontal),
        vp.bar_positions(Axis::Vertical),
    );
    let h = (vp.horizontal_bar().lower(), vp.horizontal_bar().upper());
    let v = (vp.vertical_bar().lower(), vp.vertical_bar().upper());

    assert!(!vp.zoom_at(1500.0, -2500.0, 1.0));

    assert_eq!(vp.display_rect(), rect);
    assert_eq!(
        (
            vp.bar_positions(Axis::Horizontal),
            vp.bar_positions(Axis::Vertical)
        ),
        bars
    );
    assert_eq!((vp.horizontal_bar().lower(), vp.horizontal_bar().upper()), h);
    assert_eq!((vp.vertical_bar().lower(), vp.vertical_bar().upper()), v);
}

#[test]
fn repeated_zoom_in_converges_to_minimum_span() {
    for aspect_lock in [false, true] {
        let mut vp = controller(aspect_lock);
        let mut calls = 0;
        while vp.zoom_at(-3900.0, 5800.0, 1.7) {
            calls += 1;
            assert!(calls < 200, "zoom never converged");
            assert_inside(&vp);
        }
        let at_minimum = Axis::ALL.iter().any(|&axis| {
            let bar = vp.bar(axis);
            (bar.span() - bar.limits().min).abs() < 1e-6
        });
        assert!(at_minimum, "{:?}", vp.debug_info());

        let settled = vp.display_rect();
        for _ in 0..3 {
            assert!(!vp.zoom_at(0.0, 0.0, 2.0));
        }
        assert_eq!(vp.display_rect(), settled);
    }
}

#[test]
fn huge_scroll_lands_exactly_on_the_bound() {
    let mut vp = controller(false);
    vp.zoom_at(-1234.0, 567.0, 3.3);
    assert!(vp.scroll_horizontally(1.0e12));
    assert_eq!(vp.display_rect().x1, vp.bound().x1);
    assert!(vp.scroll_horizontally(-1.0e12));
    assert_eq!(vp.display_rect().x0, vp.bound().x0);
    assert!(vp.scroll_vertically(f64::MAX));
    assert_eq!(vp.display_rect().y1, vp.bound().y1);
    assert_eq!(vp.vertical_bar().lower(), 0.0);
    assert_inside(&vp);
}

#[test]
fn single_axis_drags_keep_the_canvas_aspect() {
    let mut vp = controller(true);
    let expected = CANVAS.width / CANVAS.height;
    let drags = [
        (Axis::Horizontal, 0.3, 0.6),
        (Axis::Vertical, 0.4, 0.55),
        (Axis::Horizontal, 0.45, 0.7),
        (Axis::Vertical, 0.35, 0.5),
    ];
    for (axis, lower, upper) in drags {
        assert!(vp.set_bar_range(axis, lower, upper));
        let rect = vp.display_rect();
        assert_close(rect.width() / rect.height(), expected);
        assert_inside(&vp);

        // The companion bar was pushed to match the rect.
        let companion = axis.companion();
        let (c_lower, c_upper) = vp.bar_positions(companion);
        assert_close(vp.bar(companion).lower(), c_lower);
        assert_close(vp.bar(companion).upper(), c_upper);
    }
}

#[test]
fn bound_invariant_holds_across_mixed_operations() {
    // Small deterministic LCG so the sequence is reproducible.
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((state >> 11) as f64) / ((1_u64 << 53) as f64)
    };

    for aspect_lock in [false, true] {
        let mut vp = controller(aspect_lock);
        for _ in 0..500 {
            let op = (next() * 6.0) as u32;
            let axis = if next() < 0.5 {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
            match op {
                0 => {
                    let (x, y) = (next() * 10_000.0 - 5000.0, next() * 14_000.0 - 7000.0);
                    vp.zoom_at(x, y, 0.3 + next() * 3.0);
                }
                1 => {
                    vp.scroll(axis, next() * 20_000.0 - 10_000.0);
                }
                2 => {
                    vp.set_bar_range(axis, next() * 1.2 - 0.1, next() * 1.2 - 0.1);
                }
                3 => {
                    vp.set_bar_lower(axis, next());
                }
                4 => {
                    vp.set_bar_upper(axis, next());
                }
                _ => {
                    let a = Point::new(next() * 12_000.0 - 6000.0, next() * 16_000.0 - 8000.0);
                    let b = Point::new(next() * 12_000.0 - 6000.0, next() * 16_000.0 - 8000.0);
                    vp.set_display_rect(Rect::from_points(a, b));
                }
            }
            assert_inside(&vp);
            for axis in Axis::ALL {
                let bar = vp.bar(axis);
                assert!(
                    0.0 <= bar.lower() && bar.lower() <= bar.upper() && bar.upper() <= 1.0,
                    "{bar:?}"
                );
            }
        }
    }
}

#[test]
fn listeners_see_only_user_changes() {
    let mut vp = controller(true);
    let horizontal = record(&mut vp, Axis::Horizontal);
    let vertical = record(&mut vp, Axis::Vertical);

    vp.zoom_at(100.0, 100.0, 2.5);
    vp.scroll_horizontally(300.0);
    vp.scroll_vertically(-800.0);
    vp.set_display_rect(Rect::new(-500.0, -500.0, 1500.0, 900.0));
    vp.reset_view();
    assert!(horizontal.borrow().is_empty());
    assert!(vertical.borrow().is_empty());

    vp.set_bar_upper(Axis::Vertical, 0.6);
    assert!(horizontal.borrow().is_empty());
    assert_eq!(
        vertical.borrow().as_slice(),
        &[RangeChange {
            lower: None,
            upper: Some(0.6)
        }]
    );
}

#[derive(Default)]
struct Surface {
    frames: Vec<Affine>,
}

impl RenderSurface for Surface {
    fn set_view_transform(&mut self, transform: Affine) {
        self.frames.push(transform);
    }
}

#[test]
fn host_presents_after_each_change() {
    let mut vp = controller(true);
    let mut surface = Surface::default();

    vp.present(&mut surface);
    // A wheel tick at the pixel under the pointer.
    let anchor = vp.view_to_world_point(Point::new(200.0, 150.0));
    vp.zoom_at(anchor.x, anchor.y, 1.25);
    vp.present(&mut surface);

    assert_eq!(surface.frames.len(), 2);
    // The world point under the pointer stays under the pointer.
    let pixel = surface.frames[1] * anchor;
    assert_close(pixel.x, 200.0);
    assert_close(pixel.y, 150.0);
}
