// Copyright 2025 the Grid Paper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized dual-handle range bar state.
//!
//! A [`RangeBar`] models one scroll bar of the viewport: a `[lower, upper]`
//! window inside `[0, 1]` whose width is kept within [`SpanLimits`]. It is the
//! adapter between the controller and whatever slider widget the host shows.
//!
//! Writes come in two flavors:
//! - [`RangeBar::set_lower`], [`RangeBar::set_upper`] and
//!   [`RangeBar::set_range`] are user-driven and notify change listeners.
//! - The `*_silently` variants apply the same normalization without notifying
//!   anyone. The controller uses them when it pushes positions derived from
//!   the display rect, so a programmatic update is never mistaken for a drag.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Bounds on the width (`upper - lower`) of a [`RangeBar`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpanLimits {
    /// Smallest allowed width, in `[0, 1]`.
    pub min: f64,
    /// Largest allowed width, in `[min, 1]`.
    pub max: f64,
}

impl SpanLimits {
    /// No constraint beyond the `[0, 1]` hard limits.
    pub const FULL: Self = Self { min: 0.0, max: 1.0 };

    /// Creates span limits, clamping both values into `[0, 1]` and ordering
    /// them so that `min <= max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let min = clamp_unit(min);
        let max = clamp_unit(max);
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamps a width into these limits.
    #[must_use]
    pub fn clamp(&self, span: f64) -> f64 {
        span.clamp(self.min, self.max)
    }
}

impl Default for SpanLimits {
    fn default() -> Self {
        Self::FULL
    }
}

/// Payload passed to change listeners.
///
/// Each field is `Some(new_value)` when that end of the bar moved.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RangeChange {
    /// New lower position, if it changed.
    pub lower: Option<f64>,
    /// New upper position, if it changed.
    pub upper: Option<f64>,
}

/// Handle returned by [`RangeBar::on_change`], used to remove the listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// Boxed change listener.
pub type RangeListener = Box<dyn FnMut(&RangeChange)>;

/// The slider widget a host uses to display a [`RangeBar`].
///
/// Hard limits of the widget are `0` and `1`. Widgets report user drags back
/// to the host, which forwards them to
/// [`ViewportController::set_bar_range`](crate::ViewportController::set_bar_range)
/// and friends.
pub trait RangeWidget {
    /// Moves the widget's lower handle.
    fn set_lower_range(&mut self, value: f64);
    /// Moves the widget's upper handle.
    fn set_upper_range(&mut self, value: f64);
    /// Sets the smallest handle distance the widget allows.
    fn set_relative_min_difference(&mut self, value: f64);
    /// Sets the largest handle distance the widget allows.
    fn set_relative_max_difference(&mut self, value: f64);
}

/// Width violations smaller than this are rounding noise from the rect mapping.
const SPAN_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Anchor {
    Lower,
    Upper,
}

/// One normalized range bar.
pub struct RangeBar {
    lower: f64,
    upper: f64,
    limits: SpanLimits,
    listeners: Vec<(ListenerId, RangeListener)>,
    next_listener: u32,
}

impl fmt::Debug for RangeBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeBar")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .field("limits", &self.limits)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Default for RangeBar {
    fn default() -> Self {
        Self::new(SpanLimits::FULL)
    }
}

impl RangeBar {
    /// Creates a bar covering `[0, limits.max]` with no listeners.
    #[must_use]
    pub fn new(limits: SpanLimits) -> Self {
        Self {
            lower: 0.0,
            upper: limits.max,
            limits,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Current lower position.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Current upper position.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Current width, `upper - lower`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// Current span limits.
    #[must_use]
    pub fn limits(&self) -> SpanLimits {
        self.limits
    }

    /// Replaces the span limits and silently re-normalizes the current window.
    pub fn set_limits(&mut self, limits: SpanLimits) {
        self.limits = limits;
        self.apply(self.lower, self.upper, Anchor::Lower, false);
    }

    /// Moves the lower end, notifying listeners if anything changed.
    ///
    /// The value is clamped into `[0, 1]`. If the resulting width leaves the
    /// span limits, the upper end is moved to compensate.
    pub fn set_lower(&mut self, value: f64) -> bool {
        self.apply(value, self.upper, Anchor::Lower, true)
    }

    /// Moves the upper end, notifying listeners if anything changed.
    ///
    /// The lower end compensates for span-limit violations.
    pub fn set_upper(&mut self, value: f64) -> bool {
        self.apply(self.lower, value, Anchor::Upper, true)
    }

    /// Moves both ends, notifying listeners if anything changed.
    ///
    /// Reversed input is reordered. Span violations are fixed by moving the
    /// upper end.
    pub fn set_range(&mut self, lower: f64, upper: f64) -> bool {
        let (lower, upper) = ordered(lower, upper);
        self.apply(lower, upper, Anchor::Lower, true)
    }

    /// Like [`RangeBar::set_lower`], without notifying listeners.
    pub fn set_lower_silently(&mut self, value: f64) -> bool {
        self.apply(value, self.upper, Anchor::Lower, false)
    }

    /// Like [`RangeBar::set_upper`], without notifying listeners.
    pub fn set_upper_silently(&mut self, value: f64) -> bool {
        self.apply(self.lower, value, Anchor::Upper, false)
    }

    /// Like [`RangeBar::set_range`], without notifying listeners.
    pub fn set_range_silently(&mut self, lower: f64, upper: f64) -> bool {
        let (lower, upper) = ordered(lower, upper);
        self.apply(lower, upper, Anchor::Lower, false)
    }

    /// Registers a change listener.
    ///
    /// Listeners run in registration order after every user-driven change.
    pub fn on_change(&mut self, listener: impl FnMut(&RangeChange) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener = self.next_listener.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a previously registered listener. Returns `false` if the id is unknown.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Pushes the current limits and positions into a widget.
    pub fn mirror_to(&self, widget: &mut impl RangeWidget) {
        widget.set_relative_min_difference(self.limits.min);
        widget.set_relative_max_difference(self.limits.max);
        widget.set_lower_range(self.lower);
        widget.set_upper_range(self.upper);
    }

    fn apply(&mut self, lower: f64, upper: f64, anchor: Anchor, notify: bool) -> bool {
        if !lower.is_finite() || !upper.is_finite() {
            return false;
        }
        let (lower, upper) = normalize(lower, upper, anchor, self.limits);
        let change = RangeChange {
            lower: (lower != self.lower).then_some(lower),
            upper: (upper != self.upper).then_some(upper),
        };
        if change.lower.is_none() && change.upper.is_none() {
            return false;
        }
        self.lower = lower;
        self.upper = upper;
        if notify {
            for (_, listener) in &mut self.listeners {
                listener(&change);
            }
        }
        true
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Clamps both ends into `[0, 1]` and fixes the width by moving the end that
/// is not `anchor`. If that end hits a hard limit, the anchor gives way.
fn normalize(lower: f64, upper: f64, anchor: Anchor, limits: SpanLimits) -> (f64, f64) {
    let mut lower = clamp_unit(lower);
    let mut upper = clamp_unit(upper);
    let too_narrow = |lower: f64, upper: f64| upper - lower < limits.min - SPAN_EPSILON;
    let too_wide = |lower: f64, upper: f64| upper - lower > limits.max + SPAN_EPSILON;
    match anchor {
        Anchor::Lower => {
            if too_narrow(lower, upper) {
                upper = (lower + limits.min).min(1.0);
                if too_narrow(lower, upper) {
                    lower = (upper - limits.min).max(0.0);
                }
            } else if too_wide(lower, upper) {
                upper = lower + limits.max;
            }
        }
        Anchor::Upper => {
            if too_narrow(lower, upper) {
                lower = (upper - limits.min).max(0.0);
                if too_narrow(lower, upper) {
                    upper = (lower + limits.min).min(1.0);
                }
            } else if too_wide(lower, upper) {
                lower = upper - limits.max;
            }
        }
    }
    (lower, upper)
}
