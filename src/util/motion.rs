//! Pure math for decorative motion: mouse-follow smoothing, parallax and
//! scroll reveal.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Fraction of the viewport a section must rise past before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Per-frame smoothing factor for the hero glow.
pub const FOLLOW_FACTOR: f64 = 0.12;

/// Distance under which the glow snaps to its target.
pub const SETTLE_EPSILON: f64 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Move `current` a `factor` fraction of the way to `target`, snapping once
/// within [`SETTLE_EPSILON`]. `factor` is clamped to `0.0..=1.0`.
#[must_use]
pub fn smooth_toward(current: Point, target: Point, factor: f64) -> Point {
    let factor = factor.clamp(0.0, 1.0);
    let next = Point {
        x: current.x + (target.x - current.x) * factor,
        y: current.y + (target.y - current.y) * factor,
    };
    if next.distance(target) < SETTLE_EPSILON { target } else { next }
}

/// Vertical offset for a layer scrolling at `speed` relative to the page,
/// clamped to `±max`.
#[must_use]
pub fn parallax_offset(scroll_y: f64, speed: f64, max: f64) -> f64 {
    let max = max.abs();
    (scroll_y.max(0.0) * speed).clamp(-max, max)
}

/// Whether an element whose top edge sits at `top` (viewport coordinates)
/// has scrolled far enough into a viewport of `viewport_height` to reveal.
#[must_use]
pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    if viewport_height <= 0.0 {
        return true;
    }
    top < viewport_height * (1.0 - REVEAL_THRESHOLD)
}
