//! Elliptical arc approximation with cubic Bezier segments.
//!
//! Angles are in radians and follow screen conventions: a point on the
//! ellipse at angle `t` is `(cx + rx·cos t, cy + ry·sin t)`.
use std::f64::consts::{FRAC_PI_2, SQRT_2};

use super::Point2;

/// Control-point distance factor per radian of arc span.
///
/// `4·(√2 − 1)/3` is the classic quarter-circle handle length; dividing by
/// `π/2` lets it scale linearly with the signed span of each segment.
pub const D_FACTOR: f64 = (4.0 * (SQRT_2 - 1.0) / 3.0) / FRAC_PI_2;

/// Spans up to `π/2 + SPLIT_SLACK` are emitted as a single segment.
const SPLIT_SLACK: f64 = 1e-4;

/// Upper bound on the quarter-turn pieces of one arc (1024 full turns).
pub const MAX_QUARTERS: u32 = 4096;

/// One cubic Bezier segment. The start point is implied by the previous
/// path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub ctrl1: Point2,
    pub ctrl2: Point2,
    pub to: Point2,
}

/// An axis-aligned ellipse in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenEllipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl ScreenEllipse {
    /// Creates a new ellipse.
    #[must_use]
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self { cx, cy, rx, ry }
    }

    /// Point on the ellipse at `angle`, shifted by `(dx, dy)`.
    #[must_use]
    pub fn point(&self, angle: f64, dx: f64, dy: f64) -> Point2 {
        Point2::new(
            self.cx + self.rx * angle.cos() + dx,
            self.cy + self.ry * angle.sin() + dy,
        )
    }

    /// Bezier approximation of the arc from `start` to `end`, shifted by
    /// `(dx, dy)`. See [`elliptical_arc_to_bezier`].
    #[must_use]
    pub fn arc(&self, start: f64, end: f64, dx: f64, dy: f64) -> Vec<CubicBezier> {
        elliptical_arc_to_bezier(self.cx, self.cy, self.rx, self.ry, start, end, dx, dy)
    }
}

/// Approximates an elliptical arc with cubic Bezier segments.
///
/// Spans wider than a quarter turn are split: `π/2` pieces are taken in the
/// direction of travel until the remainder fits, so the arc may run in
/// either direction and wrap past `2π`. A zero span yields a single
/// zero-length segment at the start point.
///
/// The piece count is fixed before any segment is emitted and capped at
/// [`MAX_QUARTERS`]; past the cap the remainder goes into the last segment.
/// Non-finite spans produce one segment without splitting.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn elliptical_arc_to_bezier(
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    start: f64,
    end: f64,
    dx: f64,
    dy: f64,
) -> Vec<CubicBezier> {
    let ellipse = ScreenEllipse::new(cx, cy, rx, ry);
    let span = end - start;
    let quarters = quarter_count(span);
    let step = FRAC_PI_2.copysign(span);

    let mut segments = Vec::with_capacity(quarters as usize + 1);
    for i in 0..quarters {
        let from = start + step * f64::from(i);
        segments.push(segment(&ellipse, from, from + step, dx, dy));
    }
    let from = start + step * f64::from(quarters);
    segments.push(segment(&ellipse, from, end, dx, dy));
    segments
}

/// Number of whole quarter turns taken off `span` before the remainder fits
/// in one segment.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quarter_count(span: f64) -> u32 {
    let excess = span.abs() - (FRAC_PI_2 + SPLIT_SLACK);
    if !excess.is_finite() || excess <= 0.0 {
        return 0;
    }
    let quarters = (excess / FRAC_PI_2).ceil().min(f64::from(MAX_QUARTERS));
    if quarters >= f64::from(MAX_QUARTERS) {
        tracing::warn!(span, "arc span exceeds the segment cap, last segment is stretched");
    }
    quarters as u32
}

/// Single Bezier segment for a span of at most a quarter turn.
fn segment(e: &ScreenEllipse, start: f64, end: f64, dx: f64, dy: f64) -> CubicBezier {
    let k = D_FACTOR * (end - start);
    let (ss, cs) = start.sin_cos();
    let (se, ce) = end.sin_cos();
    CubicBezier {
        ctrl1: Point2::new(
            e.cx + e.rx * cs - e.rx * k * ss + dx,
            e.cy + e.ry * ss + e.ry * k * cs + dy,
        ),
        ctrl2: Point2::new(
            e.cx + e.rx * ce + e.rx * k * se + dx,
            e.cy + e.ry * se - e.ry * k * ce + dy,
        ),
        to: Point2::new(e.cx + e.rx * ce + dx, e.cy + e.ry * se + dy),
    }
}
