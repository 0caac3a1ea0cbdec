use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::geometry::{FaceResult, Path, WedgeSpec};
use crate::math::arc_2d::ScreenEllipse;

/// Subtracted from the end angle so that a full turn never starts and ends
/// on the same point.
pub const END_EPSILON: f64 = 1e-5;

/// Scale applied to angle keys so they survive integer truncation by the host.
pub const Z_PRECISION: f64 = 1e5;

/// Keeps end-wall keys just below the curved walls they meet.
const SIDE_Z_FACTOR: f64 = 0.99;

/// Scale from the top key to the key of the wedge's own group.
const GROUP_Z_FACTOR: f64 = 100.0;

/// The five faces of an extruded annular sector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WedgeFaces {
    /// The cap facing the viewer. Always painted last.
    pub top: FaceResult,
    /// Outer curved wall.
    pub out: FaceResult,
    /// Inner curved wall.
    pub inn: FaceResult,
    /// End wall at the start angle.
    pub side1: FaceResult,
    /// End wall at the end angle.
    pub side2: FaceResult,
    /// Key of the wedge's own group.
    pub group_z: f64,
}

impl WedgeFaces {
    /// Returns the faces in `top, out, inn, side1, side2` order.
    #[must_use]
    pub fn faces(&self) -> [&FaceResult; 5] {
        [&self.top, &self.out, &self.inn, &self.side1, &self.side2]
    }
}

/// Builds the face paths of a wedge.
///
/// The wedge is drawn directly in screen space: tilt squashes the circular
/// outlines into ellipses (`rx = r·cos β`, `ry = r·cos α`) and the extrusion
/// becomes a constant screen offset `(depth·sin β, depth·sin α)`.
pub struct WedgePath {
    spec: WedgeSpec,
}

impl WedgePath {
    /// Creates a new `WedgePath` operation.
    #[must_use]
    pub fn new(spec: WedgeSpec) -> Self {
        Self { spec }
    }

    /// Computes all five faces and their paint-order keys.
    #[must_use]
    pub fn execute(&self) -> WedgeFaces {
        let WedgeSpec {
            x: cx,
            y: cy,
            r,
            inner_r,
            start,
            depth,
            alpha,
            beta,
            ..
        } = self.spec;
        let end = self.spec.end - END_EPSILON;

        let outer = ScreenEllipse::new(cx, cy, r * beta.cos(), r * alpha.cos());
        let inner = ScreenEllipse::new(cx, cy, inner_r * beta.cos(), inner_r * alpha.cos());
        let dx = depth * beta.sin();
        let dy = depth * alpha.sin();

        let mut top = Path::new();
        top.move_to(outer.point(start, 0.0, 0.0))
            .curves(outer.arc(start, end, 0.0, 0.0))
            .line_to(inner.point(end, 0.0, 0.0))
            .curves(inner.arc(end, start, 0.0, 0.0))
            .close();

        let mut inn = Path::new();
        inn.move_to(inner.point(start, 0.0, 0.0))
            .curves(inner.arc(start, end, 0.0, 0.0))
            .line_to(inner.point(end, dx, dy))
            .curves(inner.arc(end, start, dx, dy))
            .close();

        let out = outer_wall(&outer, start, end, alpha, beta, dx, dy);
        let side1 = end_wall(&outer, &inner, start, dx, dy);
        let side2 = end_wall(&outer, &inner, end, dx, dy);

        // Tilt moves the vanishing point; measure every angle from there.
        let correction = dy.atan2(-dx);
        let fold = |angle: f64| {
            let a = (angle + correction).abs() % TAU;
            if a > PI {
                TAU - a
            } else {
                a
            }
        };
        let a_mid = fold((start + end) / 2.0) * Z_PRECISION;
        let a_start = fold(start) * Z_PRECISION;
        let a_end = fold(end) * Z_PRECISION;
        let z_wall = a_mid.max(a_start).max(a_end);
        let z_top = PI * Z_PRECISION + 1.0;

        WedgeFaces {
            top: FaceResult {
                path: top,
                z_order: z_top,
            },
            out: FaceResult {
                path: out,
                z_order: z_wall,
            },
            inn: FaceResult {
                path: inn,
                z_order: z_wall,
            },
            side1: FaceResult {
                path: side1,
                z_order: a_end * SIDE_Z_FACTOR,
            },
            side2: FaceResult {
                path: side2,
                z_order: a_start * SIDE_Z_FACTOR,
            },
            group_z: z_top * GROUP_Z_FACTOR,
        }
    }
}

/// Flat quadrilateral closing the wedge at `angle`.
fn end_wall(outer: &ScreenEllipse, inner: &ScreenEllipse, angle: f64, dx: f64, dy: f64) -> Path {
    Path::to_line_path(
        &[
            outer.point(angle, 0.0, 0.0),
            outer.point(angle, dx, dy),
            inner.point(angle, dx, dy),
            inner.point(angle, 0.0, 0.0),
        ],
        true,
    )
}

/// Outer curved wall.
///
/// Only the part of the rim between the two silhouette edges faces the
/// viewer. `edge_near` and `edge_far` are where the extrusion flips from
/// front to back; when the sector runs across them the wall is drawn in
/// pieces joined by sharp vertical edges:
///
/// ```text
///            -------
///          /    ^    \
///         /   /   \   \
///        /   /     \   \
/// near=> ====       ==== <=far
///        \   \     /   /
///         \   \   /   /
///          \    v    /
///            -------
/// ```
fn outer_wall(
    outer: &ScreenEllipse,
    start: f64,
    end: f64,
    alpha: f64,
    beta: f64,
    dx: f64,
    dy: f64,
) -> Path {
    let b = if beta > 0.0 { FRAC_PI_2 } else { 0.0 };
    let a = if alpha > 0.0 { 0.0 } else { FRAC_PI_2 };
    let edge_near = PI - a;
    let edge_far = TAU - a;

    // Visible span, clamped to the silhouette.
    let start2 = if start > -b {
        start
    } else if end > -b {
        -b
    } else {
        start
    };
    let end2 = if end < edge_near {
        end
    } else if start < edge_near {
        edge_near
    } else {
        end
    };

    let mut out = Path::new();
    out.move_to(outer.point(start2, 0.0, 0.0))
        .curves(outer.arc(start2, end2, 0.0, 0.0));

    if end > edge_far && start < edge_far {
        tracing::trace!(start, end, "outer wall crosses both silhouette edges");
        out.line_to(outer.point(end2, dx, dy))
            .curves(outer.arc(end2, edge_far, dx, dy))
            .line_to(outer.point(edge_far, 0.0, 0.0))
            .curves(outer.arc(edge_far, end, 0.0, 0.0))
            .line_to(outer.point(end, dx, dy))
            .curves(outer.arc(end, edge_far, dx, dy))
            .line_to(outer.point(edge_far, 0.0, 0.0))
            .curves(outer.arc(edge_far, end2, 0.0, 0.0));
    } else if end > edge_near && start < edge_near {
        tracing::trace!(start, end, "outer wall crosses the near silhouette edge");
        out.line_to(outer.point(end2, dx, dy))
            .curves(outer.arc(end2, end, dx, dy))
            .line_to(outer.point(end, 0.0, 0.0))
            .curves(outer.arc(end, end2, 0.0, 0.0));
    }

    out.line_to(outer.point(end2, dx, dy))
        .curves(outer.arc(end2, start2, dx, dy))
        .close();
    out
}
