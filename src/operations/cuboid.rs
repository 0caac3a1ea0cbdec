use crate::geometry::{CuboidSpec, FaceResult, Path};
use crate::math::polygon_2d::{average_depth, signed_area};
use crate::math::{Point2, Point3};
use crate::projection::Projection;

/// Corner indices of each candidate face, wound so that a face turned toward
/// the viewer has negative projected area. Corner order is documented on
/// [`CuboidPath::corners`].
const FRONT: [usize; 4] = [3, 2, 1, 0];
const BACK: [usize; 4] = [7, 6, 5, 4];
const TOP: [usize; 4] = [1, 6, 7, 0];
const BOTTOM: [usize; 4] = [4, 5, 2, 3];
const RIGHT: [usize; 4] = [1, 2, 5, 6];
const LEFT: [usize; 4] = [0, 7, 4, 3];

/// Scale of the group key. Large enough to push the composite group behind
/// every face key in the scene.
pub const GROUP_Z_SCALE: f64 = 9e9;

/// The three visible faces of a projected box.
///
/// Each slot holds the visible face of one axis pair, or an empty path when
/// the pair is seen edge-on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CuboidFaces {
    /// Front or back face.
    pub front: FaceResult,
    /// Top or bottom face.
    pub top: FaceResult,
    /// Right or left face.
    pub side: FaceResult,
    /// `average_depth(bottom corners) × 9e9`; the host group is ordered by
    /// its negation.
    pub group_z: f64,
}

impl CuboidFaces {
    /// Returns the three faces in `front, top, side` order.
    #[must_use]
    pub fn faces(&self) -> [&FaceResult; 3] {
        [&self.front, &self.top, &self.side]
    }
}

/// Builds the visible face paths of a box.
pub struct CuboidPath {
    spec: CuboidSpec,
}

impl CuboidPath {
    /// Creates a new `CuboidPath` operation.
    #[must_use]
    pub fn new(spec: CuboidSpec) -> Self {
        Self { spec }
    }

    /// The 8 corners of the box:
    ///
    /// ```text
    /// 0 (x,   y,   z  )   4 (x,   y+h, z+d)
    /// 1 (x+w, y,   z  )   5 (x+w, y+h, z+d)
    /// 2 (x+w, y+h, z  )   6 (x+w, y,   z+d)
    /// 3 (x,   y+h, z  )   7 (x,   y,   z+d)
    /// ```
    #[must_use]
    pub fn corners(&self) -> [Point3; 8] {
        let CuboidSpec {
            x,
            y,
            z,
            width: w,
            height: h,
            depth: d,
            ..
        } = self.spec;
        [
            Point3::new(x, y, z),
            Point3::new(x + w, y, z),
            Point3::new(x + w, y + h, z),
            Point3::new(x, y + h, z),
            Point3::new(x, y + h, z + d),
            Point3::new(x + w, y + h, z + d),
            Point3::new(x + w, y, z + d),
            Point3::new(x, y, z + d),
        ]
    }

    /// Projects the corners once and picks the visible face of each axis pair.
    ///
    /// Face keys are the mean z of the chosen face's local corners, so they
    /// do not depend on the camera. A projection that breaks the
    /// length-preserving contract yields empty faces.
    #[must_use]
    pub fn execute<P: Projection + ?Sized>(&self, projection: &P) -> CuboidFaces {
        let corners = self.corners();
        let projected = projection.project(&corners, self.spec.inside_plot_area);
        let group_z = average_depth(&pick(&corners, BOTTOM)) * GROUP_Z_SCALE;

        if projected.len() != corners.len() {
            tracing::warn!(
                expected = corners.len(),
                got = projected.len(),
                "projection changed the point count, emitting empty cuboid faces"
            );
            return CuboidFaces {
                group_z,
                ..CuboidFaces::default()
            };
        }

        let visible = |axis: &'static str, first: [usize; 4], second: [usize; 4]| {
            visible_face(axis, &corners, &projected, first, second)
        };

        CuboidFaces {
            front: visible("front/back", FRONT, BACK),
            top: visible("top/bottom", TOP, BOTTOM),
            side: visible("right/left", RIGHT, LEFT),
            group_z,
        }
    }
}

fn pick<T: Copy>(points: &[T], indices: [usize; 4]) -> [T; 4] {
    indices.map(|i| points[i])
}

/// Returns whichever candidate face winds toward the viewer, testing `first`
/// before `second`. Neither facing the viewer gives an empty face.
fn visible_face(
    axis: &'static str,
    corners: &[Point3],
    projected: &[Point2],
    first: [usize; 4],
    second: [usize; 4],
) -> FaceResult {
    for candidate in [first, second] {
        let outline = pick(projected, candidate);
        if signed_area(&outline) < 0.0 {
            return FaceResult {
                path: Path::to_line_path(&outline, true),
                z_order: average_depth(&pick(corners, candidate)),
            };
        }
    }
    tracing::debug!(axis, "cuboid face pair is edge-on");
    FaceResult::default()
}
