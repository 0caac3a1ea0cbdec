use super::path::Path;

/// An axis-aligned box in object-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CuboidSpec {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Whether the box lives in plot-area coordinates (no plot offset).
    pub inside_plot_area: bool,
}

impl CuboidSpec {
    /// Creates a box at `(x, y, z)` with the given extents, inside the plot area.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, width: f64, height: f64, depth: f64) -> Self {
        Self {
            x,
            y,
            z,
            width,
            height,
            depth,
            inside_plot_area: true,
        }
    }
}

/// An extruded annular sector, angles and tilt in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WedgeSpec {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Outer radius.
    pub r: f64,
    /// Inner radius; `0` gives a pie slice.
    pub inner_r: f64,
    pub start: f64,
    pub end: f64,
    /// Extrusion depth.
    pub depth: f64,
    /// Camera tilt around the horizontal axis.
    pub alpha: f64,
    /// Camera tilt around the vertical axis.
    pub beta: f64,
}

/// One face boundary and its paint-order key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceResult {
    pub path: Path,
    pub z_order: f64,
}

/// Partial geometry update for a box. `None` keeps the current value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CuboidPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
}

impl CuboidPatch {
    /// Returns `base` with every patched field replaced.
    #[must_use]
    pub fn apply(&self, base: &CuboidSpec) -> CuboidSpec {
        CuboidSpec {
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
            z: self.z.unwrap_or(base.z),
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            depth: self.depth.unwrap_or(base.depth),
            inside_plot_area: base.inside_plot_area,
        }
    }
}

impl From<CuboidSpec> for CuboidPatch {
    fn from(spec: CuboidSpec) -> Self {
        Self {
            x: Some(spec.x),
            y: Some(spec.y),
            z: Some(spec.z),
            width: Some(spec.width),
            height: Some(spec.height),
            depth: Some(spec.depth),
        }
    }
}

/// Partial geometry update for a wedge. Depth and tilt follow the camera
/// and are not part of a geometry update.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WedgePatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub r: Option<f64>,
    pub inner_r: Option<f64>,
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl WedgePatch {
    /// Returns `base` with every patched field replaced.
    #[must_use]
    pub fn apply(&self, base: &WedgeSpec) -> WedgeSpec {
        WedgeSpec {
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
            r: self.r.unwrap_or(base.r),
            inner_r: self.inner_r.unwrap_or(base.inner_r),
            start: self.start.unwrap_or(base.start),
            end: self.end.unwrap_or(base.end),
            ..*base
        }
    }
}

impl From<WedgeSpec> for WedgePatch {
    fn from(spec: WedgeSpec) -> Self {
        Self {
            x: Some(spec.x),
            y: Some(spec.y),
            r: Some(spec.r),
            inner_r: Some(spec.inner_r),
            start: Some(spec.start),
            end: Some(spec.end),
        }
    }
}

/// The geometry behind a shape handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeSpec {
    Cuboid(CuboidSpec),
    Wedge(WedgeSpec),
}

impl ShapeSpec {
    /// Short name of the shape kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cuboid(_) => "cuboid",
            Self::Wedge(_) => "wedge",
        }
    }

    /// Linearly interpolates every geometric field from `self` toward `to`.
    ///
    /// Non-geometric fields are taken from `to`. Mismatched kinds jump
    /// straight to `to`.
    #[must_use]
    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        match (self, to) {
            (Self::Cuboid(a), Self::Cuboid(b)) => Self::Cuboid(CuboidSpec {
                x: mix(a.x, b.x),
                y: mix(a.y, b.y),
                z: mix(a.z, b.z),
                width: mix(a.width, b.width),
                height: mix(a.height, b.height),
                depth: mix(a.depth, b.depth),
                inside_plot_area: b.inside_plot_area,
            }),
            (Self::Wedge(a), Self::Wedge(b)) => Self::Wedge(WedgeSpec {
                x: mix(a.x, b.x),
                y: mix(a.y, b.y),
                r: mix(a.r, b.r),
                inner_r: mix(a.inner_r, b.inner_r),
                start: mix(a.start, b.start),
                end: mix(a.end, b.end),
                ..*b
            }),
            _ => *to,
        }
    }
}

/// Partial geometry update, typed by shape kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryPatch {
    Cuboid(CuboidPatch),
    Wedge(WedgePatch),
}

impl GeometryPatch {
    /// Short name of the shape kind this patch targets.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cuboid(_) => "cuboid",
            Self::Wedge(_) => "wedge",
        }
    }

    /// Applies the patch to a spec of the same kind; `None` on mismatch.
    #[must_use]
    pub fn apply(&self, base: &ShapeSpec) -> Option<ShapeSpec> {
        match (self, base) {
            (Self::Cuboid(p), ShapeSpec::Cuboid(s)) => Some(ShapeSpec::Cuboid(p.apply(s))),
            (Self::Wedge(p), ShapeSpec::Wedge(s)) => Some(ShapeSpec::Wedge(p.apply(s))),
            _ => None,
        }
    }
}

impl From<CuboidPatch> for GeometryPatch {
    fn from(patch: CuboidPatch) -> Self {
        Self::Cuboid(patch)
    }
}

impl From<WedgePatch> for GeometryPatch {
    fn from(patch: WedgePatch) -> Self {
        Self::Wedge(patch)
    }
}

impl From<CuboidSpec> for GeometryPatch {
    fn from(spec: CuboidSpec) -> Self {
        Self::Cuboid(spec.into())
    }
}

impl From<WedgeSpec> for GeometryPatch {
    fn from(spec: WedgeSpec) -> Self {
        Self::Wedge(spec.into())
    }
}
