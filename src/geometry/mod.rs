pub mod path;
pub mod spec;

pub use path::{Path, PathCommand};
pub use spec::{
    CuboidPatch, CuboidSpec, FaceResult, GeometryPatch, ShapeSpec, WedgePatch, WedgeSpec,
};
