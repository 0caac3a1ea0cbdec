pub mod cuboid;
pub mod wedge;

pub use cuboid::{CuboidFaces, CuboidPath};
pub use wedge::{WedgeFaces, WedgePath};
