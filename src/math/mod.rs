pub mod arc_2d;
pub mod polygon_2d;

/// 2D point type (projected screen coordinate).
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type (object-local coordinate).
pub type Point3 = nalgebra::Point3<f64>;
