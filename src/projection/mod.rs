mod camera;

pub use camera::Camera;

use crate::math::{Point2, Point3};

/// Maps object-local 3D points to screen coordinates.
///
/// Implementations must preserve order and length: output `i` is the
/// projection of input `i`. The implementor carries the camera context.
pub trait Projection {
    /// Projects `points`. `inside_plot_area` selects plot-area coordinates
    /// over chart coordinates.
    fn project(&self, points: &[Point3], inside_plot_area: bool) -> Vec<Point2>;
}

impl<P: Projection + ?Sized> Projection for &P {
    fn project(&self, points: &[Point3], inside_plot_area: bool) -> Vec<Point2> {
        (**self).project(points, inside_plot_area)
    }
}
