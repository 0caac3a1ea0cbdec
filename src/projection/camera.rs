use nalgebra::{Matrix3, Vector3};

use crate::error::{CameraError, Result};
use crate::math::{Point2, Point3};

use super::Projection;

/// A tilted perspective camera looking at a rectangular plot area.
///
/// `alpha` tilts around the horizontal axis and `beta` around the vertical
/// axis, both in degrees. The projection rotates points about the center of
/// the plot volume and divides by distance from an eye placed
/// `depth · view_distance` in front of it. A `view_distance` of `0` gives an
/// orthographic projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Tilt around the horizontal axis, degrees.
    pub alpha: f64,
    /// Tilt around the vertical axis, degrees.
    pub beta: f64,
    /// Depth of the plot volume.
    pub depth: f64,
    /// Eye distance as a multiple of `depth`.
    pub view_distance: f64,
    pub plot_left: f64,
    pub plot_top: f64,
    pub plot_width: f64,
    pub plot_height: f64,
    /// Uniform scale applied after perspective.
    pub scale: f64,
    /// Swaps x and y (and flips the tilt) inside the plot area.
    pub inverted: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            beta: 0.0,
            depth: 100.0,
            view_distance: 25.0,
            plot_left: 0.0,
            plot_top: 0.0,
            plot_width: 600.0,
            plot_height: 400.0,
            scale: 1.0,
            inverted: false,
        }
    }
}

impl Camera {
    /// Creates a camera with the given tilt (degrees) over a plot area of the
    /// given size, other settings at their defaults.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::InvalidParameter` if the plot size is not positive.
    pub fn new(alpha: f64, beta: f64, plot_width: f64, plot_height: f64) -> Result<Self> {
        Self {
            alpha,
            beta,
            plot_width,
            plot_height,
            ..Self::default()
        }
        .validated()
    }

    /// Returns the camera with perspective disabled.
    #[must_use]
    pub fn orthographic(self) -> Self {
        Self {
            view_distance: 0.0,
            ..self
        }
    }

    /// Checks every numeric setting and returns the camera unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::InvalidParameter` naming the first bad setting.
    pub fn validated(self) -> Result<Self> {
        let checks = [
            ("depth", self.depth, self.depth >= 0.0, "non-negative"),
            (
                "view_distance",
                self.view_distance,
                self.view_distance >= 0.0,
                "non-negative",
            ),
            ("scale", self.scale, self.scale > 0.0, "positive"),
            ("plot_width", self.plot_width, self.plot_width > 0.0, "positive"),
            (
                "plot_height",
                self.plot_height,
                self.plot_height > 0.0,
                "positive",
            ),
        ];
        for (parameter, value, ok, requirement) in checks {
            if !ok {
                return Err(CameraError::InvalidParameter {
                    parameter,
                    value,
                    requirement,
                }
                .into());
            }
        }
        Ok(self)
    }

    /// Horizontal-axis tilt in radians, as wedge specs expect it.
    #[must_use]
    pub fn alpha_rad(&self) -> f64 {
        self.alpha.to_radians()
    }

    /// Vertical-axis tilt in radians, as wedge specs expect it.
    #[must_use]
    pub fn beta_rad(&self) -> f64 {
        self.beta.to_radians()
    }

    /// Rotation from plot space into view space.
    fn rotation(&self, inverted: bool) -> Matrix3<f64> {
        let flip = if inverted { -1.0 } else { 1.0 };
        let (sin_a, cos_a) = (self.alpha_rad() * flip).sin_cos();
        let (sin_b, cos_b) = (-self.beta_rad() * flip).sin_cos();
        Matrix3::new(
            cos_b,
            0.0,
            -sin_b,
            -sin_a * sin_b,
            cos_a,
            -cos_b * sin_a,
            cos_a * sin_b,
            sin_a,
            cos_a * cos_b,
        )
    }
}

impl Projection for Camera {
    fn project(&self, points: &[Point3], inside_plot_area: bool) -> Vec<Point2> {
        let inverted = inside_plot_area && self.inverted;
        let rotation = self.rotation(inverted);

        let mut origin = Vector3::new(
            self.plot_width / 2.0,
            self.plot_height / 2.0,
            self.depth / 2.0,
        );
        if !inside_plot_area {
            origin.x += self.plot_left;
            origin.y += self.plot_top;
        }
        let eye = self.depth * self.view_distance;

        points
            .iter()
            .map(|p| {
                let (x, y) = if inverted { (p.y, p.x) } else { (p.x, p.y) };
                let rotated = rotation * (Vector3::new(x, y, p.z) - origin);
                let perspective = if eye > 0.0 && eye.is_finite() {
                    eye / (rotated.z + origin.z + eye)
                } else {
                    1.0
                };
                Point2::new(
                    rotated.x * perspective * self.scale + origin.x,
                    rotated.y * perspective * self.scale + origin.y,
                )
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn untilted_orthographic_is_identity() {
        let camera = Camera::new(0.0, 0.0, 200.0, 100.0).unwrap().orthographic();
        let pts = [Point3::new(3.0, 4.0, 50.0), Point3::new(-7.0, 120.0, 0.0)];
        let out = camera.project(&pts, true);
        assert_eq!(out.len(), 2);
        assert_abs_diff_eq!(out[0].x, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(out[0].y, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(out[1].x, -7.0, epsilon = 1e-9);
        assert_abs_diff_eq!(out[1].y, 120.0, epsilon = 1e-9);
    }

    #[test]
    fn perspective_shrinks_far_points_toward_center() {
        let camera = Camera::new(0.0, 0.0, 200.0, 200.0).unwrap();
        let near = camera.project(&[Point3::new(0.0, 0.0, 0.0)], true)[0];
        let far = camera.project(&[Point3::new(0.0, 0.0, 100.0)], true)[0];
        assert_abs_diff_eq!(near.x, 0.0, epsilon = 1e-9);
        assert!(far.x > near.x && far.x < 100.0);
        assert!(far.y > near.y && far.y < 100.0);
    }

    #[test]
    fn plot_offset_applies_outside_plot_area() {
        let camera = Camera {
            plot_left: 30.0,
            plot_top: 10.0,
            ..Camera::default()
        }
        .orthographic();
        let p = [Point3::new(5.0, 5.0, 0.0)];
        let inside = camera.project(&p, true)[0];
        let outside = camera.project(&p, false)[0];
        assert_abs_diff_eq!(inside.x, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(outside.x, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(outside.y, 5.0, epsilon = 1e-9);

        let rotated = Camera { beta: 30.0, ..camera };
        let inside = rotated.project(&p, true)[0];
        let outside = rotated.project(&p, false)[0];
        assert!((inside.x - outside.x).abs() > 1e-6);
    }

    #[test]
    fn inverted_swaps_axes_inside_plot_area() {
        let camera = Camera {
            inverted: true,
            plot_width: 100.0,
            plot_height: 100.0,
            ..Camera::default()
        }
        .orthographic();
        let out = camera.project(&[Point3::new(10.0, 70.0, 0.0)], true)[0];
        assert_abs_diff_eq!(out.x, 70.0, epsilon = 1e-9);
        assert_abs_diff_eq!(out.y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_bad_settings() {
        assert!(Camera::new(0.0, 0.0, 0.0, 100.0).is_err());
        let bad = Camera {
            view_distance: -1.0,
            ..Camera::default()
        };
        assert!(bad.validated().is_err());
        assert!(Camera::default().validated().is_ok());
    }

    #[test]
    fn radians_accessors() {
        let camera = Camera::new(90.0, 180.0, 10.0, 10.0).unwrap();
        assert_abs_diff_eq!(camera.alpha_rad(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(camera.beta_rad(), std::f64::consts::PI, epsilon = 1e-12);
    }
}
