use super::{Point2, Point3};

/// Computes the signed area of a projected polygon (shoelace formula).
///
/// Indexing is cyclic, so the polygon is implicitly closed. In screen space
/// (y pointing down) a negative area means the face winds toward the viewer;
/// callers only look at the sign.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Arithmetic mean of the z components, `0.0` for an empty slice.
///
/// Used as a paint-order tiebreak only; it is not a physical depth.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_depth(points: &[Point3]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(|p| p.z).sum::<f64>() / points.len() as f64
}
