use crate::math::{Point, Real, Vector};

/// Computes the index of the support point of a cloud of points.
///
/// The support point is the point maximizing the dot product with `dir`.
/// The scan keeps the first maximum, so ties resolve to the lowest index and
/// a zero `dir` yields index 0.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> usize {
    let mut best_id = 0;
    let mut best_dot = Real::NEG_INFINITY;

    for (i, p) in points.iter().enumerate() {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_id = i;
            best_dot = dot;
        }
    }

    best_id
}
