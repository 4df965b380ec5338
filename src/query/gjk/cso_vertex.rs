use crate::math::{Point, Real, Vector};
use crate::utils;

/// A vertex of a Configuration-Space Obstacle.
///
/// A Configuration-Space Obstacle (CSO) is the result of the Minkowski
/// difference of two solids: each of its points is the difference of two
/// points, one on each solid. Here both solids are convex hulls given by
/// their vertex lists, so a CSO vertex is fully determined by one vertex
/// index into each hull.
#[derive(Copy, Clone, Debug)]
pub struct CSOVertex {
    /// The indices of the two original vertices, one into each hull.
    pub ids: [usize; 2],
    /// The coordinate on the CSO: `hulls[1][ids[1]] - hulls[0][ids[0]]`.
    pub point: Point<Real>,
    /// Unnormalized barycentric weight, written by the simplex reduction.
    pub bcoord: Real,
    /// Mark used by the support-cycle walk.
    pub(crate) visited: bool,
}

impl CSOVertex {
    /// Computes the support vertex of the CSO opposite the direction `dir`.
    ///
    /// The support of the first hull is taken along `dir` and the support of
    /// the second along `-dir`, so among all CSO points the returned one
    /// minimizes the dot product with `dir`. With `dir` the current
    /// direction from the first hull toward the second, this is the CSO
    /// vertex most likely to bring the simplex closer to the origin.
    pub fn from_hulls(hulls: [&[Point<Real>]; 2], dir: &Vector<Real>) -> Self {
        let id0 = utils::point_cloud_support_point_id(dir, hulls[0]);
        let id1 = utils::point_cloud_support_point_id(&-*dir, hulls[1]);

        CSOVertex {
            ids: [id0, id1],
            point: Point::from(hulls[1][id1] - hulls[0][id0]),
            bcoord: 0.0,
            visited: false,
        }
    }
}
