//! The Gilbert-Johnson-Keerthi distance algorithm.

use crate::math::{Point, Real, Vector, DIM};
use crate::query::gjk::{CSOVertex, SimplexReduction, VoronoiSimplex};

use num::Bounded;

/// Projects the origin onto the CSO of two convex hulls.
///
/// On return, `dir` is the vector from the origin to its projection onto the
/// simplex, which is also the vector from the closest point of the first
/// hull to the closest point of the second; the returned distance is its
/// length. When the simplex ends up with four vertices, the origin is inside
/// the CSO and the hulls overlap: `dir` is then the zero vector and the
/// returned distance is zero.
///
/// The incoming value of `dir` warm-starts the first support query. Any
/// vector works, including zero (the support oracle then picks the first
/// vertex of each hull and the next iteration re-seeds the direction), but a
/// direction close to the final one saves iterations.
///
/// The simplex is reset on entry and left holding the vertices supporting
/// the projection, with the barycentric weights of the last reduction.
///
/// Both hulls must be non-empty.
pub fn closest_point(
    hulls: [&[Point<Real>]; 2],
    dir: &mut Vector<Real>,
    simplex: &mut VoronoiSimplex,
) -> Real {
    simplex.clear();
    let mut distance = Real::max_value();

    while simplex.len() < DIM + 1 {
        simplex.push(CSOVertex::from_hulls(hulls, dir));

        if simplex.detect_support_cycle() {
            // The newest support revisits an earlier index pair: keeping it
            // would oscillate forever on this degenerate geometry.
            simplex.pop();
            log::trace!("support cycle, keeping the previous simplex");
            break;
        }

        if simplex.reduce() == SimplexReduction::Degenerate {
            *dir = simplex.project_origin();
            log::trace!("degenerate simplex, stopping at the current estimate");
            break;
        }

        *dir = simplex.project_origin();
        let last_distance = distance;
        distance = dir.norm();
        if distance >= last_distance {
            break;
        }
    }

    distance
}
