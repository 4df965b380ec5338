//! Closest-point measurement between two convex hulls.

use crate::math::{Point, Real, Vector, DIM};
use crate::query::epa;
use crate::query::gjk::{self, VoronoiSimplex};

use std::collections::HashSet;

/// A reusable measurement of the closest points between two convex hulls.
///
/// Each hull is a list of vertices; the lists stay caller-owned and are only
/// read for the duration of a call. The less degenerate a hull, the more
/// precise the result.
///
/// The same value can measure any number of hull pairs. It stores the last
/// direction from the first hull to the second and uses it to warm-start the
/// next measurement, so repeated queries against slowly moving geometry
/// converge faster than cold ones. The warm start may also be seeded by
/// writing [`dir`](ClosestPoints::dir) before a call.
///
/// A value is not safe to share across threads while measuring: it owns the
/// scratch simplex and the persisted direction. Independent values may
/// measure concurrently, even against shared hull data.
///
/// # Example
/// ```
/// use closest3d::math::Point;
/// use closest3d::query::ClosestPoints;
///
/// let segment = [Point::new(-1.0, 2.0, 0.0), Point::new(1.0, 2.0, 0.0)];
/// let point = [Point::new(0.0, 0.0, 0.0)];
///
/// let mut measure = ClosestPoints::new();
/// let distance = measure.signed_distance(&point, &segment);
///
/// assert_eq!(distance, 2.0);
/// assert_eq!(measure.points[1], Point::new(0.0, 2.0, 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct ClosestPoints {
    /// The measured signed distance: positive for separation, zero for
    /// touching or empty inputs, negative for overlap, in which case the
    /// magnitude is the penetration depth (the length of the smallest
    /// translation separating the hulls). More precise than `dir.norm()`.
    pub distance: Real,
    /// The direction from the first hull to the second (under penetration,
    /// the minimum-separation direction). More precise than
    /// `points[1] - points[0]`. Doubles as the warm start of the next call.
    pub dir: Vector<Real>,
    /// The closest (or deepest-contact) point on each hull.
    pub points: [Point<Real>; 2],
    /// For each hull, the indices of the input vertices spanning the feature
    /// (vertex, edge or face) that supports the reported point.
    pub on: [HashSet<usize>; 2],

    simplex: VoronoiSimplex,
}

impl Default for ClosestPoints {
    fn default() -> Self {
        ClosestPoints {
            distance: 0.0,
            dir: Vector::zeros(),
            points: [Point::origin(); 2],
            on: [HashSet::new(), HashSet::new()],
            simplex: VoronoiSimplex::new(),
        }
    }
}

impl ClosestPoints {
    /// Creates a measurement with a zero warm-start direction.
    pub fn new() -> Self {
        ClosestPoints::default()
    }

    /// Measures the separation between the hulls, never below zero.
    ///
    /// Runs GJK only: overlapping hulls report a zero distance whose
    /// supporting feature is an interior simplex, not the contact surface.
    /// Use [`signed_distance`](ClosestPoints::signed_distance) to resolve
    /// the penetration depth instead.
    ///
    /// Updates `distance`, `dir`, `points` and `on`, and returns the
    /// distance. An empty hull short-circuits to a zero distance with empty
    /// index sets.
    pub fn nonnegative_distance(
        &mut self,
        hull0: &[Point<Real>],
        hull1: &[Point<Real>],
    ) -> Real {
        if self.measure_empty(hull0, hull1) {
            return self.distance;
        }

        self.distance = gjk::closest_point([hull0, hull1], &mut self.dir, &mut self.simplex);
        self.resolve_outputs([hull0, hull1]);

        self.distance
    }

    /// Measures the signed distance between the hulls.
    ///
    /// Runs GJK and, when the hulls overlap, EPA: the result is negative
    /// exactly when the hulls overlap and its magnitude is the penetration
    /// depth.
    ///
    /// Updates `distance`, `dir`, `points` and `on`, and returns the
    /// distance. An empty hull short-circuits to a zero distance with empty
    /// index sets.
    pub fn signed_distance(&mut self, hull0: &[Point<Real>], hull1: &[Point<Real>]) -> Real {
        if self.measure_empty(hull0, hull1) {
            return self.distance;
        }

        self.distance = gjk::closest_point([hull0, hull1], &mut self.dir, &mut self.simplex);

        if self.simplex.len() == DIM + 1 {
            self.distance =
                epa::penetration_depth([hull0, hull1], &mut self.dir, &mut self.simplex);
        }

        self.resolve_outputs([hull0, hull1]);

        self.distance
    }

    fn measure_empty(&mut self, hull0: &[Point<Real>], hull1: &[Point<Real>]) -> bool {
        if hull0.is_empty() || hull1.is_empty() {
            self.distance = 0.0;
            self.points = [Point::origin(); 2];
            self.on = [HashSet::new(), HashSet::new()];
            true
        } else {
            false
        }
    }

    /// Combines the reduced simplex into the per-hull outputs.
    ///
    /// The retained vertices carry unnormalized barycentric weights; they
    /// are normalized here by their sum, then blended over the source
    /// vertices of each hull. The index sets collect the distinct source
    /// vertices per hull.
    fn resolve_outputs(&mut self, hulls: [&[Point<Real>]; 2]) {
        let mut denominator = 0.0;
        for v in self.simplex.vertices() {
            denominator += v.bcoord;
        }
        denominator = 1.0 / denominator;

        self.points = [Point::origin(); 2];
        for i in 0..self.points.len() {
            for v in self.simplex.vertices() {
                self.points[i] += hulls[i][v.ids[i]].coords * (denominator * v.bcoord);
            }
        }

        self.on = [HashSet::new(), HashSet::new()];
        for i in 0..self.on.len() {
            for v in self.simplex.vertices() {
                let _ = self.on[i].insert(v.ids[i]);
            }
        }
    }
}
