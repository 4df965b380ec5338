//! Three-dimensional penetration depth queries using the Expanding Polytope
//! Algorithm.

use crate::math::{Point, Real, Vector};
use crate::query::gjk::{self, CSOVertex, VoronoiSimplex};

use smallvec::SmallVec;

/// A triangular face of the expanding polytope.
///
/// A face addresses its corners by their positional index on the simplex and
/// caches the projection of the origin onto the triangle they form.
struct Face {
    ids: [usize; 3],
    /// Vector from the origin to the closest point of the triangle.
    dir: Vector<Real>,
    /// Distance from the origin to the closest point of the triangle.
    dist: Real,
}

impl Face {
    /// Builds a face and computes its cached origin projection.
    ///
    /// The projection reuses the distance kernel on the pair
    /// ({origin}, triangle): the simplex reduction alone cannot classify an
    /// arbitrary triangle because it relies on the insertion order GJK
    /// guarantees, so the triangle's corners are fed through a full run with
    /// a cold direction and a local scratch simplex.
    fn new(simplex: &VoronoiSimplex, ids: [usize; 3]) -> Self {
        let origin = [Point::origin()];
        let corners = [
            simplex.vertices()[ids[0]].point,
            simplex.vertices()[ids[1]].point,
            simplex.vertices()[ids[2]].point,
        ];

        let mut dir = Vector::zeros();
        let mut scratch = VoronoiSimplex::new();
        let dist = gjk::closest_point([&origin[..], &corners[..]], &mut dir, &mut scratch);

        Face { ids, dir, dist }
    }

    fn normal(&self, simplex: &VoronoiSimplex) -> Vector<Real> {
        let a = simplex.vertices()[self.ids[0]].point;
        let b = simplex.vertices()[self.ids[1]].point;
        let c = simplex.vertices()[self.ids[2]].point;
        (b - a).cross(&(c - a))
    }
}

/// Computes the penetration depth of two overlapping convex hulls.
///
/// The simplex must come out of [`gjk::closest_point`] with the origin
/// enclosed. The enclosing polytope is expanded toward the CSO surface by
/// repeatedly inserting the support vertex beyond its closest face, until
/// the support query stops producing new index pairs.
///
/// On return, the simplex holds the (reduced) vertices of the contact
/// feature, `dir` is the minimum-separation direction from the first hull to
/// the second, and the returned distance is negative with magnitude equal to
/// the penetration depth.
pub fn penetration_depth(
    hulls: [&[Point<Real>]; 2],
    dir: &mut Vector<Real>,
    simplex: &mut VoronoiSimplex,
) -> Real {
    // Faces are kept sorted by descending distance: the tail is always the
    // face closest to the origin.
    let mut faces: Vec<Face> = Vec::new();

    match simplex.len() {
        3 => {
            // Defensive only: the distance kernel always encloses the origin
            // with a full tetrahedron before handing over.
            push_oriented_face(simplex, [0, 1, 2], &mut faces);
        }
        4 => {
            for i in 0..simplex.len() {
                let mut ids = [0; 3];
                let mut k = 0;
                for j in 0..simplex.len() {
                    if i == j {
                        continue;
                    }
                    ids[k] = j;
                    k += 1;
                }
                push_oriented_face(simplex, ids, &mut faces);
            }
        }
        _ => unreachable!("EPA requires a 3- or 4-vertex simplex"),
    }

    faces.sort_by(|f1, f2| {
        f2.dist
            .partial_cmp(&f1.dist)
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    loop {
        let closest_dir = faces[faces.len() - 1].dir;
        let vertex = CSOVertex::from_hulls(hulls, &-closest_dir);

        if simplex.vertices().iter().any(|v| v.ids == vertex.ids) {
            // The polytope cannot grow past this support: the closest face
            // is on the CSO surface.
            break;
        }

        simplex.push(vertex);
        reconstruct(simplex, &mut faces);
    }

    // The closest face carries the contact feature: collapse the simplex
    // onto it and recover the barycentric weights.
    let closest = &faces[faces.len() - 1];
    let feature = [
        simplex.vertices()[closest.ids[0]],
        simplex.vertices()[closest.ids[1]],
        simplex.vertices()[closest.ids[2]],
    ];
    simplex.clear();
    for v in feature {
        simplex.push(v);
    }

    let _ = simplex.reduce();
    *dir = simplex.project_origin();

    -dir.norm()
}

/// Builds the face over `ids` and appends it with an outward orientation.
///
/// The outward normal of a freshly built face must not oppose its own
/// direction from the origin; the corner order is flipped when it does.
fn push_oriented_face(simplex: &VoronoiSimplex, ids: [usize; 3], faces: &mut Vec<Face>) {
    let mut face = Face::new(simplex, ids);
    if face.normal(simplex).dot(&face.dir) < 0.0 {
        face.ids.swap(1, 2);
    }
    faces.push(face);
}

/// Expands the polytope with the newest simplex vertex.
///
/// Faces the new vertex can see are removed; their directed edges are
/// toggled through a transient silhouette set so only the boundary between
/// visible and hidden faces survives; each silhouette edge is then stitched
/// to the new vertex, preserving the closed orientable surface.
fn reconstruct(simplex: &VoronoiSimplex, faces: &mut Vec<Face>) {
    let mut silhouette: SmallVec<[[usize; 2]; 16]> = SmallVec::new();

    let apex = simplex.len() - 1;
    let apex_point = simplex.vertices()[apex].point;

    let mut i = faces.len();
    while i > 0 {
        i -= 1;

        let base = simplex.vertices()[faces[i].ids[0]].point;
        if faces[i].normal(simplex).dot(&(apex_point - base)) <= 0.0 {
            // The apex is behind this face, which therefore survives.
            continue;
        }

        for j in 0..3 {
            let k = (j + 1) % 3;
            let edge = [faces[i].ids[j], faces[i].ids[k]];

            if let Some(pos) = silhouette.iter().position(|e| *e == edge) {
                // The reversed twin was toggled in by an adjacent visible
                // face: this edge is interior, not silhouette.
                let _ = silhouette.remove(pos);
            } else {
                silhouette.push([edge[1], edge[0]]);
            }
        }

        let _ = faces.remove(i);
    }

    for edge in &silhouette {
        let face = Face::new(simplex, [edge[1], edge[0], apex]);

        // Insertion sort from the tail keeps the list in descending
        // distance order.
        let at = faces
            .iter()
            .rposition(|f| face.dist <= f.dist)
            .map(|i| i + 1)
            .unwrap_or(0);
        faces.insert(at, face);
    }
}
