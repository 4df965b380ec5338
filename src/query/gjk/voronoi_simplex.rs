use crate::math::{Real, Vector};
use crate::query::gjk::CSOVertex;
use smallvec::SmallVec;

/// The outcome of a simplex reduction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimplexReduction {
    /// The simplex was replaced by the sub-simplex whose Voronoi region
    /// contains the origin, and the retained vertices carry fresh weights.
    Reduced,
    /// The simplex lost rank: a collinear triangle, a flat tetrahedron, or
    /// an origin sitting exactly on a face's affine extension. The vertices
    /// and their weights are left untouched.
    Degenerate,
}

/// A simplex of the CSO using Voronoi regions for computing origin projections.
///
/// The simplex holds one to four vertices while GJK runs. EPA pushes more:
/// vertices past the fourth only serve as polytope corners and are never
/// handed to [`reduce`](VoronoiSimplex::reduce).
#[derive(Clone, Debug, Default)]
pub struct VoronoiSimplex {
    vertices: SmallVec<[CSOVertex; 4]>,
}

impl VoronoiSimplex {
    /// Creates a new empty simplex.
    pub fn new() -> VoronoiSimplex {
        VoronoiSimplex::default()
    }

    /// The number of vertices currently on this simplex.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// The vertices of this simplex, in insertion order.
    pub fn vertices(&self) -> &[CSOVertex] {
        &self.vertices
    }

    /// Removes every vertex from this simplex.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Appends one vertex to this simplex.
    pub fn push(&mut self, vertex: CSOVertex) {
        self.vertices.push(vertex);
    }

    /// Removes the newest vertex from this simplex.
    pub fn pop(&mut self) {
        let _ = self.vertices.pop();
    }

    /// Checks whether the newest vertex closes a support cycle.
    ///
    /// On hulls with parallel or coplanar features, the support queries can
    /// revisit index pairs forever while producing the same CSO coordinates.
    /// Such a cycle shows up as a chain of older vertices linked by shared
    /// source indices, alternating between the two hulls, that joins the
    /// newest vertex back to itself. A newest vertex duplicating an existing
    /// index pair is the shortest such chain.
    pub fn detect_support_cycle(&mut self) -> bool {
        self.has_cycle_from(self.vertices.len() - 1, 0)
    }

    // Walk depth is bounded by the simplex size times the two-way
    // alternation, so the recursion stays shallow.
    fn has_cycle_from(&mut self, i: usize, side: usize) -> bool {
        let last = self.vertices.len() - 1;

        for k in 0..last {
            if self.vertices[k].visited {
                continue;
            }
            if self.vertices[k].ids[side] != self.vertices[i].ids[side] {
                continue;
            }

            self.vertices[k].visited = true;
            let other = (side + 1) % 2;

            if self.vertices[last].ids[other] == self.vertices[k].ids[other]
                || self.has_cycle_from(k, other)
            {
                self.vertices[k].visited = false;
                return true;
            }

            self.vertices[k].visited = false;
        }

        false
    }

    /// Replaces this simplex by the sub-simplex whose Voronoi region
    /// contains the origin, writing an unnormalized barycentric weight on
    /// every retained vertex.
    ///
    /// The weights are raw scalar triple products: their absolute scale is
    /// meaningless, only their ratios matter, and keeping them unnormalized
    /// preserves the conditioning of the inputs. Region tests use strict
    /// comparisons on the positive side and non-strict on the negative side,
    /// so exact-zero ties collapse toward the lower-dimensional feature; a
    /// retained vertex with a zero weight would misdirect the next support
    /// query.
    ///
    /// Vertex insertion order is meaningful: a k-simplex produced by GJK has
    /// its newest vertex nearest the origin along the last search direction,
    /// which is why the regions behind the older vertices need no test.
    pub fn reduce(&mut self) -> SimplexReduction {
        match self.vertices.len() {
            1 => {
                self.vertices[0].bcoord = 1.0;
            }
            2 => {
                let a = self.vertices[0].point.coords;
                let b = self.vertices[1].point.coords;

                let ab = b - a;

                let u = b.dot(&ab);
                if u <= 0.0 {
                    // Vertex region B.
                    self.vertices[0] = self.vertices[1];
                    self.vertices.truncate(1);
                    self.vertices[0].bcoord = 1.0;
                    return SimplexReduction::Reduced;
                }

                // Edge region AB.
                let v = -a.dot(&ab);

                self.vertices[0].bcoord = u;
                self.vertices[1].bcoord = v;
            }
            3 => {
                let a = self.vertices[0].point.coords;
                let b = self.vertices[1].point.coords;
                let c = self.vertices[2].point.coords;

                let ab = b - a;
                let ac = c - a;
                let bc = c - b;

                let u_bc = c.dot(&bc);
                let u_ac = c.dot(&ac);

                if u_bc <= 0.0 && u_ac <= 0.0 {
                    // Vertex region C.
                    self.vertices[0] = self.vertices[2];
                    self.vertices.truncate(1);
                    self.vertices[0].bcoord = 1.0;
                    return SimplexReduction::Reduced;
                }

                let v_bc = -b.dot(&bc);

                let n = ab.cross(&ac);
                if n.x == 0.0 && n.y == 0.0 && n.z == 0.0 {
                    // Collinear triangle.
                    return SimplexReduction::Degenerate;
                }
                let n1 = b.cross(&c);

                let u_abc = n1.dot(&n);

                if u_abc <= 0.0 && u_bc > 0.0 && v_bc > 0.0 {
                    // Edge region BC.
                    self.vertices[0] = self.vertices[1];
                    self.vertices[1] = self.vertices[2];
                    self.vertices.truncate(2);

                    self.vertices[0].bcoord = u_bc;
                    self.vertices[1].bcoord = v_bc;
                    return SimplexReduction::Reduced;
                }

                let v_ac = -a.dot(&ac);

                let n2 = c.cross(&a);

                let v_abc = n2.dot(&n);

                if v_abc <= 0.0 && u_ac > 0.0 && v_ac > 0.0 {
                    // Edge region AC.
                    self.vertices[1] = self.vertices[2];
                    self.vertices.truncate(2);

                    self.vertices[0].bcoord = u_ac;
                    self.vertices[1].bcoord = v_ac;
                    return SimplexReduction::Reduced;
                }

                // Face region ABC.
                let n3 = a.cross(&b);

                let w_abc = n3.dot(&n);

                self.vertices[0].bcoord = u_abc;
                self.vertices[1].bcoord = v_abc;
                self.vertices[2].bcoord = w_abc;
            }
            4 => {
                let a = self.vertices[0].point.coords;
                let b = self.vertices[1].point.coords;
                let c = self.vertices[2].point.coords;
                let d = self.vertices[3].point.coords;

                let ad = d - a;
                let bd = d - b;
                let cd = d - c;

                let u_bd = d.dot(&bd);
                let u_cd = d.dot(&cd);
                let u_ad = d.dot(&ad);

                if u_bd <= 0.0 && u_cd <= 0.0 && u_ad <= 0.0 {
                    // Vertex region D.
                    self.vertices[0] = self.vertices[3];
                    self.vertices.truncate(1);

                    self.vertices[0].bcoord = 1.0;
                    return SimplexReduction::Reduced;
                }

                let ab = b - a;
                let ac = c - a;
                let bc = c - b;

                let v_bd = -b.dot(&bd);
                let v_cd = -c.dot(&cd);
                let v_ad = -a.dot(&ad);

                let mut n = ad.cross(&ab);
                let mut n1 = d.cross(&b);
                let mut n2 = b.cross(&a);
                let mut n3 = a.cross(&d);

                let u_adb = n1.dot(&n);
                let v_adb = n2.dot(&n);
                let w_adb = n3.dot(&n);

                n = ac.cross(&ad);
                n1 = c.cross(&d);
                n2 = d.cross(&a);
                n3 = a.cross(&c);

                let u_acd = n1.dot(&n);
                let v_acd = n2.dot(&n);
                let w_acd = n3.dot(&n);

                n = (-bc).cross(&cd);
                n1 = b.cross(&d);
                n2 = d.cross(&c);
                n3 = c.cross(&b);

                let u_cbd = n1.dot(&n);
                let v_cbd = n2.dot(&n);
                let w_cbd = n3.dot(&n);

                if v_cbd <= 0.0 && u_acd <= 0.0 && u_cd > 0.0 && v_cd > 0.0 {
                    // Edge region DC.
                    self.vertices[0] = self.vertices[2];
                    self.vertices[1] = self.vertices[3];
                    self.vertices.truncate(2);

                    self.vertices[0].bcoord = u_cd;
                    self.vertices[1].bcoord = v_cd;
                    return SimplexReduction::Reduced;
                }

                if v_acd <= 0.0 && w_adb <= 0.0 && u_ad > 0.0 && v_ad > 0.0 {
                    // Edge region AD.
                    self.vertices[1] = self.vertices[3];
                    self.vertices.truncate(2);

                    self.vertices[0].bcoord = u_ad;
                    self.vertices[1].bcoord = v_ad;
                    return SimplexReduction::Reduced;
                }

                if u_cbd <= 0.0 && u_adb <= 0.0 && u_bd > 0.0 && v_bd > 0.0 {
                    // Edge region BD.
                    self.vertices[0] = self.vertices[1];
                    self.vertices[1] = self.vertices[3];
                    self.vertices.truncate(2);

                    self.vertices[0].bcoord = u_bd;
                    self.vertices[1].bcoord = v_bd;
                    return SimplexReduction::Reduced;
                }

                let volume = -bc.cross(&ab).dot(&bd);
                if volume == 0.0 {
                    // Flat tetrahedron.
                    return SimplexReduction::Degenerate;
                }
                let volume_inv = 1.0 / volume;

                // A barycentric numerator at exactly zero means the origin
                // sits on a face's affine extension, which this branch
                // cannot resolve cleanly.
                let u_abcd = c.cross(&d).dot(&b) * volume_inv;
                if u_abcd == 0.0 {
                    return SimplexReduction::Degenerate;
                }
                let v_abcd = c.cross(&a).dot(&d) * volume_inv;
                if v_abcd == 0.0 {
                    return SimplexReduction::Degenerate;
                }
                let w_abcd = d.cross(&a).dot(&b) * volume_inv;
                if w_abcd == 0.0 {
                    return SimplexReduction::Degenerate;
                }
                let x_abcd = b.cross(&a).dot(&c) * volume_inv;
                if x_abcd == 0.0 {
                    return SimplexReduction::Degenerate;
                }

                if u_abcd < 0.0 && u_cbd > 0.0 && v_cbd > 0.0 && w_cbd > 0.0 {
                    // Face region CBD.
                    self.vertices[0] = self.vertices[1];
                    self.vertices[1] = self.vertices[2];
                    self.vertices[2] = self.vertices[3];
                    self.vertices.truncate(3);

                    self.vertices[0].bcoord = v_cbd;
                    self.vertices[1].bcoord = u_cbd;
                    self.vertices[2].bcoord = w_cbd;
                    return SimplexReduction::Reduced;
                }
                if v_abcd < 0.0 && u_acd > 0.0 && v_acd > 0.0 && w_acd > 0.0 {
                    // Face region ACD.
                    self.vertices[1] = self.vertices[2];
                    self.vertices[2] = self.vertices[3];
                    self.vertices.truncate(3);

                    self.vertices[0].bcoord = u_acd;
                    self.vertices[1].bcoord = v_acd;
                    self.vertices[2].bcoord = w_acd;
                    return SimplexReduction::Reduced;
                }
                if w_abcd < 0.0 && u_adb > 0.0 && v_adb > 0.0 && w_adb > 0.0 {
                    // Face region ADB.
                    self.vertices[2] = self.vertices[3];
                    self.vertices.truncate(3);

                    self.vertices[0].bcoord = u_adb;
                    self.vertices[1].bcoord = w_adb;
                    self.vertices[2].bcoord = v_adb;
                    return SimplexReduction::Reduced;
                }

                // Interior region ABCD.
                self.vertices[0].bcoord = u_abcd;
                self.vertices[1].bcoord = v_abcd;
                self.vertices[2].bcoord = w_abcd;
                self.vertices[3].bcoord = x_abcd;
            }
            _ => unreachable!("the simplex must have 1 to 4 vertices"),
        }

        SimplexReduction::Reduced
    }

    /// Projects the origin onto the affine hull of this simplex.
    ///
    /// Returns the vector from the origin to its projection; a full
    /// 4-simplex contains the origin, so the projection is the zero vector.
    pub fn project_origin(&self) -> Vector<Real> {
        match self.vertices.len() {
            1 => self.vertices[0].point.coords,
            2 => {
                let a = self.vertices[0].point.coords;
                let b = self.vertices[1].point.coords;

                let diff = a - b;
                let t = a.dot(&diff) / diff.norm_squared();
                a - diff * t
            }
            3 => {
                let a = self.vertices[0].point.coords;
                let ba = a - self.vertices[1].point.coords;
                let ca = a - self.vertices[2].point.coords;

                let n = ba.cross(&ca);
                let scale = n.dot(&a) / n.norm_squared();
                n * scale
            }
            4 => Vector::zeros(),
            _ => unreachable!("the simplex must have 1 to 4 vertices"),
        }
    }
}
