//! The GJK algorithm for distance computation.

pub use self::cso_vertex::CSOVertex;
pub use self::gjk::closest_point;
pub use self::voronoi_simplex::{SimplexReduction, VoronoiSimplex};

mod cso_vertex;
mod gjk;
mod voronoi_simplex;
