//! Distance and penetration-depth queries between convex hulls.

pub use self::closest_points::ClosestPoints;

pub mod closest_points;
pub mod epa;
pub mod gjk;
