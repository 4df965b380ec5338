//! The EPA algorithm for penetration depth computation.

pub use self::epa3::penetration_depth;

mod epa3;
