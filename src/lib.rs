/*!
closest3d
=========

**closest3d** measures two convex hulls, given as vertex lists, against each
other: the closest points on both hulls, the separation distance between them
and, when they overlap, the penetration depth (the length of the smallest
translation that separates them).

The entry point is [`query::ClosestPoints`], a reusable measurement value.
It persists the last separating direction across measurements, so repeated
queries on slowly moving geometry converge faster than cold starts.

Distances are computed with the Gilbert-Johnson-Keerthi (GJK) algorithm on
the Minkowski difference of the two vertex sets; penetration depths with the
Expanding Polytope Algorithm (EPA) seeded by the enclosing GJK simplex.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]

extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod math;
pub mod query;
pub mod utils;
