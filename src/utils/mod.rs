//! Various unsorted geometrical and logical operators.

pub use self::point_cloud_support_point::point_cloud_support_point_id;

mod point_cloud_support_point;
