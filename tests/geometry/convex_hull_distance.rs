use approx::{assert_relative_eq, relative_eq};
use closest3d::math::{Point, Real};
use closest3d::query::ClosestPoints;

fn cluster9() -> Vec<Point<Real>> {
    vec![
        Point::new(0.0, 5.5, 0.0),
        Point::new(2.3, 1.0, -2.0),
        Point::new(8.1, 4.0, 2.4),
        Point::new(4.3, 5.0, 2.2),
        Point::new(2.5, 1.0, 2.3),
        Point::new(7.1, 1.0, 2.4),
        Point::new(1.0, 1.5, 0.3),
        Point::new(3.3, 0.5, 0.3),
        Point::new(6.0, 1.4, 0.2),
    ]
}

fn assert_nonnegative_distance(
    expected: Real,
    hull0: &[Point<Real>],
    hull1: &[Point<Real>],
) -> ClosestPoints {
    let mut measure = ClosestPoints::new();
    let distance = measure.nonnegative_distance(hull0, hull1);

    assert_eq!(distance, expected);
    assert_eq!(measure.distance, expected);
    measure
}

#[test]
fn separated_cluster_and_segment() {
    let hull1 = [Point::new(0.0, -5.5, 0.0), Point::new(-4.0, 1.0, 5.0)];
    let _ = assert_nonnegative_distance(5.233333333333333, &cluster9(), &hull1);
}

#[test]
fn separated_collinear_segment_and_box() {
    // The segment is parallel to four of the box edges, which exercises the
    // support-cycle termination.
    let hull0 = [
        Point::new(10.0, 10.0, 10.0),
        Point::new(93.76614808098593, 10.0, 10.0),
    ];
    let hull1 = [
        Point::new(26.902334690093994, 7.686383247375488, 12.0),
        Point::new(30.745525360107422, 7.686383247375488, 12.0),
        Point::new(30.745525360107422, 11.529574871063232, 12.0),
        Point::new(26.902334690093994, 11.529574871063232, 12.0),
        Point::new(26.902334690093994, 7.686383247375488, 13.0),
        Point::new(30.745525360107422, 7.686383247375488, 13.0),
        Point::new(30.745525360107422, 11.529574871063232, 13.0),
        Point::new(26.902334690093994, 11.529574871063232, 13.0),
    ];

    let _ = assert_nonnegative_distance(2.0, &hull0, &hull1);
}

#[test]
fn separated_segment_and_parallel_rectangle() {
    let hull0 = [
        Point::new(24.80916023254391, -436.06686488070386, 1.0),
        Point::new(24.809160232543945, 149.8855333328247, 1.0),
    ];
    let hull1 = [
        Point::new(503.46153831481934, 0.0, 0.0),
        Point::new(503.46153831481934, 299.7710666656494, 0.0),
        Point::new(503.46153831481934, 299.7710666656494, 2.0),
        Point::new(503.46153831481934, 0.0, 2.0),
    ];

    let _ = assert_nonnegative_distance(478.65237808227545, &hull0, &hull1);
}

#[test]
fn separated_short_segment_and_large_box() {
    let hull0 = [
        Point::new(231.13410161715001, 42.359085964038968, 8.2070553228259087),
        Point::new(231.13428923673928, 42.360740889096633, 8.3670506989583373),
    ];
    let hull1 = [
        Point::new(1126.8901406135462, 506.76397722481852, -991.48334605572745),
        Point::new(-694.78953127471266, -318.69762289359494, -991.48334605572745),
        Point::new(-694.78953127471266, -318.69762289359494, 1008.5166539442725),
        Point::new(1126.8901406135462, 506.76397722481852, 1008.5166539442725),
    ];

    let _ = assert_nonnegative_distance(53.29158003236736, &hull0, &hull1);
}

#[test]
fn empty_hull_short_circuits() {
    let hull = [Point::new(1.0, 2.0, 3.0)];

    let mut measure = ClosestPoints::new();
    assert_eq!(measure.nonnegative_distance(&hull, &[]), 0.0);
    assert_eq!(measure.points[0], Point::origin());
    assert_eq!(measure.points[1], Point::origin());
    assert!(measure.on[0].is_empty());
    assert!(measure.on[1].is_empty());

    assert_eq!(measure.signed_distance(&[], &hull), 0.0);
    assert!(measure.on[0].is_empty());
    assert!(measure.on[1].is_empty());
}

#[test]
fn warm_start_is_idempotent() {
    let hull0 = cluster9();
    let hull1 = [Point::new(0.0, -5.5, 0.0), Point::new(-4.0, 1.0, 5.0)];

    let mut measure = ClosestPoints::new();
    let first = measure.nonnegative_distance(&hull0, &hull1);
    let first_dir = measure.dir;
    let first_points = measure.points;
    let first_on = measure.on.clone();

    let second = measure.nonnegative_distance(&hull0, &hull1);

    assert_relative_eq!(second, first, max_relative = 1.0e-12);
    assert_relative_eq!(measure.dir, first_dir, max_relative = 1.0e-12);
    assert_relative_eq!(measure.points[0], first_points[0], max_relative = 1.0e-12);
    assert_relative_eq!(measure.points[1], first_points[1], max_relative = 1.0e-12);
    assert_eq!(measure.on, first_on);
}

#[test]
fn axis_aligned_warm_start_is_exact() {
    let hull0 = [
        Point::new(10.0, 10.0, 10.0),
        Point::new(93.76614808098593, 10.0, 10.0),
    ];
    let hull1 = [
        Point::new(26.902334690093994, 7.686383247375488, 12.0),
        Point::new(30.745525360107422, 7.686383247375488, 12.0),
        Point::new(30.745525360107422, 11.529574871063232, 12.0),
        Point::new(26.902334690093994, 11.529574871063232, 12.0),
        Point::new(26.902334690093994, 7.686383247375488, 13.0),
        Point::new(30.745525360107422, 7.686383247375488, 13.0),
        Point::new(30.745525360107422, 11.529574871063232, 13.0),
        Point::new(26.902334690093994, 11.529574871063232, 13.0),
    ];

    let mut measure = ClosestPoints::new();
    assert_eq!(measure.nonnegative_distance(&hull0, &hull1), 2.0);
    assert_eq!(measure.nonnegative_distance(&hull0, &hull1), 2.0);
}

#[test]
fn swapped_hulls_mirror_the_result() {
    let hull0 = cluster9();
    let hull1 = [Point::new(0.0, -5.5, 0.0), Point::new(-4.0, 1.0, 5.0)];

    let mut forward = ClosestPoints::new();
    let mut backward = ClosestPoints::new();
    let d0 = forward.nonnegative_distance(&hull0, &hull1);
    let d1 = backward.nonnegative_distance(&hull1, &hull0);

    assert_relative_eq!(d0, d1, max_relative = 1.0e-9);
    assert_relative_eq!(forward.dir, -backward.dir, max_relative = 1.0e-7);
    assert_relative_eq!(forward.points[0], backward.points[1], max_relative = 1.0e-7);
    assert_relative_eq!(forward.points[1], backward.points[0], max_relative = 1.0e-7);
}

#[test]
fn direction_matches_the_witness_points() {
    let hull1 = [Point::new(0.0, -5.5, 0.0), Point::new(-4.0, 1.0, 5.0)];
    let measure = assert_nonnegative_distance(5.233333333333333, &cluster9(), &hull1);

    assert_relative_eq!(measure.dir.norm(), measure.distance, max_relative = 1.0e-12);
    assert_relative_eq!(
        measure.dir,
        measure.points[1] - measure.points[0],
        max_relative = 1.0e-9,
        epsilon = 1.0e-12
    );
}

#[test]
fn witness_points_lie_on_their_features() {
    let hull0 = cluster9();
    let hull1 = [Point::new(0.0, -5.5, 0.0), Point::new(-4.0, 1.0, 5.0)];
    let measure = assert_nonnegative_distance(5.233333333333333, &hull0, &hull1);

    for (hull, (point, on)) in [&hull0[..], &hull1[..]]
        .iter()
        .zip(measure.points.iter().zip(measure.on.iter()))
    {
        assert!(!on.is_empty());
        for k in 0..3 {
            let min = on.iter().map(|&i| hull[i][k]).fold(Real::INFINITY, Real::min);
            let max = on
                .iter()
                .map(|&i| hull[i][k])
                .fold(Real::NEG_INFINITY, Real::max);
            assert!(
                point[k] >= min - 1.0e-9 && point[k] <= max + 1.0e-9,
                "witness point escapes its supporting feature"
            );
        }
    }
}

#[test]
fn measure_is_reusable_across_hull_pairs() {
    let cluster = cluster9();
    let segment = [Point::new(0.0, -5.5, 0.0), Point::new(-4.0, 1.0, 5.0)];
    let far_segment = [
        Point::new(10.0, 10.0, 10.0),
        Point::new(93.76614808098593, 10.0, 10.0),
    ];
    let box8 = [
        Point::new(26.902334690093994, 7.686383247375488, 12.0),
        Point::new(30.745525360107422, 7.686383247375488, 12.0),
        Point::new(30.745525360107422, 11.529574871063232, 12.0),
        Point::new(26.902334690093994, 11.529574871063232, 12.0),
        Point::new(26.902334690093994, 7.686383247375488, 13.0),
        Point::new(30.745525360107422, 7.686383247375488, 13.0),
        Point::new(30.745525360107422, 11.529574871063232, 13.0),
        Point::new(26.902334690093994, 11.529574871063232, 13.0),
    ];

    let mut measure = ClosestPoints::new();
    assert_eq!(
        measure.nonnegative_distance(&cluster, &segment),
        5.233333333333333
    );

    // A warm start inherited from unrelated geometry must not corrupt the
    // next measurement.
    assert!(relative_eq!(
        measure.nonnegative_distance(&far_segment, &box8),
        2.0,
        max_relative = 1.0e-9
    ));
    assert!(relative_eq!(
        measure.nonnegative_distance(&cluster, &segment),
        5.233333333333333,
        max_relative = 1.0e-9
    ));
}
