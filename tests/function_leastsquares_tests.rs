//! Tests for the online least squares regression.

use approx::assert_relative_eq;

use numerics::function::function::Function;
use numerics::function::leastsquaresfunction::LeastSquaresFunction;
use numerics::geometry::pointset::PointSet;

fn line_points() -> PointSet {
    let mut points = PointSet::new();
    for (x, y) in [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)] {
        points.append_point(x, y);
    }
    points
}

#[test]
fn test_exact_line() {
    let function = line_points().least_squares_function();
    let slope = function.slope();
    assert_relative_eq!(slope, 2.0, epsilon = 1e-9);
    assert_relative_eq!(function.intercept(slope), 1.0, epsilon = 1e-9);
    assert_relative_eq!(function.eval(-4.0).unwrap(), -7.0, epsilon = 1e-9);
}

#[test]
fn test_append_points_equals_append_point() {
    let points = line_points();
    let mut batched = LeastSquaresFunction::new(None);
    batched.append_points(&points);

    let mut single = LeastSquaresFunction::new(None);
    points.for_each(|p| single.append_point(p.x(), p.y()));

    assert_eq!(batched, single);
    assert_eq!(batched, LeastSquaresFunction::new(Some(&points)));
}

#[test]
fn test_noisy_fit() {
    // y = 0.5x - 2 with symmetric residuals that cancel out
    let mut function = LeastSquaresFunction::new(None);
    for (x, r) in [(-2.0, 0.1), (-1.0, -0.1), (1.0, -0.1), (2.0, 0.1)] {
        function.append_point(x, 0.5 * x - 2.0 + r);
    }
    assert_relative_eq!(function.slope(), 0.5, epsilon = 1e-12);
    assert_relative_eq!(function.value(0.0), -2.0, epsilon = 1e-12);
}

#[test]
fn test_large_offset_is_stable() {
    // naive sums of squares lose every digit at this offset
    let offset = 1e9;
    let mut function = LeastSquaresFunction::new(None);
    for i in 0..100 {
        let x = offset + i as f64;
        function.append_point(x, -3.0 * i as f64 + 4.0);
    }
    assert_relative_eq!(function.slope(), -3.0, epsilon = 1e-6);
}

#[test]
fn test_undefined_slope() {
    let mut function = LeastSquaresFunction::new(None);
    assert!(function.slope().is_nan());
    assert!(function.eval(0.0).unwrap().is_nan());

    function.append_point(5.0, 1.0);
    assert!(function.slope().is_nan());

    function.append_point(5.0, 9.0);
    assert!(function.slope().is_nan());
    assert_eq!(function.count(), 2);

    // recovers once x varies
    function.append_point(6.0, 5.0);
    assert!(!function.slope().is_nan());
}
