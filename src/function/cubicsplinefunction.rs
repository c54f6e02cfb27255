use log::debug;

use crate::function::function::Function;
use crate::function::functionerror::FunctionError;
use crate::function::polynomialfunction::PolynomialFunction;
use crate::geometry::pointset::PointSet;

const NECESSARY_POINTS: usize = 3;

// ─────────────────────────────────────────────
// Natural cubic spline coefficients
// ─────────────────────────────────────────────
//
// Second derivative is zero at both ends. The tridiagonal system for the
// quadratic coefficients c is solved by forward elimination (mu, z) and back
// substitution; with h[i] = x[i+1] - x[i] each interval gets
//   S_i(t) = y[i] + b[i]*t + c[i]*t^2 + d[i]*t^3,   t = x - x[i]

fn generate_natural_cubic_coef_list(points: &PointSet) -> Result<Vec<Vec<f64>>, FunctionError> {
    let intervals = points.len() - 1;
    let h = (0..intervals)
        .map(|i| points.x_difference(i + 1, i))
        .collect::<Result<Vec<f64>, _>>()?;

    // mu[0] = z[0] = 0
    let mut mu = vec![0.0; intervals];
    let mut z = vec![0.0; points.len()];

    for i in 1..intervals {
        let span = points.x_difference(i + 1, i - 1)?;
        let g = 2.0 * span - h[i - 1] * mu[i - 1];
        mu[i] = h[i] / g;
        z[i] = (3.0 * (points.y_at(i + 1)? * h[i - 1] - points.y_at(i)? * span + points.y_at(i - 1)? * h[i])
            / (h[i - 1] * h[i])
            - h[i - 1] * z[i - 1])
            / g;
    }

    // c[n-1] = 0
    let mut b = vec![0.0; intervals];
    let mut c = vec![0.0; points.len()];
    let mut d = vec![0.0; intervals];

    for i in (0..intervals).rev() {
        c[i] = z[i] - mu[i] * c[i + 1];
        b[i] = points.y_difference(i + 1, i)? / h[i] - h[i] * (c[i + 1] + 2.0 * c[i]) / 3.0;
        d[i] = (c[i + 1] - c[i]) / (3.0 * h[i]);
    }

    (0..intervals)
        .map(|i| -> Result<Vec<f64>, FunctionError> { Ok(vec![points.y_at(i)?, b[i], c[i], d[i]]) })
        .collect()
}

// ─────────────────────────────────────────────
// CubicSplineFunction
// ─────────────────────────────────────────────

/// Natural cubic spline through the points of a `PointSet`, which must be
/// sorted ascending by x without duplicates. The set is borrowed for the
/// lifetime of the spline and re-read for every domain check.
#[derive(Debug)]
pub struct CubicSplineFunction<'a> {
    polynomials: Vec<PolynomialFunction>,
    points: &'a PointSet,
}

impl<'a> CubicSplineFunction<'a> {
    pub fn new(points: &'a PointSet) -> Result<CubicSplineFunction<'a>, FunctionError> {
        if points.len() < NECESSARY_POINTS {
            return Err(FunctionError::TooFewPoints { got: points.len(), min: NECESSARY_POINTS });
        }

        let polynomials = generate_natural_cubic_coef_list(points)?
            .into_iter()
            .map(PolynomialFunction::new)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("natural cubic spline built over {} intervals", polynomials.len());
        Ok(CubicSplineFunction { polynomials, points })
    }

    pub fn points(&self) -> &'a PointSet {
        self.points
    }

    /// Local polynomial of interval `i`, in the variable `x - x[i]`.
    pub fn polynomial(&self, i: usize) -> Option<&PolynomialFunction> {
        self.polynomials.get(i)
    }

    fn domain_error(&self, x: f64) -> FunctionError {
        match self.points.x_bounds() {
            Some((min, _)) if x < min => FunctionError::BelowDomain { x, min },
            Some((_, max)) if x > max => FunctionError::AboveDomain { x, max },
            _ => FunctionError::NotANumber,
        }
    }

    /// Interval `i` with `x[i] <= x < x[i+1]`; the last knot belongs to the
    /// last interval.
    fn find_segment(&self, x: f64) -> usize {
        let next = self.points.search_next_index(x);
        next.saturating_sub(1).min(self.polynomials.len() - 1)
    }
}

impl Function for CubicSplineFunction<'_> {
    fn eval(&self, x: f64) -> Result<f64, FunctionError> {
        if !self.points.x_in_range(x) {
            return Err(self.domain_error(x));
        }

        let i = self.find_segment(x);
        // the last knot sits at the right end of its interval
        if x == self.points.x_at(i + 1)? {
            return Ok(self.points.y_at(i + 1)?);
        }
        let lhs_x = self.points.x_at(i)?;
        Ok(self.polynomials[i].value(x - lhs_x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knots() -> PointSet {
        let mut points = PointSet::new();
        for (x, y) in [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0)] {
            points.append_point(x, y);
        }
        points
    }

    #[test]
    fn too_few_points() {
        let mut points = PointSet::new();
        points.append_point(0.0, 0.0);
        points.append_point(1.0, 1.0);
        assert_eq!(
            CubicSplineFunction::new(&points).unwrap_err(),
            FunctionError::TooFewPoints { got: 2, min: 3 }
        );
    }

    #[test]
    fn natural_boundary() {
        let points = knots();
        let spline = CubicSplineFunction::new(&points).unwrap();
        // second derivative 2c vanishes at x[0]
        assert_eq!(spline.polynomial(0).unwrap().coefficients()[2], 0.0);
        // and at x[n-1], where the last piece's second derivative is 2c + 6d*h
        let last = spline.polynomial(2).unwrap().coefficients();
        assert!((2.0 * last[2] + 6.0 * last[3]).abs() < 1e-12);
        assert!(spline.polynomial(3).is_none());
    }

    #[test]
    fn find_segment_clamps_last_knot() {
        let points = knots();
        let spline = CubicSplineFunction::new(&points).unwrap();
        assert_eq!(spline.find_segment(0.0), 0);
        assert_eq!(spline.find_segment(0.5), 0);
        assert_eq!(spline.find_segment(1.0), 1);
        assert_eq!(spline.find_segment(2.999), 2);
        assert_eq!(spline.find_segment(3.0), 2);
    }

    #[test]
    fn last_knot_is_exact() {
        let points = knots();
        let spline = CubicSplineFunction::new(&points).unwrap();
        assert!(std::ptr::eq(spline.points(), &points));
        assert_eq!(spline.eval(3.0), Ok(1.0));
        assert_eq!(spline.eval(3.0).unwrap().to_bits(), 1.0f64.to_bits());
    }

    #[test]
    fn domain_errors_are_typed() {
        let points = knots();
        let spline = CubicSplineFunction::new(&points).unwrap();
        assert_eq!(spline.eval(-0.5), Err(FunctionError::BelowDomain { x: -0.5, min: 0.0 }));
        assert_eq!(spline.eval(3.5), Err(FunctionError::AboveDomain { x: 3.5, max: 3.0 }));
        assert_eq!(spline.eval(f64::NAN), Err(FunctionError::NotANumber));
    }
}
