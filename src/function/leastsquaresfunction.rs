use log::{debug, trace};

use crate::function::function::Function;
use crate::function::functionerror::FunctionError;
use crate::geometry::pointset::PointSet;

/// Smallest positive subnormal `f64`.
const SMALLEST_NONZERO: f64 = f64::from_bits(1);

// ─────────────────────────────────────────────────────────────────────────────
// LeastSquaresFunction - online simple linear regression
// ─────────────────────────────────────────────────────────────────────────────
//
// Keeps running means and centered sums instead of the points themselves. For
// the k-th point after the first, with dx = x - x_bar, dy = y - y_bar:
//
//   sum_xx += dx*dx * k/(k+1)    x_bar += dx/(k+1)
//   sum_yy += dy*dy * k/(k+1)    y_bar += dy/(k+1)
//   sum_xy += dx*dy * k/(k+1)
//
// The centered sums are updated before the means; swapping the order breaks
// the recurrence.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeastSquaresFunction {
    sum_x: f64,
    sum_xx: f64,
    sum_y: f64,
    sum_yy: f64,
    sum_xy: f64,
    x_bar: f64,
    y_bar: f64,
    count: usize,
}

impl LeastSquaresFunction {
    pub fn new(points: Option<&PointSet>) -> LeastSquaresFunction {
        let mut function = LeastSquaresFunction::default();
        if let Some(points) = points {
            function.append_points(points);
            debug!("least squares function seeded with {} points", function.count);
        }
        function
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn append_point(&mut self, x: f64, y: f64) {
        if self.count == 0 {
            self.x_bar = x;
            self.y_bar = y;
        } else {
            let k = self.count as f64;
            let dx = x - self.x_bar;
            let dy = y - self.y_bar;

            self.sum_xx += dx * dx * k / (k + 1.0);
            self.sum_yy += dy * dy * k / (k + 1.0);
            self.sum_xy += dx * dy * k / (k + 1.0);

            self.x_bar += dx / (k + 1.0);
            self.y_bar += dy / (k + 1.0);
        }

        self.sum_x += x;
        self.sum_y += y;
        self.count += 1;
        trace!("appended ({}, {}), count = {}", x, y, self.count);
    }

    pub fn append_points(&mut self, points: &PointSet) {
        points.for_each(|point| self.append_point(point.x(), point.y()));
    }

    /// `sum_xy / sum_xx`, or NaN with fewer than two points or no spread in x.
    pub fn slope(&self) -> f64 {
        if self.count < 2 {
            debug!("slope undefined: only {} points appended", self.count);
            return f64::NAN;
        }
        if self.sum_xx.abs() < 10.0 * SMALLEST_NONZERO {
            debug!("slope undefined: no variation in x over {} points", self.count);
            return f64::NAN;
        }
        self.sum_xy / self.sum_xx
    }

    pub fn intercept(&self, slope: f64) -> f64 {
        (self.sum_y - slope * self.sum_x) / self.count as f64
    }

    /// Regression line at `x`; NaN while the slope is undefined.
    pub fn value(&self, x: f64) -> f64 {
        let slope = self.slope();
        self.intercept(slope) + slope * x
    }
}

impl Function for LeastSquaresFunction {
    fn eval(&self, x: f64) -> Result<f64, FunctionError> {
        Ok(self.value(x))
    }
}
