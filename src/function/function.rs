use crate::function::functionerror::FunctionError;
use crate::geometry::point::Point;
use crate::geometry::pointset::PointSet;

/// Shared evaluation contract of the numerical functions.
pub trait Function {
    fn eval(&self, x: f64) -> Result<f64, FunctionError>;

    fn eval_point(&self, x: f64) -> Result<Point, FunctionError> {
        Ok(Point::new(x, self.eval(x)?))
    }

    fn eval_points(&self, from_x: f64, to_x: f64, count: usize) -> Result<PointSet, FunctionError> {
        eval_points(self, from_x, to_x, count)
    }
}

/// Samples `function` at `from_x, from_x + step, ...` while `x < to_x`, with
/// `step = (to_x - from_x) / count`. The upper bound is never sampled, and
/// `count` only sizes the result: accumulated rounding may yield one sample
/// more or less.
pub fn eval_points<F>(function: &F, from_x: f64, to_x: f64, count: usize) -> Result<PointSet, FunctionError>
where
    F: Function + ?Sized,
{
    let step = (to_x - from_x) / count as f64;
    let mut points = PointSet::with_capacity(count);
    let mut x = from_x;

    while x < to_x {
        let y = function.eval(x)?;
        points.append_point(x, y);

        let next_x = x + step;
        // step too small to move x any further
        if next_x <= x {
            break;
        }
        x = next_x;
    }

    Ok(points)
}
