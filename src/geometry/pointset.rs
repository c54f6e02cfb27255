use std::cmp::Ordering;
use std::fmt;
use std::slice::Iter;

use crate::function::cubicsplinefunction::CubicSplineFunction;
use crate::function::functionerror::FunctionError;
use crate::function::leastsquaresfunction::LeastSquaresFunction;
use crate::geometry::point::Point;
use crate::geometry::pointseterror::PointSetError;

// ─────────────────────────────────────────────
// PointSet
// ─────────────────────────────────────────────
//
// Insertion order is kept. Interpolation and `search_next_index` expect the
// points ascending by x without duplicate x values; the set doesn't enforce
// that, call `sort()` first when unsure.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>
}

impl PointSet {
    pub fn new() -> PointSet {
        PointSet { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> PointSet {
        PointSet { points: Vec::with_capacity(capacity) }
    }

    pub fn append_point(&mut self, x: f64, y: f64) {
        self.points.push(Point::new(x, y));
    }

    pub fn append_points(&mut self, other: &PointSet) {
        self.points.extend_from_slice(&other.points);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Point> {
        self.points.iter()
    }

    pub fn at(&self, index: usize) -> Result<Point, PointSetError> {
        self.points
            .get(index)
            .copied()
            .ok_or(PointSetError::IndexOutOfRange { index, len: self.points.len() })
    }

    pub fn x_at(&self, index: usize) -> Result<f64, PointSetError> {
        Ok(self.at(index)?.x())
    }

    pub fn y_at(&self, index: usize) -> Result<f64, PointSetError> {
        Ok(self.at(index)?.y())
    }

    /// `x[lhs] - x[rhs]`
    pub fn x_difference(&self, lhs: usize, rhs: usize) -> Result<f64, PointSetError> {
        Ok(self.x_at(lhs)? - self.x_at(rhs)?)
    }

    /// `y[lhs] - y[rhs]`
    pub fn y_difference(&self, lhs: usize, rhs: usize) -> Result<f64, PointSetError> {
        Ok(self.y_at(lhs)? - self.y_at(rhs)?)
    }

    /// Smallest and largest x over a full scan, `None` for an empty set.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        Some(self.points[1..].iter().fold((first.x(), first.x()), |(min_x, max_x), p| {
            (
                if p.x() < min_x { p.x() } else { min_x },
                if p.x() > max_x { p.x() } else { max_x },
            )
        }))
    }

    /// Whether `min(x) <= x <= max(x)`. Doesn't rely on the set being sorted.
    pub fn x_in_range(&self, x: f64) -> bool {
        self.x_bounds()
            .is_some_and(|(min_x, max_x)| min_x <= x && x <= max_x)
    }

    /// Leftmost index `i` with `x < points[i].x`, or `len()` if there is none.
    /// Only meaningful on a set sorted ascending by x.
    pub fn search_next_index(&self, x: f64) -> usize {
        self.points.partition_point(|p| p.x() <= x)
    }

    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Point),
    {
        self.points.iter().for_each(f);
    }

    /// Keeps every point for which `f` returns `Some`. The returned value is
    /// discarded: the new set holds the original points, so this filters
    /// rather than transforms.
    pub fn map<F>(&self, mut f: F) -> PointSet
    where
        F: FnMut(&Point) -> Option<Point>,
    {
        let mut points = Vec::with_capacity(self.points.len());
        for point in &self.points {
            if f(point).is_some() {
                points.push(*point);
            }
        }
        PointSet { points }
    }

    /// Copy of the half-open index range `[from, to)`.
    pub fn subset(&self, from: usize, to: usize) -> Result<PointSet, PointSetError> {
        self.points
            .get(from..to)
            .map(|slice| PointSet { points: slice.to_vec() })
            .ok_or(PointSetError::InvalidRange { from, to, len: self.points.len() })
    }

    /// Whether point `i` sorts before point `j`, by x first, then by y.
    pub fn less(&self, i: usize, j: usize) -> Result<bool, PointSetError> {
        let (lhs, rhs) = (self.at(i)?, self.at(j)?);
        Ok(lhs.partial_cmp(&rhs) == Some(Ordering::Less))
    }

    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), PointSetError> {
        let len = self.points.len();
        for index in [i, j] {
            if index >= len {
                return Err(PointSetError::IndexOutOfRange { index, len });
            }
        }
        self.points.swap(i, j);
        Ok(())
    }

    /// Stable sort by the same relation as `less`. Incomparable points (NaN
    /// coordinates) keep their relative order.
    pub fn sort(&mut self) {
        self.points
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    }

    pub fn cubic_spline_function(&self) -> Result<CubicSplineFunction<'_>, FunctionError> {
        CubicSplineFunction::new(self)
    }

    pub fn least_squares_function(&self) -> LeastSquaresFunction {
        LeastSquaresFunction::new(Some(self))
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        PointSet { points }
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        PointSet { points: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for point in &self.points {
            write!(f, "{}", point)?;
        }
        write!(f, "}}")
    }
}
