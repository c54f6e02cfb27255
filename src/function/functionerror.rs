use thiserror::Error;

use crate::geometry::pointseterror::PointSetError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionError {
    #[error("polynomial needs at least one coefficient")]
    EmptyCoefficients,

    #[error("too few points: got {got}, need at least {min}")]
    TooFewPoints { got: usize, min: usize },

    #[error("x = {x} below domain starting at {min}")]
    BelowDomain { x: f64, min: f64 },

    #[error("x = {x} above domain ending at {max}")]
    AboveDomain { x: f64, max: f64 },

    #[error("x is not a number")]
    NotANumber,

    #[error(transparent)]
    PointSet(#[from] PointSetError),
}

impl FunctionError {
    /// Whether the error comes from evaluating outside the defined x range.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            FunctionError::BelowDomain { .. } | FunctionError::AboveDomain { .. } | FunctionError::NotANumber
        )
    }
}
