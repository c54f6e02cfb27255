use std::fmt;

use crate::function::function::Function;
use crate::function::functionerror::FunctionError;

/// Dense polynomial, `coefficients[i]` belongs to `x^i`.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialFunction {
    coefficients: Vec<f64>
}

impl PolynomialFunction {
    pub fn new(coefficients: Vec<f64>) -> Result<PolynomialFunction, FunctionError> {
        if coefficients.is_empty() {
            return Err(FunctionError::EmptyCoefficients);
        }
        Ok(PolynomialFunction { coefficients })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Horner evaluation from the highest degree down.
    pub fn value(&self, x: f64) -> f64 {
        let Some((highest, lower)) = self.coefficients.split_last() else {
            return 0.0;
        };
        lower
            .iter()
            .rev()
            .fold(*highest, |result, &beta| f64::mul_add(result, x, beta))
    }

    /// The derivative; a constant differentiates to `[0.0]`.
    pub fn differentiate(&self) -> PolynomialFunction {
        let coefficients = if self.coefficients.len() == 1 {
            vec![0.0]
        } else {
            self.coefficients[1..]
                .iter()
                .enumerate()
                .map(|(i, beta)| (i + 1) as f64 * beta)
                .collect()
        };
        PolynomialFunction { coefficients }
    }
}

impl Function for PolynomialFunction {
    fn eval(&self, x: f64) -> Result<f64, FunctionError> {
        Ok(self.value(x))
    }
}

/// Renders as `f(x) := 3x^2+2x+1`, skipping zero terms.
impl fmt::Display for PolynomialFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f(x) := ")?;
        let mut first = true;
        for (i, beta) in self.coefficients.iter().enumerate().rev() {
            if *beta == 0.0 {
                continue;
            }
            if !first && *beta > 0.0 {
                write!(f, "+")?;
            }
            match i {
                0 => write!(f, "{}", beta)?,
                1 => write!(f, "{}x", beta)?,
                _ => write!(f, "{}x^{}", beta, i)?,
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
