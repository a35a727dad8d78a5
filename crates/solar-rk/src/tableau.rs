use solar_core::{ErrorInfo, SolarError};
use solar_linalg::Matrix;

/// Largest accepted gap between `c[i]` and the row sum of `A[i]`.
pub const NODE_TOLERANCE: f64 = 1e-12;

/// Coefficient set `(A, b, c)` of an explicit Runge-Kutta method.
///
/// Implementors are plain value types exposing static data; the stepper
/// calls [`ButcherTableau::validate`] once before the first step.
pub trait ButcherTableau {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Stage coefficient rows; `A[i][j]` weights stage `j` when building stage `i`.
    fn a(&self) -> &[&[f64]];

    /// Output weights.
    fn b(&self) -> &[f64];

    /// Evaluation nodes, conventionally the row sums of `A`.
    fn c(&self) -> &[f64];

    /// Number of stages.
    fn stages(&self) -> usize {
        self.b().len()
    }

    /// Checks the shape invariants and returns `A` as a matrix.
    fn validate(&self) -> Result<Matrix<f64>, SolarError> {
        validate_tableau(self.name(), self.a(), self.b(), self.c())
    }
}

fn tableau_error(code: &str, message: &str, name: &str) -> ErrorInfo {
    ErrorInfo::new(code, message).with_context("method", name)
}

/// Validates a tableau: `len(A) == len(b) == len(c) > 0`, `A` square,
/// strictly lower triangular, and `c[i] == sum_j A[i][j]`.
pub fn validate_tableau(
    name: &str,
    a: &[&[f64]],
    b: &[f64],
    c: &[f64],
) -> Result<Matrix<f64>, SolarError> {
    if a.len() != b.len() || b.len() != c.len() {
        return Err(SolarError::Shape(
            tableau_error(
                "tableau-length-mismatch",
                "A, b and c must describe the same number of stages",
                name,
            )
            .with_context("a", a.len())
            .with_context("b", b.len())
            .with_context("c", c.len()),
        ));
    }
    let matrix = Matrix::new(a.iter().map(|row| row.to_vec()).collect()).map_err(|err| {
        let mut info = tableau_error("malformed-tableau", "A must be a rectangular matrix", name);
        info.context.extend(err.info().context.clone());
        SolarError::Shape(info.with_hint(err.info().message.clone()))
    })?;
    let stages = b.len();
    if matrix.columns() != stages {
        return Err(SolarError::Shape(
            tableau_error("non-square-tableau", "A must be s x s", name)
                .with_context("stages", stages)
                .with_context("columns", matrix.columns()),
        ));
    }
    for (i, row) in a.iter().enumerate() {
        if let Some(j) = (i..stages).find(|&j| row[j] != 0.0) {
            return Err(SolarError::Shape(
                tableau_error(
                    "implicit-tableau",
                    "explicit methods need a strictly lower triangular A",
                    name,
                )
                .with_context("row", i)
                .with_context("column", j),
            ));
        }
        let row_sum: f64 = row.iter().sum();
        if (row_sum - c[i]).abs() > NODE_TOLERANCE {
            return Err(SolarError::Shape(
                tableau_error("inconsistent-nodes", "c[i] must equal the sum of A[i]", name)
                    .with_context("row", i)
                    .with_context("node", c[i])
                    .with_context("row_sum", row_sum),
            ));
        }
    }
    Ok(matrix)
}
