//! Immutable rectangular matrices stored as rows of [`Vector`]s.

use std::fmt;

use serde::{Deserialize, Serialize};
use solar_core::{ErrorInfo, SolarError};

use crate::span::Span;
use crate::traits::Scalar;
use crate::vector::Vector;

fn shape_error(code: &str, message: &str, lhs: (usize, usize), rhs: (usize, usize)) -> SolarError {
    SolarError::Shape(
        ErrorInfo::new(code, message)
            .with_context("lhs", format!("{}x{}", lhs.0, lhs.1))
            .with_context("rhs", format!("{}x{}", rhs.0, rhs.1)),
    )
}

/// Non-empty rectangular matrix; every row has the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<T>>", into = "Vec<Vec<T>>")]
#[serde(bound(
    serialize = "T: Scalar + Serialize",
    deserialize = "T: Scalar + Deserialize<'de>"
))]
pub struct Matrix<T = f64> {
    rows: Vec<Vector<T>>,
    columns: usize,
}

/// Result of [`Matrix::select`]; which variant is returned depends on
/// which axes were given as ranges.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T = f64> {
    /// Both axes were ranges.
    Matrix(Matrix<T>),
    /// A single row, restricted to the selected columns.
    Row(Vector<T>),
    /// A single column, restricted to the selected rows.
    Column(Vector<T>),
    /// Both axes were single coordinates.
    Scalar(T),
}

impl<T: Scalar> Selection<T> {
    /// Returns the scalar if this selection is one.
    pub fn into_scalar(self) -> Option<T> {
        match self {
            Selection::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the vector for row and column selections.
    pub fn into_vector(self) -> Option<Vector<T>> {
        match self {
            Selection::Row(v) | Selection::Column(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the sub-matrix if both axes were ranges.
    pub fn into_matrix(self) -> Option<Matrix<T>> {
        match self {
            Selection::Matrix(m) => Some(m),
            _ => None,
        }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Builds a matrix from row-major nested data.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, SolarError> {
        Self::from_rows(rows.into_iter().map(Vector::new).collect())
    }

    /// Builds a matrix from row vectors.
    pub fn from_rows(rows: Vec<Vector<T>>) -> Result<Self, SolarError> {
        let Some(last) = rows.last() else {
            return Err(SolarError::shape("empty-matrix", "a matrix needs at least one row"));
        };
        let columns = last.len();
        if columns == 0 {
            return Err(SolarError::shape(
                "empty-matrix",
                "a matrix needs at least one column",
            ));
        }
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(SolarError::Shape(
                ErrorInfo::new("ragged-matrix", "all rows must have the same length")
                    .with_context("row", idx)
                    .with_context("expected", columns)
                    .with_context("found", row.len()),
            ));
        }
        Ok(Self { rows, columns })
    }

    /// Square identity matrix of dimension `dim`.
    pub fn identity(dim: usize) -> Result<Self, SolarError> {
        Self::check_dimension(dim)?;
        let rows = (0..dim)
            .map(|i| {
                (0..dim)
                    .map(|j| if i == j { T::one() } else { T::zero() })
                    .collect()
            })
            .collect();
        Ok(Self { rows, columns: dim })
    }

    /// Square all-zero matrix of dimension `dim`.
    pub fn null(dim: usize) -> Result<Self, SolarError> {
        Self::check_dimension(dim)?;
        Ok(Self {
            rows: vec![Vector::zeros(dim); dim],
            columns: dim,
        })
    }

    fn check_dimension(dim: usize) -> Result<(), SolarError> {
        if dim == 0 {
            return Err(SolarError::domain(
                "non-positive-dimension",
                "matrix dimension must be strictly positive",
            ));
        }
        Ok(())
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.columns)
    }

    /// Iterates over the rows.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &Vector<T>> + '_ {
        self.rows.iter()
    }

    /// Borrows row `i`.
    pub fn row(&self, i: usize) -> Result<&Vector<T>, SolarError> {
        self.rows
            .get(i)
            .ok_or_else(|| SolarError::out_of_bounds(i, self.rows()))
    }

    /// Copies column `j`.
    pub fn column(&self, j: usize) -> Result<Vector<T>, SolarError> {
        if j >= self.columns {
            return Err(SolarError::out_of_bounds(j, self.columns));
        }
        Ok(self.rows.iter().map(|row| row[j]).collect())
    }

    /// Element at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<T, SolarError> {
        self.row(i)?.get(j)
    }

    /// Two-dimensional indexing.
    ///
    /// `(range, range)` yields a sub-matrix, `(range, at)` a column,
    /// `(at, range)` a row slice and `(at, at)` a scalar. Both coordinates
    /// are checked against their axis before anything is copied.
    pub fn select(
        &self,
        rows: impl Into<Span>,
        columns: impl Into<Span>,
    ) -> Result<Selection<T>, SolarError> {
        let rows = rows.into();
        let columns = columns.into();
        let row_range = rows.resolve(self.rows())?;
        let col_range = columns.resolve(self.columns)?;
        let selection = match (rows.is_range(), columns.is_range()) {
            (true, true) => Selection::Matrix(Self {
                rows: self.rows[row_range]
                    .iter()
                    .map(|row| Vector::from_slice(&row.as_slice()[col_range.clone()]))
                    .collect(),
                columns: col_range.len(),
            }),
            (true, false) => Selection::Column(
                self.rows[row_range]
                    .iter()
                    .map(|row| row[col_range.start])
                    .collect(),
            ),
            (false, true) => Selection::Row(Vector::from_slice(
                &self.rows[row_range.start].as_slice()[col_range],
            )),
            (false, false) => Selection::Scalar(self.rows[row_range.start][col_range.start]),
        };
        Ok(selection)
    }

    /// Elementwise sum of two matrices of identical shape.
    pub fn try_add(&self, other: &Self) -> Result<Self, SolarError> {
        self.zip_rows(other, "add", Vector::try_add)
    }

    /// Elementwise difference of two matrices of identical shape.
    pub fn try_sub(&self, other: &Self) -> Result<Self, SolarError> {
        self.zip_rows(other, "sub", Vector::try_sub)
    }

    /// Multiplies every element by `factor`.
    pub fn scaled(&self, factor: T) -> Self {
        Self {
            rows: self.rows.iter().map(|row| row.scaled(factor)).collect(),
            columns: self.columns,
        }
    }

    /// Matrix product: `(Z x Y) * (Y x W) = (Z x W)`.
    pub fn matmul(&self, other: &Self) -> Result<Self, SolarError> {
        if self.columns != other.rows() {
            return Err(shape_error(
                "inner-dimension-mismatch",
                "left column count must equal right row count",
                self.shape(),
                other.shape(),
            ));
        }
        let columns = other.transpose();
        let mut rows = Vec::with_capacity(self.rows());
        for row in &self.rows {
            let line = columns
                .rows
                .iter()
                .map(|col| row.dot(col))
                .collect::<Result<Vector<T>, SolarError>>()?;
            rows.push(line);
        }
        Ok(Self {
            rows,
            columns: other.columns,
        })
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let rows = (0..self.columns)
            .map(|j| self.rows.iter().map(|row| row[j]).collect())
            .collect();
        Self {
            rows,
            columns: self.rows(),
        }
    }

    fn zip_rows(
        &self,
        other: &Self,
        op: &str,
        f: impl Fn(&Vector<T>, &Vector<T>) -> Result<Vector<T>, SolarError>,
    ) -> Result<Self, SolarError> {
        if self.shape() != other.shape() {
            return Err(shape_error(
                "shape-mismatch",
                &format!("cannot {op} matrices of different shapes"),
                self.shape(),
                other.shape(),
            ));
        }
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows,
            columns: self.columns,
        })
    }
}

impl<T: Scalar> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = SolarError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, SolarError> {
        Matrix::new(rows)
    }
}

impl<T: Scalar> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(m: Matrix<T>) -> Self {
        m.rows.into_iter().map(Vector::into_inner).collect()
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|x| x.to_string()).collect())
            .collect();
        let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);
        for line in &cells {
            write!(f, "[")?;
            for (idx, cell) in line.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{cell:>width$}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
