//! Dense regressor (design) matrix.
//!
//! ## Purpose
//!
//! This module provides [`DesignMatrix`], the named, row-major matrix of
//! independent variables that is handed to the OLS fit. It supports building
//! the matrix by stacking columns, by rows, and prepending an intercept column.
//!
//! ## Design notes
//!
//! * **Layout**: Row-major storage, `data[i * n_cols + j]` is row `i`, column `j`.
//! * **Names**: Every column carries a unique name used in summaries and plots.
//! * **Intercept**: `with_constant()` skips insertion when a constant column exists.
//!
//! ## Invariants
//!
//! * `data.len() == n_rows * names.len()`.
//! * Column names are unique.
//!
//! ## Non-goals
//!
//! * This module does not check values for finiteness (see the validator).
//! * This module does not support missing values or categorical columns.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::OlsError;

/// Name given to the intercept column added by [`DesignMatrix::with_constant`].
pub const CONSTANT_NAME: &str = "const";

// ============================================================================
// Design Matrix
// ============================================================================

/// Named, row-major matrix of regressors.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignMatrix<T> {
    names: Vec<String>,
    data: Vec<T>,
    n_rows: usize,
}

impl<T: Float> DesignMatrix<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Stack equal-length columns side by side.
    pub fn from_columns<S: AsRef<str>>(names: &[S], columns: &[&[T]]) -> Result<Self, OlsError> {
        if columns.is_empty() || columns[0].is_empty() {
            return Err(OlsError::EmptyInput);
        }
        if names.len() != columns.len() {
            return Err(OlsError::InvalidInput(format!(
                "{} names given for {} columns",
                names.len(),
                columns.len()
            )));
        }

        let names = Self::unique_names(names)?;
        let n_rows = columns[0].len();
        for (name, col) in names.iter().zip(columns.iter()) {
            if col.len() != n_rows {
                return Err(OlsError::RaggedColumns {
                    column: name.clone(),
                    len: col.len(),
                    expected: n_rows,
                });
            }
        }

        let n_cols = columns.len();
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for i in 0..n_rows {
            data.extend(columns.iter().map(|col| col[i]));
        }

        Ok(Self {
            names,
            data,
            n_rows,
        })
    }

    /// Build from row-wise data.
    pub fn from_rows<S: AsRef<str>>(names: &[S], rows: &[Vec<T>]) -> Result<Self, OlsError> {
        if rows.is_empty() || names.is_empty() {
            return Err(OlsError::EmptyInput);
        }

        let names = Self::unique_names(names)?;
        let n_cols = names.len();
        let mut data = Vec::with_capacity(rows.len() * n_cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(OlsError::InvalidInput(format!(
                    "row {} has {} values, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            names,
            data,
            n_rows: rows.len(),
        })
    }

    /// Prepend an intercept column of ones named `const`.
    ///
    /// Returns the matrix unchanged if it already holds a constant column.
    pub fn with_constant(self) -> Result<Self, OlsError> {
        if self.constant_column().is_some() {
            return Ok(self);
        }
        if self.names.iter().any(|n| n == CONSTANT_NAME) {
            return Err(OlsError::DuplicateColumn(CONSTANT_NAME.to_string()));
        }

        let n_cols = self.n_cols();
        let mut data = Vec::with_capacity(self.n_rows * (n_cols + 1));
        for row in self.data.chunks_exact(n_cols) {
            data.push(T::one());
            data.extend_from_slice(row);
        }

        let mut names = Vec::with_capacity(n_cols + 1);
        names.push(CONSTANT_NAME.to_string());
        names.extend(self.names);

        Ok(Self {
            names,
            data,
            n_rows: self.n_rows,
        })
    }

    fn unique_names<S: AsRef<str>>(names: &[S]) -> Result<Vec<String>, OlsError> {
        let mut out: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if out.iter().any(|n| n == name) {
                return Err(OlsError::DuplicateColumn(name.to_string()));
            }
            out.push(name.to_string());
        }
        Ok(out)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// (rows, columns).
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols())
    }

    /// Number of observations.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of regressors.
    pub fn n_cols(&self) -> usize {
        self.names.len()
    }

    /// Column names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Row-major values.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Row `i`.
    pub fn row(&self, i: usize) -> &[T] {
        let p = self.n_cols();
        &self.data[i * p..(i + 1) * p]
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.n_cols())
    }

    /// Copy of column `j`.
    pub fn column(&self, j: usize) -> Vec<T> {
        self.rows().map(|row| row[j]).collect()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Result<usize, OlsError> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| OlsError::UnknownColumn(name.to_string()))
    }

    /// Copy of a column by name.
    pub fn column_by_name(&self, name: &str) -> Result<Vec<T>, OlsError> {
        self.column_index(name).map(|j| self.column(j))
    }

    // ========================================================================
    // Column Statistics
    // ========================================================================

    /// Index of the first column whose values are all equal and nonzero.
    pub fn constant_column(&self) -> Option<usize> {
        (0..self.n_cols()).find(|&j| {
            let first = self.data[j];
            first != T::zero() && self.rows().all(|row| row[j] == first)
        })
    }

    /// Arithmetic mean of every column.
    pub fn column_means(&self) -> Vec<T> {
        let n = T::from(self.n_rows).unwrap_or_else(T::one);
        let mut sums = vec![T::zero(); self.n_cols()];
        for row in self.rows() {
            for (s, &v) in sums.iter_mut().zip(row) {
                *s = *s + v;
            }
        }
        sums.into_iter().map(|s| s / n).collect()
    }

    /// (min, max) of column `j`.
    pub fn column_range(&self, j: usize) -> (T, T) {
        self.rows().fold((T::infinity(), T::neg_infinity()), |(lo, hi), row| {
            (lo.min(row[j]), hi.max(row[j]))
        })
    }
}
