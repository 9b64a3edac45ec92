use std::{fmt, ops::Range, rc::Rc};

use crate::{
    error::{MathError, MathResult},
    interpreter::value::scalar::Scalar,
};

/// A dense, immutable matrix of exact scalars.
///
/// Entries are stored row-major with explicit row and column counts; both
/// counts are at least 1 and `values.len() == rows * cols` always holds.
/// Storage is shared behind an `Rc`, so cloning a matrix is cheap. Every
/// operation builds a new matrix; nothing mutates shared storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows:   usize,
    cols:   usize,
    values: Rc<[Scalar]>,
}

impl Matrix {
    /// Creates a `rows × cols` matrix from row-major values.
    ///
    /// # Errors
    /// `MathError::DimensionMismatch` if either dimension is zero or the
    /// number of values is not `rows * cols`.
    pub fn new(rows: usize, cols: usize, values: Vec<Scalar>) -> MathResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MathError::dimensions(format!("a matrix needs at least one row and one column, found {rows}x{cols}")));
        }
        if rows.checked_mul(cols) != Some(values.len()) {
            return Err(MathError::dimensions(format!("{} values cannot fill a {rows}x{cols} matrix",
                                                     values.len())));
        }
        Ok(Self { rows,
                  cols,
                  values: values.into() })
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    /// `MathError::DimensionMismatch` if there are no rows, a row is empty,
    /// or the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Scalar>>) -> MathResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(MathError::dimensions(format!("row {index} has {} entries, expected {cols}",
                                                     row.len())));
        }
        let height = rows.len();
        Self::new(height, cols, rows.into_iter().flatten().collect())
    }

    /// Creates a matrix of integer entries, mostly for tests and examples.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::value::matrix::Matrix;
    ///
    /// let m = Matrix::from_integers(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!((m.rows(), m.cols()), (2, 3));
    /// assert_eq!(m.get(1, 0).to_string(), "4");
    /// ```
    pub fn from_integers<R: AsRef<[i64]>>(rows: &[R]) -> MathResult<Self> {
        Self::from_rows(rows.iter()
                            .map(|row| row.as_ref().iter().copied().map(Scalar::from).collect())
                            .collect())
    }

    /// The `n × n` identity matrix.
    ///
    /// # Errors
    /// `MathError::DimensionMismatch` if `n` is zero or `n * n` overflows.
    pub fn identity(n: usize) -> MathResult<Self> {
        let len = checked_len(n, n)?;
        let values = (0..len).map(|i| {
                                 if i / n == i % n {
                                     Scalar::one()
                                 } else {
                                     Scalar::zero()
                                 }
                             })
                             .collect();
        Self::new(n, n, values)
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major view of all entries.
    #[must_use]
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    /// Entry at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the position is outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> &Scalar {
        assert!(row < self.rows && col < self.cols,
                "({row}, {col}) is outside a {}x{} matrix",
                self.rows,
                self.cols);
        &self.values[row * self.cols + col]
    }

    /// Entries of one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Scalar] {
        &self.values[row * self.cols..(row + 1) * self.cols]
    }

    /// `rows x cols`, for diagnostics.
    #[must_use]
    pub fn shape(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }

    /// Elementwise sum.
    ///
    /// # Errors
    /// `MathError::DimensionMismatch` if the shapes differ.
    pub fn add(&self, other: &Self) -> MathResult<Self> {
        self.zip_with(other, "add", Scalar::add)
    }

    /// Elementwise difference.
    ///
    /// # Errors
    /// `MathError::DimensionMismatch` if the shapes differ.
    pub fn sub(&self, other: &Self) -> MathResult<Self> {
        self.zip_with(other, "subtract", Scalar::sub)
    }

    /// Multiplies every entry by `k`.
    #[must_use]
    pub fn scalar_mul(&self, k: &Scalar) -> Self {
        self.map(|v| v.mul(k))
    }

    /// Divides every entry by `k`.
    ///
    /// # Errors
    /// `MathError::DivisionByZero` if `k` is zero, checked before any entry is
    /// touched.
    pub fn scalar_div(&self, k: &Scalar) -> MathResult<Self> {
        Ok(self.scalar_mul(&k.recip()?))
    }

    /// Negates every entry.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.map(Scalar::neg)
    }

    /// Matrix product `self × other`.
    ///
    /// `result[i][j] = Σ_k self[i][k] * other[k][j]`.
    ///
    /// # Errors
    /// `MathError::DimensionMismatch` if `self.cols() != other.rows()`.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::value::matrix::Matrix;
    ///
    /// let a = Matrix::from_integers(&[[1, 2], [3, 4]]).unwrap();
    /// let b = Matrix::from_integers(&[[5], [6]]).unwrap();
    ///
    /// assert_eq!(a.mat_mul(&b).unwrap(),
    ///            Matrix::from_integers(&[[17], [39]]).unwrap());
    /// ```
    pub fn mat_mul(&self, other: &Self) -> MathResult<Self> {
        if self.cols != other.rows {
            return Err(MathError::dimensions(format!("cannot multiply {} by {}: inner dimensions {} and {} differ",
                                                     self.shape(),
                                                     other.shape(),
                                                     self.cols,
                                                     other.rows)));
        }

        let mut values = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = Scalar::zero();
                for k in 0..self.cols {
                    sum = sum.add(&self.get(i, k).mul(other.get(k, j)));
                }
                values.push(sum);
            }
        }
        Self::new(self.rows, other.cols, values)
    }

    /// Horizontal concatenation: each row of the result is the row of `self`
    /// followed by the same row of `other`.
    ///
    /// # Errors
    /// `MathError::DimensionMismatch` if the row counts differ.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::value::matrix::Matrix;
    ///
    /// let a = Matrix::from_integers(&[[1, 2], [3, 4]]).unwrap();
    /// let b = Matrix::from_integers(&[[5], [6]]).unwrap();
    ///
    /// assert_eq!(a.augment(&b).unwrap(),
    ///            Matrix::from_integers(&[[1, 2, 5], [3, 4, 6]]).unwrap());
    /// ```
    pub fn augment(&self, other: &Self) -> MathResult<Self> {
        if self.rows != other.rows {
            return Err(MathError::dimensions(format!("cannot augment {} with {}: row counts differ",
                                                     self.shape(),
                                                     other.shape())));
        }

        let mut values = Vec::with_capacity(self.rows * (self.cols + other.cols));
        for row in 0..self.rows {
            values.extend_from_slice(self.row(row));
            values.extend_from_slice(other.row(row));
        }
        Self::new(self.rows, self.cols + other.cols, values)
    }

    /// Returns a copy with rows `i` and `j` exchanged.
    ///
    /// # Panics
    /// Panics if either row is out of range.
    #[must_use]
    pub fn swap_rows(&self, i: usize, j: usize) -> Self {
        let mut values = self.values.to_vec();
        if i != j {
            for col in 0..self.cols {
                values.swap(i * self.cols + col, j * self.cols + col);
            }
        }
        Self { rows:   self.rows,
               cols:   self.cols,
               values: values.into(), }
    }

    /// Rows become columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let values = (0..self.cols).flat_map(|col| (0..self.rows).map(move |row| (row, col)))
                                   .map(|(row, col)| self.get(row, col).clone())
                                   .collect::<Vec<_>>();
        Self { rows:   self.cols,
               cols:   self.rows,
               values: values.into(), }
    }

    /// Column `col` as a `rows × 1` matrix.
    ///
    /// # Panics
    /// Panics if `col` is out of range.
    #[must_use]
    pub fn column(&self, col: usize) -> Self {
        self.select_columns(&[col])
    }

    /// The listed columns, in the listed order.
    ///
    /// # Panics
    /// Panics if `indices` is empty or an index is out of range.
    #[must_use]
    pub fn select_columns(&self, indices: &[usize]) -> Self {
        assert!(!indices.is_empty(), "at least one column must be selected");
        let values = (0..self.rows).flat_map(|row| indices.iter().map(move |&col| (row, col)))
                                   .map(|(row, col)| self.get(row, col).clone())
                                   .collect::<Vec<_>>();
        Self { rows:   self.rows,
               cols:   indices.len(),
               values: values.into(), }
    }

    /// The listed rows, in the listed order.
    ///
    /// # Panics
    /// Panics if `indices` is empty or an index is out of range.
    #[must_use]
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        assert!(!indices.is_empty(), "at least one row must be selected");
        let values = indices.iter()
                            .flat_map(|&row| self.row(row).iter().cloned())
                            .collect::<Vec<_>>();
        Self { rows:   indices.len(),
               cols:   self.cols,
               values: values.into(), }
    }

    /// A contiguous block of columns, e.g. the right half of an augmented
    /// matrix.
    ///
    /// # Panics
    /// Panics if the range is empty or reaches past the last column.
    #[must_use]
    pub fn columns(&self, range: Range<usize>) -> Self {
        self.select_columns(&range.collect::<Vec<_>>())
    }

    /// All-zero matrix of the given shape.
    pub(crate) fn zeros(rows: usize, cols: usize) -> MathResult<Self> {
        Self::new(rows, cols, vec![Scalar::zero(); checked_len(rows, cols)?])
    }

    /// A matrix of this shape holding `values`.
    ///
    /// # Panics
    /// Panics if `values` does not fill the shape.
    pub(crate) fn with_values(&self, values: Vec<Scalar>) -> Self {
        assert_eq!(values.len(), self.values.len(), "values must fill a {} matrix", self.shape());
        Self { rows:   self.rows,
               cols:   self.cols,
               values: values.into(), }
    }

    fn map(&self, f: impl Fn(&Scalar) -> Scalar) -> Self {
        self.with_values(self.values.iter().map(f).collect())
    }

    fn zip_with(&self,
                other: &Self,
                verb: &str,
                f: impl Fn(&Scalar, &Scalar) -> Scalar)
                -> MathResult<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MathError::dimensions(format!("cannot {verb} {} and {}",
                                                     self.shape(),
                                                     other.shape())));
        }
        let values = self.values
                         .iter()
                         .zip(other.values.iter())
                         .map(|(a, b)| f(a, b))
                         .collect::<Vec<_>>();
        Ok(Self { rows:   self.rows,
                  cols:   self.cols,
                  values: values.into(), })
    }
}

/// Number of entries in a `rows × cols` matrix, if it is addressable.
fn checked_len(rows: usize, cols: usize) -> MathResult<usize> {
    rows.checked_mul(cols)
        .ok_or_else(|| MathError::dimensions(format!("a {rows}x{cols} matrix is too large")))
}

/// Prints one row per line with entries right-aligned per column:
///
/// ```text
/// [  -2    1 ]
/// [ 3/2 -1/2 ]
/// ```
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.values.iter().map(ToString::to_string).collect::<Vec<_>>();
        let widths = (0..self.cols).map(|col| {
                                       (0..self.rows).map(|row| cells[row * self.cols + col].len())
                                                     .max()
                                                     .unwrap_or(0)
                                   })
                                   .collect::<Vec<_>>();

        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (col, width) in widths.iter().enumerate() {
                write!(f, " {:>width$}", cells[row * self.cols + col])?;
            }
            write!(f, " ]")?;
        }
        Ok(())
    }
}
