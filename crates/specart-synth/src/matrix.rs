//! Source intensity matrix.
//!
//! The matrix is the engine's only input artifact: a dense row-major
//! grid of 8-bit intensity values where rows are frequency bands and
//! columns are time steps across the image width. The engine treats it
//! as read-only; the inversion transform produces a derived copy.

use crate::error::{SynthError, SynthResult};

/// A dense row-major grid of intensity values in `[0, 255]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityMatrix {
    data: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl IntensityMatrix {
    /// Creates a matrix from a flat row-major buffer.
    ///
    /// # Arguments
    /// * `rows` - Number of rows (frequency bands)
    /// * `cols` - Number of columns (time steps)
    /// * `data` - Row-major intensity values, length `rows * cols`
    ///
    /// # Errors
    /// `InvalidParameter` when either dimension is zero or the buffer
    /// length does not match the dimensions.
    pub fn new(rows: usize, cols: usize, data: Vec<u8>) -> SynthResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(SynthError::invalid_param(
                "matrix",
                "must have at least one row and one column",
            ));
        }
        if data.len() != rows * cols {
            return Err(SynthError::invalid_param(
                "matrix",
                format!(
                    "expected {} values for {}x{}, got {}",
                    rows * cols,
                    rows,
                    cols,
                    data.len()
                ),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from row slices. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<u8>]) -> SynthResult<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != num_cols) {
            return Err(SynthError::invalid_param(
                "matrix",
                "all rows must have the same length",
            ));
        }
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            data.extend_from_slice(row);
        }
        Self::new(num_rows, num_cols, data)
    }

    /// Number of rows (frequency bands).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (time steps).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns one row as a slice.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns a derived copy with every value `v` replaced by `255 - v`.
    pub fn inverted(&self) -> Self {
        Self {
            data: self.data.iter().map(|&v| 255 - v).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}
