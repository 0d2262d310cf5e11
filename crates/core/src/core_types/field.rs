//! Temperature fields and time series of fields
//!
//! A `Field` is one 2D grid of temperatures at a single instant. A `TimeSeries`
//! is an ordered stack of fields sharing one shape, indexed by time step.

use nalgebra::DMatrix;

use crate::render::RenderError;

/// 2D grid of scalar temperatures (rows x columns)
///
/// Row 0 is the first row of the data. Whether it appears at the top or the
/// bottom of a panel is decided by the image origin, not by the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    values: DMatrix<f64>,
}

impl Field {
    /// Create a field from row-major values
    ///
    /// # Errors
    ///
    /// Returns `RenderError::LengthMismatch` if `values.len() != rows * cols`.
    pub fn from_row_slice(rows: usize, cols: usize, values: &[f64]) -> Result<Self, RenderError> {
        if values.len() != rows * cols {
            return Err(RenderError::LengthMismatch {
                expected: rows * cols,
                found: values.len(),
            });
        }
        Ok(Self {
            values: DMatrix::from_row_slice(rows, cols, values),
        })
    }

    /// Create a field from a list of rows
    ///
    /// # Errors
    ///
    /// Returns `RenderError::ShapeMismatch` if the rows are ragged.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, RenderError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(RenderError::ShapeMismatch {
                expected: (rows.len(), cols),
                found: (rows.len(), bad.len()),
            });
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::from_row_slice(rows.len(), cols, &flat)
    }

    /// Create a field filled with a single value
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            values: DMatrix::from_element(rows, cols, value),
        }
    }

    /// Create a field by evaluating `f(row, col)` for every cell
    pub fn from_fn(rows: usize, cols: usize, f: impl FnMut(usize, usize) -> f64) -> Self {
        Self {
            values: DMatrix::from_fn(rows, cols, f),
        }
    }

    /// Shape as `(rows, cols)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.values.shape()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `(row, col)`, `None` when out of bounds
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied()
    }

    /// Element-wise floor (3.7 becomes 3.0, -0.5 becomes -1.0)
    #[must_use]
    pub fn floor(&self) -> Self {
        Self {
            values: self.values.map(f64::floor),
        }
    }

    /// Minimum and maximum of the field
    ///
    /// NaN cells are skipped.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::EmptyField` when the field has no cells or only NaN cells.
    pub fn value_range(&self) -> Result<(f64, f64), RenderError> {
        let (min, max) = self
            .values
            .iter()
            .filter(|v| !v.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if min > max {
            return Err(RenderError::EmptyField);
        }
        Ok((min, max))
    }

    /// Borrow the underlying matrix
    #[must_use]
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }
}

impl From<DMatrix<f64>> for Field {
    fn from(values: DMatrix<f64>) -> Self {
        Self { values }
    }
}

/// Ordered stack of fields, leading dimension is time
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    frames: Vec<Field>,
}

impl TimeSeries {
    /// Build a series from frames that all share one shape
    ///
    /// # Errors
    ///
    /// Returns `RenderError::ShapeMismatch` on the first frame whose shape
    /// differs from frame 0.
    pub fn from_frames(frames: Vec<Field>) -> Result<Self, RenderError> {
        if let Some(first) = frames.first() {
            let expected = first.shape();
            if let Some(bad) = frames.iter().find(|f| f.shape() != expected) {
                return Err(RenderError::ShapeMismatch {
                    expected,
                    found: bad.shape(),
                });
            }
        }
        Ok(Self { frames })
    }

    /// Build a series from a flat `(steps, rows, cols)` buffer in C order
    ///
    /// # Errors
    ///
    /// Returns `RenderError::LengthMismatch` if the buffer length does not match.
    pub fn from_flat(
        steps: usize,
        rows: usize,
        cols: usize,
        values: &[f64],
    ) -> Result<Self, RenderError> {
        let frame_len = rows * cols;
        if values.len() != steps * frame_len {
            return Err(RenderError::LengthMismatch {
                expected: steps * frame_len,
                found: values.len(),
            });
        }
        let frames = (0..steps)
            .map(|t| Field::from_row_slice(rows, cols, &values[t * frame_len..(t + 1) * frame_len]))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { frames })
    }

    /// Append a frame
    ///
    /// # Errors
    ///
    /// Returns `RenderError::ShapeMismatch` if the frame shape differs from the series.
    pub fn push(&mut self, frame: Field) -> Result<(), RenderError> {
        if let Some(expected) = self.frame_shape() {
            if frame.shape() != expected {
                return Err(RenderError::ShapeMismatch {
                    expected,
                    found: frame.shape(),
                });
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Number of time steps (T)
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Shape shared by all frames, `None` for an empty series
    #[must_use]
    pub fn frame_shape(&self) -> Option<(usize, usize)> {
        self.frames.first().map(Field::shape)
    }

    /// Frame at a possibly negative index
    ///
    /// Negative indices count back from the end, so `-1` is the last frame.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::IndexOutOfRange` when `index` is outside `[-T, T)`.
    pub fn frame_at(&self, index: isize) -> Result<&Field, RenderError> {
        let len = self.frames.len() as isize;
        let resolved = if index < 0 { index + len } else { index };
        if (0..len).contains(&resolved) {
            Ok(&self.frames[resolved as usize])
        } else {
            Err(RenderError::IndexOutOfRange {
                index,
                len: self.frames.len(),
            })
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_truncates_downward() {
        let field = Field::from_rows(&[vec![3.7, -0.5], vec![2.0, 9.999]]).unwrap();
        let floored = field.floor();
        assert_eq!(floored.get(0, 0), Some(3.0));
        assert_eq!(floored.get(0, 1), Some(-1.0));
        assert_eq!(floored.get(1, 0), Some(2.0));
        assert_eq!(floored.get(1, 1), Some(9.0));
    }

    #[test]
    fn test_value_range_skips_nan() {
        let field = Field::from_rows(&[vec![f64::NAN, 4.0], vec![-2.5, 1.0]]).unwrap();
        assert_eq!(field.value_range().unwrap(), (-2.5, 4.0));
    }

    #[test]
    fn test_value_range_of_empty_field() {
        let field = Field::filled(0, 0, 0.0);
        assert!(matches!(field.value_range(), Err(RenderError::EmptyField)));
        let nan = Field::filled(2, 2, f64::NAN);
        assert!(matches!(nan.value_range(), Err(RenderError::EmptyField)));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Field::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, RenderError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_row_major_layout() {
        let field = Field::from_row_slice(2, 3, &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(field.shape(), (2, 3));
        assert_eq!(field.get(0, 2), Some(2.0));
        assert_eq!(field.get(1, 0), Some(3.0));
        assert_eq!(field.get(2, 0), None);
    }

    #[test]
    fn test_series_rejects_mixed_shapes() {
        let frames = vec![Field::filled(2, 2, 0.0), Field::filled(3, 2, 0.0)];
        let err = TimeSeries::from_frames(frames).unwrap_err();
        assert!(matches!(
            err,
            RenderError::ShapeMismatch {
                expected: (2, 2),
                found: (3, 2)
            }
        ));
    }

    #[test]
    fn test_negative_index_counts_from_end() {
        let series = TimeSeries::from_flat(3, 1, 1, &[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(series.frame_at(-1).unwrap().get(0, 0), Some(30.0));
        assert_eq!(series.frame_at(-3).unwrap().get(0, 0), Some(10.0));
        assert_eq!(series.frame_at(1).unwrap().get(0, 0), Some(20.0));
        assert!(matches!(
            series.frame_at(3),
            Err(RenderError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(series.frame_at(-4).is_err());
    }

    #[test]
    fn test_push_checks_shape() {
        let mut series = TimeSeries::default();
        series.push(Field::filled(2, 2, 1.0)).unwrap();
        assert!(series.push(Field::filled(2, 3, 1.0)).is_err());
        assert_eq!(series.len(), 1);
    }
}
