//! Rendering errors
//!
//! Malformed input is reported as a value instead of panicking inside the
//! figure or the presenter. Degenerate but well-formed input (fewer than four
//! frames, a negative time step) is not an error.

use std::fmt;
use std::io;

/// Error raised while building or presenting a figure
#[derive(Debug)]
pub enum RenderError {
    /// Data shape does not match the shape it must replace or join.
    ShapeMismatch {
        /// Shape already in place, `(rows, cols)`
        expected: (usize, usize),
        /// Shape that was supplied
        found: (usize, usize),
    },

    /// Flat buffer length does not match the requested dimensions.
    LengthMismatch {
        /// Number of values the dimensions require
        expected: usize,
        /// Number of values supplied
        found: usize,
    },

    /// Field has no finite cells to take a min/max from.
    EmptyField,

    /// Time series index outside `[-len, len)`.
    IndexOutOfRange {
        /// Requested index (may be negative)
        index: isize,
        /// Series length
        len: usize,
    },

    /// Axes index outside the figure grid.
    NoSuchAxes {
        /// Requested axes index
        index: usize,
        /// Number of axes in the figure
        count: usize,
    },

    /// Colorbar requested for axes that hold no image.
    NoImage {
        /// Axes index without an image
        axes: usize,
    },

    /// Display backend failed while drawing.
    Backend(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, found } => write!(
                f,
                "shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            Self::LengthMismatch { expected, found } => {
                write!(f, "expected {expected} values, got {found}")
            }
            Self::EmptyField => write!(f, "field has no finite values"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of bounds for a series of length {len}")
            }
            Self::NoSuchAxes { index, count } => {
                write!(f, "axes {index} does not exist (figure has {count})")
            }
            Self::NoImage { axes } => write!(f, "axes {axes} has no image to attach a colorbar to"),
            Self::Backend(e) => write!(f, "display backend error: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Backend(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(error: io::Error) -> Self {
        Self::Backend(error)
    }
}
