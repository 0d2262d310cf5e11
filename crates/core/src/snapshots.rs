//! Four-panel overview of a whole time series
//!
//! `SnapshotGrid` shows four frames spread over the series in a 2x2 grid,
//! biased toward the end so the last panel is always the final frame. Every
//! panel gets its own color range, so colors are not comparable between
//! panels, and the single colorbar describes the fourth panel only.

use tracing::debug;

use crate::core_types::{Seconds, TimeSeries};
use crate::labels::temperature_title;
use crate::present::Presenter;
use crate::render::{Figure, ImageStyle, Norm, RenderError};

/// Panel grid rows
pub const GRID_ROWS: usize = 2;
/// Panel grid columns
pub const GRID_COLS: usize = 2;
const PANELS: usize = GRID_ROWS * GRID_COLS;

/// Frame indices shown by the four panels for a series of `len` frames
///
/// Panel `k` (1-based, row-major) shows `floor(len * k / 4) - 1`. Series
/// shorter than four frames yield negative or repeated indices; a negative
/// index counts back from the end of the series.
///
/// ```
/// use heat_view_core::snapshots::snapshot_indices;
///
/// assert_eq!(snapshot_indices(100), [24, 49, 74, 99]);
/// assert_eq!(snapshot_indices(2), [-1, 0, 0, 1]);
/// ```
#[must_use]
pub fn snapshot_indices(len: usize) -> [isize; PANELS] {
    std::array::from_fn(|i| (len * (i + 1) / PANELS) as isize - 1)
}

/// 2x2 grid of snapshots with one shared colorbar
pub struct SnapshotGrid<P: Presenter> {
    figure: Figure,
    style: ImageStyle,
    presenter: P,
}

impl<P: Presenter> SnapshotGrid<P> {
    /// Create an empty grid with the default image style
    pub fn new(presenter: P) -> Self {
        Self::with_style(presenter, ImageStyle::default())
    }

    pub fn with_style(presenter: P, style: ImageStyle) -> Self {
        Self {
            figure: Figure::subplots(GRID_ROWS, GRID_COLS),
            style,
            presenter,
        }
    }

    /// Draw four frames of `series` and present the figure
    ///
    /// Each panel shows the floor of its frame, colored against the min/max
    /// of the unfloored frame, titled with `index * dt`. All four frames are
    /// checked before any panel is touched, so a failed call leaves the
    /// previous picture intact.
    ///
    /// # Errors
    ///
    /// - `RenderError::IndexOutOfRange` for an empty series
    /// - `RenderError::EmptyField` if a selected frame has no finite values
    /// - `RenderError::Backend` if presenting fails
    pub fn plot(&mut self, series: &TimeSeries, dt: impl Into<Seconds>) -> Result<(), RenderError> {
        let dt = dt.into();
        let indices = snapshot_indices(series.len());
        debug!(
            "Plotting snapshots of {} frames at indices {:?}, dt={}",
            series.len(),
            indices,
            dt
        );

        let mut selected = Vec::with_capacity(PANELS);
        for &index in &indices {
            let frame = series.frame_at(index)?;
            let (vmin, vmax) = frame.value_range()?;
            selected.push((index, frame, Norm::new(vmin, vmax)));
        }

        for (panel, (index, frame, norm)) in selected.into_iter().enumerate() {
            let axes = self.figure.axes_mut(panel)?;
            axes.imshow(frame.floor(), norm, self.style);
            axes.set_title(temperature_title(dt.at_step(index)));
        }
        self.figure.colorbar(PANELS - 1)?;

        self.presenter.show(&self.figure)
    }

    /// Read-only view of the drawn figure
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::NullPresenter;

    #[test]
    fn test_indices_even_split() {
        assert_eq!(snapshot_indices(100), [24, 49, 74, 99]);
        assert_eq!(snapshot_indices(4), [0, 1, 2, 3]);
        assert_eq!(snapshot_indices(10), [1, 4, 6, 9]);
    }

    #[test]
    fn test_indices_degenerate_short_series() {
        assert_eq!(snapshot_indices(3), [-1, 0, 1, 2]);
        assert_eq!(snapshot_indices(2), [-1, 0, 0, 1]);
        assert_eq!(snapshot_indices(1), [-1, -1, -1, 0]);
        assert_eq!(snapshot_indices(0), [-1, -1, -1, -1]);
    }

    #[test]
    fn test_empty_series_fails() {
        let mut grid = SnapshotGrid::new(NullPresenter);
        let err = grid.plot(&TimeSeries::default(), 1.0).unwrap_err();
        assert!(matches!(err, RenderError::IndexOutOfRange { index: -1, len: 0 }));
    }

    #[test]
    fn test_failed_plot_keeps_previous_panels() {
        use crate::core_types::Field;
        use crate::present::RecordingPresenter;

        let good = TimeSeries::from_frames((0..4).map(|t| Field::filled(2, 2, t as f64)).collect())
            .unwrap();
        let mut grid = SnapshotGrid::new(RecordingPresenter::new());
        grid.plot(&good, 1.0).unwrap();
        let before = grid.figure().clone();

        // last frame is all NaN: panel 4 cannot get a color range
        let mut frames: Vec<Field> = (0..3).map(|t| Field::filled(2, 2, 10.0 + t as f64)).collect();
        frames.push(Field::filled(2, 2, f64::NAN));
        let bad = TimeSeries::from_frames(frames).unwrap();

        assert!(matches!(grid.plot(&bad, 1.0), Err(RenderError::EmptyField)));
        assert_eq!(grid.figure(), &before);
        assert_eq!(grid.presenter().frames().len(), 1);
    }

    #[test]
    fn test_new_grid_is_blank() {
        let grid = SnapshotGrid::new(NullPresenter);
        assert_eq!(grid.figure().grid(), (2, 2));
        assert!(grid.figure().axes().iter().all(|a| a.image().is_none()));
    }
}
