//! Live heatmap updated step by step
//!
//! The color range is fixed from the initial field and never recomputed:
//! later fields outside `[min(u0), max(u0)]` render clipped to the end colors
//! and the colorbar keeps its initial bounds.

use tracing::{debug, info};

use crate::core_types::{Field, Seconds};
use crate::labels::{temperature_title, INITIAL_TITLE};
use crate::present::Presenter;
use crate::render::{Figure, ImageStyle, Norm, RenderError};

/// Lifecycle of a live heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatmapState {
    /// Showing the initial field
    Constructed,
    /// Showing the field from the most recent update
    Updated,
}

/// Single panel redrawn in place as a computation progresses
pub struct LiveHeatmap<P: Presenter> {
    figure: Figure,
    presenter: P,
    state: HeatmapState,
    updates: u64,
}

impl<P: Presenter> LiveHeatmap<P> {
    /// Create the panel for `u0` with the default image style
    ///
    /// # Errors
    ///
    /// Returns `RenderError::EmptyField` if `u0` has no finite values.
    pub fn new(u0: Field, presenter: P) -> Result<Self, RenderError> {
        Self::with_style(u0, presenter, ImageStyle::default())
    }

    /// Create the panel for `u0`
    ///
    /// Does not present; the first `update` does.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::EmptyField` if `u0` has no finite values.
    pub fn with_style(u0: Field, presenter: P, style: ImageStyle) -> Result<Self, RenderError> {
        let (vmin, vmax) = u0.value_range()?;
        let (rows, cols) = u0.shape();

        let mut figure = Figure::subplots(1, 1);
        let axes = figure.axes_mut(0)?;
        axes.imshow(u0, Norm::new(vmin, vmax), style);
        axes.set_title(INITIAL_TITLE);
        figure.colorbar(0)?;

        info!(
            "Live heatmap created: {}x{} field, color range [{:.2}, {:.2}]",
            rows, cols, vmin, vmax
        );

        Ok(Self {
            figure,
            presenter,
            state: HeatmapState::Constructed,
            updates: 0,
        })
    }

    /// Show `u` at elapsed time `t`
    ///
    /// Replaces the data and title only; the color range stays at its
    /// initial value.
    ///
    /// # Errors
    ///
    /// - `RenderError::ShapeMismatch` if `u` differs in shape from the initial field
    /// - `RenderError::Backend` if presenting fails
    pub fn update(&mut self, u: Field, t: impl Into<Seconds>) -> Result<(), RenderError> {
        let t = t.into();
        let axes = self.figure.axes_mut(0)?;
        axes.image_mut()
            .ok_or(RenderError::NoImage { axes: 0 })?
            .set_data(u)?;
        axes.set_title(temperature_title(t));

        self.state = HeatmapState::Updated;
        self.updates += 1;
        debug!("Live heatmap update {} at t={}", self.updates, t);

        self.presenter.show(&self.figure)
    }

    /// Fixed color range taken from the initial field
    pub fn color_range(&self) -> Option<Norm> {
        self.figure.colorbar_scale().map(|(norm, _)| norm)
    }

    pub fn state(&self) -> HeatmapState {
        self.state
    }

    /// Number of successful updates
    pub fn updates(&self) -> u64 {
        self.updates
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
