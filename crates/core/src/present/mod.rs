//! Presenting figures to a viewer
//!
//! Components never talk to a display directly. After drawing they hand the
//! figure to a `Presenter`, which decides what "showing" means: redraw a
//! terminal in place, keep a copy for inspection, or nothing at all.

mod terminal;

pub use terminal::{FigureView, TerminalPresenter};

use crate::render::{Figure, RenderError};

/// Capability to show the current state of a figure
pub trait Presenter {
    /// Show `figure`, replacing whatever was shown before
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Backend` when the display fails.
    fn show(&mut self, figure: &Figure) -> Result<(), RenderError>;
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn show(&mut self, figure: &Figure) -> Result<(), RenderError> {
        (**self).show(figure)
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn show(&mut self, figure: &Figure) -> Result<(), RenderError> {
        (**self).show(figure)
    }
}

/// Presenter that discards every figure
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn show(&mut self, _figure: &Figure) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Presenter that keeps a copy of every figure it is shown
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    frames: Vec<Figure>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every figure shown so far, oldest first
    #[must_use]
    pub fn frames(&self) -> &[Figure] {
        &self.frames
    }

    /// Most recently shown figure
    #[must_use]
    pub fn last(&self) -> Option<&Figure> {
        self.frames.last()
    }
}

impl Presenter for RecordingPresenter {
    fn show(&mut self, figure: &Figure) -> Result<(), RenderError> {
        self.frames.push(figure.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_keeps_every_frame() {
        let mut recorder = RecordingPresenter::new();
        let mut fig = Figure::subplots(1, 1);
        recorder.show(&fig).unwrap();
        fig.axes_mut(0).unwrap().set_title("second");
        recorder.show(&fig).unwrap();

        assert_eq!(recorder.frames().len(), 2);
        assert_eq!(recorder.frames()[0].axes()[0].title(), "");
        assert_eq!(recorder.last().unwrap().axes()[0].title(), "second");
    }

    fn show_with<P: Presenter>(mut presenter: P, figure: &Figure) -> Result<(), RenderError> {
        presenter.show(figure)
    }

    #[test]
    fn test_presenter_through_mut_ref_and_box() {
        let mut recorder = RecordingPresenter::new();
        show_with(&mut recorder, &Figure::subplots(1, 1)).unwrap();
        show_with(&mut recorder, &Figure::subplots(2, 2)).unwrap();
        assert_eq!(recorder.frames().len(), 2);
        assert_eq!(recorder.last().unwrap().grid(), (2, 2));

        let boxed: Box<dyn Presenter> = Box::new(NullPresenter);
        assert!(show_with(boxed, &Figure::subplots(2, 2)).is_ok());
    }
}
