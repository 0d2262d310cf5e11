//! Heat View Core Library
//!
//! Heatmap views of 2D temperature fields produced by a time-stepping
//! simulation. Two components draw onto a figure they own exclusively:
//!
//! - [`SnapshotGrid`]: four frames of a whole time series in a 2x2 grid
//! - [`LiveHeatmap`]: one panel redrawn in place as new fields arrive
//!
//! Showing the figure is delegated to a [`Presenter`], so the same component
//! can draw into a terminal ([`TerminalPresenter`]), record frames for
//! inspection ([`RecordingPresenter`]) or draw nowhere ([`NullPresenter`]).
//!
//! ```
//! use heat_view_core::{Field, LiveHeatmap, RecordingPresenter};
//!
//! let u0 = Field::from_rows(&[vec![20.0, 25.0], vec![30.0, 90.0]]).unwrap();
//! let mut view = LiveHeatmap::new(u0.clone(), RecordingPresenter::new()).unwrap();
//! view.update(u0, 0.25).unwrap();
//! let shown = view.presenter().last().unwrap();
//! assert_eq!(shown.axes()[0].title(), "Temperature map t = 0.25 s");
//! ```

// Core types
pub mod core_types;

pub mod heatmap;
pub mod labels;
pub mod present;
pub mod render;
pub mod snapshots;

pub use core_types::{Field, Seconds, TimeSeries};
pub use heatmap::{HeatmapState, LiveHeatmap};
pub use present::{FigureView, NullPresenter, Presenter, RecordingPresenter, TerminalPresenter};
pub use render::{Aspect, Colormap, Figure, ImageStyle, Norm, Origin, RenderError};
pub use snapshots::{snapshot_indices, SnapshotGrid};
