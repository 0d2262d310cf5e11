//! Rendering layer
//!
//! Everything needed to turn temperature fields into colored panels:
//! colormaps and normalization, the figure model components draw on, the
//! rasterizer used by display backends, display settings and errors.

pub mod colormap;
mod error;
pub mod figure;
pub mod raster;
pub mod style;

pub use colormap::{Colormap, Norm, Rgb};
pub use error::RenderError;
pub use figure::{Axes, Colorbar, Figure, Image};
pub use raster::{gradient, rasterize, Raster};
pub use style::{Aspect, ImageStyle, Origin};
