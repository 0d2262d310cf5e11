//! Figure model: the display surface a component draws on
//!
//! A `Figure` is a `rows x cols` grid of `Axes`. Each axes holds at most one
//! `Image` and a title. The figure can carry one colorbar, bound to the image
//! of a single axes; its range is always read back from that image's `Norm`,
//! so replacing image data never moves the colorbar bounds.

use crate::core_types::Field;

use super::colormap::{Colormap, Norm};
use super::error::RenderError;
use super::style::ImageStyle;

/// Field drawn with a fixed normalization and style
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    data: Field,
    norm: Norm,
    style: ImageStyle,
}

impl Image {
    #[must_use]
    pub fn new(data: Field, norm: Norm, style: ImageStyle) -> Self {
        Self { data, norm, style }
    }

    /// Replace the displayed data, keeping norm and style
    ///
    /// # Errors
    ///
    /// Returns `RenderError::ShapeMismatch` if the new data has a different shape.
    pub fn set_data(&mut self, data: Field) -> Result<(), RenderError> {
        if data.shape() != self.data.shape() {
            return Err(RenderError::ShapeMismatch {
                expected: self.data.shape(),
                found: data.shape(),
            });
        }
        self.data = data;
        Ok(())
    }

    #[must_use]
    pub fn data(&self) -> &Field {
        &self.data
    }

    #[must_use]
    pub fn norm(&self) -> Norm {
        self.norm
    }

    #[must_use]
    pub fn style(&self) -> ImageStyle {
        self.style
    }
}

/// One panel of the figure
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Axes {
    title: String,
    image: Option<Image>,
}

impl Axes {
    /// Draw `data` into this axes, replacing any previous image
    pub fn imshow(&mut self, data: Field, norm: Norm, style: ImageStyle) -> &mut Image {
        self.image.insert(Image::new(data, norm, style))
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    pub fn image_mut(&mut self) -> Option<&mut Image> {
        self.image.as_mut()
    }
}

/// Color legend bound to one axes' image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colorbar {
    axes: usize,
}

impl Colorbar {
    /// Index of the axes whose image this colorbar describes
    #[must_use]
    pub fn axes(&self) -> usize {
        self.axes
    }
}

/// Grid of axes plus an optional colorbar
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    rows: usize,
    cols: usize,
    axes: Vec<Axes>,
    colorbar: Option<Colorbar>,
}

impl Figure {
    /// Create a figure with a `rows x cols` grid of empty axes (row-major)
    #[must_use]
    pub fn subplots(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            axes: vec![Axes::default(); rows * cols],
            colorbar: None,
        }
    }

    /// Grid size as `(rows, cols)`
    #[must_use]
    pub fn grid(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All axes in row-major order
    #[must_use]
    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    /// Mutable axes by row-major index
    ///
    /// # Errors
    ///
    /// Returns `RenderError::NoSuchAxes` when the index is outside the grid.
    pub fn axes_mut(&mut self, index: usize) -> Result<&mut Axes, RenderError> {
        let count = self.axes.len();
        self.axes
            .get_mut(index)
            .ok_or(RenderError::NoSuchAxes { index, count })
    }

    /// Attach the figure colorbar to the image in axes `index`
    ///
    /// Replaces any previous colorbar.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::NoSuchAxes` or `RenderError::NoImage`.
    pub fn colorbar(&mut self, index: usize) -> Result<Colorbar, RenderError> {
        let count = self.axes.len();
        let axes = self
            .axes
            .get(index)
            .ok_or(RenderError::NoSuchAxes { index, count })?;
        if axes.image.is_none() {
            return Err(RenderError::NoImage { axes: index });
        }
        let colorbar = Colorbar { axes: index };
        self.colorbar = Some(colorbar);
        Ok(colorbar)
    }

    #[must_use]
    pub fn attached_colorbar(&self) -> Option<Colorbar> {
        self.colorbar
    }

    /// Range and colormap the colorbar currently shows
    #[must_use]
    pub fn colorbar_scale(&self) -> Option<(Norm, Colormap)> {
        let colorbar = self.colorbar?;
        let image = self.axes.get(colorbar.axes)?.image()?;
        Some((image.norm(), image.style().colormap))
    }
}
