//! Nearest-neighbour rasterization of images into pixel grids
//!
//! Pixel `(0, 0)` is the top-left corner of the target area. With
//! `Origin::Lower` the last data row lands on the top pixel row and data row 0
//! on the bottom one.

use super::colormap::{Colormap, Rgb, LUT_SIZE};
use super::figure::Image;
use super::style::{Aspect, Origin};

/// Rasterized pixels, row-major from the top-left; `None` is background
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Option<Rgb>>,
}

impl Raster {
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at column `x`, row `y` (from the top)
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[y * self.width + x]
    }
}

/// Sub-rectangle of the target actually covered by the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Viewport {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

fn viewport(aspect: Aspect, data: (usize, usize), width: usize, height: usize) -> Viewport {
    let (rows, cols) = data;
    match aspect {
        Aspect::Auto => Viewport {
            x: 0,
            y: 0,
            width,
            height,
        },
        Aspect::Equal => {
            let scale = (width as f64 / cols as f64).min(height as f64 / rows as f64);
            let w = ((cols as f64 * scale).round() as usize).clamp(1, width);
            let h = ((rows as f64 * scale).round() as usize).clamp(1, height);
            Viewport {
                x: (width - w) / 2,
                y: (height - h) / 2,
                width: w,
                height: h,
            }
        }
    }
}

/// Index of the data cell whose span contains the center of pixel `p` out of `n`
fn nearest(p: usize, n: usize, cells: usize) -> usize {
    let idx = ((p as f64 + 0.5) * cells as f64 / n as f64) as usize;
    idx.min(cells - 1)
}

/// Rasterize `image` into a `width x height` pixel grid
#[must_use]
pub fn rasterize(image: &Image, width: usize, height: usize) -> Raster {
    let mut pixels = vec![None; width * height];
    let data = image.data();
    let (rows, cols) = data.shape();

    if rows > 0 && cols > 0 && width > 0 && height > 0 {
        let style = image.style();
        let norm = image.norm();
        let view = viewport(style.aspect, (rows, cols), width, height);

        for py in 0..view.height {
            let band = nearest(py, view.height, rows);
            let row = match style.origin {
                Origin::Lower => rows - 1 - band,
                Origin::Upper => band,
            };
            for px in 0..view.width {
                let col = nearest(px, view.width, cols);
                let color = data
                    .get(row, col)
                    .and_then(|v| style.colormap.color(norm.normalize(v)));
                pixels[(view.y + py) * width + view.x + px] = color;
            }
        }
    }

    Raster {
        width,
        height,
        pixels,
    }
}

/// Vertical colorbar gradient of `height` pixels, top pixel is the maximum
#[must_use]
pub fn gradient(colormap: Colormap, height: usize) -> Vec<Rgb> {
    (0..height)
        .map(|py| {
            let x = if height > 1 {
                1.0 - py as f64 / (height - 1) as f64
            } else {
                1.0
            };
            colormap.lut_entry((x * (LUT_SIZE - 1) as f64).round() as usize)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Field;
    use crate::render::{ImageStyle, Norm};

    fn ramp_image(style: ImageStyle) -> Image {
        // row 0 is cold, row 1 is hot
        let field = Field::from_rows(&[vec![0.0, 0.0], vec![10.0, 10.0]]).unwrap();
        Image::new(field, Norm::new(0.0, 10.0), style)
    }

    #[test]
    fn test_origin_lower_puts_row_zero_at_bottom() {
        let raster = rasterize(&ramp_image(ImageStyle::default()), 2, 2);
        let hot = Colormap::Jet.color(1.0);
        let cold = Colormap::Jet.color(0.0);
        assert_eq!(raster.pixel(0, 0), hot);
        assert_eq!(raster.pixel(1, 1), cold);
    }

    #[test]
    fn test_origin_upper_puts_row_zero_at_top() {
        let style = ImageStyle::default().with_origin(Origin::Upper);
        let raster = rasterize(&ramp_image(style), 2, 2);
        assert_eq!(raster.pixel(0, 0), Colormap::Jet.color(0.0));
        assert_eq!(raster.pixel(0, 1), Colormap::Jet.color(1.0));
    }

    #[test]
    fn test_auto_aspect_stretches() {
        let raster = rasterize(&ramp_image(ImageStyle::default()), 8, 4);
        for y in 0..4 {
            for x in 0..8 {
                assert!(raster.pixel(x, y).is_some());
            }
        }
        // top half hot, bottom half cold
        assert_eq!(raster.pixel(7, 1), Colormap::Jet.color(1.0));
        assert_eq!(raster.pixel(7, 2), Colormap::Jet.color(0.0));
    }

    #[test]
    fn test_equal_aspect_letterboxes() {
        let style = ImageStyle::default().with_aspect(Aspect::Equal);
        let raster = rasterize(&ramp_image(style), 8, 4);
        // 2x2 data in 8x4 pixels: 4x4 square centered horizontally
        assert!(raster.pixel(0, 0).is_none());
        assert!(raster.pixel(1, 3).is_none());
        assert!(raster.pixel(2, 0).is_some());
        assert!(raster.pixel(5, 3).is_some());
        assert!(raster.pixel(6, 0).is_none());
    }

    #[test]
    fn test_values_outside_norm_clip() {
        let field = Field::from_rows(&[vec![-100.0, 100.0]]).unwrap();
        let image = Image::new(field, Norm::new(0.0, 1.0), ImageStyle::default());
        let raster = rasterize(&image, 2, 1);
        assert_eq!(raster.pixel(0, 0), Colormap::Jet.color(0.0));
        assert_eq!(raster.pixel(1, 0), Colormap::Jet.color(1.0));
    }

    #[test]
    fn test_empty_target() {
        let raster = rasterize(&ramp_image(ImageStyle::default()), 0, 0);
        assert_eq!(raster.width(), 0);
        assert!(raster.pixel(0, 0).is_none());
    }

    #[test]
    fn test_gradient_runs_top_down() {
        let ramp = gradient(Colormap::Jet, 5);
        assert_eq!(ramp.len(), 5);
        assert_eq!(Some(ramp[0]), Colormap::Jet.color(1.0));
        assert_eq!(Some(ramp[4]), Colormap::Jet.color(0.0));
    }
}
