//! Terminal presenter built on `ratatui`
//!
//! Each panel is a bordered block titled with the axes title. Image pixels are
//! drawn with upper half blocks, two pixel rows per terminal row, in 24-bit
//! color. A colorbar, when attached, occupies a fixed-width column on the
//! right with its maximum at the top and minimum at the bottom.

use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Widget};
use ratatui::Terminal;
use tracing::debug;

use crate::render::{gradient, rasterize, Colormap, Figure, Norm, RenderError, Rgb};

/// Width of the colorbar column, borders included
const COLORBAR_WIDTH: u16 = 14;
/// Width of the color ramp inside the colorbar
const RAMP_WIDTH: u16 = 2;

const UPPER_HALF: char = '\u{2580}';

fn to_color(pixel: Option<Rgb>) -> Color {
    pixel.map_or(Color::Reset, |Rgb(r, g, b)| Color::Rgb(r, g, b))
}

/// Widget drawing a whole figure into a rectangle
#[derive(Debug, Clone, Copy)]
pub struct FigureView<'a> {
    figure: &'a Figure,
}

impl<'a> FigureView<'a> {
    #[must_use]
    pub fn new(figure: &'a Figure) -> Self {
        Self { figure }
    }

    fn render_panels(&self, area: Rect, buf: &mut Buffer) {
        let (rows, cols) = self.figure.grid();
        if rows == 0 || cols == 0 {
            return;
        }
        let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
        for (r, row_area) in row_areas.iter().enumerate() {
            let cells =
                Layout::horizontal(vec![Constraint::Ratio(1, cols as u32); cols]).split(*row_area);
            for (c, panel) in cells.iter().enumerate() {
                if let Some(axes) = self.figure.axes().get(r * cols + c) {
                    let block = Block::bordered().title(axes.title());
                    let inner = block.inner(*panel);
                    block.render(*panel, buf);
                    if let Some(image) = axes.image() {
                        let raster = rasterize(
                            image,
                            usize::from(inner.width),
                            usize::from(inner.height) * 2,
                        );
                        for y in 0..inner.height {
                            for x in 0..inner.width {
                                let top = raster.pixel(usize::from(x), usize::from(y) * 2);
                                let bottom = raster.pixel(usize::from(x), usize::from(y) * 2 + 1);
                                if let Some(cell) = buf.cell_mut((inner.x + x, inner.y + y)) {
                                    cell.set_char(UPPER_HALF)
                                        .set_fg(to_color(top))
                                        .set_bg(to_color(bottom));
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    fn render_colorbar(norm: Norm, colormap: Colormap, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered();
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width <= RAMP_WIDTH {
            return;
        }

        let ramp = gradient(colormap, usize::from(inner.height) * 2);
        for y in 0..inner.height {
            let top = ramp.get(usize::from(y) * 2).copied();
            let bottom = ramp.get(usize::from(y) * 2 + 1).copied();
            for x in 0..RAMP_WIDTH {
                if let Some(cell) = buf.cell_mut((inner.x + x, inner.y + y)) {
                    cell.set_char(UPPER_HALF)
                        .set_fg(to_color(top))
                        .set_bg(to_color(bottom));
                }
            }
        }

        let label_x = inner.x + RAMP_WIDTH + 1;
        let label_width = usize::from(inner.width - RAMP_WIDTH - 1);
        let style = Style::default();
        buf.set_stringn(label_x, inner.y, format!("{:.2}", norm.vmax), label_width, style);
        if inner.height > 1 {
            let bottom = inner.y + inner.height - 1;
            buf.set_stringn(label_x, bottom, format!("{:.2}", norm.vmin), label_width, style);
        }
        if inner.height > 2 {
            let middle = inner.y + inner.height / 2;
            let mid = (norm.vmin + norm.vmax) / 2.0;
            buf.set_stringn(label_x, middle, format!("{mid:.2}"), label_width, style);
        }
    }
}

impl Widget for FigureView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.figure.colorbar_scale() {
            Some((norm, colormap)) if area.width >= COLORBAR_WIDTH * 2 => {
                let [panels, colorbar] =
                    Layout::horizontal([Constraint::Fill(1), Constraint::Length(COLORBAR_WIDTH)])
                        .areas(area);
                self.render_panels(panels, buf);
                Self::render_colorbar(norm, colormap, colorbar, buf);
            }
            _ => self.render_panels(area, buf),
        }
    }
}

/// Presenter redrawing the figure in place on a terminal
///
/// Every `show` repaints the full surface, so the viewer only ever sees the
/// latest state.
pub struct TerminalPresenter<B: Backend> {
    terminal: Terminal<B>,
    frames_drawn: u64,
}

impl<B: Backend> TerminalPresenter<B> {
    /// Wrap a backend in a new terminal
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Backend` if the terminal cannot be created.
    pub fn new(backend: B) -> Result<Self, RenderError> {
        Ok(Self::from_terminal(Terminal::new(backend)?))
    }

    #[must_use]
    pub fn from_terminal(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            frames_drawn: 0,
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Number of completed draws
    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }
}

impl<B: Backend> super::Presenter for TerminalPresenter<B> {
    fn show(&mut self, figure: &Figure) -> Result<(), RenderError> {
        let completed = self
            .terminal
            .draw(|frame| frame.render_widget(FigureView::new(figure), frame.area()))?;
        self.frames_drawn += 1;
        debug!(
            "Drew frame {} ({}x{} cells)",
            self.frames_drawn, completed.area.width, completed.area.height
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Field;
    use crate::present::Presenter;
    use crate::render::ImageStyle;
    use ratatui::backend::TestBackend;

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    fn single_panel_figure(title: &str) -> Figure {
        let mut fig = Figure::subplots(1, 1);
        let axes = fig.axes_mut(0).unwrap();
        let field = Field::from_rows(&[vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
        axes.imshow(field, Norm::new(0.0, 3.0), ImageStyle::default());
        axes.set_title(title);
        fig
    }

    #[test]
    fn test_title_and_colorbar_labels_drawn() {
        let mut fig = single_panel_figure("Temperature map t = 0 s");
        fig.colorbar(0).unwrap();

        let mut presenter = TerminalPresenter::new(TestBackend::new(60, 12)).unwrap();
        presenter.show(&fig).unwrap();

        let text = screen_text(presenter.backend().buffer());
        assert!(text.contains("Temperature map t = 0 s"));
        assert!(text.contains("3.00"));
        assert!(text.contains("0.00"));
        assert_eq!(presenter.frames_drawn(), 1);
    }

    #[test]
    fn test_pixels_use_colormap() {
        let fig = single_panel_figure("x");
        let mut presenter = TerminalPresenter::new(TestBackend::new(10, 6)).unwrap();
        presenter.show(&fig).unwrap();

        let buffer = presenter.backend().buffer();
        // inside the border, top-left pixel shows data row 1 (origin at the bottom)
        let cell = buffer.cell((1, 1)).unwrap();
        assert_eq!(cell.symbol(), UPPER_HALF.to_string());
        assert_eq!(cell.fg, to_color(Colormap::Jet.color(2.0 / 3.0)));
    }

    #[test]
    fn test_redraw_replaces_previous_title() {
        let mut presenter = TerminalPresenter::new(TestBackend::new(40, 8)).unwrap();
        presenter.show(&single_panel_figure("first")).unwrap();
        presenter.show(&single_panel_figure("second")).unwrap();

        let text = screen_text(presenter.backend().buffer());
        assert!(text.contains("second"));
        assert!(!text.contains("first"));
        assert_eq!(presenter.frames_drawn(), 2);
    }
}
