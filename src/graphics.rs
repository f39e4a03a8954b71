//! Drawing of the world as a grid of colored dots.
//!
//! The simulation only needs something that can clear a viewport and fill a
//! circle; [`Renderer`] captures that so the frame loop can use macroquad
//! while tests record draw calls instead.

use macroquad::prelude::*;

use crate::simulation::{cell::Cell, world::World};

/// Default distance between the viewport edge and the first dot, in pixels.
pub const DEFAULT_MARGIN: f32 = 50.0;

/// Drawing area in screen pixels, anchored at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

/// Something that can draw the world.
pub trait Renderer {
    /// Clears the viewport before a new frame.
    fn clear(&mut self, viewport: Viewport);

    /// Fills a circle of diameter `size` whose bounding box starts at `(x, y)`.
    fn draw_cell(&mut self, x: f32, y: f32, size: f32, color: Color);
}

/// Screen geometry of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Offset of the grid from the viewport edges.
    pub margin: f32,
    /// Diameter of a single dot.
    pub dot_size: f32,
}

impl Layout {
    /// Fits `n_locations` dots along the viewport width.
    ///
    /// Dots smaller than one pixel are drawn with a size of two pixels
    /// instead, letting the grid overflow the viewport.
    pub fn new(viewport_width: f32, n_locations: usize, margin: f32) -> Self {
        let mut dot_size = (viewport_width - 2.0 * margin) / (n_locations as f32).sqrt();
        if dot_size < 1.0 {
            dot_size = 2.0;
        }
        Self { margin, dot_size }
    }

    /// Top-left pixel of the dot for `(row, col)`.
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.margin + col as f32 * self.dot_size,
            self.margin + row as f32 * self.dot_size,
        )
    }
}

/// Fill color of a cell.
pub fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Red => RED,
        Cell::Blue => BLUE,
        Cell::Empty => WHITE,
    }
}

/// Clears the viewport and draws every cell of `world`.
pub fn render_world<R: Renderer + ?Sized>(
    renderer: &mut R,
    world: &World,
    layout: &Layout,
    viewport: Viewport,
) {
    renderer.clear(viewport);
    for ((row, col), cell) in world.iter() {
        let (x, y) = layout.cell_origin(row, col);
        renderer.draw_cell(x, y, layout.dot_size, cell_color(cell));
    }
}

/// [`Renderer`] drawing onto the macroquad window.
#[derive(Debug, Default)]
pub struct ScreenRenderer;

impl Renderer for ScreenRenderer {
    fn clear(&mut self, viewport: Viewport) {
        clear_background(LIGHTGRAY);
        draw_rectangle(0.0, 0.0, viewport.width, viewport.height, WHITE);
    }

    fn draw_cell(&mut self, x: f32, y: f32, size: f32, color: Color) {
        let radius = size / 2.0;
        draw_circle(x + radius, y + radius, radius, color);
    }
}
