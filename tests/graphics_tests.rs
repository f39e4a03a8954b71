#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use macroquad::color::{BLUE, Color, RED, WHITE};
use segregation::graphics::{Layout, Renderer, Viewport, cell_color, render_world};
use segregation::scheduler::{DEFAULT_TICK_INTERVAL, TickTimer};
use segregation::simulation::cell::Cell;
use segregation::simulation::world::World;

use Cell::{Blue as B, Empty as E, Red as R};

#[derive(Debug, PartialEq)]
enum DrawCall {
    Clear(Viewport),
    Cell { x: f32, y: f32, size: f32, color: Color },
}

#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, viewport: Viewport) {
        self.calls.push(DrawCall::Clear(viewport));
    }

    fn draw_cell(&mut self, x: f32, y: f32, size: f32, color: Color) {
        self.calls.push(DrawCall::Cell { x, y, size, color });
    }
}

#[test]
fn test_layout_dot_size() {
    let layout = Layout::new(800.0, 10_000, 50.0);
    assert_eq!(layout.dot_size, 7.0);
    assert_eq!(layout.margin, 50.0);

    let layout = Layout::new(800.0, 90_000, 50.0);
    assert!((layout.dot_size - 700.0 / 300.0).abs() < 1e-5);
}

#[test]
fn test_layout_minimum_dot_size() {
    // 700 / 1000 pixels is below one, so dots are drawn two pixels wide.
    let layout = Layout::new(800.0, 1_000_000, 50.0);
    assert_eq!(layout.dot_size, 2.0);
}

#[test]
fn test_cell_origin() {
    let layout = Layout::new(800.0, 100, 50.0);
    assert_eq!(layout.dot_size, 70.0);

    assert_eq!(layout.cell_origin(0, 0), (50.0, 50.0));
    assert_eq!(layout.cell_origin(0, 3), (260.0, 50.0));
    assert_eq!(layout.cell_origin(2, 1), (120.0, 190.0));
}

#[test]
fn test_cell_colors() {
    assert_eq!(cell_color(R), RED);
    assert_eq!(cell_color(B), BLUE);
    assert_eq!(cell_color(E), WHITE);
}

#[test]
fn test_render_world() {
    let world = World::from_rows(vec![vec![R, E], vec![E, B]]).unwrap();
    let layout = Layout::new(300.0, 4, 50.0);
    let viewport = Viewport {
        width: 300.0,
        height: 300.0,
    };
    let mut renderer = RecordingRenderer::default();

    render_world(&mut renderer, &world, &layout, viewport);

    assert_eq!(
        renderer.calls,
        vec![
            DrawCall::Clear(viewport),
            DrawCall::Cell {
                x: 50.0,
                y: 50.0,
                size: 100.0,
                color: RED
            },
            DrawCall::Cell {
                x: 150.0,
                y: 50.0,
                size: 100.0,
                color: WHITE
            },
            DrawCall::Cell {
                x: 50.0,
                y: 150.0,
                size: 100.0,
                color: WHITE
            },
            DrawCall::Cell {
                x: 150.0,
                y: 150.0,
                size: 100.0,
                color: BLUE
            },
        ]
    );
}

#[test]
fn test_tick_timer_fires_after_interval() {
    let mut timer = TickTimer::new(0.45, 10.0);

    assert!(!timer.poll(10.2));
    assert!(!timer.poll(10.45));
    assert!(timer.poll(10.5));

    // The interval restarts from the last tick.
    assert!(!timer.poll(10.9));
    assert!(timer.poll(11.0));
}

#[test]
fn test_tick_timer_handles_bursty_polls() {
    let mut timer = TickTimer::new(0.45, 0.0);

    // A long stall yields a single tick, not a backlog.
    assert!(timer.poll(5.0));
    assert!(!timer.poll(5.0));
    assert!(!timer.poll(5.1));
}

#[test]
fn test_tick_timer_interval() {
    let mut timer = TickTimer::default();
    assert_eq!(timer.interval(), DEFAULT_TICK_INTERVAL);

    timer.set_interval(-1.0);
    assert_eq!(timer.interval(), 0.0);
    assert!(timer.poll(0.001));
}
