mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use segregation::graphics::{self, DEFAULT_MARGIN, Layout, ScreenRenderer, Viewport};
use segregation::scheduler::{DEFAULT_TICK_INTERVAL, TickTimer};
use segregation::simulation::{model::Simulation, params::Params, simulator};
use std::path::PathBuf;

/// Side length of the square drawing area, in pixels.
const CANVAS_SIZE: f32 = 800.0;
const PANEL_WIDTH: f32 = 260.0;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with simulation parameters; flags below override it.
    #[arg(long)]
    params: Option<PathBuf>,

    #[arg(long)]
    n_locations: Option<usize>,

    #[arg(long)]
    red: Option<f64>,

    #[arg(long)]
    blue: Option<f64>,

    #[arg(long)]
    empty: Option<f64>,

    #[arg(long)]
    threshold: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Delay between ticks in the window.
    #[arg(long, default_value_t = (DEFAULT_TICK_INTERVAL * 1000.0) as u64)]
    interval_ms: u64,

    /// Start the simulation immediately instead of showing the setup screen.
    #[arg(long)]
    no_setup: bool,

    /// Run without a window, logging every tick.
    #[arg(long)]
    headless: bool,

    /// Number of ticks to run in headless mode.
    #[arg(long, default_value_t = 100)]
    ticks: u64,
}

impl Cli {
    fn to_params(&self) -> Result<Params> {
        let mut params = match &self.params {
            Some(path) => {
                Params::from_file(path).with_context(|| format!("failed to load {path:?}"))?
            }
            None => Params::default(),
        };

        if let Some(n_locations) = self.n_locations {
            params.n_locations = n_locations;
        }
        if let Some(red) = self.red {
            params.distribution.red = red;
        }
        if let Some(blue) = self.blue {
            params.distribution.blue = blue;
        }
        if let Some(empty) = self.empty {
            params.distribution.empty = empty;
        }
        if let Some(threshold) = self.threshold {
            params.threshold = threshold;
        }
        if self.seed.is_some() {
            params.seed = self.seed;
        }

        params.validate().context("invalid parameters")?;
        Ok(params)
    }
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = Cli::parse();
    log::info!("{args:#?}");

    let params = args.to_params().context("failed to construct params")?;

    if args.headless {
        return run_headless(params, args.ticks);
    }

    let interval = args.interval_ms as f64 / 1000.0;
    macroquad::Window::from_config(window_conf(), run_window(params, interval, args.no_setup));

    Ok(())
}

fn run_headless(params: Params, ticks: u64) -> Result<()> {
    let mut simulation = Simulation::new(params).context("failed to create simulation")?;

    for _ in 0..ticks {
        let report = simulation.step().context("failed to perform tick")?;
        log::info!("tick {}: {} relocations", report.tick, report.relocations);
    }

    Ok(())
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Segregation Simulation".to_owned(),
        window_width: (CANVAS_SIZE + PANEL_WIDTH) as i32,
        window_height: CANVAS_SIZE as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn start_simulation(params: &Params, ui_state: &mut ui::UIState) -> Option<Simulation> {
    match Simulation::new(params.clone()) {
        Ok(simulation) => {
            ui_state.threshold = params.threshold;
            ui_state.unsatisfied =
                simulator::unsatisfied_locations(simulation.world(), params.threshold).len();
            Some(simulation)
        }
        Err(error) => {
            log::error!("failed to create simulation: {error}");
            None
        }
    }
}

async fn run_window(mut params: Params, interval: f64, skip_setup: bool) {
    let mut ui_state = ui::UIState::new(params.threshold, interval * 1000.0);
    ui_state.panel_width = PANEL_WIDTH;

    let mut timer = TickTimer::new(interval, get_time());
    let mut renderer = ScreenRenderer;
    let viewport = Viewport {
        width: CANVAS_SIZE,
        height: CANVAS_SIZE,
    };

    let mut simulation = if skip_setup {
        start_simulation(&params, &mut ui_state)
    } else {
        None
    };

    loop {
        if simulation.is_none() {
            if ui::draw_genesis_screen(&mut params) {
                simulation = start_simulation(&params, &mut ui_state);
                timer = TickTimer::new(timer.interval(), get_time());
            }
            next_frame().await;
            continue;
        }
        let Some(sim) = simulation.as_mut() else {
            continue;
        };

        if (ui_state.threshold - sim.params().threshold).abs() > f64::EPSILON {
            if let Err(error) = sim.set_threshold(ui_state.threshold) {
                ui_state.status_message = Some(error.to_string());
                ui_state.threshold = sim.params().threshold;
            }
        }
        timer.set_interval(ui_state.interval_ms / 1000.0);

        if ui_state.take_reset_request() {
            ui_state.status_message = Some(match sim.reset() {
                Ok(()) => "World reset".to_string(),
                Err(error) => error.to_string(),
            });
            ui_state.last_relocations = 0;
            ui_state.unsatisfied =
                simulator::unsatisfied_locations(sim.world(), sim.params().threshold).len();
        }

        let due = timer.poll(get_time()) && !ui_state.paused;
        if ui_state.take_step_request() || due {
            match sim.step() {
                Ok(report) => {
                    ui_state.last_relocations = report.relocations;
                    ui_state.unsatisfied =
                        simulator::unsatisfied_locations(sim.world(), sim.params().threshold)
                            .len();
                }
                Err(error) => {
                    log::error!("tick failed: {error}");
                    ui_state.status_message = Some(error.to_string());
                    ui_state.paused = true;
                }
            }
        }

        let layout = Layout::new(viewport.width, sim.params().n_locations, DEFAULT_MARGIN);
        graphics::render_world(&mut renderer, sim.world(), &layout, viewport);

        ui::draw_ui(&mut ui_state, sim);
        ui::process_egui();

        next_frame().await;
    }
}
