//! # Segregation - Schelling's model on a square grid
//!
//! Red and blue agents live on a square grid with some empty locations. On
//! every tick each agent looks at its Moore neighborhood; agents with too few
//! like neighbors move to a random empty location. Repeated ticks let
//! segregated clusters emerge.
//!
//! ## Core Modules
//!
//! - [`simulation::world`] - Grid of cells and bounds checks
//! - [`simulation::generator`] - Initial random population
//! - [`simulation::simulator`] - Satisfaction scoring and relocation
//! - [`simulation::model`] - Simulation driver owning world and RNG
//! - [`graphics`] - Drawing the grid through a [`graphics::Renderer`]
//! - [`scheduler`] - Fixed-interval tick timing

/// Core simulation logic and data structures.
pub mod simulation {
    /// Cell states.
    pub mod cell;
    /// Error type for configuration and ticks.
    pub mod error;
    /// Random world generation from a target distribution.
    pub mod generator;
    /// Simulation driver: world, parameters and seeded RNG.
    pub mod model;
    /// Simulation parameters and population distribution.
    pub mod params;
    /// Per-tick satisfaction scoring and relocation.
    pub mod simulator;
    /// Square grid of cells.
    pub mod world;
}

/// Rendering of the world as colored dots.
pub mod graphics;
/// Tick timing for frame-driven loops.
pub mod scheduler;
