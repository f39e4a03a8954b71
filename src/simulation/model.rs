//! Owner of the world, its parameters and its random number generator.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::error::Result;
use super::generator;
use super::params::{Params, validate_threshold};
use super::simulator;
use super::world::World;

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Number of ticks performed so far, including this one.
    pub tick: u64,
    /// Agents moved during this tick.
    pub relocations: usize,
}

/// A running segregation simulation.
///
/// The simulation is advanced one tick at a time by whatever drives it: the
/// frame loop of the window, the headless loop of the binary, or a test.
#[derive(Debug, Clone)]
pub struct Simulation {
    world: World,
    params: Params,
    seed: u64,
    rng: ChaCha8Rng,
    tick: u64,
}

impl Simulation {
    /// Validates `params` and generates the initial world.
    ///
    /// Without an explicit seed one is drawn from the thread RNG; it is kept
    /// so that [`Simulation::reset`] replays the same run.
    pub fn new(params: Params) -> Result<Self> {
        params.validate()?;

        let seed = params.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let world = generator::generate(params.n_locations, &params.distribution, &mut rng)?;

        log::info!(
            "created {dim}x{dim} world (seed {seed}, threshold {})",
            params.threshold,
            dim = world.dim()
        );

        Ok(Self {
            world,
            params,
            seed,
            rng,
            tick: 0,
        })
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) -> Result<TickReport> {
        let relocations =
            simulator::update_world(&mut self.world, self.params.threshold, &mut self.rng)?;
        self.tick += 1;

        log::debug!("tick {}: {relocations} relocations", self.tick);

        Ok(TickReport {
            tick: self.tick,
            relocations,
        })
    }

    /// Regenerates the world from the original seed and clears the tick counter.
    pub fn reset(&mut self) -> Result<()> {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.world =
            generator::generate(self.params.n_locations, &self.params.distribution, &mut self.rng)?;
        self.tick = 0;

        log::info!("reset world (seed {})", self.seed);
        Ok(())
    }

    /// Changes the satisfaction threshold used by subsequent ticks.
    pub fn set_threshold(&mut self, threshold: f64) -> Result<()> {
        validate_threshold(threshold)?;
        self.params.threshold = threshold;
        Ok(())
    }

    /// Current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Parameters in effect.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Seed the random number generator was started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Ticks performed since creation or the last reset.
    pub fn tick(&self) -> u64 {
        self.tick
    }
}
