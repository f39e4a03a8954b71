//! Satisfaction scoring and relocation of unsatisfied agents.
//!
//! A tick is a single row-major sweep that moves each unsatisfied agent as
//! soon as it is visited. Cells later in the sweep therefore see the moves
//! made earlier in the same tick.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::cell::Cell;
use super::error::{Error, Result};
use super::params::validate_threshold;
use super::world::World;

/// Random probes per grid cell before the empty-cell search falls back to a
/// full scan.
const PROBES_PER_CELL: usize = 16;

/// How an agent feels about its neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Satisfaction {
    /// Enough like neighbors; the agent stays.
    Satisfied,
    /// Too few like neighbors; the agent will be relocated.
    Unsatisfied,
    /// The location is empty.
    NotApplicable,
}

/// Fraction of populated Moore neighbors sharing the variant of `(row, col)`.
///
/// Empty and out-of-bounds neighbors are ignored. Returns `0.0` when the cell
/// itself is empty or has no populated neighbor.
pub fn same_place_satisfaction(world: &World, row: usize, col: usize) -> f64 {
    let cell = world.get(row, col);
    if cell.is_empty() {
        return 0.0;
    }

    let (mut same, mut different) = (0u32, 0u32);
    for neighbour in world.moore_neighbours(row, col).filter(|n| n.is_agent()) {
        if neighbour == cell {
            same += 1;
        } else {
            different += 1;
        }
    }

    if same + different == 0 {
        0.0
    } else {
        f64::from(same) / f64::from(same + different)
    }
}

/// Classifies the cell at `(row, col)` against `threshold`.
pub fn satisfaction(world: &World, row: usize, col: usize, threshold: f64) -> Satisfaction {
    if world.get(row, col).is_empty() {
        Satisfaction::NotApplicable
    } else if same_place_satisfaction(world, row, col) < threshold {
        Satisfaction::Unsatisfied
    } else {
        Satisfaction::Satisfied
    }
}

/// Row-major list of agents that are unsatisfied in the current world.
///
/// This is a snapshot: during a tick the set changes as agents move.
pub fn unsatisfied_locations(world: &World, threshold: f64) -> Vec<(usize, usize)> {
    world
        .iter()
        .filter(|&((row, col), _)| {
            satisfaction(world, row, col, threshold) == Satisfaction::Unsatisfied
        })
        .map(|(loc, _)| loc)
        .collect()
}

/// Performs one tick: every unsatisfied agent moves to a random empty cell.
///
/// Returns the number of relocations performed.
///
/// # Errors
///
/// Returns [`Error::InvalidThreshold`] for a threshold outside `[0, 1]` and
/// [`Error::NoPlacementAvailable`] when an agent must move but the world has
/// no empty cell. In both cases the world is left untouched.
pub fn update_world<R: Rng + ?Sized>(world: &mut World, threshold: f64, rng: &mut R) -> Result<usize> {
    validate_threshold(threshold)?;

    // Relocation conserves the number of empty cells, so one check covers
    // the whole sweep.
    let has_vacancy = world.count(Cell::Empty) > 0;
    let dim = world.dim();
    let mut relocations = 0;

    for row in 0..dim {
        for col in 0..dim {
            let cell = world.get(row, col);
            if cell.is_empty() || same_place_satisfaction(world, row, col) >= threshold {
                continue;
            }

            let no_placement = Error::NoPlacementAvailable { row, col };
            if !has_vacancy {
                return Err(no_placement);
            }
            let (dest_row, dest_col) = random_empty_location(world, rng).ok_or(no_placement)?;

            world.set(dest_row, dest_col, cell);
            world.set(row, col, Cell::Empty);
            relocations += 1;
        }
    }

    Ok(relocations)
}

/// Picks a uniformly random empty location.
///
/// Probes random locations first; after a bounded number of misses it scans
/// the grid and chooses among the empty cells found. Returns `None` only when
/// the world has no empty cell.
pub fn random_empty_location<R: Rng + ?Sized>(world: &World, rng: &mut R) -> Option<(usize, usize)> {
    let dim = world.dim();
    if dim == 0 {
        return None;
    }

    for _ in 0..PROBES_PER_CELL * world.n_cells() {
        let row = rng.random_range(0..dim);
        let col = rng.random_range(0..dim);
        if world.get(row, col).is_empty() {
            return Some((row, col));
        }
    }

    log::warn!("random probing found no empty location, scanning the grid");
    let vacancies: Vec<(usize, usize)> = world.locations_of(Cell::Empty).collect();
    vacancies.choose(rng).copied()
}
