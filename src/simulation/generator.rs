//! Initial population of a world from target fractions.

use rand::Rng;

use super::cell::Cell;
use super::error::{Error, Result};
use super::params::Distribution;
use super::world::World;

/// Generates a random world.
///
/// The grid side is `floor(sqrt(n_locations))`, so when `n_locations` is not
/// a perfect square the world holds fewer cells than requested. Each category
/// starts with a target count of `round(fraction * n_locations)`; cells are
/// filled row-major, each one drawing uniformly among the categories whose
/// target is not yet exhausted. Once every target is exhausted the remaining
/// cells are left `Empty`.
///
/// If the distribution asks for any empty space, the returned world is
/// guaranteed to contain at least one `Empty` cell.
///
/// # Arguments
///
/// * `n_locations` - Target number of locations.
/// * `distribution` - Target fractions of red, blue and empty cells.
/// * `rng` - Source of randomness.
pub fn generate<R: Rng + ?Sized>(
    n_locations: usize,
    distribution: &Distribution,
    rng: &mut R,
) -> Result<World> {
    if n_locations == 0 {
        return Err(Error::InvalidLocationCount(n_locations));
    }
    distribution.validate()?;

    let dim = n_locations.isqrt();
    let mut remaining = Cell::ALL.map(|cell| distribution.target_count(cell, n_locations));

    let mut world = World::filled(dim, Cell::Empty);
    for row in 0..dim {
        for col in 0..dim {
            world.set(row, col, draw_category(&mut remaining, rng));
        }
    }

    if distribution.empty > 0.0 {
        ensure_vacancy(&mut world, rng);
    }

    log::debug!(
        "generated {dim}x{dim} world: {} red, {} blue, {} empty",
        world.count(Cell::Red),
        world.count(Cell::Blue),
        world.count(Cell::Empty)
    );

    Ok(world)
}

/// Draws a category uniformly among those with a positive remaining count
/// and decrements it. Falls back to `Empty` when all counts are exhausted.
///
/// This has the same distribution as resampling a uniform category until an
/// available one comes up, but always finishes in a single draw.
fn draw_category<R: Rng + ?Sized>(remaining: &mut [usize; 3], rng: &mut R) -> Cell {
    let n_available = remaining.iter().filter(|&&n| n > 0).count();
    if n_available == 0 {
        return Cell::Empty;
    }

    let pick = rng.random_range(0..n_available);
    let Some(idx) = (0..remaining.len())
        .filter(|&i| remaining[i] > 0)
        .nth(pick)
    else {
        return Cell::Empty;
    };

    remaining[idx] -= 1;
    Cell::ALL[idx]
}

/// Clears one random location if the world has no empty cell at all, so that
/// relocation always has somewhere to go.
fn ensure_vacancy<R: Rng + ?Sized>(world: &mut World, rng: &mut R) {
    let dim = world.dim();
    if dim == 0 || world.count(Cell::Empty) > 0 {
        return;
    }

    let row = rng.random_range(0..dim);
    let col = rng.random_range(0..dim);
    log::warn!("rounding left no empty location, clearing ({row}, {col})");
    world.set(row, col, Cell::Empty);
}
