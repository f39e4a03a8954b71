//! Error type shared by the world model, the generator and the simulator.

use thiserror::Error;

/// Errors raised while configuring or advancing a segregation simulation.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested number of locations cannot produce a grid.
    #[error("number of locations must be positive, but is {0}")]
    InvalidLocationCount(usize),

    /// The population fractions are negative, non-finite or do not sum to 1.0.
    #[error("invalid distribution (red {red}, blue {blue}, empty {empty}): {reason}")]
    InvalidDistribution {
        /// Fraction of red agents.
        red: f64,
        /// Fraction of blue agents.
        blue: f64,
        /// Fraction of empty locations.
        empty: f64,
        /// What is wrong with the fractions.
        reason: String,
    },

    /// The satisfaction threshold lies outside `[0, 1]`.
    #[error("threshold must be in the range [0, 1], but is {0}")]
    InvalidThreshold(f64),

    /// Hand-built rows do not form a square grid.
    #[error("grid must be square, but has {rows} rows and a row of length {cols}")]
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Length of the first offending row.
        cols: usize,
    },

    /// An unsatisfied agent had nowhere to move.
    #[error("no empty location available for agent at ({row}, {col})")]
    NoPlacementAvailable {
        /// Row of the agent that could not be relocated.
        row: usize,
        /// Column of the agent that could not be relocated.
        col: usize,
    },

    /// Reading a parameter file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A parameter file is not valid JSON for [`crate::simulation::params::Params`].
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout [`crate::simulation`].
pub type Result<T> = std::result::Result<T, Error>;
