use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::error::{Error, Result};

/// Tolerance used when checking that the distribution sums to 1.0.
const DISTRIBUTION_TOLERANCE: f64 = 1e-6;

/// Target population fractions of red agents, blue agents and empty locations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Fraction of locations holding red agents.
    pub red: f64,
    /// Fraction of locations holding blue agents.
    pub blue: f64,
    /// Fraction of locations left empty.
    pub empty: f64,
}

impl Default for Distribution {
    fn default() -> Self {
        Self {
            red: 0.25,
            blue: 0.25,
            empty: 0.50,
        }
    }
}

impl Distribution {
    /// Creates a validated distribution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDistribution`] if a fraction is negative or
    /// non-finite, or if the fractions do not sum to 1.0.
    pub fn new(red: f64, blue: f64, empty: f64) -> Result<Self> {
        let dist = Self { red, blue, empty };
        dist.validate()?;
        Ok(dist)
    }

    /// Checks the fractions without normalizing them.
    pub fn validate(&self) -> Result<()> {
        let fractions = [self.red, self.blue, self.empty];
        if fractions.iter().any(|f| !f.is_finite()) {
            return Err(self.invalid("fractions must be finite".to_string()));
        }
        if fractions.iter().any(|&f| f < 0.0) {
            return Err(self.invalid("fractions must be non-negative".to_string()));
        }
        let sum: f64 = fractions.iter().sum();
        if (sum - 1.0).abs() > DISTRIBUTION_TOLERANCE {
            return Err(self.invalid(format!(
                "fractions must sum to 1.0 (tolerance: {DISTRIBUTION_TOLERANCE}), but sum to {sum}"
            )));
        }
        Ok(())
    }

    /// Fraction assigned to `cell`.
    pub fn fraction(&self, cell: Cell) -> f64 {
        match cell {
            Cell::Red => self.red,
            Cell::Blue => self.blue,
            Cell::Empty => self.empty,
        }
    }

    /// Rounded target count for `cell` out of `n_locations`.
    pub fn target_count(&self, cell: Cell, n_locations: usize) -> usize {
        (self.fraction(cell) * n_locations as f64).round() as usize
    }

    fn invalid(&self, reason: String) -> Error {
        Error::InvalidDistribution {
            red: self.red,
            blue: self.blue,
            empty: self.empty,
            reason,
        }
    }
}

/// Parameters of a segregation run.
///
/// Every field has a default, so a parameter file only needs to list the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Target number of locations. The grid side is `floor(sqrt(n_locations))`.
    pub n_locations: usize,
    /// Target population fractions.
    pub distribution: Distribution,
    /// Minimum fraction of like neighbors an agent needs to stay put.
    pub threshold: f64,
    /// Seed for the random number generator. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            n_locations: 90_000,
            distribution: Distribution::default(),
            threshold: 0.7,
            seed: None,
        }
    }
}

impl Params {
    /// Loads parameters from a JSON file and validates them.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let params: Params = serde_json::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks every parameter.
    pub fn validate(&self) -> Result<()> {
        if self.n_locations == 0 {
            return Err(Error::InvalidLocationCount(self.n_locations));
        }
        self.distribution.validate()?;
        validate_threshold(self.threshold)
    }
}

/// Checks that `threshold` is a finite value in `[0, 1]`.
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if threshold.is_finite() && (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(Error::InvalidThreshold(threshold))
    }
}
