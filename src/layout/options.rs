//! Layout configuration.
//!
//! Every option has a default and any subset may be supplied, both from Rust
//! (struct update syntax or the `with_*` setters) and from JavaScript
//! (camelCase keys, missing keys take their defaults).

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Where nodes start before the first simulation round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InitialPlacement {
    /// Spread nodes over a square-ish grid, ignoring incoming positions.
    #[default]
    Grid,
    /// Start from the positions supplied by the caller.
    Preserve,
}

/// Configuration for the orthogonal grid layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Quantization unit of the output grid and base unit of every force
    /// (default: 100).
    pub grid_size: f64,
    /// Minimum x and y of the final layout (default: 50).
    pub padding: f64,
    /// Number of simulate-then-snap rounds (default: 100).
    pub max_iterations: u32,
    /// Initial force multiplier (default: 100).
    pub temperature: f64,
    /// Per-round multiplicative decay of the temperature (default: 0.95).
    pub cooling_factor: f64,
    /// Starting configuration (default: grid).
    pub initial_placement: InitialPlacement,
    /// Repulsion radius; `None` computes every pair (default: None).
    pub repulsion_cutoff: Option<f64>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            grid_size: 100.0,
            padding: 50.0,
            max_iterations: 100,
            temperature: 100.0,
            cooling_factor: 0.95,
            initial_placement: InitialPlacement::Grid,
            repulsion_cutoff: None,
        }
    }
}

impl LayoutOptions {
    pub fn with_grid_size(mut self, grid_size: f64) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_cooling_factor(mut self, cooling_factor: f64) -> Self {
        self.cooling_factor = cooling_factor;
        self
    }

    pub fn with_initial_placement(mut self, placement: InitialPlacement) -> Self {
        self.initial_placement = placement;
        self
    }

    pub fn with_repulsion_cutoff(mut self, cutoff: Option<f64>) -> Self {
        self.repulsion_cutoff = cutoff;
        self
    }

    /// Largest per-axis displacement a single force application may cause.
    #[inline]
    pub fn max_movement(&self) -> f64 {
        0.5 * self.grid_size
    }

    /// Distance between neighbouring cells of the initial grid.
    #[inline]
    pub fn initial_pitch(&self) -> f64 {
        2.0 * self.grid_size + self.padding
    }

    /// Reject configurations the simulation cannot run with.
    ///
    /// The grid size divides every force and bounds every conflict test, so
    /// it must be finite and positive. Other numeric options must be finite;
    /// a negative cooling factor would flip the sign of the forces. The
    /// initial grid pitch must not overflow.
    pub fn validate(&self) -> Result<()> {
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            return Err(LayoutError::InvalidGridSize(self.grid_size));
        }
        let finite = [
            ("padding", self.padding),
            ("temperature", self.temperature),
            ("coolingFactor", self.cooling_factor),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(LayoutError::InvalidParameter { name, value });
            }
        }
        if !self.initial_pitch().is_finite() {
            return Err(LayoutError::InvalidParameter {
                name: "gridSize",
                value: self.grid_size,
            });
        }
        if self.cooling_factor < 0.0 {
            return Err(LayoutError::InvalidParameter {
                name: "coolingFactor",
                value: self.cooling_factor,
            });
        }
        if let Some(cutoff) = self.repulsion_cutoff {
            if !cutoff.is_finite() || cutoff <= 0.0 {
                return Err(LayoutError::InvalidParameter {
                    name: "repulsionCutoff",
                    value: cutoff,
                });
            }
        }
        Ok(())
    }
}
