use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ExhibitError;
use crate::molecules::HelixParams;

/// DNA helix generation parameters as stored in presets.
///
/// Unvalidated; [`HelixOptions::params`] checks them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "DNA Helix", inline)]
#[serde(default)]
pub struct HelixOptions {
    /// Number of helix turns.
    #[schemars(title = "Turns", range(min = 0.5, max = 6.0), extend("step" = 0.5))]
    pub turns: f32,
    /// Base pairs per full turn.
    #[schemars(title = "Base Pairs per Turn", range(min = 4.0, max = 12.0), extend("step" = 1.0))]
    pub base_pairs_per_turn: f32,
    /// Backbone distance from the helix axis.
    #[schemars(title = "Radius", range(min = 1.0, max = 6.0), extend("step" = 0.1))]
    pub helix_radius: f32,
    /// Vertical distance between rungs.
    #[schemars(title = "Rise", range(min = 0.5, max = 3.0), extend("step" = 0.1))]
    pub rise_per_base_pair: f32,
}

impl Default for HelixOptions {
    fn default() -> Self {
        let p = HelixParams::DEFAULT;
        Self {
            turns: p.turns(),
            base_pairs_per_turn: p.base_pairs_per_turn(),
            helix_radius: p.helix_radius(),
            rise_per_base_pair: p.rise_per_base_pair(),
        }
    }
}

impl HelixOptions {
    /// Validate into generation parameters.
    pub fn params(&self) -> Result<HelixParams, ExhibitError> {
        HelixParams::new(
            self.turns,
            self.base_pairs_per_turn,
            self.helix_radius,
            self.rise_per_base_pair,
        )
    }
}
