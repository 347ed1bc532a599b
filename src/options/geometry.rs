use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::DEFAULT_BOND_THICKNESS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Sizing of atom spheres and bond cylinders.
pub struct GeometryOptions {
    /// Radius of a single-bond cylinder; higher orders multiply it.
    #[schemars(title = "Bond Thickness", range(min = 0.02, max = 0.3), extend("step" = 0.01))]
    pub bond_thickness: f32,
    /// Sphere radius multiplier for simplified atoms.
    #[schemars(title = "Simplified Atom Scale", range(min = 1.0, max = 2.0), extend("step" = 0.05))]
    pub simplified_scale: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            bond_thickness: DEFAULT_BOND_THICKNESS,
            simplified_scale: 1.3,
        }
    }
}
