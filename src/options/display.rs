use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Viewer behavior toggles.
pub struct DisplayOptions {
    /// Spin the molecule around its vertical axis.
    #[schemars(title = "Auto-rotate")]
    pub auto_rotate: bool,
    /// Molecule spin speed.
    #[schemars(title = "Rotate Speed", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub auto_rotate_speed: f32,
    /// Globe spin speed handed to the globe surface.
    #[schemars(title = "Globe Speed", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub globe_rotation_speed: f32,
    /// Whether to render bond cylinders at all.
    #[schemars(title = "Show Bonds")]
    pub show_bonds: bool,
    /// Emissive glow applied to simplified atoms; 0 disables highlighting.
    #[schemars(title = "Simplified Glow", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub simplified_emissive: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            auto_rotate_speed: 1.5,
            globe_rotation_speed: 0.5,
            show_bonds: true,
            simplified_emissive: 0.15,
        }
    }
}
