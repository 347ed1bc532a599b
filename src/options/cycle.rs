use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Auto-cycle timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Auto Cycle", inline)]
#[serde(default)]
pub struct CycleOptions {
    /// Time each view stays on screen, in milliseconds.
    #[schemars(title = "View Duration (ms)", range(min = 1000, max = 60000), extend("step" = 1000))]
    pub duration_ms: u64,
    /// Start cycling immediately.
    #[schemars(title = "Autostart")]
    pub autostart: bool,
}

impl Default for CycleOptions {
    fn default() -> Self {
        Self {
            duration_ms: 10_000,
            autostart: true,
        }
    }
}
