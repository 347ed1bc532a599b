//! Centralized exhibit options with TOML preset support.
//!
//! Helix generation, primitive geometry, display toggles, colors, and
//! auto-cycle timing are consolidated here. Options serialize to/from TOML
//! so exhibit setups can be stored as named presets.

mod colors;
mod cycle;
mod display;
mod geometry;
mod helix;

use std::path::Path;

pub use colors::ColorOptions;
pub use cycle::CycleOptions;
pub use display::DisplayOptions;
pub use geometry::GeometryOptions;
pub use helix::HelixOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ExhibitError;
use crate::molecules::MoleculeRegistry;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[helix]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// DNA helix generation parameters.
    pub helix: HelixOptions,
    /// Atom sphere and bond cylinder sizing.
    pub geometry: GeometryOptions,
    /// Viewer behavior toggles.
    pub display: DisplayOptions,
    /// Auto-cycle timing.
    pub cycle: CycleOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ExhibitError> {
        let content = std::fs::read_to_string(path).map_err(ExhibitError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ExhibitError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ExhibitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ExhibitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ExhibitError::Io)?;
        }
        std::fs::write(path, content).map_err(ExhibitError::Io)
    }

    /// Load a named preset (`<dir>/<name>.toml`), logging the outcome.
    pub fn load_preset(name: &str, presets_dir: &Path) -> Result<Self, ExhibitError> {
        let path = presets_dir.join(format!("{name}.toml"));
        match Self::load(&path) {
            Ok(opts) => {
                log::info!("Loaded preset '{name}'");
                Ok(opts)
            }
            Err(e) => {
                log::error!("Failed to load preset '{name}': {e}");
                Err(e)
            }
        }
    }

    /// Save as a named preset (`<dir>/<name>.toml`), logging the outcome.
    pub fn save_preset(&self, name: &str, presets_dir: &Path) -> Result<(), ExhibitError> {
        let path = presets_dir.join(format!("{name}.toml"));
        let result = self.save(&path);
        match &result {
            Ok(()) => log::info!("Saved preset '{name}'"),
            Err(e) => log::error!("Failed to save preset '{name}': {e}"),
        }
        result
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Build a molecule registry using these helix parameters.
    pub fn build_registry(&self) -> Result<MoleculeRegistry, ExhibitError> {
        Ok(MoleculeRegistry::with_helix(&self.helix.params()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::Color;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r##"
[helix]
turns = 3.0

[colors]
bond = "#ffffff"

[colors.element_overrides]
C = "#202020"
"##;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.helix.turns, 3.0);
        // Everything else should be default
        assert_eq!(opts.helix.base_pairs_per_turn, 8.0);
        assert_eq!(opts.geometry.simplified_scale, 1.3);
        assert_eq!(opts.colors.bond, Color::from_hex(0xFF_FF_FF));
        assert_eq!(
            opts.colors.atom_color("C", Color::BLACK),
            Color::from_hex(0x20_20_20)
        );
        assert_eq!(opts.colors.atom_color("N", Color::BLACK), Color::BLACK);
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let result: Result<Options, _> = toml::from_str("[colors]\nbond = \"grey\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn registry_uses_helix_section() {
        let mut opts = Options::default();
        opts.helix.turns = 3.0;
        let reg = opts.build_registry().unwrap();
        assert_eq!(reg.require("dna").unwrap().atom_count, 168);

        opts.helix.base_pairs_per_turn = 0.0;
        assert!(matches!(
            opts.build_registry(),
            Err(ExhibitError::InvalidHelix(_))
        ));
    }

    #[test]
    fn oversized_helix_from_toml_fails_fast() {
        let opts: Options = toml::from_str("[helix]\nturns = 1e30\n").unwrap();
        assert!(matches!(
            opts.helix.params(),
            Err(ExhibitError::InvalidHelix(_))
        ));
        assert!(opts.build_registry().is_err());
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir().join(format!("molexhibit-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.cycle.duration_ms = 4000;
        opts.save_preset("short", &dir).unwrap();
        Options::default().save_preset("default", &dir).unwrap();

        assert_eq!(Options::list_presets(&dir), ["default", "short"]);
        let loaded = Options::load_preset("short", &dir).unwrap();
        assert_eq!(loaded.cycle.duration_ms, 4000);
        assert!(Options::load_preset("missing", &dir).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("helix"));
        assert!(props.contains_key("geometry"));
        assert!(props.contains_key("display"));
        assert!(props.contains_key("cycle"));
        // Skipped sections should be absent
        assert!(!props.contains_key("colors"));

        let geometry = &props["geometry"]["properties"];
        assert!(geometry.get("bond_thickness").is_some());
        assert!(geometry.get("simplified_scale").is_some());
    }
}
