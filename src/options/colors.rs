use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chem::Color;

/// Colors not derived from the element table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Bond cylinder color.
    pub bond: Color,
    /// Viewer background.
    pub background: Color,
    /// Per-element overrides of the CPK color, keyed by symbol.
    pub element_overrides: BTreeMap<String, Color>,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            bond: Color::from_hex(0xCC_CC_CC),
            background: Color::BLACK,
            element_overrides: BTreeMap::new(),
        }
    }
}

impl ColorOptions {
    /// Color for an atom: the override for its element if one is set,
    /// otherwise `table_color`.
    #[must_use]
    pub fn atom_color(&self, element: &str, table_color: Color) -> Color {
        self.element_overrides
            .get(element)
            .copied()
            .unwrap_or(table_color)
    }
}
