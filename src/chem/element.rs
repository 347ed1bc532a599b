//! Element property table: CPK colors and display radii.
//!
//! Radii are van der Waals radii scaled down for visualization, not
//! chemically exact values. Symbols are case-sensitive (`Fe`, not `FE`).

use super::color::Color;

/// Color assigned to symbols missing from the table.
pub const UNKNOWN_ELEMENT_COLOR: Color = Color::from_hex(0xFF_00_FF);

/// Radius assigned to symbols missing from the table.
pub const DEFAULT_ELEMENT_RADIUS: f32 = 0.4;

/// Display properties of one chemical element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementDescriptor {
    /// CPK color.
    pub color: Color,
    /// Scaled van der Waals radius.
    pub radius: f32,
}

impl ElementDescriptor {
    /// Fallback descriptor for symbols outside the table.
    pub const UNKNOWN: Self = Self {
        color: UNKNOWN_ELEMENT_COLOR,
        radius: DEFAULT_ELEMENT_RADIUS,
    };

    const fn new(rgb: u32, radius: f32) -> Self {
        Self {
            color: Color::from_hex(rgb),
            radius,
        }
    }
}

/// Symbols in the table, in legend order.
pub const KNOWN_ELEMENTS: &[&str] = &["H", "C", "N", "O", "S", "P", "Fe", "Zn"];

/// Look up an element by symbol. Returns `None` for unknown symbols.
#[must_use]
pub fn lookup(symbol: &str) -> Option<ElementDescriptor> {
    let descriptor = match symbol {
        "H" => ElementDescriptor::new(0xFF_FF_FF, 0.3),
        "C" => ElementDescriptor::new(0x90_90_90, 0.4),
        "N" => ElementDescriptor::new(0x30_50_F8, 0.4),
        "O" => ElementDescriptor::new(0xFF_0D_0D, 0.35),
        "S" => ElementDescriptor::new(0xFF_FF_30, 0.45),
        "P" => ElementDescriptor::new(0xFF_80_00, 0.45),
        "Fe" => ElementDescriptor::new(0xE0_66_33, 0.5),
        "Zn" => ElementDescriptor::new(0x7D_80_B0, 0.5),
        _ => return None,
    };
    Some(descriptor)
}

/// Look up an element, falling back to [`ElementDescriptor::UNKNOWN`].
#[must_use]
pub fn descriptor(symbol: &str) -> ElementDescriptor {
    lookup(symbol).unwrap_or(ElementDescriptor::UNKNOWN)
}

/// Full element name for legends. Unknown symbols echo the symbol.
#[must_use]
pub fn element_name(symbol: &str) -> &str {
    match symbol {
        "H" => "Hydrogen",
        "C" => "Carbon",
        "N" => "Nitrogen",
        "O" => "Oxygen",
        "S" => "Sulfur",
        "P" => "Phosphorus",
        "Fe" => "Iron",
        "Zn" => "Zinc",
        other => other,
    }
}

/// One row of an atom-color legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    /// Element symbol.
    pub symbol: &'static str,
    /// Element name.
    pub name: &'static str,
    /// CPK color.
    pub color: Color,
}

/// Legend rows for every element in the table.
#[must_use]
pub fn legend() -> Vec<LegendEntry> {
    KNOWN_ELEMENTS
        .iter()
        .map(|&symbol| LegendEntry {
            symbol,
            name: element_name(symbol),
            color: descriptor(symbol).color,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_elements_resolve() {
        let o = descriptor("O");
        assert_eq!(o.color.to_string(), "#FF0D0D");
        assert_eq!(o.radius, 0.35);
        assert_eq!(descriptor("Fe").radius, 0.5);
    }

    #[test]
    fn unknown_falls_back() {
        assert!(lookup("Xx").is_none());
        assert_eq!(descriptor("Xx"), ElementDescriptor::UNKNOWN);
        // case-sensitive
        assert_eq!(descriptor("FE"), ElementDescriptor::UNKNOWN);
    }

    #[test]
    fn legend_covers_table_in_order() {
        let rows = legend();
        assert_eq!(rows.len(), KNOWN_ELEMENTS.len());
        assert_eq!(rows[0].name, "Hydrogen");
        assert_eq!(rows[5].symbol, "P");
        assert_eq!(rows[5].name, "Phosphorus");
        assert!(rows.iter().all(|r| r.color != UNKNOWN_ELEMENT_COLOR));
    }

    #[test]
    fn unknown_name_echoes_symbol() {
        assert_eq!(element_name("Xe"), "Xe");
    }
}
