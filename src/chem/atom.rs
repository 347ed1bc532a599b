use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::element;

/// A single atom of a display molecule.
///
/// `id` is the atom's index in its molecule's atom list; bonds address
/// atoms only through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Dense, zero-based index within the owning molecule.
    pub id: usize,
    /// Element symbol (`"C"`, `"Fe"`, ...).
    pub element: String,
    /// Position in angstrom-like display units.
    pub position: Vec3,
    /// Sphere color, from the element table unless overridden.
    pub color: Color,
    /// Sphere radius, from the element table unless overridden.
    pub radius: f32,
    /// Marks atoms that stand in for a larger real substructure.
    pub simplified: bool,
}

impl Atom {
    /// Create an atom with color and radius taken from the element table.
    /// Unknown elements get the fallback color and radius.
    #[must_use]
    pub fn new(id: usize, element: &str, position: Vec3) -> Self {
        let props = element::descriptor(element);
        Self {
            id,
            element: element.to_owned(),
            position,
            color: props.color,
            radius: props.radius,
            simplified: false,
        }
    }

    /// Set the simplified flag.
    #[must_use]
    pub fn simplified(mut self, simplified: bool) -> Self {
        self.simplified = simplified;
        self
    }

    /// Override the element-derived color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Override the element-derived radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

/// Atom factory used by every molecule builder.
#[must_use]
pub fn create_atom(
    id: usize,
    element: &str,
    x: f32,
    y: f32,
    z: f32,
    simplified: bool,
) -> Atom {
    Atom::new(id, element, Vec3::new(x, y, z)).simplified(simplified)
}
