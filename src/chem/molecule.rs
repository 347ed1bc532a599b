use std::collections::BTreeMap;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::atom::Atom;
use super::bond::Bond;
use crate::error::ExhibitError;

/// Coarse molecule classification shown as a badge in the viewer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum MoleculeCategory {
    /// Small organic or inorganic molecule.
    SmallMolecule,
    /// Nucleic acid.
    Dna,
    /// Protein or protein cofactor.
    Protein,
    /// Anything assembled from several of the above.
    Complex,
}

impl MoleculeCategory {
    /// Kebab-case label (`"small-molecule"`, `"dna"`, ...).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SmallMolecule => "small-molecule",
            Self::Dna => "dna",
            Self::Protein => "protein",
            Self::Complex => "complex",
        }
    }
}

/// Descriptive fields of a molecule, everything except the geometry.
#[derive(Debug, Clone, Copy)]
pub struct MoleculeHeader {
    /// Registry key.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Educational description.
    pub description: &'static str,
    /// Chemical formula or a short stand-in.
    pub formula: &'static str,
    /// Classification.
    pub category: MoleculeCategory,
}

/// An immutable atom/bond graph plus display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Molecule {
    /// Registry key (`"water"`, `"dna"`, ...).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Educational description.
    pub description: String,
    /// Chemical formula or a short stand-in.
    pub formula: String,
    /// Number of atoms; equals `atoms.len()`.
    pub atom_count: usize,
    /// Number of bonds; equals `bonds.len()`.
    pub bond_count: usize,
    /// Classification.
    pub category: MoleculeCategory,
    /// Atoms in id order.
    pub atoms: Vec<Atom>,
    /// Bonds in construction order.
    pub bonds: Vec<Bond>,
}

impl Molecule {
    /// Assemble a molecule. Counts are taken from the lists.
    #[must_use]
    pub fn new(header: MoleculeHeader, atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        Self {
            id: header.id.to_owned(),
            name: header.name.to_owned(),
            description: header.description.to_owned(),
            formula: header.formula.to_owned(),
            atom_count: atoms.len(),
            bond_count: bonds.len(),
            category: header.category,
            atoms,
            bonds,
        }
    }

    /// Look up an atom by id. Returns `None` for ids outside the molecule.
    #[must_use]
    pub fn atom(&self, id: usize) -> Option<&Atom> {
        self.atoms.get(id).filter(|a| a.id == id)
    }

    /// Check the structural invariants: dense zero-based ids, bonds that
    /// reference existing atoms, and counts that match the lists.
    pub fn validate(&self) -> Result<(), ExhibitError> {
        if let Some((i, atom)) =
            self.atoms.iter().enumerate().find(|(i, a)| a.id != *i)
        {
            return Err(ExhibitError::InvalidMolecule(format!(
                "{}: atom at index {i} has id {}",
                self.id, atom.id
            )));
        }
        let n = self.atoms.len();
        if let Some((i, bond)) = self
            .bonds
            .iter()
            .enumerate()
            .find(|(_, b)| b.atom1 >= n || b.atom2 >= n)
        {
            return Err(ExhibitError::InvalidMolecule(format!(
                "{}: bond {i} ({}-{}) references a missing atom",
                self.id, bond.atom1, bond.atom2
            )));
        }
        if self.atom_count != n || self.bond_count != self.bonds.len() {
            return Err(ExhibitError::InvalidMolecule(format!(
                "{}: counts {}/{} do not match {} atoms / {} bonds",
                self.id,
                self.atom_count,
                self.bond_count,
                n,
                self.bonds.len()
            )));
        }
        Ok(())
    }

    /// Atom count per element symbol, sorted by symbol.
    #[must_use]
    pub fn composition(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.element.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Whether any atom is an educational simplification.
    #[must_use]
    pub fn has_simplified(&self) -> bool {
        self.atoms.iter().any(|a| a.simplified)
    }

    /// Formula line for the info panel. Simplified models also state how
    /// many atoms are actually shown.
    #[must_use]
    pub fn display_formula(&self) -> String {
        if self.has_simplified() {
            format!("{} ({} atoms shown)", self.formula, self.atom_count)
        } else {
            self.formula.clone()
        }
    }

    /// Mean atom position, or the origin for an empty molecule.
    #[must_use]
    pub fn centroid(&self) -> Vec3 {
        if self.atoms.is_empty() {
            return Vec3::ZERO;
        }
        self.atoms.iter().map(|a| a.position).sum::<Vec3>() / self.atoms.len() as f32
    }

    /// Radius of the sphere around [`Self::centroid`] enclosing every atom
    /// sphere. Used for camera fitting.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        let center = self.centroid();
        self.atoms
            .iter()
            .map(|a| a.position.distance(center) + a.radius)
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::atom::create_atom;

    const HEADER: MoleculeHeader = MoleculeHeader {
        id: "test",
        name: "Test",
        description: "",
        formula: "HO",
        category: MoleculeCategory::SmallMolecule,
    };

    fn diatomic() -> Molecule {
        Molecule::new(
            HEADER,
            vec![
                create_atom(0, "O", 0.0, 0.0, 0.0, false),
                create_atom(1, "H", 2.0, 0.0, 0.0, false),
            ],
            vec![Bond::single(0, 1)],
        )
    }

    #[test]
    fn counts_follow_lists() {
        let mol = diatomic();
        assert_eq!(mol.atom_count, 2);
        assert_eq!(mol.bond_count, 1);
        assert!(mol.validate().is_ok());
    }

    #[test]
    fn validate_rejects_dangling_bond() {
        let mut mol = diatomic();
        mol.bonds.push(Bond::single(1, 2));
        mol.bond_count = 2;
        let err = mol.validate().unwrap_err();
        assert!(err.to_string().contains("missing atom"));
    }

    #[test]
    fn validate_rejects_sparse_ids() {
        let mut mol = diatomic();
        mol.atoms[1].id = 5;
        assert!(mol.validate().is_err());
        assert!(mol.atom(1).is_none());
    }

    #[test]
    fn validate_rejects_stale_counts() {
        let mut mol = diatomic();
        mol.atom_count = 3;
        assert!(mol.validate().is_err());
    }

    #[test]
    fn composition_and_formula() {
        let mut mol = diatomic();
        let comp = mol.composition();
        assert_eq!(comp.get("O"), Some(&1));
        assert_eq!(comp.get("H"), Some(&1));
        assert_eq!(comp.keys().copied().collect::<Vec<_>>(), ["H", "O"]);
        assert_eq!(mol.display_formula(), "HO");

        mol.atoms[0].simplified = true;
        assert_eq!(mol.display_formula(), "HO (2 atoms shown)");
    }

    #[test]
    fn bounds_cover_atom_spheres() {
        let mol = diatomic();
        assert_eq!(mol.centroid(), Vec3::new(1.0, 0.0, 0.0));
        // O at distance 1 with radius 0.35, H at distance 1 with radius 0.3
        assert!((mol.bounding_radius() - 1.35).abs() < 1e-6);
    }

    #[test]
    fn category_labels() {
        assert_eq!(MoleculeCategory::SmallMolecule.label(), "small-molecule");
        let json = serde_json::to_string(&MoleculeCategory::SmallMolecule).unwrap();
        assert_eq!(json, "\"small-molecule\"");
    }
}
