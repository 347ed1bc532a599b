use glam::Vec3;

use super::atom::Atom;
use super::bond::{Bond, BondOrder};
use super::molecule::{Molecule, MoleculeHeader};

/// Accumulates atoms and bonds, assigning atom ids in push order.
///
/// Ids are dense by construction: the id of a pushed atom is the number of
/// atoms pushed before it.
#[derive(Debug, Default, Clone)]
pub struct MoleculeBuilder {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl MoleculeBuilder {
    /// Empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty builder with preallocated storage.
    #[must_use]
    pub fn with_capacity(atoms: usize, bonds: usize) -> Self {
        Self {
            atoms: Vec::with_capacity(atoms),
            bonds: Vec::with_capacity(bonds),
        }
    }

    /// Id the next pushed atom will receive.
    #[must_use]
    pub fn next_id(&self) -> usize {
        self.atoms.len()
    }

    /// Push an atom through the element table and return its id.
    pub fn add_atom(&mut self, element: &str, position: Vec3, simplified: bool) -> usize {
        let id = self.next_id();
        self.atoms
            .push(Atom::new(id, element, position).simplified(simplified));
        id
    }

    /// Bond two previously pushed atoms.
    pub fn add_bond(&mut self, atom1: usize, atom2: usize, order: BondOrder) {
        debug_assert!(atom1 < self.atoms.len() && atom2 < self.atoms.len());
        self.bonds.push(Bond {
            atom1,
            atom2,
            order,
        });
    }

    /// Bond consecutive atoms of `chain` with single bonds.
    pub fn add_chain(&mut self, chain: &[usize]) {
        for pair in chain.windows(2) {
            self.add_bond(pair[0], pair[1], BondOrder::Single);
        }
    }

    /// Atoms pushed so far.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Bonds pushed so far.
    #[must_use]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Finish into a molecule with counts set from the accumulated lists.
    #[must_use]
    pub fn finish(self, header: MoleculeHeader) -> Molecule {
        Molecule::new(header, self.atoms, self.bonds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::molecule::MoleculeCategory;

    #[test]
    fn ids_follow_push_order() {
        let mut b = MoleculeBuilder::new();
        let a = b.add_atom("C", Vec3::ZERO, false);
        let c = b.add_atom("N", Vec3::X, true);
        let d = b.add_atom("O", Vec3::Y, false);
        b.add_chain(&[a, c, d]);
        assert_eq!((a, c, d), (0, 1, 2));
        assert_eq!(b.bonds().len(), 2);
        assert!(b.atoms()[1].simplified);

        let mol = b.finish(MoleculeHeader {
            id: "chain",
            name: "Chain",
            description: "",
            formula: "CNO",
            category: MoleculeCategory::SmallMolecule,
        });
        assert_eq!(mol.atom_count, 3);
        assert_eq!(mol.bond_count, 2);
        assert!(mol.validate().is_ok());
    }
}
