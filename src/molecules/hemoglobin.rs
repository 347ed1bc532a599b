use crate::chem::{
    create_atom, Atom, Bond, BondOrder, Molecule, MoleculeCategory, MoleculeHeader,
};

const HEADER: MoleculeHeader = MoleculeHeader {
    id: "hemoglobin",
    name: "Hemoglobin (Heme Group)",
    description: "The oxygen-carrying protein in red blood cells. This \
        shows a simplified representation of the heme group - a complex \
        ring structure with an iron atom at its center that binds oxygen \
        for transport throughout the body. The actual heme group has the \
        formula C34H32FeN4O4 (75 atoms), but this model shows the essential \
        structure with fewer atoms for educational clarity.",
    formula: "Simplified Model",
    category: MoleculeCategory::Protein,
};

#[rustfmt::skip]
const ATOMS: [(&str, f32, f32, f32); 45] = [
    // iron center
    ("Fe", 0.0, 0.0, 0.0),
    // porphyrin nitrogens bound to the iron
    ("N", 1.5, 0.0, 0.0),
    ("N", 0.0, 1.5, 0.0),
    ("N", -1.5, 0.0, 0.0),
    ("N", 0.0, -1.5, 0.0),
    // porphyrin carbons
    ("C", 2.0, 0.5, 0.0),
    ("C", 2.0, 1.0, 0.0),
    ("C", 1.5, 1.5, 0.0),
    ("C", 1.0, 2.0, 0.0),
    ("C", 0.5, 2.0, 0.0),
    ("C", 0.0, 2.5, 0.0),
    ("C", -0.5, 2.0, 0.0),
    ("C", -1.0, 2.0, 0.0),
    ("C", -1.5, 1.5, 0.0),
    ("C", -2.0, 1.0, 0.0),
    ("C", -2.0, 0.5, 0.0),
    ("C", -2.5, 0.0, 0.0),
    ("C", -2.0, -0.5, 0.0),
    ("C", -2.0, -1.0, 0.0),
    ("C", -1.5, -1.5, 0.0),
    ("C", -1.0, -2.0, 0.0),
    ("C", -0.5, -2.0, 0.0),
    ("C", 0.0, -2.5, 0.0),
    ("C", 0.5, -2.0, 0.0),
    ("C", 1.0, -2.0, 0.0),
    ("C", 1.5, -1.5, 0.0),
    ("C", 2.0, -1.0, 0.0),
    ("C", 2.0, -0.5, 0.0),
    // bound O2
    ("O", 0.0, 0.0, 1.5),
    ("O", 0.0, 0.0, 2.0),
    // side chains
    ("C", 2.5, 0.5, 0.5),
    ("C", 2.5, 1.5, 0.5),
    ("C", 0.5, 2.5, 0.5),
    ("C", -0.5, 2.5, 0.5),
    ("C", -2.5, 0.5, 0.5),
    ("C", -2.5, -0.5, 0.5),
    ("C", -0.5, -2.5, 0.5),
    ("C", 0.5, -2.5, 0.5),
    ("C", 2.5, -0.5, 0.5),
    ("C", 2.5, -1.5, 0.5),
    // side-chain oxygens
    ("O", 3.0, 1.0, 1.0),
    ("O", 1.0, 3.0, 1.0),
    ("O", -3.0, 1.0, 1.0),
    ("O", -1.0, -3.0, 1.0),
    ("O", 3.0, -1.0, 1.0),
];

const S: BondOrder = BondOrder::Single;
const D: BondOrder = BondOrder::Double;

#[rustfmt::skip]
const BONDS: [(usize, usize, BondOrder); 49] = [
    // iron to nitrogens
    (0, 1, S), (0, 2, S), (0, 3, S), (0, 4, S),
    // iron to O2
    (0, 28, S), (28, 29, D),
    // porphyrin ring
    (1, 5, S), (5, 6, D), (6, 7, S), (7, 2, S),
    (2, 8, S), (8, 9, D), (9, 10, S), (10, 11, D), (11, 12, S), (12, 13, D), (13, 3, S),
    (3, 14, S), (14, 15, D), (15, 16, S), (16, 17, D), (17, 18, S), (18, 19, D), (19, 4, S),
    (4, 20, S), (20, 21, D), (21, 22, S), (22, 23, D), (23, 24, S), (24, 25, D), (25, 1, S),
    (1, 26, S), (26, 27, D), (27, 5, S),
    // side chains
    (6, 30, S), (30, 31, S), (31, 40, S),
    (9, 32, S), (32, 33, S), (33, 41, S),
    (15, 34, S), (34, 35, S), (35, 42, S),
    (21, 36, S), (36, 37, S), (37, 43, S),
    (26, 38, S), (38, 39, S), (39, 44, S),
];

/// Simplified heme group: iron center, porphyrin square, bound O2, and
/// five short side chains. Every atom is flagged simplified.
#[must_use]
pub fn hemoglobin() -> Molecule {
    let atoms: Vec<Atom> = ATOMS
        .iter()
        .enumerate()
        .map(|(id, &(element, x, y, z))| create_atom(id, element, x, y, z, true))
        .collect();
    let bonds = BONDS
        .iter()
        .map(|&(atom1, atom2, order)| Bond {
            atom1,
            atom2,
            order,
        })
        .collect();
    Molecule::new(HEADER, atoms, bonds)
}
