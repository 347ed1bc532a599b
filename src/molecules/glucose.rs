use crate::chem::{create_atom, Atom, Bond, Molecule, MoleculeCategory, MoleculeHeader};

const HEADER: MoleculeHeader = MoleculeHeader {
    id: "glucose",
    name: "Glucose",
    description: "The primary source of energy for cells and a fundamental \
        building block of carbohydrates. Glucose is produced by plants \
        during photosynthesis and is essential for cellular respiration. \
        This shows β-D-glucopyranose, the most common ring form of glucose \
        found in nature. The body breaks down sugars and starches into \
        glucose to fuel cellular processes.",
    formula: "C₆H₁₂O₆",
    category: MoleculeCategory::SmallMolecule,
};

/// `(element, x, y, z)` in id order.
#[rustfmt::skip]
const ATOMS: [(&str, f32, f32, f32); 24] = [
    // ring carbons C1-C5 and ring oxygen
    ("C", 0.0, 0.0, 0.0),
    ("C", 1.5, -0.5, 0.0),
    ("C", 1.5, -2.0, 0.0),
    ("C", 0.0, -2.5, 0.0),
    ("C", -1.0, -1.5, 0.5),
    ("O", -1.0, 0.0, 0.3),
    // C6, attached to C5
    ("C", -2.2, -2.0, 1.0),
    // hydroxyl oxygens on C1, C2, C3, C4, C6
    ("O", 0.0, 1.5, 0.0),
    ("O", 2.8, 0.0, 0.0),
    ("O", 2.8, -2.5, 0.0),
    ("O", 0.0, -4.0, 0.0),
    ("O", -3.2, -1.5, 1.5),
    // carbon hydrogens: C1..C5, then two on C6
    ("H", 0.3, -0.3, -1.0),
    ("H", 1.3, -1.0, -1.0),
    ("H", 1.3, -2.3, -1.0),
    ("H", -0.3, -3.0, -1.0),
    ("H", -1.5, -1.8, -0.5),
    ("H", -2.0, -3.0, 0.5),
    ("H", -2.7, -2.3, 2.0),
    // hydroxyl hydrogens
    ("H", -0.5, 2.2, 0.0),
    ("H", 3.5, 0.5, 0.0),
    ("H", 3.5, -3.0, 0.0),
    ("H", -0.5, -4.7, 0.0),
    ("H", -4.0, -2.0, 1.5),
];

#[rustfmt::skip]
const BONDS: [(usize, usize); 24] = [
    // ring
    (0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0),
    // C5-C6
    (4, 6),
    // C-OH
    (0, 7), (1, 8), (2, 9), (3, 10), (6, 11),
    // C-H
    (0, 12), (1, 13), (2, 14), (3, 15), (4, 16), (6, 17), (6, 18),
    // O-H
    (7, 19), (8, 20), (9, 21), (10, 22), (11, 23),
];

/// β-D-glucopyranose with explicit hydrogens. All bonds are single.
#[must_use]
pub fn glucose() -> Molecule {
    let atoms: Vec<Atom> = ATOMS
        .iter()
        .enumerate()
        .map(|(id, &(element, x, y, z))| create_atom(id, element, x, y, z, false))
        .collect();
    let bonds = BONDS.iter().map(|&(a, b)| Bond::single(a, b)).collect();
    Molecule::new(HEADER, atoms, bonds)
}
