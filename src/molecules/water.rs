use crate::chem::{create_atom, Bond, Molecule, MoleculeCategory, MoleculeHeader};

const HEADER: MoleculeHeader = MoleculeHeader {
    id: "water",
    name: "Water (H₂O)",
    description: "The most abundant molecule on Earth. Essential for all \
        known forms of life. Water's bent molecular structure gives it \
        unique properties including high surface tension and excellent \
        solvent capabilities.",
    formula: "H2O",
    category: MoleculeCategory::SmallMolecule,
};

/// Water with the hydrogens bent ~104.5° around the oxygen.
#[must_use]
pub fn water() -> Molecule {
    Molecule::new(
        HEADER,
        vec![
            create_atom(0, "O", 0.0, 0.0, 0.0, false),
            create_atom(1, "H", 0.96, 0.0, 0.0, false),
            create_atom(2, "H", -0.24, 0.93, 0.0, false),
        ],
        vec![Bond::single(0, 1), Bond::single(0, 2)],
    )
}
