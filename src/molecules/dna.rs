//! Procedural DNA double helix.
//!
//! Each rung contributes two backbone phosphate markers on opposite sides
//! of the helix axis plus one base fragment per strand. Purines (A, G) are
//! three-atom fragments and pyrimidines (T, C) two-atom fragments, so rungs
//! differ in size and the backbone link to the previous rung steps back by
//! that rung's [`BasePair::atom_count`].
//!
//! Generation is a fold over rung indices threading a [`MoleculeBuilder`]
//! and the previous rung's base pair; nothing else is carried between
//! rungs, so the same parameters always yield the same molecule.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::chem::{BondOrder, Molecule, MoleculeBuilder, MoleculeCategory, MoleculeHeader};
use crate::error::ExhibitError;

/// Blend weight from a rung's own backbone atom toward the opposite one
/// for the near base fragment. The far fragment uses `1 - BASE_BLEND`.
const BASE_BLEND: f32 = 0.34;

/// Largest helix [`HelixParams::new`] accepts, in base pairs.
pub const MAX_BASE_PAIRS: usize = 10_000;

/// Atom offsets of a purine fragment relative to its anchor.
const PURINE_OFFSETS: [Vec3; 3] = [
    Vec3::ZERO,
    Vec3::new(0.25, 0.15, 0.0),
    Vec3::new(-0.25, -0.15, 0.0),
];

/// Atom offsets of a pyrimidine fragment relative to its anchor.
const PYRIMIDINE_OFFSETS: [Vec3; 2] = [Vec3::ZERO, Vec3::new(0.0, 0.3, 0.0)];

const HEADER: MoleculeHeader = MoleculeHeader {
    id: "dna",
    name: "DNA Double Helix",
    description: "The molecule that carries genetic instructions for life. \
        DNA consists of two strands coiled around each other, with base \
        pairs connecting them like rungs on a twisted ladder. Shows four \
        nucleotide bases: Adenine (A) pairs with Thymine (T), and Guanine \
        (G) pairs with Cytosine (C). Note: This is a simplified \
        representation emphasizing the double helix structure and base \
        pairing rules. In reality, each base is a complex ring structure \
        made of carbon, nitrogen, oxygen, and hydrogen atoms.",
    formula: "Complex Polymer",
    category: MoleculeCategory::Dna,
};

/// Ring class of a nucleobase; decides the fragment's atom layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseKind {
    /// Double ring (adenine, guanine).
    Purine,
    /// Single ring (thymine, cytosine).
    Pyrimidine,
}

impl BaseKind {
    /// Anchor-relative positions of the fragment atoms. The first atom sits
    /// on the anchor and carries the backbone and pairing bonds.
    #[must_use]
    pub const fn offsets(self) -> &'static [Vec3] {
        match self {
            Self::Purine => &PURINE_OFFSETS,
            Self::Pyrimidine => &PYRIMIDINE_OFFSETS,
        }
    }

    /// Number of atoms in a fragment of this kind.
    #[must_use]
    pub const fn atom_count(self) -> usize {
        self.offsets().len()
    }
}

/// One of the four DNA nucleobases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleobase {
    /// Adenine.
    A,
    /// Guanine.
    G,
    /// Thymine.
    T,
    /// Cytosine.
    C,
}

impl Nucleobase {
    /// Purine or pyrimidine.
    #[must_use]
    pub const fn kind(self) -> BaseKind {
        match self {
            Self::A | Self::G => BaseKind::Purine,
            Self::T | Self::C => BaseKind::Pyrimidine,
        }
    }

    /// Element of each fragment atom, parallel to [`BaseKind::offsets`].
    #[must_use]
    pub const fn elements(self) -> &'static [&'static str] {
        match self {
            Self::A => &["C", "N", "N"],
            Self::G => &["C", "N", "O"],
            Self::T => &["C", "O"],
            Self::C => &["C", "N"],
        }
    }

    /// Number of atoms this base contributes to a rung.
    #[must_use]
    pub const fn fragment_len(self) -> usize {
        self.kind().atom_count()
    }

    /// Watson-Crick partner.
    #[must_use]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::G => Self::C,
            Self::C => Self::G,
        }
    }

    /// One-letter code.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::G => 'G',
            Self::T => 'T',
            Self::C => 'C',
        }
    }
}

/// The bases on strand 1 and strand 2 of one rung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BasePair {
    /// Base attached to the strand-1 backbone.
    pub strand1: Nucleobase,
    /// Base attached to the strand-2 backbone.
    pub strand2: Nucleobase,
}

/// Repeating rung sequence: A-T, G-C, T-A, C-G.
pub const BASE_PAIR_SEQUENCE: [BasePair; 4] = [
    BasePair::new(Nucleobase::A, Nucleobase::T),
    BasePair::new(Nucleobase::G, Nucleobase::C),
    BasePair::new(Nucleobase::T, Nucleobase::A),
    BasePair::new(Nucleobase::C, Nucleobase::G),
];

impl BasePair {
    /// Pair `strand1` with `strand2`.
    #[must_use]
    pub const fn new(strand1: Nucleobase, strand2: Nucleobase) -> Self {
        Self { strand1, strand2 }
    }

    /// Pair used at rung `index`.
    #[must_use]
    pub const fn for_rung(index: usize) -> Self {
        BASE_PAIR_SEQUENCE[index % BASE_PAIR_SEQUENCE.len()]
    }

    /// Atoms a rung with this pair contributes: two backbone markers plus
    /// both fragments. This is also the id stride back to the same strand's
    /// backbone atom in the previous rung.
    #[must_use]
    pub const fn atom_count(self) -> usize {
        2 + self.strand1.fragment_len() + self.strand2.fragment_len()
    }

    /// Label such as `"A-T"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}-{}", self.strand1.letter(), self.strand2.letter())
    }
}

/// Placement of one rung before any atoms are emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rung {
    /// Rung index from the bottom of the helix.
    pub index: usize,
    /// Angular position of the strand-1 backbone atom, radians.
    pub angle: f32,
    /// Vertical position; the helix is centered on y = 0.
    pub height: f32,
    /// Bases on this rung.
    pub pair: BasePair,
    /// Strand-1 and strand-2 backbone positions.
    pub backbone: [Vec3; 2],
    /// Anchor positions of the strand-1 and strand-2 base fragments.
    pub bases: [Vec3; 2],
}

/// Validated generation parameters for [`HelixParams::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixParams {
    turns: f32,
    base_pairs_per_turn: f32,
    helix_radius: f32,
    rise_per_base_pair: f32,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl HelixParams {
    /// The exhibit's helix: 1.5 turns of 8 base pairs (12 rungs).
    pub const DEFAULT: Self = Self {
        turns: 1.5,
        base_pairs_per_turn: 8.0,
        helix_radius: 3.5,
        rise_per_base_pair: 1.2,
    };

    /// Validate parameters. Fails when any value is non-finite or
    /// non-positive, or when they produce no base pairs or more than
    /// [`MAX_BASE_PAIRS`].
    pub fn new(
        turns: f32,
        base_pairs_per_turn: f32,
        helix_radius: f32,
        rise_per_base_pair: f32,
    ) -> Result<Self, ExhibitError> {
        for (name, value) in [
            ("turns", turns),
            ("base_pairs_per_turn", base_pairs_per_turn),
            ("helix_radius", helix_radius),
            ("rise_per_base_pair", rise_per_base_pair),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ExhibitError::InvalidHelix(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        let requested = turns * base_pairs_per_turn;
        if !requested.is_finite() || requested >= (MAX_BASE_PAIRS + 1) as f32 {
            return Err(ExhibitError::InvalidHelix(format!(
                "{turns} turns of {base_pairs_per_turn} base pairs exceeds \
                 {MAX_BASE_PAIRS} base pairs"
            )));
        }
        let params = Self {
            turns,
            base_pairs_per_turn,
            helix_radius,
            rise_per_base_pair,
        };
        if params.total_base_pairs() == 0 {
            return Err(ExhibitError::InvalidHelix(format!(
                "{turns} turns of {base_pairs_per_turn} base pairs yields no base pairs"
            )));
        }
        Ok(params)
    }

    /// Number of helix turns.
    #[must_use]
    pub const fn turns(&self) -> f32 {
        self.turns
    }

    /// Base pairs per full turn.
    #[must_use]
    pub const fn base_pairs_per_turn(&self) -> f32 {
        self.base_pairs_per_turn
    }

    /// Backbone distance from the helix axis.
    #[must_use]
    pub const fn helix_radius(&self) -> f32 {
        self.helix_radius
    }

    /// Vertical distance between consecutive rungs.
    #[must_use]
    pub const fn rise_per_base_pair(&self) -> f32 {
        self.rise_per_base_pair
    }

    /// `floor(turns * base_pairs_per_turn)`.
    #[must_use]
    pub fn total_base_pairs(&self) -> usize {
        (self.turns * self.base_pairs_per_turn).floor() as usize
    }

    /// Geometry of rung `index`.
    #[must_use]
    pub fn rung(&self, index: usize) -> Rung {
        let total = self.total_base_pairs() as f32;
        let angle = (index as f32 / self.base_pairs_per_turn) * TAU;
        let height = index as f32 * self.rise_per_base_pair
            - (total * self.rise_per_base_pair) / 2.0;
        let on_helix = |theta: f32| {
            Vec3::new(
                theta.cos() * self.helix_radius,
                height,
                theta.sin() * self.helix_radius,
            )
        };
        let strand1 = on_helix(angle);
        let strand2 = on_helix(angle + PI);
        Rung {
            index,
            angle,
            height,
            pair: BasePair::for_rung(index),
            backbone: [strand1, strand2],
            bases: [
                strand1.lerp(strand2, BASE_BLEND),
                strand1.lerp(strand2, 1.0 - BASE_BLEND),
            ],
        }
    }

    /// Atom count of the generated molecule.
    #[must_use]
    pub fn atom_count(&self) -> usize {
        (0..self.total_base_pairs())
            .map(|i| BasePair::for_rung(i).atom_count())
            .sum()
    }

    /// Bond count of the generated molecule.
    #[must_use]
    pub fn bond_count(&self) -> usize {
        let rungs = self.total_base_pairs();
        let per_rung: usize = (0..rungs)
            .map(|i| {
                let pair = BasePair::for_rung(i);
                // two backbone-to-base, intra-fragment chains, one pairing bond
                2 + (pair.strand1.fragment_len() - 1)
                    + (pair.strand2.fragment_len() - 1)
                    + 1
            })
            .sum();
        per_rung + 2 * rungs.saturating_sub(1)
    }

    /// Generate the double helix molecule.
    #[must_use]
    pub fn build(&self) -> Molecule {
        let rungs = self.total_base_pairs();
        let start = (
            MoleculeBuilder::with_capacity(self.atom_count(), self.bond_count()),
            None,
        );
        let (builder, _) = (0..rungs).fold(start, |(mut builder, prev), i| {
            let rung = self.rung(i);
            emit_rung(&mut builder, &rung, prev);
            (builder, Some(rung.pair))
        });
        let molecule = builder.finish(HEADER);
        log::debug!(
            "built DNA helix: {rungs} base pairs, {} atoms, {} bonds",
            molecule.atom_count,
            molecule.bond_count
        );
        molecule
    }
}

/// Push one rung's atoms and bonds. `prev` is the previous rung's pair,
/// `None` for the first rung.
fn emit_rung(builder: &mut MoleculeBuilder, rung: &Rung, prev: Option<BasePair>) {
    let strand1 = builder.add_atom("P", rung.backbone[0], true);
    let strand2 = builder.add_atom("P", rung.backbone[1], true);

    let base1 = emit_fragment(builder, rung.pair.strand1, rung.bases[0]);
    let base2 = emit_fragment(builder, rung.pair.strand2, rung.bases[1]);

    builder.add_bond(strand1, base1[0], BondOrder::Single);
    builder.add_bond(strand2, base2[0], BondOrder::Single);
    builder.add_chain(&base1);
    builder.add_chain(&base2);
    builder.add_bond(base1[0], base2[0], BondOrder::Double);

    if let Some(prev) = prev {
        let stride = prev.atom_count();
        builder.add_bond(strand1 - stride, strand1, BondOrder::Single);
        builder.add_bond(strand2 - stride, strand2, BondOrder::Single);
    }
}

/// Push a base fragment anchored at `anchor`; returns its atom ids.
fn emit_fragment(builder: &mut MoleculeBuilder, base: Nucleobase, anchor: Vec3) -> Vec<usize> {
    base.kind()
        .offsets()
        .iter()
        .zip(base.elements())
        .map(|(offset, element)| builder.add_atom(element, anchor + *offset, true))
        .collect()
}

/// Build a DNA double helix from raw parameters.
pub fn build_dna_helix(
    turns: f32,
    base_pairs_per_turn: f32,
    helix_radius: f32,
    rise_per_base_pair: f32,
) -> Result<Molecule, ExhibitError> {
    HelixParams::new(turns, base_pairs_per_turn, helix_radius, rise_per_base_pair)
        .map(|params| params.build())
}
