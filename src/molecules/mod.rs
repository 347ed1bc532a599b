//! Built-in molecules and the registry that addresses them by id.
//!
//! All molecule data is computed once: [`registry`] builds the default set
//! on first access, including the procedurally generated DNA helix.
//! [`MoleculeRegistry::with_helix`] builds an independent set with custom
//! helix parameters (e.g. from [`crate::options::Options`]).

pub mod dna;
mod glucose;
mod hemoglobin;
mod water;

use std::sync::LazyLock;

pub use dna::{
    build_dna_helix, BasePair, BaseKind, HelixParams, Nucleobase, Rung, MAX_BASE_PAIRS,
};
pub use glucose::glucose;
pub use hemoglobin::hemoglobin;
use rustc_hash::FxHashMap;
pub use water::water;

use crate::chem::Molecule;
use crate::error::ExhibitError;

/// Registry ids in display order.
pub const MOLECULE_IDS: [&str; 4] = ["water", "glucose", "dna", "hemoglobin"];

/// Read-only, ordered collection of molecules addressable by id.
#[derive(Debug, Clone)]
pub struct MoleculeRegistry {
    molecules: Vec<Molecule>,
    index: FxHashMap<String, usize>,
}

impl Default for MoleculeRegistry {
    fn default() -> Self {
        Self::with_helix(&HelixParams::DEFAULT)
    }
}

impl MoleculeRegistry {
    /// Build water, glucose, DNA (from `helix`), and hemoglobin.
    #[must_use]
    pub fn with_helix(helix: &HelixParams) -> Self {
        Self::from_molecules(vec![water(), glucose(), helix.build(), hemoglobin()])
    }

    /// Wrap an arbitrary list. Later duplicates of an id are unreachable
    /// through [`Self::get`].
    #[must_use]
    pub fn from_molecules(molecules: Vec<Molecule>) -> Self {
        let mut index = FxHashMap::default();
        for (i, molecule) in molecules.iter().enumerate() {
            let _ = index.entry(molecule.id.clone()).or_insert(i);
        }
        log::debug!("molecule registry: {} molecules", molecules.len());
        Self { molecules, index }
    }

    /// All molecules in registration order.
    #[must_use]
    pub fn molecules(&self) -> &[Molecule] {
        &self.molecules
    }

    /// Iterate molecules in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Molecule> {
        self.molecules.iter()
    }

    /// Number of registered molecules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.molecules.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.molecules.is_empty()
    }

    /// Look up a molecule by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Molecule> {
        self.index.get(id).map(|&i| &self.molecules[i])
    }

    /// Look up a molecule by id, failing with
    /// [`ExhibitError::UnknownMolecule`].
    pub fn require(&self, id: &str) -> Result<&Molecule, ExhibitError> {
        self.get(id)
            .ok_or_else(|| ExhibitError::UnknownMolecule(id.to_owned()))
    }

    /// Position of `id` in registration order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Molecule ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.molecules.iter().map(|m| m.id.as_str())
    }

    /// Validate every molecule.
    pub fn validate(&self) -> Result<(), ExhibitError> {
        self.molecules.iter().try_for_each(Molecule::validate)
    }
}

impl<'a> IntoIterator for &'a MoleculeRegistry {
    type Item = &'a Molecule;
    type IntoIter = std::slice::Iter<'a, Molecule>;

    fn into_iter(self) -> Self::IntoIter {
        self.molecules.iter()
    }
}

static REGISTRY: LazyLock<MoleculeRegistry> = LazyLock::new(MoleculeRegistry::default);

/// Process-wide default registry, built on first access.
#[must_use]
pub fn registry() -> &'static MoleculeRegistry {
    &REGISTRY
}

/// Shorthand for `registry().molecules()`.
#[must_use]
pub fn molecules() -> &'static [Molecule] {
    REGISTRY.molecules()
}
