//! Chemistry data model: element table, atoms, bonds, and molecules.
//!
//! Every atom is created through [`create_atom`] (or [`MoleculeBuilder`],
//! which calls the same factory), so color and radius always come from the
//! element table unless explicitly overridden.

mod atom;
mod bond;
mod builder;
mod color;
pub mod element;
mod molecule;

pub use atom::{create_atom, Atom};
pub use bond::{Bond, BondOrder};
pub use builder::MoleculeBuilder;
pub use color::{Color, ParseColorError};
pub use element::ElementDescriptor;
pub use molecule::{Molecule, MoleculeCategory, MoleculeHeader};
