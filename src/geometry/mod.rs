//! Render-time geometry for molecule primitives.

pub mod bond;

pub use bond::{
    bond_radius, compute_bond_transform, compute_bond_transform_with_thickness, BondTransform,
    CYLINDER_AXIS, DEFAULT_BOND_THICKNESS,
};
