//! Per-molecule instance data for sphere and cylinder primitives.
//!
//! [`MoleculeScene::build`] flattens a [`Molecule`] into one
//! [`SphereInstance`] per atom and one [`CylinderInstance`] per drawable
//! bond. Both are `#[repr(C)]` + `Pod`, so the slices can be uploaded to a
//! GPU storage buffer as-is.

use glam::Vec3;
use serde::Serialize;

use crate::chem::{Atom, Molecule};
use crate::geometry::{compute_bond_transform_with_thickness, BondTransform};
use crate::options::Options;

/// Per-instance data for one atom sphere.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    /// xyz = position, w = radius
    pub center: [f32; 4],
    /// xyz = RGB color, w = emissive intensity
    pub color: [f32; 4],
}

/// Per-instance data for one bond cylinder.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CylinderInstance {
    /// xyz = midpoint, w = length
    pub position: [f32; 4],
    /// Rotation quaternion (x, y, z, w) taking +Y onto the bond axis
    pub rotation: [f32; 4],
    /// xyz = RGB color, w = radius
    pub color: [f32; 4],
}

impl CylinderInstance {
    fn from_transform(t: &BondTransform, rgb: [f32; 3]) -> Self {
        Self {
            position: [t.position.x, t.position.y, t.position.z, t.length],
            rotation: t.rotation.to_array(),
            color: [rgb[0], rgb[1], rgb[2], t.radius],
        }
    }
}

/// Everything needed to draw one molecule.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MoleculeScene {
    /// Registry id of the source molecule.
    pub molecule_id: String,
    /// Atom spheres in atom id order.
    pub spheres: Vec<SphereInstance>,
    /// Bond cylinders in bond order, minus skipped bonds.
    pub cylinders: Vec<CylinderInstance>,
    /// Camera target.
    pub center: [f32; 3],
    /// Radius enclosing every sphere, for camera fitting.
    pub radius: f32,
    /// Bonds dropped because an endpoint is missing or coincident.
    pub skipped_bonds: usize,
    /// Spin about the vertical axis; 0 when auto-rotate is off.
    pub rotation_speed: f32,
    /// Clear color, RGB.
    pub background: [f32; 3],
}

impl MoleculeScene {
    /// Build instances for `molecule` using the geometry, display and color
    /// sections of `options`.
    #[must_use]
    pub fn build(molecule: &Molecule, options: &Options) -> Self {
        let spheres: Vec<SphereInstance> = molecule
            .atoms
            .iter()
            .map(|atom| sphere_for(atom, options))
            .collect();

        let mut cylinders = Vec::new();
        let mut skipped_bonds = 0;
        if options.display.show_bonds {
            cylinders.reserve(molecule.bonds.len());
            let bond_rgb = options.colors.bond.to_rgb_f32();
            for bond in &molecule.bonds {
                let (Some(a), Some(b)) =
                    (molecule.atom(bond.atom1), molecule.atom(bond.atom2))
                else {
                    log::warn!(
                        "{}: bond {}-{} references a missing atom, skipping",
                        molecule.id,
                        bond.atom1,
                        bond.atom2
                    );
                    skipped_bonds += 1;
                    continue;
                };
                let t = compute_bond_transform_with_thickness(
                    a.position,
                    b.position,
                    bond.order,
                    options.geometry.bond_thickness,
                );
                if t.is_degenerate() {
                    log::warn!(
                        "{}: bond {}-{} has zero length, skipping",
                        molecule.id,
                        bond.atom1,
                        bond.atom2
                    );
                    skipped_bonds += 1;
                    continue;
                }
                cylinders.push(CylinderInstance::from_transform(&t, bond_rgb));
            }
        }

        let center = molecule.centroid();
        let radius = scene_radius(&spheres, center);
        log::debug!(
            "scene '{}': {} spheres, {} cylinders, {} skipped",
            molecule.id,
            spheres.len(),
            cylinders.len(),
            skipped_bonds
        );
        Self {
            molecule_id: molecule.id.clone(),
            spheres,
            cylinders,
            center: center.to_array(),
            radius,
            skipped_bonds,
            rotation_speed: if options.display.auto_rotate {
                options.display.auto_rotate_speed
            } else {
                0.0
            },
            background: options.colors.background.to_rgb_f32(),
        }
    }

    /// Sphere instances as raw bytes for buffer upload.
    #[must_use]
    pub fn sphere_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.spheres)
    }

    /// Cylinder instances as raw bytes for buffer upload.
    #[must_use]
    pub fn cylinder_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cylinders)
    }

    /// Serialize as JSON for a web front end.
    pub fn to_json(&self) -> Result<String, crate::error::ExhibitError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn sphere_for(atom: &Atom, options: &Options) -> SphereInstance {
    let rgb = options
        .colors
        .atom_color(&atom.element, atom.color)
        .to_rgb_f32();
    let (radius, emissive) = if atom.simplified {
        (
            atom.radius * options.geometry.simplified_scale,
            options.display.simplified_emissive,
        )
    } else {
        (atom.radius, 0.0)
    };
    let p = atom.position;
    SphereInstance {
        center: [p.x, p.y, p.z, radius],
        color: [rgb[0], rgb[1], rgb[2], emissive],
    }
}

// Uses the scaled sphere radii, so simplified atoms are fully enclosed.
fn scene_radius(spheres: &[SphereInstance], center: Vec3) -> f32 {
    spheres
        .iter()
        .map(|s| {
            let [x, y, z, r] = s.center;
            Vec3::new(x, y, z).distance(center) + r
        })
        .fold(0.0, f32::max)
}
