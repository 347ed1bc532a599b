//! Placement of a unit cylinder between two atom centers.
//!
//! The cylinder primitive is one unit tall along [`CYLINDER_AXIS`], centered
//! on the origin. A bond transform moves it to the bond midpoint, rotates
//! the axis onto the bond direction with the shortest-arc quaternion, and
//! stretches it to the bond length.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::chem::BondOrder;

/// Default axis of the cylinder primitive.
pub const CYLINDER_AXIS: Vec3 = Vec3::Y;

/// Cylinder radius of a single bond.
pub const DEFAULT_BOND_THICKNESS: f32 = 0.1;

/// Bonds shorter than this are treated as coincident atoms.
const MIN_BOND_LENGTH: f32 = 1e-6;

/// Cylinder placement for one bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondTransform {
    /// Bond midpoint.
    pub position: Vec3,
    /// Rotation taking [`CYLINDER_AXIS`] onto the bond direction.
    pub rotation: Quat,
    /// Distance between the two atom centers.
    pub length: f32,
    /// Cylinder radius; scales with bond order.
    pub radius: f32,
}

impl BondTransform {
    /// Whether the atoms coincide. Degenerate bonds carry the identity
    /// rotation and zero length and should not be drawn.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length < MIN_BOND_LENGTH
    }

    /// Unit bond direction, i.e. the rotated cylinder axis.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.rotation * CYLINDER_AXIS
    }

    /// The two cylinder cap centers.
    #[must_use]
    pub fn endpoints(&self) -> [Vec3; 2] {
        let half = self.direction() * (self.length * 0.5);
        [self.position - half, self.position + half]
    }

    /// Rotation as intrinsic X-Y-Z Euler angles in radians, for render
    /// surfaces that only take Euler rotations.
    ///
    /// Near a Y rotation of ±90° the X and Z angles become coupled
    /// (gimbal lock) and only their sum/difference is meaningful; prefer
    /// [`Self::rotation`] or [`Self::model_matrix`] where possible.
    #[must_use]
    pub fn euler_xyz(&self) -> Vec3 {
        let (x, y, z) = self.rotation.to_euler(EulerRot::XYZ);
        Vec3::new(x, y, z)
    }

    /// Model matrix for a unit cylinder of radius 1 and height 1.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::new(self.radius, self.length, self.radius),
            self.rotation,
            self.position,
        )
    }
}

/// Visual cylinder radius for a bond order: `thickness * order`.
#[must_use]
pub fn bond_radius(order: BondOrder, thickness: f32) -> f32 {
    thickness * f32::from(order.as_u8())
}

/// Cylinder transform for a bond from `start` to `end` with the default
/// thickness.
#[must_use]
pub fn compute_bond_transform(start: Vec3, end: Vec3, order: BondOrder) -> BondTransform {
    compute_bond_transform_with_thickness(start, end, order, DEFAULT_BOND_THICKNESS)
}

/// Cylinder transform for a bond from `start` to `end`.
///
/// Coincident endpoints yield a degenerate transform (identity rotation,
/// zero length) instead of dividing by zero.
#[must_use]
pub fn compute_bond_transform_with_thickness(
    start: Vec3,
    end: Vec3,
    order: BondOrder,
    thickness: f32,
) -> BondTransform {
    let delta = end - start;
    let length = delta.length();
    let rotation = if length < MIN_BOND_LENGTH {
        Quat::IDENTITY
    } else {
        Quat::from_rotation_arc(CYLINDER_AXIS, delta / length)
    };
    BondTransform {
        position: (start + end) * 0.5,
        rotation,
        length,
        radius: bond_radius(order, thickness),
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn vertical_bond_needs_no_rotation() {
        let t = compute_bond_transform(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0), BondOrder::Single);
        assert_eq!(t.length, 2.0);
        assert_eq!(t.position, Vec3::new(0.0, 1.0, 0.0));
        assert!(t.rotation.angle_between(Quat::IDENTITY) < EPS);
        assert!(approx(t.euler_xyz(), Vec3::ZERO));
        assert!(!t.is_degenerate());
    }

    #[test]
    fn horizontal_bond_rotates_a_quarter_turn() {
        let t = compute_bond_transform(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), BondOrder::Single);
        assert_eq!(t.length, 2.0);
        assert_eq!(t.position, Vec3::new(1.0, 0.0, 0.0));
        let (_, angle) = t.rotation.to_axis_angle();
        assert!((angle - FRAC_PI_2).abs() < EPS);
        assert!(approx(t.direction(), Vec3::X));
        // rotating +Y onto +X is a -90° turn about Z
        assert!(approx(t.euler_xyz(), Vec3::new(0.0, 0.0, -FRAC_PI_2)));
    }

    #[test]
    fn antiparallel_bond_flips_axis() {
        let t = compute_bond_transform(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            BondOrder::Single,
        );
        assert!(approx(t.direction(), Vec3::NEG_Y));
        let (_, angle) = t.rotation.to_axis_angle();
        assert!((angle - PI).abs() < 1e-4);
    }

    #[test]
    fn arbitrary_bond_endpoints_round_trip() {
        let start = Vec3::new(1.0, -2.0, 0.5);
        let end = Vec3::new(-0.5, 0.7, 3.0);
        let t = compute_bond_transform(start, end, BondOrder::Triple);
        let [a, b] = t.endpoints();
        assert!(approx(a, start));
        assert!(approx(b, end));
        assert!(approx(t.model_matrix().transform_point3(Vec3::new(0.0, 0.5, 0.0)), end));
    }

    #[test]
    fn radius_scales_with_order() {
        let single = bond_radius(BondOrder::Single, DEFAULT_BOND_THICKNESS);
        let double = bond_radius(BondOrder::Double, DEFAULT_BOND_THICKNESS);
        let triple = bond_radius(BondOrder::Triple, 0.05);
        assert_eq!(double, 2.0 * single);
        assert!((triple - 0.15).abs() < 1e-6);
    }

    #[test]
    fn coincident_atoms_are_degenerate() {
        let p = Vec3::new(3.0, 3.0, 3.0);
        let t = compute_bond_transform(p, p, BondOrder::Double);
        assert!(t.is_degenerate());
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.position, p);
        assert_eq!(t.length, 0.0);
        assert!(t.euler_xyz().is_finite());
    }
}
