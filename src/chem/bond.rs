use serde::{Deserialize, Serialize};

use crate::error::ExhibitError;

/// Covalent bond multiplicity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum BondOrder {
    /// Single bond.
    Single,
    /// Double bond.
    Double,
    /// Triple bond.
    Triple,
}

impl BondOrder {
    /// Integer multiplicity (1, 2 or 3).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }
}

impl TryFrom<u8> for BondOrder {
    type Error = ExhibitError;

    fn try_from(order: u8) -> Result<Self, Self::Error> {
        match order {
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            3 => Ok(Self::Triple),
            other => Err(ExhibitError::InvalidBondOrder(other)),
        }
    }
}

impl From<BondOrder> for u8 {
    fn from(order: BondOrder) -> Self {
        order.as_u8()
    }
}

/// Undirected bond between two atoms of the same molecule, by atom id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bond {
    /// First atom id.
    pub atom1: usize,
    /// Second atom id.
    pub atom2: usize,
    /// Bond multiplicity.
    pub order: BondOrder,
}

impl Bond {
    /// Single bond between `atom1` and `atom2`.
    #[must_use]
    pub const fn single(atom1: usize, atom2: usize) -> Self {
        Self {
            atom1,
            atom2,
            order: BondOrder::Single,
        }
    }

    /// Double bond between `atom1` and `atom2`.
    #[must_use]
    pub const fn double(atom1: usize, atom2: usize) -> Self {
        Self {
            atom1,
            atom2,
            order: BondOrder::Double,
        }
    }

    /// Whether this bond joins `a` and `b`, in either direction.
    #[must_use]
    pub const fn connects(&self, a: usize, b: usize) -> bool {
        (self.atom1 == a && self.atom2 == b) || (self.atom1 == b && self.atom2 == a)
    }

    /// Whether `atom` is one of the bond's endpoints.
    #[must_use]
    pub const fn involves(&self, atom: usize) -> bool {
        self.atom1 == atom || self.atom2 == atom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_round_trips_through_integer() {
        for n in 1..=3u8 {
            assert_eq!(BondOrder::try_from(n).unwrap().as_u8(), n);
        }
        assert!(matches!(
            BondOrder::try_from(0),
            Err(ExhibitError::InvalidBondOrder(0))
        ));
        assert!(BondOrder::try_from(4).is_err());
    }

    #[test]
    fn order_serializes_as_integer() {
        let json = serde_json::to_string(&Bond::double(0, 1)).unwrap();
        assert_eq!(json, r#"{"atom1":0,"atom2":1,"order":2}"#);
        assert!(serde_json::from_str::<Bond>(r#"{"atom1":0,"atom2":1,"order":5}"#).is_err());
    }

    #[test]
    fn bonds_are_undirected() {
        let bond = Bond::single(2, 7);
        assert!(bond.connects(7, 2));
        assert!(bond.involves(7));
        assert!(!bond.involves(3));
    }
}
