//! Canonical tooth numbering (Universal Numbering System).
//!
//! Annotations, mesh identity, and interaction state all key teeth by
//! the same 1-32 position number. [`ToothId`] makes out-of-range numbers
//! unrepresentable, so code past the payload boundary never re-checks
//! the range.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lowest valid tooth number (upper right third molar).
pub const MIN_TOOTH_NUMBER: u8 = 1;

/// Highest valid tooth number (lower right third molar).
pub const MAX_TOOTH_NUMBER: u8 = 32;

/// Number of teeth in a complete permanent dentition.
pub const TOOTH_COUNT: usize = 32;

// ---------------------------------------------------------------------------
// ToothId
// ---------------------------------------------------------------------------

/// Canonical tooth position in the Universal Numbering System.
///
/// Numbers run 1-16 across the upper arch (patient's right to left) and
/// 17-32 across the lower arch (left back to right). The id is
/// independent of any 3D asset's node naming; asset names map onto it
/// through the scene layer's identity table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct ToothId(u8);

/// Upper (maxillary) or lower (mandibular) arch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Upper,
    Lower,
}

impl ToothId {
    /// Create a tooth id, rejecting numbers outside 1-32.
    pub fn new(number: u8) -> Result<Self, CoreError> {
        if (MIN_TOOTH_NUMBER..=MAX_TOOTH_NUMBER).contains(&number) {
            Ok(Self(number))
        } else {
            Err(CoreError::Validation(format!(
                "Tooth number {number} is outside the valid range \
                 {MIN_TOOTH_NUMBER}-{MAX_TOOTH_NUMBER}"
            )))
        }
    }

    /// The raw position number (1-32).
    pub fn number(self) -> u8 {
        self.0
    }

    /// Which arch the tooth sits in.
    pub fn arch(self) -> Arch {
        if self.0 <= 16 {
            Arch::Upper
        } else {
            Arch::Lower
        }
    }

    /// Quadrant 1-4: upper right, upper left, lower left, lower right.
    pub fn quadrant(self) -> u8 {
        match self.0 {
            1..=8 => 1,
            9..=16 => 2,
            17..=24 => 3,
            _ => 4,
        }
    }

    /// Iterate every valid tooth id in ascending numeric order.
    pub fn all() -> impl Iterator<Item = ToothId> {
        (MIN_TOOTH_NUMBER..=MAX_TOOTH_NUMBER).map(ToothId)
    }
}

impl TryFrom<u8> for ToothId {
    type Error = CoreError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl TryFrom<i64> for ToothId {
    type Error = CoreError;

    /// Accepts the wider integer type JSON numbers arrive as.
    fn try_from(number: i64) -> Result<Self, Self::Error> {
        let narrowed = u8::try_from(number).map_err(|_| {
            CoreError::Validation(format!(
                "Tooth number {number} is outside the valid range \
                 {MIN_TOOTH_NUMBER}-{MAX_TOOTH_NUMBER}"
            ))
        })?;
        Self::new(narrowed)
    }
}

impl From<ToothId> for u8 {
    fn from(tooth: ToothId) -> u8 {
        tooth.0
    }
}

impl std::fmt::Display for ToothId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
