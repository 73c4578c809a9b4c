//! # Identifier Normalization
//!
//! An [`Identifier`] is the lookup key into the creature catalog: a whole
//! number in `1..=1025`. There are two ways to get one:
//!
//! - [`normalize()`]: the permissive path used for display. Any raw value
//!   that coerces to a finite number is floored and sign-stripped, then
//!   range-checked. `-7` becomes `7`, `151.9` becomes `151`, `true`
//!   becomes `1`.
//! - [`Identifier::new()`]: the strict constructor. The value must already
//!   be in range.
//!
//! ## Invariant
//!
//! Every `Identifier` in existence lies in `MIN..=MAX`. Deserialization
//! routes through the strict constructor.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::raw::RawValue;

/// Validated catalog key in `1..=1025`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(u16);

impl Identifier {
    /// Lowest valid identifier.
    pub const MIN: u16 = 1;
    /// Highest valid identifier.
    pub const MAX: u16 = 1025;

    /// Create an identifier from an in-range integer.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdentifierOutOfRange`] outside `MIN..=MAX`.
    pub fn new(value: u16) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::IdentifierOutOfRange {
                value: i64::from(value),
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// The numeric value.
    pub fn get(&self) -> u16 {
        self.0
    }

    /// Display tag with a leading hash, e.g. `#25`.
    pub fn tag(&self) -> String {
        format!("#{}", self.0)
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Identifier> for u16 {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl TryFrom<u16> for Identifier {
    type Error = ValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        let value = u16::try_from(raw).map_err(|_| {
            serde::de::Error::custom(ValidationError::IdentifierOutOfRange {
                value: raw,
                min: Identifier::MIN,
                max: Identifier::MAX,
            })
        })?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Normalize a raw value into an identifier, or `None` if it is out of domain.
///
/// The magnitude of the floor, `|⌊v⌋|`, is what gets range-checked. Pure;
/// the same input always produces the same output.
pub fn normalize(value: impl Into<RawValue>) -> Option<Identifier> {
    let n = value.into().to_finite()?;
    let whole = n.floor().abs();
    if whole < f64::from(Identifier::MIN) || whole > f64::from(Identifier::MAX) {
        return None;
    }
    // In range, so the cast is exact.
    Some(Identifier(whole as u16))
}
