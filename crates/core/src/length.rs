use thiserror::Error;

/// The total length of stock to cut, guaranteed to be non-negative.
///
/// Lengths are whole units; a length of zero is valid and describes a rod
/// that needs no cutting.
///
/// # Examples
///
/// ```
/// use rodcut_core::RodLength;
///
/// let length = RodLength::try_from(5_i64).unwrap();
/// assert_eq!(length.get(), 5);
///
/// assert!(RodLength::try_from(-1_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "u64"))]
pub struct RodLength(usize);

/// Errors that can occur when constructing a [`RodLength`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LengthError {
    #[error("rod length must be non-negative, got {0}")]
    Negative(i64),

    #[error("rod length {0} does not fit in memory on this platform")]
    TooLarge(i64),
}

impl RodLength {
    /// A rod with nothing to cut.
    pub const ZERO: Self = Self(0);

    /// Creates a length from an unsigned count of units.
    #[must_use]
    pub const fn new(units: usize) -> Self {
        Self(units)
    }

    /// Returns the length in units.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns true for the trivial zero-length rod.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i64> for RodLength {
    type Error = LengthError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(LengthError::Negative(value));
        }
        usize::try_from(value)
            .map(Self)
            .map_err(|_| LengthError::TooLarge(value))
    }
}

impl From<usize> for RodLength {
    fn from(units: usize) -> Self {
        Self(units)
    }
}

impl From<RodLength> for usize {
    fn from(length: RodLength) -> Self {
        length.0
    }
}

impl From<RodLength> for u64 {
    fn from(length: RodLength) -> Self {
        length.0 as u64
    }
}

impl std::fmt::Display for RodLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
