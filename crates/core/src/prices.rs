use thiserror::Error;

/// Market prices for rod segments, indexed by segment length.
///
/// Entry `i` of the underlying sequence is the price of a segment of length
/// `i + 1`, so [`PriceTable::price`] takes the segment length directly.
/// Every price is finite and non-negative; this invariant is checked at
/// construction time.
///
/// The table's *coverage* is the longest segment it prices. Segments longer
/// than the coverage have no price; how a solver treats them is a solver
/// policy, not a property of the table.
///
/// # Examples
///
/// ```
/// use rodcut_core::PriceTable;
///
/// let prices = PriceTable::new(vec![1.0, 5.0, 8.0]).unwrap();
/// assert_eq!(prices.coverage(), 3);
/// assert_eq!(prices.price(2), Some(5.0));
/// assert_eq!(prices.price(4), None);
///
/// assert!(PriceTable::new(vec![1.0, f64::NAN]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct PriceTable {
    prices: Vec<f64>,
}

/// Errors that can occur when validating a [`PriceTable`].
///
/// Each variant names the segment length whose price is invalid.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PriceError {
    #[error("price for segment length {segment} must be a finite number, got {value}")]
    NotFinite { segment: usize, value: f64 },

    #[error("price for segment length {segment} must be non-negative, got {value}")]
    Negative { segment: usize, value: f64 },
}

impl PriceTable {
    /// Creates a price table from prices ordered by segment length.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first price that is NaN, infinite, or negative.
    pub fn new(prices: Vec<f64>) -> Result<Self, PriceError> {
        for (index, &value) in prices.iter().enumerate() {
            let segment = index + 1;
            if !value.is_finite() {
                return Err(PriceError::NotFinite { segment, value });
            }
            if value < 0.0 {
                return Err(PriceError::Negative { segment, value });
            }
        }
        Ok(Self { prices })
    }

    /// Creates a table that prices nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if no segment length has a price.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Returns the longest segment length that has a price.
    #[must_use]
    pub fn coverage(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if every segment length in `1..=length` has a price.
    #[must_use]
    pub fn covers(&self, length: usize) -> bool {
        length <= self.coverage()
    }

    /// Returns the price of a segment of the given length.
    ///
    /// Returns `None` for a zero-length segment or one beyond the coverage.
    #[must_use]
    pub fn price(&self, segment: usize) -> Option<f64> {
        segment
            .checked_sub(1)
            .and_then(|index| self.prices.get(index))
            .copied()
    }

    /// Returns the prices ordered by segment length.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }
}

impl TryFrom<Vec<f64>> for PriceTable {
    type Error = PriceError;

    fn try_from(prices: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(prices)
    }
}

impl TryFrom<&[f64]> for PriceTable {
    type Error = PriceError;

    fn try_from(prices: &[f64]) -> Result<Self, Self::Error> {
        Self::new(prices.to_vec())
    }
}

impl From<PriceTable> for Vec<f64> {
    fn from(table: PriceTable) -> Self {
        table.prices
    }
}
