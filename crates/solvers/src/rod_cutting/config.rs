use thiserror::Error;

/// How solvers treat segment lengths the price table does not cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CoveragePolicy {
    /// Reject any rod longer than the table's coverage.
    #[default]
    Reject,

    /// Treat unpriced segments as worth zero; they remain legal cuts.
    Unpriced,
}

/// Configuration for the rod-cutting solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    coverage: CoveragePolicy,
    max_depth: usize,
}

/// Errors that can occur when validating a rod-cutting solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_depth must be positive")]
    MaxDepth,
}

impl Config {
    /// Default limit on the rod length the top-down solver will recurse over.
    pub const DEFAULT_MAX_DEPTH: usize = 1024;

    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_depth` is zero.
    pub fn new(coverage: CoveragePolicy, max_depth: usize) -> Result<Self, ConfigError> {
        if max_depth == 0 {
            return Err(ConfigError::MaxDepth);
        }

        Ok(Self {
            coverage,
            max_depth,
        })
    }

    /// Returns a copy of this config with a different coverage policy.
    #[must_use]
    pub fn with_coverage(self, coverage: CoveragePolicy) -> Self {
        Self { coverage, ..self }
    }

    /// Returns the policy for segment lengths without a price.
    #[must_use]
    pub fn coverage(&self) -> CoveragePolicy {
        self.coverage
    }

    /// Returns the longest rod the top-down solver accepts.
    ///
    /// Recursion depth grows with the rod length, one frame per unit.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coverage: CoveragePolicy::default(),
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rejects_gaps() {
        let config = Config::default();

        assert_eq!(config.coverage(), CoveragePolicy::Reject);
        assert_eq!(config.max_depth(), Config::DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn zero_depth_is_invalid() {
        assert_eq!(
            Config::new(CoveragePolicy::Reject, 0),
            Err(ConfigError::MaxDepth)
        );
    }

    #[test]
    fn with_coverage_keeps_depth() {
        let config = Config::new(CoveragePolicy::Reject, 12)
            .unwrap()
            .with_coverage(CoveragePolicy::Unpriced);

        assert_eq!(config.coverage(), CoveragePolicy::Unpriced);
        assert_eq!(config.max_depth(), 12);
    }
}
