//! Hill climbing configuration.

use crate::error::SearchError;

/// Configuration parameters for hill climbing.
///
/// # Examples
///
/// ```
/// use u_localsearch::hill::HillClimbingConfig;
///
/// let config = HillClimbingConfig::default()
///     .with_max_iterations(10_000)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 10_000);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingConfig {
    /// Maximum number of moves. A safety bound; the climb normally stops
    /// earlier at a local optimum.
    pub max_iterations: usize,
    /// Maximum number of neighbors consumed per iteration.
    pub max_neighbors: usize,
    /// Random seed (None for the default seed).
    pub seed: Option<u64>,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1_000_000,
            max_neighbors: 100_000,
            seed: None,
        }
    }
}

impl HillClimbingConfig {
    /// Sets the maximum number of moves.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the per-iteration neighbor cap.
    pub fn with_max_neighbors(mut self, n: usize) -> Self {
        self.max_neighbors = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_iterations == 0 {
            return Err(SearchError::invalid("max_iterations must be at least 1"));
        }
        if self.max_neighbors == 0 {
            return Err(SearchError::invalid("max_neighbors must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HillClimbingConfig::default();
        assert_eq!(config.max_iterations, 1_000_000);
        assert_eq!(config.max_neighbors, 100_000);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = HillClimbingConfig::default().with_max_iterations(0);
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_zero_neighbors() {
        let config = HillClimbingConfig::default().with_max_neighbors(0);
        assert!(config.validate().is_err());
    }
}
