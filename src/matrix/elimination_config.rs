use crate::error::LinalgError;

/// Entries with a magnitude at or below this are never chosen as pivots.
pub const DEFAULT_PIVOT_TOLERANCE: f32 = 1e-6;
/// Entries with a magnitude below this are snapped to zero after each step.
pub const DEFAULT_CLEANUP_TOLERANCE: f32 = 1e-6;

/// Tolerances driving Gaussian elimination.
///
/// The pivot tolerance decides which columns hold a pivot (and therefore
/// the rank, and whether a system is singular); the cleanup tolerance
/// decides which leftovers of cancellation are treated as exact zeros.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EliminationConfig {
    pub pivot_tolerance: f32,
    pub cleanup_tolerance: f32,
}

impl EliminationConfig {
    pub fn new(pivot_tolerance: f32, cleanup_tolerance: f32) -> Result<Self, LinalgError> {
        check_tolerance("pivot", pivot_tolerance)?;
        check_tolerance("cleanup", cleanup_tolerance)?;
        Ok(EliminationConfig {
            pivot_tolerance,
            cleanup_tolerance,
        })
    }

    pub fn with_pivot_tolerance(self, pivot_tolerance: f32) -> Result<Self, LinalgError> {
        EliminationConfig::new(pivot_tolerance, self.cleanup_tolerance)
    }

    pub fn with_cleanup_tolerance(self, cleanup_tolerance: f32) -> Result<Self, LinalgError> {
        EliminationConfig::new(self.pivot_tolerance, cleanup_tolerance)
    }
}

impl Default for EliminationConfig {
    fn default() -> Self {
        EliminationConfig {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            cleanup_tolerance: DEFAULT_CLEANUP_TOLERANCE,
        }
    }
}

fn check_tolerance(name: &str, value: f32) -> Result<(), LinalgError> {
    if !value.is_finite() || value < 0.0 {
        return Err(LinalgError::InvalidArgument(format!(
            "{} tolerance must be finite and non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elimination_config() {
        let config = EliminationConfig::default();
        assert_eq!(config.pivot_tolerance, DEFAULT_PIVOT_TOLERANCE);
        assert_eq!(config.cleanup_tolerance, DEFAULT_CLEANUP_TOLERANCE);

        let config = config
            .with_pivot_tolerance(1e-3)
            .unwrap()
            .with_cleanup_tolerance(0.0)
            .unwrap();
        assert_eq!(config, EliminationConfig::new(1e-3, 0.0).unwrap());

        assert!(EliminationConfig::new(-1.0, 0.0).is_err());
        assert!(EliminationConfig::new(0.0, f32::INFINITY).is_err());
        assert!(config.with_pivot_tolerance(f32::NAN).is_err());
    }
}
