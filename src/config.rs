//! Validated mining thresholds

use crate::error::{MiningError, MiningResult};

/// Minimum support and confidence, both guaranteed to lie in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    min_support: f64,
    min_confidence: f64,
}

impl Thresholds {
    /// Validate both thresholds, reporting the first one out of range
    pub fn new(min_support: f64, min_confidence: f64) -> MiningResult<Self> {
        Ok(Self {
            min_support: validate_threshold("min_sup", min_support)?,
            min_confidence: validate_threshold("min_conf", min_confidence)?,
        })
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }
}

/// Accept `value` only if it is a number in `[0, 1]`
pub fn validate_threshold(name: &'static str, value: f64) -> MiningResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(MiningError::InvalidThreshold { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bounds() {
        let thresholds = Thresholds::new(0.0, 1.0).unwrap();
        assert_eq!(thresholds.min_support(), 0.0);
        assert_eq!(thresholds.min_confidence(), 1.0);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            Thresholds::new(-0.1, 0.5),
            Err(MiningError::InvalidThreshold {
                name: "min_sup",
                value: -0.1
            })
        );
        assert_eq!(
            Thresholds::new(0.5, 1.01),
            Err(MiningError::InvalidThreshold {
                name: "min_conf",
                value: 1.01
            })
        );
    }

    #[test]
    fn test_rejects_nan() {
        assert!(matches!(
            Thresholds::new(f64::NAN, 0.5),
            Err(MiningError::InvalidThreshold { name: "min_sup", .. })
        ));
    }
}
