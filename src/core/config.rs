//! Configuration for the melon factory
//!
//! Controls the pick ceiling, box size and the synthetic attributes drawn
//! by the picking and labeling robots.
use super::errors::FactoryError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of pick attempts allowed per order before it fails
pub const DEFAULT_MELON_LIMIT: u32 = 200;
/// Default number of melons per box
pub const DEFAULT_BOX_CAPACITY: usize = 5;
/// Default upper bound (exclusive) for picked weights, in pounds
pub const DEFAULT_MAX_WEIGHT: f64 = 10.0;
/// Default chance of each label sticking
pub const DEFAULT_LABEL_PROBABILITY: f64 = 0.9;

/// Configuration for a factory run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Pick ceiling. An order fails once attempts exceed this value,
    /// so `melon_limit + 1` picks are allowed in total.
    pub melon_limit: u32,
    /// Melons per box
    pub box_capacity: usize,
    /// Picked weights are drawn uniformly from `[0, max_weight)`
    pub max_weight: f64,
    /// Probability that each of the two labels is applied
    pub label_probability: f64,
    /// Seed for the factory RNG; entropy is used when unset
    pub random_seed: Option<u64>,
    /// Paint winter squash green before inspection
    pub repaint_squash: bool,
}

impl FactoryConfig {
    /// Create a configuration matching the reference factory
    pub fn new() -> Self {
        Self {
            melon_limit: DEFAULT_MELON_LIMIT,
            box_capacity: DEFAULT_BOX_CAPACITY,
            max_weight: DEFAULT_MAX_WEIGHT,
            label_probability: DEFAULT_LABEL_PROBABILITY,
            random_seed: None,
            repaint_squash: false,
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FactoryError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the pick ceiling for each order
    ///
    /// # Arguments
    /// * `limit` - Attempts an order may exceed before it fails; `limit + 1` picks run in total
    ///
    /// # Returns
    /// A new configuration with the specified ceiling
    pub fn with_melon_limit(mut self, limit: u32) -> Self {
        self.melon_limit = limit;
        self
    }

    /// Set how many melons fit in one box
    ///
    /// # Arguments
    /// * `capacity` - Melons per box, at least 1
    ///
    /// # Returns
    /// A new configuration with the specified box size
    pub fn with_box_capacity(mut self, capacity: usize) -> Self {
        self.box_capacity = capacity;
        self
    }

    /// Set the upper bound for picked weights
    ///
    /// # Arguments
    /// * `max_weight` - Exclusive upper bound in pounds; must be positive and finite
    ///
    /// # Returns
    /// A new configuration with the specified weight range
    pub fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Set the chance that each label sticks
    ///
    /// # Arguments
    /// * `probability` - Probability within `[0, 1]`, drawn once per label
    ///
    /// # Returns
    /// A new configuration with the specified label probability
    pub fn with_label_probability(mut self, probability: f64) -> Self {
        self.label_probability = probability;
        self
    }

    /// Seed the factory RNG so runs are reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Paint squash green after prep so it can pass inspection
    pub fn with_squash_repaint(mut self, enabled: bool) -> Self {
        self.repaint_squash = enabled;
        self
    }

    /// Check that the robots can be built from this configuration
    pub fn validate(&self) -> Result<(), FactoryError> {
        if self.box_capacity == 0 {
            return Err(FactoryError::InvalidConfig(
                "box_capacity must be at least 1".to_string(),
            ));
        }
        if !self.max_weight.is_finite() || self.max_weight <= 0.0 {
            return Err(FactoryError::InvalidConfig(format!(
                "max_weight must be a positive number, got {}",
                self.max_weight
            )));
        }
        if !(0.0..=1.0).contains(&self.label_probability) {
            return Err(FactoryError::InvalidConfig(format!(
                "label_probability must be within [0, 1], got {}",
                self.label_probability
            )));
        }
        Ok(())
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FactoryConfig::default();
        assert_eq!(config.melon_limit, 200);
        assert_eq!(config.box_capacity, 5);
        assert_eq!(config.max_weight, 10.0);
        assert_eq!(config.label_probability, 0.9);
        assert_eq!(config.random_seed, None);
        assert!(!config.repaint_squash);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = FactoryConfig::new()
            .with_melon_limit(5)
            .with_box_capacity(2)
            .with_seed(7)
            .with_squash_repaint(true);

        assert_eq!(config.melon_limit, 5);
        assert_eq!(config.box_capacity, 2);
        assert_eq!(config.random_seed, Some(7));
        assert!(config.repaint_squash);
    }

    #[test]
    fn test_rejects_empty_boxes() {
        let config = FactoryConfig::new().with_box_capacity(0);
        assert!(matches!(config.validate(), Err(FactoryError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_bad_probability_and_weight() {
        assert!(FactoryConfig::new().with_label_probability(1.5).validate().is_err());
        assert!(FactoryConfig::new().with_label_probability(-0.1).validate().is_err());
        assert!(FactoryConfig::new().with_max_weight(0.0).validate().is_err());
        assert!(FactoryConfig::new().with_max_weight(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_json_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "melon_limit": 10, "random_seed": 3 }}"#).unwrap();

        let config = FactoryConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.melon_limit, 10);
        assert_eq!(config.random_seed, Some(3));
        assert_eq!(config.box_capacity, DEFAULT_BOX_CAPACITY);
    }

    #[test]
    fn test_json_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            FactoryConfig::from_json_file(file.path()),
            Err(FactoryError::ConfigFormat(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "box_capacity": 0 }}"#).unwrap();
        assert!(matches!(
            FactoryConfig::from_json_file(file.path()),
            Err(FactoryError::InvalidConfig(_))
        ));
    }
}
