//! Configuration of a spike collection.
use serde::{Deserialize, Serialize};
use serde_json;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::SpikeError;
use crate::{CAPACITY_CHUNK, INITIAL_CAPACITY};

/// Parameters shared by every spike of a collection.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// The curvature radius, i.e., the offset of the control point relative to the edge length.
    pub radius: f64,
    /// The number of slots allocated when the collection is created.
    pub initial_capacity: usize,
    /// The number of slots appended whenever the collection is full.
    pub capacity_chunk: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            radius: 0.0,
            initial_capacity: INITIAL_CAPACITY,
            capacity_chunk: CAPACITY_CHUNK,
        }
    }
}

impl AnimationConfig {
    /// Create a new configuration with the specified parameters.
    /// Returns an error if the radius is not finite or if the capacity chunk is zero.
    pub fn build(
        radius: f64,
        initial_capacity: usize,
        capacity_chunk: usize,
    ) -> Result<Self, SpikeError> {
        let config = AnimationConfig {
            radius,
            initial_capacity,
            capacity_chunk,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SpikeError> {
        if !self.radius.is_finite() {
            return Err(SpikeError::InvalidParameter(
                "The curvature radius must be finite".to_string(),
            ));
        }
        if self.capacity_chunk == 0 {
            return Err(SpikeError::InvalidParameter(
                "The capacity chunk must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Save the configuration to a JSON file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SpikeError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing fields take their default value.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SpikeError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: AnimationConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_build() {
        let config = AnimationConfig::build(0.25, 3, 10).unwrap();
        assert_eq!(config.radius, 0.25);
        assert_eq!(config.initial_capacity, 3);
        assert_eq!(config.capacity_chunk, 10);

        assert!(matches!(
            AnimationConfig::build(f64::NAN, 3, 10),
            Err(SpikeError::InvalidParameter(_))
        ));
        assert!(matches!(
            AnimationConfig::build(0.25, 3, 0),
            Err(SpikeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_config_load_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "radius": 0.5 }"#).unwrap();

        let config = AnimationConfig::load_from(&path).unwrap();
        assert_eq!(config.radius, 0.5);
        assert_eq!(config.initial_capacity, INITIAL_CAPACITY);
        assert_eq!(config.capacity_chunk, CAPACITY_CHUNK);
    }

    #[test]
    fn test_config_load_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "capacity_chunk": 0 }"#).unwrap();
        assert!(matches!(
            AnimationConfig::load_from(&path),
            Err(SpikeError::InvalidParameter(_))
        ));

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            AnimationConfig::load_from(&path),
            Err(SpikeError::IOError(_))
        ));
    }

    #[test]
    fn test_config_save_load() {
        let config = AnimationConfig::build(-0.125, 8, 4).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        config.save_to(&path).unwrap();
        assert_eq!(AnimationConfig::load_from(&path).unwrap(), config);
    }
}
