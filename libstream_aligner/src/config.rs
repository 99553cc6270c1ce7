use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use fxhash::FxHashSet;

use super::error::ConfigError;

/// How a target stream is resampled onto the reference timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignPolicy {
    /// Copy the target sample with the closest timestamp
    Nearest,
    /// Piecewise-linear interpolation on the coarser of the two timelines
    Interpolate,
}

/// One logical stream: a name, the CSV file holding it, and its policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    pub name: String,
    pub path: PathBuf,
    pub policy: AlignPolicy,
}

/// Structure representing the application configuration. Maps logical stream
/// names to file paths and designates the reference series.
/// Configs are serializable and deserializable to YAML using serde and serde_yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub reference_name: String,
    pub reference_path: PathBuf,
    pub streams: Vec<StreamConfig>,
    pub output_path: PathBuf,
    pub rebase_time: bool,
}

impl Default for Config {
    /// Generate a new Config object with the standard rig streams and
    /// empty/invalid paths
    fn default() -> Self {
        Self {
            reference_name: String::from("img_velocity_estimation"),
            reference_path: PathBuf::from("None"),
            streams: vec![
                StreamConfig {
                    name: String::from("fabric_data"),
                    path: PathBuf::from("None"),
                    policy: AlignPolicy::Nearest,
                },
                StreamConfig {
                    name: String::from("ur5e_tool_velocity"),
                    path: PathBuf::from("None"),
                    policy: AlignPolicy::Interpolate,
                },
            ],
            output_path: PathBuf::from("None"),
            rebase_time: false,
        }
    }
}

impl Config {
    /// Read the configuration in a YAML file
    /// Returns a Config if successful
    pub fn read_config_file(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::BadFilePath(config_path.to_path_buf()));
        }

        let yaml_str = std::fs::read_to_string(config_path)?;

        Ok(serde_yaml::from_str::<Self>(&yaml_str)?)
    }

    /// Check that there is at least one stream and that logical names
    /// (including the reference) are unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.streams.is_empty() {
            return Err(ConfigError::NoStreams);
        }
        let mut seen = FxHashSet::default();
        seen.insert(self.reference_name.as_str());
        for stream in self.streams.iter() {
            if !seen.insert(stream.name.as_str()) {
                return Err(ConfigError::DuplicateStream(stream.name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrip() {
        let config = Config::default();
        let yaml_str = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml_str).unwrap();
        assert_eq!(parsed.reference_name, config.reference_name);
        assert_eq!(parsed.streams.len(), 2);
        assert_eq!(parsed.streams[0].policy, AlignPolicy::Nearest);
        assert_eq!(parsed.streams[1].policy, AlignPolicy::Interpolate);
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::read_config_file(Path::new("/does/not/exist.yml"));
        assert!(matches!(result, Err(ConfigError::BadFilePath(_))));
    }

    #[test]
    fn test_validate_duplicate_stream() {
        let mut config = Config::default();
        config.streams[1].name = config.streams[0].name.clone();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateStream(_))
        ));

        config = Config::default();
        config.streams[0].name = config.reference_name.clone();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateStream(_))
        ));
    }

    #[test]
    fn test_validate_no_streams() {
        let mut config = Config::default();
        config.streams.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoStreams)));
    }
}
