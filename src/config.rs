use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    /// "hourly" | "daily" | anything else = never rotate
    pub rotation: String,
    #[serde(default)]
    pub randomizer: RandomizerConfig,
}

/// Random source settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RandomizerConfig {
    /// Fixed seed for replayable orderings; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Load `config/<env>.yaml`
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
            path: config_path.clone(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
log_level: debug
log_dir: ./logs
log_file: testlet.log
use_json: false
rotation: daily
randomizer:
  seed: 12345
"#;

    #[test]
    fn test_parse_full() {
        let config = AppConfig::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.rotation, "daily");
        assert!(!config.use_json);
        assert_eq!(config.randomizer.seed, Some(12345));
    }

    #[test]
    fn test_randomizer_section_optional() {
        let yaml = "log_level: info\nlog_dir: ./logs\nlog_file: t.log\nuse_json: true\nrotation: never\n";
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.randomizer, RandomizerConfig::default());
        assert_eq!(config.randomizer.seed, None);
    }

    #[test]
    fn test_parse_error() {
        let err = AppConfig::from_yaml_str("log_level: [unterminated").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_env() {
        let err = AppConfig::load("no_such_env").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("config/no_such_env.yaml"));
    }

    #[test]
    fn test_load_dev() {
        // cargo runs tests from the crate root
        let config = AppConfig::load("dev").unwrap();
        assert_eq!(config.log_file, "testlet.log");
    }
}
