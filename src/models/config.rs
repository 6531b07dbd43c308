use crate::PatternError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which demos a showcase run replays, in order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseConfig {
    #[serde(default = "ShowcaseConfig::default_demos")]
    pub demos: Vec<Demo>,
}

impl ShowcaseConfig {
    pub fn new(demos: Vec<Demo>) -> Result<Self, PatternError> {
        let config = Self { demos };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(input: &str) -> Result<Self, PatternError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PatternError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), PatternError> {
        if self.demos.is_empty() {
            return Err(PatternError::invalid_config(
                "at least one demo must be listed",
            ));
        }
        Ok(())
    }

    fn default_demos() -> Vec<Demo> {
        Demo::ALL.to_vec()
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            demos: Self::default_demos(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    #[serde(rename = "factory-method")]
    FactoryMethod,
    #[serde(rename = "driver")]
    Driver,
    #[serde(rename = "abstract-factory")]
    AbstractFactory,
}

impl Demo {
    pub const ALL: [Demo; 3] = [Self::FactoryMethod, Self::Driver, Self::AbstractFactory];
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FactoryMethod => write!(f, "factory-method"),
            Self::Driver => write!(f, "driver"),
            Self::AbstractFactory => write!(f, "abstract-factory"),
        }
    }
}

impl FromStr for Demo {
    type Err = PatternError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().replace('_', "-").as_str() {
            "factory-method" => Ok(Self::FactoryMethod),
            "driver" => Ok(Self::Driver),
            "abstract-factory" => Ok(Self::AbstractFactory),
            _ => Err(PatternError::unknown("demo", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_runs_every_demo() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.demos, Demo::ALL.to_vec());
    }

    #[test]
    fn test_missing_demos_key_uses_default() {
        let config = ShowcaseConfig::from_toml_str("").unwrap();
        assert_eq!(config, ShowcaseConfig::default());
    }

    #[test]
    fn test_parse_ordered_demos() {
        let config =
            ShowcaseConfig::from_toml_str(r#"demos = ["abstract-factory", "driver"]"#).unwrap();
        assert_eq!(config.demos, vec![Demo::AbstractFactory, Demo::Driver]);
    }

    #[test]
    fn test_empty_demos_rejected() {
        let result = ShowcaseConfig::from_toml_str("demos = []");
        assert!(matches!(result, Err(PatternError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_demo_is_deserialization_error() {
        let result = ShowcaseConfig::from_toml_str(r#"demos = ["singleton"]"#);
        assert!(matches!(result, Err(PatternError::DeserializationError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"demos = ["factory-method"]"#).unwrap();

        let config = ShowcaseConfig::load(file.path()).unwrap();
        assert_eq!(config.demos, vec![Demo::FactoryMethod]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ShowcaseConfig::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(PatternError::ConfigRead { .. })));
    }

    #[test]
    fn test_demo_from_str() {
        assert_eq!("Abstract_Factory".parse::<Demo>().unwrap(), Demo::AbstractFactory);
        assert!("builder".parse::<Demo>().is_err());
    }
}
