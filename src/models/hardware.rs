use crate::PatternError;
use crate::factories::{AsusManufacturer, Company, MsiManufacturer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hardware manufacturer. Each brand is one product family.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    #[serde(rename = "msi")]
    Msi,
    #[serde(rename = "asus")]
    Asus,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Self::Msi, Self::Asus];

    /// Returns the company that builds this brand's product family.
    pub fn company(&self) -> Box<dyn Company> {
        match self {
            Self::Msi => Box::new(MsiManufacturer),
            Self::Asus => Box::new(AsusManufacturer),
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Msi => write!(f, "MSI"),
            Self::Asus => write!(f, "Asus"),
        }
    }
}

impl FromStr for Brand {
    type Err = PatternError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "msi" => Ok(Self::Msi),
            "asus" => Ok(Self::Asus),
            _ => Err(PatternError::unknown("brand", value)),
        }
    }
}

/// Kind of part a company can assemble.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    #[serde(rename = "gpu")]
    Gpu,
    #[serde(rename = "monitor")]
    Monitor,
}

impl Part {
    pub const ALL: [Part; 2] = [Self::Gpu, Self::Monitor];
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu => write!(f, "gpu"),
            Self::Monitor => write!(f, "monitor"),
        }
    }
}

impl FromStr for Part {
    type Err = PatternError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "gpu" | "graphics" => Ok(Self::Gpu),
            "monitor" | "display" => Ok(Self::Monitor),
            _ => Err(PatternError::unknown("part", value)),
        }
    }
}
