use crate::PatternError;
use crate::factories::{
    AutomobileFactory, DefenseAutomobileFactory, DefenseDriver, Driver, NormalAutomobileFactory,
    NormalDriver,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tag for the automobile variants a factory can produce.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutomobileKind {
    #[serde(rename = "tank")]
    Tank,
    #[serde(rename = "car")]
    Car,
}

impl AutomobileKind {
    pub const ALL: [AutomobileKind; 2] = [Self::Tank, Self::Car];

    /// Returns the factory whose products are of this kind.
    pub fn factory(&self) -> Box<dyn AutomobileFactory> {
        match self {
            Self::Tank => Box::new(DefenseAutomobileFactory),
            Self::Car => Box::new(NormalAutomobileFactory),
        }
    }

    /// Returns the driver that hands out vehicles of this kind.
    pub fn driver(&self) -> Box<dyn Driver> {
        match self {
            Self::Tank => Box::new(DefenseDriver),
            Self::Car => Box::new(NormalDriver),
        }
    }
}

impl fmt::Display for AutomobileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tank => write!(f, "tank"),
            Self::Car => write!(f, "car"),
        }
    }
}

impl FromStr for AutomobileKind {
    type Err = PatternError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "tank" | "defense" | "army" => Ok(Self::Tank),
            "car" | "normal" | "civilian" => Ok(Self::Car),
            _ => Err(PatternError::unknown("automobile kind", value)),
        }
    }
}
