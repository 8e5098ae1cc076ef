use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::command::ParseCommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcMode {
    Heat,
    // The device only knows two modes; anything that is not heat is shown as cool.
    #[serde(other)]
    Cool,
}

impl AcMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heat => "heat",
            Self::Cool => "cool",
        }
    }
}

impl FromStr for AcMode {
    type Err = ParseCommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "heat" => Ok(Self::Heat),
            "cool" => Ok(Self::Cool),
            _ => Err(ParseCommandError::InvalidValue {
                field: "mode",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanLevel {
    Auto,
    Quiet,
    Level(u8),
}

impl FanLevel {
    pub const MAX_LEVEL: u8 = 5;

    pub fn level(level: u8) -> Option<Self> {
        (1..=Self::MAX_LEVEL)
            .contains(&level)
            .then_some(Self::Level(level))
    }

    pub fn encode(self) -> String {
        match self {
            Self::Auto => "auto".to_string(),
            Self::Quiet => "quiet".to_string(),
            Self::Level(level) => level.to_string(),
        }
    }
}

impl FromStr for FanLevel {
    type Err = ParseCommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCommandError::InvalidValue {
            field: "fan",
            value: value.to_string(),
        };

        match value.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "quiet" => Ok(Self::Quiet),
            other => other
                .parse::<u8>()
                .ok()
                .and_then(Self::level)
                .ok_or_else(invalid),
        }
    }
}

/// A value the device reports either as a JSON number or as preformatted text.
/// Booleans and `null` are tolerated so one odd field never sinks a poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Number(serde_json::Number),
    Text(String),
    Flag(bool),
    Absent,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral floats drop their fraction: `23.0` shows as `23`.
            Self::Number(number) if number.is_f64() => match number.as_f64() {
                Some(value) => write!(f, "{value}"),
                None => write!(f, "{number}"),
            },
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Absent => Ok(()),
        }
    }
}

/// Snapshot returned by the AC status endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcStatus {
    pub power: bool,
    pub mode: AcMode,
    pub temp: Reading,
    pub fan: String,
    pub timer_left: String,
}
