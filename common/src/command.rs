use std::str::FromStr;

use thiserror::Error;

use crate::{
    endpoints::{PATH_AC_COMMAND, PATH_LIGHT_COMMAND},
    types::{AcMode, FanLevel},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    AcCommand,
    LightCommand,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::AcCommand => PATH_AC_COMMAND,
            Self::LightCommand => PATH_LIGHT_COMMAND,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Ac,
    Light,
}

/// Every control action the panel can send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ModeChange(AcMode),
    TempStep(i32),
    FanSet(FanLevel),
    PowerOff,
    /// Minutes as typed by the user; forwarded verbatim, even when empty.
    TimerSet(String),
    TimerCancel,
    /// Free-form light command (`on`, `night` and `off` on the stock device).
    Light(String),
}

impl Command {
    pub fn domain(&self) -> Domain {
        match self {
            Self::Light(_) => Domain::Light,
            _ => Domain::Ac,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self.domain() {
            Domain::Ac => Endpoint::AcCommand,
            Domain::Light => Endpoint::LightCommand,
        }
    }

    /// AC commands are followed by one state refresh; light commands are not.
    pub fn refreshes_state(&self) -> bool {
        self.domain() == Domain::Ac
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let pair = match self {
            Self::ModeChange(mode) => ("mode", mode.as_str().to_string()),
            Self::TempStep(delta) => ("tempStep", delta.to_string()),
            Self::FanSet(level) => ("fan", level.encode()),
            Self::PowerOff => ("power", "0".to_string()),
            Self::TimerSet(minutes) => ("timerMin", minutes.clone()),
            Self::TimerCancel => ("timerCancel", "1".to_string()),
            Self::Light(cmd) => ("cmd", cmd.clone()),
        };
        vec![pair]
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("missing value for '{0}'")]
    MissingValue(&'static str),
    #[error("invalid {field} value '{value}'")]
    InvalidValue { field: &'static str, value: String },
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parses console input such as `mode heat`, `temp -1`, `fan 3` or `light night`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let required = |field: &'static str| {
            if rest.is_empty() {
                Err(ParseCommandError::MissingValue(field))
            } else {
                Ok(rest)
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "mode" => Ok(Self::ModeChange(required("mode")?.parse()?)),
            "temp" => {
                let value = required("temp")?;
                value
                    .trim_start_matches('+')
                    .parse::<i32>()
                    .map(Self::TempStep)
                    .map_err(|_| ParseCommandError::InvalidValue {
                        field: "temp",
                        value: value.to_string(),
                    })
            }
            "up" => Ok(Self::TempStep(1)),
            "down" => Ok(Self::TempStep(-1)),
            "fan" => Ok(Self::FanSet(required("fan")?.parse()?)),
            "off" => Ok(Self::PowerOff),
            "timer" => Ok(Self::TimerSet(rest.to_string())),
            "cancel" => Ok(Self::TimerCancel),
            "light" => Ok(Self::Light(required("light")?.to_string())),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}
