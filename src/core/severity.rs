//! Severity level definitions
//!
//! The scale follows the BSD syslog convention: a smaller numeric value is a
//! more severe event, so `Emerg < Debug` under the derived ordering.

use super::error::DispatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    Emerg = 0,
    Alert = 1,
    Crit = 2,
    Err = 3,
    Warn = 4,
    Notice = 5,
    #[default]
    Info = 6,
    Debug = 7,
}

impl Severity {
    pub const ALL: [Severity; 8] = [
        Severity::Emerg,
        Severity::Alert,
        Severity::Crit,
        Severity::Err,
        Severity::Warn,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Emerg => "EMERG",
            Severity::Alert => "ALERT",
            Severity::Crit => "CRIT",
            Severity::Err => "ERR",
            Severity::Warn => "WARN",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// True when `self` is at least as severe as `threshold`
    pub fn meets(&self, threshold: Severity) -> bool {
        *self <= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, DispatchError> {
        match s.to_uppercase().as_str() {
            "EMERG" | "EMERGENCY" => Ok(Severity::Emerg),
            "ALERT" => Ok(Severity::Alert),
            "CRIT" | "CRITICAL" => Ok(Severity::Crit),
            "ERR" | "ERROR" => Ok(Severity::Err),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "NOTICE" => Ok(Severity::Notice),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(DispatchError::invalid_argument(format!(
                "unsupported severity level '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = DispatchError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Severity::Emerg),
            1 => Ok(Severity::Alert),
            2 => Ok(Severity::Crit),
            3 => Ok(Severity::Err),
            4 => Ok(Severity::Warn),
            5 => Ok(Severity::Notice),
            6 => Ok(Severity::Info),
            7 => Ok(Severity::Debug),
            other => Err(DispatchError::invalid_argument(format!(
                "unsupported severity level {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_tracks_numeric_scale() {
        assert!(Severity::Emerg < Severity::Debug);
        assert!(Severity::Err < Severity::Warn);
        assert!(Severity::Info.meets(Severity::Info));
        assert!(Severity::Err.meets(Severity::Info));
        assert!(!Severity::Debug.meets(Severity::Info));
    }

    #[test]
    fn test_parse_round_trip() {
        for level in Severity::ALL {
            let parsed: Severity = level.to_str().parse().unwrap();
            assert_eq!(level, parsed);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("Err".parse::<Severity>().unwrap(), Severity::Err);
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert!("verbose".parse::<Severity>().is_err());
        assert!(Severity::try_from(8).is_err());
        assert_eq!(Severity::try_from(3).unwrap(), Severity::Err);
    }
}
