//! Side enum distinguishing pros from cons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Which column a statement belongs to.
///
/// Drives which lexicons apply and how a weight is labeled: pros read as
/// impact, cons as risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Pros,
    Cons,
}

impl Side {
    /// Returns the wire name of this side.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Pros => "pros",
            Side::Cons => "cons",
        }
    }

    /// Returns true for the pros side.
    pub fn is_pros(&self) -> bool {
        matches!(self, Side::Pros)
    }
}

impl FromStr for Side {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pros" | "pro" => Ok(Side::Pros),
            "cons" | "con" => Ok(Side::Cons),
            "" => Err(ValidationError::empty_field("side")),
            other => Err(ValidationError::invalid_format(
                "side",
                format!("expected 'pros' or 'cons', got '{}'", other),
            )),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_parses_wire_names() {
        assert_eq!("pros".parse::<Side>().unwrap(), Side::Pros);
        assert_eq!(" Cons ".parse::<Side>().unwrap(), Side::Cons);
        assert_eq!("con".parse::<Side>().unwrap(), Side::Cons);
    }

    #[test]
    fn side_parse_rejects_unknown() {
        assert!(matches!(
            "maybe".parse::<Side>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "  ".parse::<Side>(),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn side_displays_wire_name() {
        assert_eq!(format!("{}", Side::Pros), "pros");
        assert_eq!(format!("{}", Side::Cons), "cons");
    }

    #[test]
    fn side_serializes_to_snake_case_json() {
        assert_eq!(serde_json::to_string(&Side::Pros).unwrap(), "\"pros\"");
        let side: Side = serde_json::from_str("\"cons\"").unwrap();
        assert_eq!(side, Side::Cons);
    }
}
