use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Availability state of a pet in the store.
///
/// The wire form is the lowercase string (`available`, `pending`, `sold`),
/// both in JSON bodies and in query parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    /// Ready to be taken home.
    Available,
    /// Reserved, awaiting completion of a sale.
    Pending,
    /// Sold and no longer offered.
    Sold,
}

impl PetStatus {
    /// Every status, in declaration order.
    pub const ALL: [PetStatus; 3] = [Self::Available, Self::Pending, Self::Sold];

    /// Parse a status from its wire form. Matching is exact: unknown or
    /// differently-cased strings are rejected.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        match s {
            "available" => Ok(Self::Available),
            "pending" => Ok(Self::Pending),
            "sold" => Ok(Self::Sold),
            other => Err(TypeError::InvalidStatus(other.to_string())),
        }
    }

    /// The wire form of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_statuses() {
        assert_eq!(PetStatus::parse("available").unwrap(), PetStatus::Available);
        assert_eq!(PetStatus::parse("pending").unwrap(), PetStatus::Pending);
        assert_eq!(PetStatus::parse("sold").unwrap(), PetStatus::Sold);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = PetStatus::parse("adopted").unwrap_err();
        assert_eq!(err, TypeError::InvalidStatus("adopted".to_string()));
        assert_eq!(err.to_string(), "invalid pet status: adopted");
    }

    #[test]
    fn parse_is_exact_match() {
        assert!(PetStatus::parse("Available").is_err());
        assert!(PetStatus::parse(" sold").is_err());
        assert!(PetStatus::parse("").is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for status in PetStatus::ALL {
            assert_eq!(PetStatus::parse(&status.to_string()).unwrap(), status);
        }
    }

    #[test]
    fn serde_uses_lowercase_wire_form() {
        let encoded = serde_json::to_string(&PetStatus::Available).unwrap();
        assert_eq!(encoded, "\"available\"");

        let decoded: PetStatus = serde_json::from_str("\"sold\"").unwrap();
        assert_eq!(decoded, PetStatus::Sold);
    }

    #[test]
    fn serde_rejects_unknown_status() {
        let result: Result<PetStatus, _> = serde_json::from_str("\"adopted\"");
        assert!(result.is_err());
    }
}
