//! Regulatory framework identification.
//!
//! Three frameworks are covered: LCCP (licence conditions and codes of
//! practice), ISO 27001 (information security controls), and RTS (remote
//! technical standards). Everything that dispatches on a framework goes
//! through this enum rather than raw strings.

use crate::error::{RegulatoryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Lccp,
    Iso27001,
    Rts,
}

impl Framework {
    /// All frameworks in their fixed presentation order.
    pub const ALL: [Framework; 3] = [Framework::Lccp, Framework::Iso27001, Framework::Rts];

    /// Subdirectory of the document tree holding this framework's files.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Framework::Lccp => "lccp",
            Framework::Iso27001 => "iso-27001",
            Framework::Rts => "rts",
        }
    }

    /// Display tag used in search results, context lines, and URL keys.
    pub fn tag(&self) -> &'static str {
        match self {
            Framework::Lccp => "LCCP",
            Framework::Iso27001 => "ISO27001",
            Framework::Rts => "RTS",
        }
    }

    /// Human-readable name for listings.
    pub fn full_name(&self) -> &'static str {
        match self {
            Framework::Lccp => "Licence Conditions and Codes of Practice",
            Framework::Iso27001 => "ISO 27001 Information Security Controls",
            Framework::Rts => "Remote Gambling and Software Technical Standards",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Framework {
    type Err = RegulatoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lccp" => Ok(Framework::Lccp),
            "iso27001" | "iso-27001" | "iso 27001" => Ok(Framework::Iso27001),
            "rts" => Ok(Framework::Rts),
            other => Err(RegulatoryError::InvalidParams {
                message: format!("unknown framework '{}' (expected lccp, iso27001, or rts)", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_spellings() {
        assert_eq!("lccp".parse::<Framework>().unwrap(), Framework::Lccp);
        assert_eq!("LCCP".parse::<Framework>().unwrap(), Framework::Lccp);
        assert_eq!("iso27001".parse::<Framework>().unwrap(), Framework::Iso27001);
        assert_eq!("ISO-27001".parse::<Framework>().unwrap(), Framework::Iso27001);
        assert_eq!("iso 27001".parse::<Framework>().unwrap(), Framework::Iso27001);
        assert_eq!(" rts ".parse::<Framework>().unwrap(), Framework::Rts);
    }

    #[test]
    fn rejects_unknown_spellings() {
        assert!("gdpr".parse::<Framework>().is_err());
        assert!("".parse::<Framework>().is_err());
    }

    #[test]
    fn tags_and_dirs() {
        assert_eq!(Framework::Lccp.tag(), "LCCP");
        assert_eq!(Framework::Iso27001.dir_name(), "iso-27001");
        assert_eq!(Framework::Rts.to_string(), "RTS");
    }

    #[test]
    fn serde_wire_form() {
        assert_eq!(
            serde_json::to_string(&Framework::Iso27001).unwrap(),
            "\"iso27001\""
        );
        let fw: Framework = serde_json::from_str("\"rts\"").unwrap();
        assert_eq!(fw, Framework::Rts);
    }
}
