//! Pricing tier for tool listings.

use serde::{Deserialize, Serialize};

/// A tool's pricing model.
///
/// Every listed tool falls into exactly one of three tiers. The lowercase
/// form (`free`, `freemium`, `paid`) is the canonical identifier used in
/// query strings and serialized data; [`Pricing::label`] gives the
/// capitalized display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pricing {
    /// No payment required for any functionality.
    Free,
    /// A usable free tier with paid upgrades.
    Freemium,
    /// Payment required.
    Paid,
}

impl Pricing {
    /// The canonical lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Freemium => "freemium",
            Self::Paid => "paid",
        }
    }

    /// The capitalized display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Freemium => "Freemium",
            Self::Paid => "Paid",
        }
    }
}

impl std::fmt::Display for Pricing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Pricing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "freemium" => Ok(Self::Freemium),
            "paid" => Ok(Self::Paid),
            _ => Err(format!("invalid pricing tier: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("free".parse::<Pricing>().unwrap(), Pricing::Free);
        assert_eq!("freemium".parse::<Pricing>().unwrap(), Pricing::Freemium);
        assert_eq!("paid".parse::<Pricing>().unwrap(), Pricing::Paid);
        assert!("subscription".parse::<Pricing>().is_err());
        assert!("Free".parse::<Pricing>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for tier in [Pricing::Free, Pricing::Freemium, Pricing::Paid] {
            assert_eq!(tier.to_string().parse::<Pricing>().unwrap(), tier);
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(Pricing::Freemium.label(), "Freemium");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Pricing::Paid).unwrap();
        assert_eq!(json, "\"paid\"");
        let parsed: Pricing = serde_json::from_str("\"freemium\"").unwrap();
        assert_eq!(parsed, Pricing::Freemium);
    }
}
