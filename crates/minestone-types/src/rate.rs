//! Rate mode selection.

use serde::{Deserialize, Serialize};

/// How the time-per-block rate used for projection is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RateMode {
    /// Trailing empirical average over the most recent sample window.
    #[default]
    Empirical,
    /// Fixed nominal rate (the chain's target block spacing).
    Nominal,
}

impl RateMode {
    /// Returns the mode as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empirical => "empirical",
            Self::Nominal => "nominal",
        }
    }

    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Empirical => Self::Nominal,
            Self::Nominal => Self::Empirical,
        }
    }
}

impl std::fmt::Display for RateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(RateMode::Empirical.as_str(), "empirical");
        assert_eq!(RateMode::Nominal.as_str(), "nominal");
    }

    #[test]
    fn test_toggled() {
        assert_eq!(RateMode::Empirical.toggled(), RateMode::Nominal);
        assert_eq!(RateMode::Nominal.toggled(), RateMode::Empirical);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&RateMode::Nominal).unwrap(),
            "\"nominal\""
        );
        let mode: RateMode = serde_json::from_str("\"empirical\"").unwrap();
        assert_eq!(mode, RateMode::Empirical);
    }
}
