//! Booking engine configuration module

use serde::{Deserialize, Serialize};

/// Boundary rule used when comparing two date ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapRuleSetting {
    /// Ranges touching on a shared boundary overlap
    Inclusive,
    /// Ranges touching on a shared boundary do not overlap
    Exclusive,
}

impl std::str::FromStr for OverlapRuleSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inclusive" | "closed" => Ok(OverlapRuleSetting::Inclusive),
            "exclusive" | "open" | "half-open" => Ok(OverlapRuleSetting::Exclusive),
            _ => Err(format!("Invalid overlap rule: {}", s)),
        }
    }
}

/// Booking engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingConfig {
    /// Rule used by the availability check
    #[serde(default = "default_availability_rule")]
    pub availability_rule: OverlapRuleSetting,

    /// Rule used when admitting a new booking
    #[serde(default = "default_creation_rule")]
    pub creation_rule: OverlapRuleSetting,

    /// Serialize check-and-insert per listing
    #[serde(default = "default_serialize_per_listing")]
    pub serialize_per_listing: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            availability_rule: default_availability_rule(),
            creation_rule: default_creation_rule(),
            serialize_per_listing: default_serialize_per_listing(),
        }
    }
}

impl BookingConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_env_or(Self::default())
    }

    /// Override `base` with any booking variables present in the environment
    pub fn from_env_or(base: Self) -> Self {
        let availability_rule = std::env::var("BOOKING_AVAILABILITY_RULE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(base.availability_rule);
        let creation_rule = std::env::var("BOOKING_CREATION_RULE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(base.creation_rule);
        let serialize_per_listing = std::env::var("BOOKING_SERIALIZE_PER_LISTING")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(base.serialize_per_listing);

        Self {
            availability_rule,
            creation_rule,
            serialize_per_listing,
        }
    }

    /// Apply one rule to both the availability check and creation
    pub fn with_uniform_rule(mut self, rule: OverlapRuleSetting) -> Self {
        self.availability_rule = rule;
        self.creation_rule = rule;
        self
    }

    /// Enable or disable per-listing serialization
    pub fn with_serialization(mut self, enabled: bool) -> Self {
        self.serialize_per_listing = enabled;
        self
    }
}

fn default_availability_rule() -> OverlapRuleSetting {
    OverlapRuleSetting::Inclusive
}

fn default_creation_rule() -> OverlapRuleSetting {
    OverlapRuleSetting::Exclusive
}

fn default_serialize_per_listing() -> bool {
    true
}
