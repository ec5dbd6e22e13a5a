//! Configuration for the booking service

use rent_shared::config::BookingConfig;

use crate::domain::value_objects::OverlapRule;

/// Configuration for the booking service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingServiceConfig {
    /// Rule used by `check_overlap`
    pub availability_rule: OverlapRule,
    /// Rule used by `create_booking`
    pub creation_rule: OverlapRule,
    /// Hold a per-listing lock across the overlap read and the insert
    pub serialize_per_listing: bool,
}

impl Default for BookingServiceConfig {
    fn default() -> Self {
        Self {
            availability_rule: OverlapRule::Inclusive,
            creation_rule: OverlapRule::Exclusive,
            serialize_per_listing: true,
        }
    }
}

impl From<&BookingConfig> for BookingServiceConfig {
    fn from(config: &BookingConfig) -> Self {
        Self {
            availability_rule: config.availability_rule.into(),
            creation_rule: config.creation_rule.into(),
            serialize_per_listing: config.serialize_per_listing,
        }
    }
}

impl BookingServiceConfig {
    /// Use the same rule for both checks
    pub fn with_uniform_rule(mut self, rule: OverlapRule) -> Self {
        self.availability_rule = rule;
        self.creation_rule = rule;
        self
    }

    pub fn with_serialization(mut self, enabled: bool) -> Self {
        self.serialize_per_listing = enabled;
        self
    }
}
