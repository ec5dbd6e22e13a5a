//! Date ranges a booking occupies and the rules used to compare them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rent_shared::config::OverlapRuleSetting;
use rent_shared::dates::to_canonical;

use crate::errors::ValidationError;

/// Boundary rule for deciding whether two periods collide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapRule {
    /// Closed intervals: `s <= E && e >= S`. A stay ending on day X collides
    /// with one starting on day X.
    Inclusive,
    /// Half-open intervals: `s < E && e > S`. Back-to-back stays do not collide.
    Exclusive,
}

impl From<OverlapRuleSetting> for OverlapRule {
    fn from(setting: OverlapRuleSetting) -> Self {
        match setting {
            OverlapRuleSetting::Inclusive => OverlapRule::Inclusive,
            OverlapRuleSetting::Exclusive => OverlapRule::Exclusive,
        }
    }
}

/// A validated `[start, end]` pair with `start < end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BookingPeriod {
    /// Create a period, rejecting empty or inverted ranges
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::InvalidDateRange {
                start: to_canonical(&start),
                end: to_canonical(&end),
            });
        }
        Ok(Self { start, end })
    }

    /// Whether `self` and `other` collide under `rule`
    pub fn overlaps(&self, other: &BookingPeriod, rule: OverlapRule) -> bool {
        match rule {
            OverlapRule::Inclusive => self.start <= other.end && self.end >= other.start,
            OverlapRule::Exclusive => self.start < other.end && self.end > other.start,
        }
    }

    /// Number of whole nights covered by the period
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
