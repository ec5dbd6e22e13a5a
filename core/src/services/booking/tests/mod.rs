//! Tests for the booking service
