//! Tests for the payment service

mod mocks;
