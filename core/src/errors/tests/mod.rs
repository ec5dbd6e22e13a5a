//! Unit tests for domain error types
