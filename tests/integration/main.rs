//! Integration tests for person attribute lookups.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # With log output
//! RUST_LOG=person_attributes=debug cargo test --test integration -- --nocapture
//! ```

mod common;
mod dao_tests;
mod property_tests;
mod time_tests;
