//! Configuration types for the person attribute adapter.
//!
//! - [`AdapterConfig`]: naming and initialization timing

mod adapter;

pub use adapter::AdapterConfig;
