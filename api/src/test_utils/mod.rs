//! Test utilities
//!
//! Manual in-memory implementations of the store ports and test fixtures.
//!
//! Why manual mocks instead of mockall?
//! - The store ports are small and uniform, so a real in-memory store is simpler
//!   than per-test expectations
//! - Insertion-order scans make duplicate-key behavior easy to assert
//!
//! Services and the router take an `EntityStore` handle, so the same in-memory
//! store backs both service tests and HTTP tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
