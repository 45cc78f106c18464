//! Integration test suite for the ejs script checker
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use ejs_cli;
    pub use parser;
}
