//! Crate-level test suites.

mod property;
