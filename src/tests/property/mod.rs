//! Property-based tests for Five Factor Model profiles
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `likert_props`: Tests for the Likert conversion
//!   - Score is always within 1..=5
//!   - Mapping is monotonic non-decreasing
//!   - Out-of-range input is always rejected
//!
//! - `profile_props`: Tests for the profile value type
//!   - Valid values round-trip exactly through getters
//!   - Any out-of-range value rejects construction
//!   - Rejected setters leave the stored value unchanged
//!   - Compact text parses back to an equal profile
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod likert_props;
mod profile_props;
