//! Shared test utilities for `spanwood-core`.

use proptest::test_runner::Config as ProptestConfig;
use spanwood_test_support::ci::property_test_profile::ProptestRunProfile;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// Keeps property suites aligned on the same `PROGTEST_CASES` and
/// `SPANWOOD_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestRunProfile::load(default_cases, false).proptest_config()
}
