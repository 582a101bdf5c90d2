//! CI-facing helpers shared by the spanwood property suites.

pub mod property_test_profile;
