//! Property-test run profile parsing for CI and local overrides.
//!
//! The spanning-forest suites read their case count, fork mode and shrink
//! budget from the environment so CI can run deeper sweeps than a local
//! `cargo test`.

use std::env;

use proptest::test_runner::Config as ProptestConfig;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const SPANWOOD_PBT_FORK_ENV_KEY: &str = "SPANWOOD_PBT_FORK";
/// Environment variable capping shrink iterations after a failure.
pub const SPANWOOD_PBT_SHRINK_ENV_KEY: &str = "SPANWOOD_PBT_SHRINK";

const DEFAULT_SHRINK_ITERS: u32 = 1_024;

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
    max_shrink_iters: u32,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanwood_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_env_or_default(PROGTEST_CASES_ENV_KEY, default_cases, parse_positive),
            fork: read_env_or_default(SPANWOOD_PBT_FORK_ENV_KEY, default_fork, parse_bool),
            max_shrink_iters: read_env_or_default(
                SPANWOOD_PBT_SHRINK_ENV_KEY,
                DEFAULT_SHRINK_ITERS,
                parse_positive,
            ),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }

    /// Upper bound on shrink iterations once a case fails.
    #[must_use]
    pub fn max_shrink_iters(&self) -> u32 {
        self.max_shrink_iters
    }

    /// Builds the proptest runner configuration for this profile.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanwood_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let config = ProptestRunProfile::load(32, false).proptest_config();
    /// assert!(config.cases > 0);
    /// ```
    #[must_use]
    pub fn proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            fork: self.fork,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

fn read_env_or_default<T, F>(key: &'static str, default: T, parser: F) -> T
where
    T: Copy,
    F: Fn(&str) -> Result<T, String>,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_positive(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("value must be > 0".to_owned()),
        Ok(parsed) => Ok(parsed),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
