// Law-run configuration
// Values come from defaults, an optional TOML document, and then environment
// overrides, in that order.

use proptest::test_runner::Config as ProptestConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use dyad_error::{DyadError, Result};

/// Environment variable overriding [`LawConfig::cases`]
pub const CASES_ENV: &str = "DYAD_LAW_CASES";

/// Environment variable overriding [`LawConfig::max_shrink_iters`]
pub const MAX_SHRINK_ITERS_ENV: &str = "DYAD_LAW_MAX_SHRINK_ITERS";

/// How thoroughly the law suites exercise each law
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LawConfig {
    /// Number of generated cases per law
    pub cases: u32,

    /// Upper bound on shrinking steps after a failure
    pub max_shrink_iters: u32,
}

impl Default for LawConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1024,
        }
    }
}

impl LawConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| DyadError::Config(format!("malformed law configuration: {}", e)))?;
        config.validate()?;
        debug!(cases = config.cases, max_shrink_iters = config.max_shrink_iters, "loaded law configuration");
        Ok(config)
    }

    /// Defaults with the process environment applied on top
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `DYAD_LAW_*` variables from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides resolved through `lookup`, keyed by variable name
    pub fn with_overrides<L>(mut self, lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(cases) = parse_override(&lookup, CASES_ENV)? {
            self.cases = cases;
        }
        if let Some(iters) = parse_override(&lookup, MAX_SHRINK_ITERS_ENV)? {
            self.max_shrink_iters = iters;
        }
        self.validate()?;
        debug!(cases = self.cases, max_shrink_iters = self.max_shrink_iters, "resolved law configuration");
        Ok(self)
    }

    /// Reject configurations that would check nothing
    pub fn validate(&self) -> Result<()> {
        if self.cases == 0 {
            return Err(DyadError::Config("cases must be at least 1".to_string()));
        }
        Ok(())
    }

    /// The equivalent proptest runner configuration
    pub fn proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

fn parse_override<L>(lookup: &L, name: &str) -> Result<Option<u32>>
where
    L: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|e| DyadError::Config(format!("{} must be an unsigned integer, got {:?}: {}", name, raw, e))),
    }
}
