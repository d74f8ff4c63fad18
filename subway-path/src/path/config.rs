//! Path search configuration.

use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the [`Traversal`] policy.
pub const TRAVERSAL_ENV: &str = "SUBWAY_TRAVERSAL";

/// Error returned for an unrecognised configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {key}: expected one of {expected}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    expected: &'static str,
}

/// Which directions a section may be travelled in.
///
/// Parsed case-insensitively from `bidirectional` (or `both`) and
/// `up-to-down` (or `directed`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Every section can be ridden both ways at the same distance.
    #[default]
    Bidirectional,

    /// Sections can only be ridden from their up station to their down station.
    UpToDown,
}

impl Traversal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Traversal::Bidirectional => "bidirectional",
            Traversal::UpToDown => "up-to-down",
        }
    }
}

impl FromStr for Traversal {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bidirectional" | "both" => Ok(Traversal::Bidirectional),
            "up-to-down" | "directed" => Ok(Traversal::UpToDown),
            _ => Err(ConfigError {
                key: TRAVERSAL_ENV,
                value: s.to_string(),
                expected: "bidirectional, up-to-down",
            }),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration parameters for path search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathConfig {
    /// Direction policy used when turning sections into graph edges.
    pub traversal: Traversal,
}

impl PathConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(traversal: Traversal) -> Self {
        Self { traversal }
    }

    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(TRAVERSAL_ENV) {
            config.traversal = value.parse()?;
        }
        Ok(config)
    }
}
