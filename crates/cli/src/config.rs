//! Environment configuration for the command line tools

use std::path::{Path, PathBuf};

/// Environment variable naming a default roster for `script`
pub const ROSTER_ENV: &str = "CLOCKTOWER_ROSTER";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "clocktower=info,clocktower_cli=info,clocktower_domain=info";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Roster used to resolve scripts when none is given on the command line
    pub default_roster: Option<PathBuf>,
}

impl CliConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_roster = lookup(ROSTER_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        Self { default_roster }
    }
}

/// Load `.env.local` then `.env` from `dir`, ignoring files that don't exist
///
/// Variables already set in the environment are not overridden, so the local
/// file takes precedence over the shared one.
pub fn load_dotenv_from(dir: &Path) {
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                tracing::warn!(path = %path.display(), error = %e, "failed to load env file");
            }
        }
    }
}
