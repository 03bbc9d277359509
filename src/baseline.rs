//! Loading and persisting the last seen version
//!
//! The baseline is resolved once per run with strict precedence: the
//! environment variable, then the state file, then `0.0.0`. When a run
//! advances it, the new tag is written back to the medium it came from.
//!
//! A baseline that came from the environment is only updated inside the
//! current process. It survives to the next run only if the caller exports
//! the variable again.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use semver::Version;
use tracing::{debug, info};

use crate::config::Settings;
use crate::version::error::TrackerError;
use crate::version::semver::{parse_tag, zero_version};

/// Where the baseline was loaded from, and therefore where it is written back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Environment,
    PersistedFile,
    Default,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Environment => "environment",
            Origin::PersistedFile => "persisted-file",
            Origin::Default => "default",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The most recently acknowledged version plus its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baseline {
    pub version: Version,
    /// Tag string as it was stored or released
    pub tag: String,
    pub origin: Origin,
}

impl Baseline {
    pub fn zero() -> Self {
        Self {
            version: zero_version(),
            tag: zero_version().to_string(),
            origin: Origin::Default,
        }
    }

    /// Returns the baseline moved to `tag`, keeping the original origin
    pub fn advance(&self, tag: &str, version: Version) -> Self {
        Self {
            version,
            tag: tag.to_string(),
            origin: self.origin,
        }
    }
}

/// Resolve the starting baseline.
///
/// `env_value` is the raw baseline variable (empty counts as unset). A
/// malformed value in either source is an error rather than a fallback.
pub fn load_baseline(
    env_value: Option<String>,
    state_file: &Path,
) -> Result<Baseline, TrackerError> {
    if let Some(raw) = env_value.filter(|v| !v.is_empty()) {
        let version = parse_tag(&raw)?;
        debug!("Baseline {} loaded from environment", version);
        return Ok(Baseline {
            version,
            tag: raw.trim().to_string(),
            origin: Origin::Environment,
        });
    }

    match std::fs::read_to_string(state_file) {
        Ok(contents) => {
            let tag = contents.trim().to_string();
            let version = parse_tag(&tag)?;
            debug!("Baseline {} loaded from {:?}", version, state_file);
            Ok(Baseline {
                version,
                tag,
                origin: Origin::PersistedFile,
            })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No last seen version set, will need to write one");
            Ok(Baseline::zero())
        }
        Err(e) => Err(TrackerError::io(state_file, e)),
    }
}

/// Write an advanced baseline back to the medium matching its origin.
///
/// File and default origins replace the state file contents with the tag.
/// The environment origin sets the variable for this process only.
pub fn persist(baseline: &Baseline, settings: &Settings) -> Result<(), TrackerError> {
    match baseline.origin {
        Origin::Default | Origin::PersistedFile => {
            std::fs::write(&settings.state_file, &baseline.tag)
                .map_err(|e| TrackerError::io(&settings.state_file, e))?;
            info!("Wrote {} to {:?}", baseline.tag, settings.state_file);
        }
        Origin::Environment => {
            // SAFETY: the run is single-threaded and nothing else reads the
            // environment while the baseline is written.
            unsafe { std::env::set_var(&settings.baseline_env, &baseline.tag) };
            info!("Set {}={} for this process", settings.baseline_env, baseline.tag);
        }
    }
    Ok(())
}
