//! Comparison of fetched releases against the baseline

use std::cmp::Ordering;
use std::fmt;

use semver::Version;
use tracing::{debug, info};

use crate::baseline::{Baseline, load_baseline, persist};
use crate::config::Settings;
use crate::version::error::TrackerError;
use crate::version::registry::ReleaseSource;
use crate::version::semver::parse_tag;
use crate::version::types::ReleaseRecord;

/// Label attached to a record in the debug log
///
/// The kind does not affect eligibility: prereleases and drafts advance the
/// baseline exactly like stable releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseKind {
    Prerelease,
    Draft,
    Release,
}

impl ReleaseKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReleaseKind::Prerelease => "prerelease",
            ReleaseKind::Draft => "draft",
            ReleaseKind::Release => "not-prerelease",
        }
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Prerelease wins over draft when both flags are set
pub fn classify(record: &ReleaseRecord) -> ReleaseKind {
    if record.is_prerelease {
        ReleaseKind::Prerelease
    } else if record.is_draft {
        ReleaseKind::Draft
    } else {
        ReleaseKind::Release
    }
}

/// Result of comparing one batch of records to the baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The highest record above the baseline
    NewVersion { tag: String, version: Version },
    /// Nothing exceeded the baseline, which is carried unchanged
    NoNewVersion { baseline: Version },
}

/// Walk `records` from highest to lowest version and pick the first one above `baseline`.
///
/// Every tag is parsed before the walk starts, so a single malformed tag fails
/// the whole batch. Versions are ordered by semver precedence, so build
/// metadata is ignored and versions differing only in it keep their listing
/// order.
pub fn select_newest(
    records: &[ReleaseRecord],
    baseline: &Version,
) -> Result<Selection, TrackerError> {
    let mut parsed = records
        .iter()
        .map(|record| parse_tag(&record.tag).map(|version| (version, record)))
        .collect::<Result<Vec<_>, _>>()?;
    parsed.sort_by(|(a, _), (b, _)| b.cmp_precedence(a));

    let mut current = baseline.clone();
    let mut newest = None;

    for (version, record) in parsed {
        debug!("{} ({})", record.tag, classify(record));

        if version.cmp_precedence(&current) == Ordering::Greater {
            info!("New version found: {}", record.tag);
            current = version.clone();
            newest = Some((record.tag.clone(), version));
        }
    }

    Ok(match newest {
        Some((tag, version)) => Selection::NewVersion { tag, version },
        None => {
            info!("No new version (last seen {})", baseline);
            Selection::NoNewVersion {
                baseline: baseline.clone(),
            }
        }
    })
}

/// Outcome of a complete run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub selection: Selection,
    /// Baseline after the run; equal to the loaded one unless it advanced
    pub baseline: Baseline,
}

impl Outcome {
    pub fn advanced(&self) -> bool {
        matches!(self.selection, Selection::NewVersion { .. })
    }
}

/// Load the baseline, fetch releases, select the newest and persist it if it advanced.
///
/// Nothing is persisted when fetching or parsing fails.
pub async fn run(
    source: &dyn ReleaseSource,
    settings: &Settings,
    env_value: Option<String>,
) -> Result<Outcome, TrackerError> {
    let baseline = load_baseline(env_value, &settings.state_file)?;
    info!(
        "Checking {} for releases newer than {} (from {})",
        settings.repository, baseline.version, baseline.origin
    );

    let records = source.fetch_releases().await?;
    let selection = select_newest(&records, &baseline.version)?;

    let baseline = match &selection {
        Selection::NewVersion { tag, version } => {
            let advanced = baseline.advance(tag, version.clone());
            persist(&advanced, settings)?;
            advanced
        }
        Selection::NoNewVersion { .. } => baseline,
    };

    Ok(Outcome {
        selection,
        baseline,
    })
}
