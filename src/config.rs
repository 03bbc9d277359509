use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Defaults
// =============================================================================

/// Default base URL for the GitHub API
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Repository watched when none is given
pub const DEFAULT_REPOSITORY: &str = "HandBrake/HandBrake";

/// State file holding the last seen tag, relative to the working directory
pub const DEFAULT_STATE_FILE: &str = "lastseen.txt";

/// Environment variable that overrides the persisted baseline
pub const BASELINE_ENV: &str = "LAST_SEEN";

/// Environment variable set by the AWS Lambda runtime
pub const EXECUTION_ENV: &str = "AWS_EXECUTION_ENV";

/// Timeout for the release listing request in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

pub const USER_AGENT: &str = "release-notifier";

/// Runtime settings for a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Repository in "owner/name" form
    pub repository: String,
    pub base_url: String,
    pub state_file: PathBuf,
    /// Name of the environment variable carrying the baseline
    pub baseline_env: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repository: DEFAULT_REPOSITORY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            baseline_env: BASELINE_ENV.to_string(),
            token: None,
            timeout: Duration::from_millis(FETCH_TIMEOUT_MS),
        }
    }
}

impl Settings {
    /// Reads the baseline variable, treating an empty value as unset
    pub fn baseline_from_env(&self) -> Option<String> {
        non_empty(std::env::var(&self.baseline_env).ok())
    }
}

/// Whether the process runs inside AWS, judged from the value of `AWS_EXECUTION_ENV`
pub fn running_in_aws(value: Option<String>) -> bool {
    non_empty(value).is_some()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
