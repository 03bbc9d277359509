use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{debug, error};

use release_notifier::config::{
    self, BASELINE_ENV, DEFAULT_BASE_URL, DEFAULT_REPOSITORY, DEFAULT_STATE_FILE, EXECUTION_ENV,
    FETCH_TIMEOUT_MS, Settings,
};
use release_notifier::logging::{self, LogFormat};
use release_notifier::tracker;
use release_notifier::version::registries::GitHubReleases;

#[derive(Parser)]
#[command(name = "release-notifier")]
#[command(version, about = "Report GitHub releases newer than the last one seen")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Repository to watch, as owner/name
    #[arg(long, env = "RELEASE_NOTIFIER_REPOSITORY", default_value = DEFAULT_REPOSITORY)]
    repository: String,

    /// Base URL of the GitHub API
    #[arg(long, env = "RELEASE_NOTIFIER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// File holding the last seen tag
    #[arg(long, env = "RELEASE_NOTIFIER_STATE_FILE", default_value = DEFAULT_STATE_FILE)]
    state_file: PathBuf,

    /// API token sent as a bearer token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            repository: self.repository.clone(),
            base_url: self.base_url.clone(),
            state_file: self.state_file.clone(),
            baseline_env: BASELINE_ENV.to_string(),
            token: self.token.clone().filter(|t| !t.is_empty()),
            timeout: Duration::from_millis(FETCH_TIMEOUT_MS),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.debug, cli.log_format, cli.log_file.as_deref())?;

    debug!(
        "Running in AWS? {}",
        config::running_in_aws(std::env::var(EXECUTION_ENV).ok())
    );

    let settings = cli.settings();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = match GitHubReleases::new(
        &settings.base_url,
        &settings.repository,
        settings.token.clone(),
        settings.timeout,
    ) {
        Ok(source) => runtime.block_on(tracker::run(
            &source,
            &settings,
            settings.baseline_from_env(),
        )),
        Err(e) => Err(e.into()),
    };

    Ok(exit_code(result))
}

/// A completed run succeeds whether or not a new version was found
fn exit_code<T, E: std::fmt::Display>(result: Result<T, E>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use release_notifier::baseline::Baseline;
    use release_notifier::tracker::{Outcome, Selection};
    use release_notifier::version::error::{RegistryError, TrackerError};
    use rstest::rstest;

    #[rstest]
    #[case(&["release-notifier"], false)]
    #[case(&["release-notifier", "--debug"], true)]
    #[case(&["release-notifier", "-d"], true)]
    fn cli_parses_debug_flag(#[case] args: &[&str], #[case] expected: bool) {
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.debug, expected);
    }

    #[test]
    fn cli_defaults_to_text_logs_and_local_state_file() {
        let cli = Cli::try_parse_from(["release-notifier"]).unwrap();

        assert_eq!(cli.log_format, LogFormat::Text);
        assert_eq!(cli.log_file, None);
        assert_eq!(cli.settings().state_file, PathBuf::from("lastseen.txt"));
        assert_eq!(cli.settings().baseline_env, "LAST_SEEN");
    }

    #[test]
    fn cli_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "release-notifier",
            "--repository",
            "owner/repo",
            "--state-file",
            "/tmp/seen.txt",
            "--log-format",
            "json",
            "--log-file",
            "notifier.log",
        ])
        .unwrap();

        let settings = cli.settings();
        assert_eq!(settings.repository, "owner/repo");
        assert_eq!(settings.state_file, PathBuf::from("/tmp/seen.txt"));
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(cli.log_file, Some(PathBuf::from("notifier.log")));
    }

    #[rstest]
    #[case(&["release-notifier", "--log-format", "yaml"])]
    #[case(&["release-notifier", "--unknown"])]
    fn cli_rejects_invalid_arguments(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn exit_code_is_success_without_new_version() {
        let outcome = Outcome {
            selection: Selection::NoNewVersion {
                baseline: semver::Version::new(0, 0, 0),
            },
            baseline: Baseline::zero(),
        };

        assert_eq!(
            exit_code(Ok::<_, TrackerError>(outcome)),
            ExitCode::SUCCESS
        );
    }

    #[test]
    fn exit_code_is_failure_on_error() {
        let result: Result<Outcome, TrackerError> =
            Err(RegistryError::InvalidResponse("Unexpected status: 500".to_string()).into());

        assert_eq!(exit_code(result), ExitCode::FAILURE);
    }
}
