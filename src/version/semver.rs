use semver::Version;

use crate::version::error::TrackerError;

/// Parse a release tag or stored baseline into a semver::Version.
///
/// Surrounding whitespace and a single leading `v`/`V` are ignored; the
/// remainder must be a complete `MAJOR.MINOR.PATCH` version, optionally with
/// pre-release and build metadata.
///
/// Only the parsed version drops the prefix: a tag persisted as the new
/// baseline is written exactly as released, e.g. `v1.2.3`.
///
/// Examples:
/// - "1.2.3" -> Version(1, 2, 3)
/// - "v1.2.3\n" -> Version(1, 2, 3)
/// - "1.2" -> error
pub fn parse_tag(tag: &str) -> Result<Version, TrackerError> {
    let trimmed = tag.trim();
    let bare = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    Version::parse(bare).map_err(|source| TrackerError::Parse {
        input: tag.to_string(),
        source,
    })
}

/// The version every repository is newer than
pub fn zero_version() -> Version {
    Version::new(0, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", Version::new(1, 2, 3))]
    #[case("v1.2.3", Version::new(1, 2, 3))]
    #[case("V10.0.1", Version::new(10, 0, 1))]
    #[case("  1.9.0\n", Version::new(1, 9, 0))]
    #[case("1.10.0-beta.1", Version::parse("1.10.0-beta.1").unwrap())]
    fn parse_tag_accepts_full_versions(#[case] tag: &str, #[case] expected: Version) {
        assert_eq!(parse_tag(tag).unwrap(), expected);
    }

    #[rstest]
    #[case("not-a-version")]
    #[case("1.2")]
    #[case("1")]
    #[case("")]
    #[case("vv1.0.0")]
    #[case("release 1.0.0")]
    fn parse_tag_rejects_malformed_input(#[case] tag: &str) {
        let err = parse_tag(tag).unwrap_err();

        assert!(matches!(err, TrackerError::Parse { input, .. } if input == tag));
    }

    #[test]
    fn prerelease_orders_below_its_release() {
        assert!(parse_tag("2.0.0-rc.1").unwrap() < parse_tag("2.0.0").unwrap());
        assert!(parse_tag("2.0.0-rc.1").unwrap() > parse_tag("1.9.9").unwrap());
    }
}
