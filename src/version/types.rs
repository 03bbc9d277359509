use serde::Deserialize;

/// One entry of a repository's release listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseRecord {
    #[serde(rename = "tag_name")]
    pub tag: String,
    #[serde(rename = "prerelease", default)]
    pub is_prerelease: bool,
    #[serde(rename = "draft", default)]
    pub is_draft: bool,
}

impl ReleaseRecord {
    pub fn new(tag: impl Into<String>, is_prerelease: bool, is_draft: bool) -> Self {
        Self {
            tag: tag.into(),
            is_prerelease,
            is_draft,
        }
    }

    /// A stable, non-draft release
    pub fn release(tag: impl Into<String>) -> Self {
        Self::new(tag, false, false)
    }
}
