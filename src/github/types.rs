use serde::{Deserialize, Deserializer, Serialize};

/// Represents a GitHub release asset
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// Represents the published release carried by a `release` event
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
pub struct ReleaseEvent {
    pub tag_name: String,
    pub html_url: String,
    /// Changelog text. GitHub sends `null` for releases without notes.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// Top-level shape of the event file; everything except `release` is ignored.
#[derive(Deserialize, Debug)]
pub struct EventPayload {
    pub release: ReleaseEvent,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
