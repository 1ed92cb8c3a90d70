use log::{debug, warn};

use super::platform::Platform;
use crate::github::ReleaseAsset;

/// Markdown download lists, one per platform.
///
/// Each list is either empty or a run of `- [label](url)\n` lines in the
/// order the assets appeared in the release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetLinks {
    pub windows: String,
    pub linux: String,
}

impl AssetLinks {
    /// Download list for the given platform
    pub fn for_platform(&self, platform: Platform) -> &str {
        match platform {
            Platform::Windows => &self.windows,
            Platform::Linux => &self.linux,
        }
    }

    fn push(&mut self, platform: Platform, label: &str, url: &str) {
        let bucket = match platform {
            Platform::Windows => &mut self.windows,
            Platform::Linux => &mut self.linux,
        };
        bucket.push_str(&format!("- [{}]({})\n", label, url));
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty() && self.linux.is_empty()
    }
}

/// Sorts release assets into per-platform markdown download lists.
///
/// Symbol bundles and assets matching no platform are left out. When the
/// label cannot be derived from the file name the file name itself is shown.
#[tracing::instrument(skip(assets))]
pub fn classify(assets: &[ReleaseAsset]) -> AssetLinks {
    let mut links = AssetLinks::default();

    for asset in assets {
        let Some(platform) = Platform::for_asset(&asset.name) else {
            debug!("Skipping asset {}", asset.name);
            continue;
        };

        let label = platform.friendly_label(&asset.name).unwrap_or_else(|| {
            warn!(
                "Could not derive a {} label from '{}', using the file name",
                platform, asset.name
            );
            asset.name.clone()
        });

        debug!("Listing {} under {} as '{}'", asset.name, platform, label);
        links.push(platform, &label, &asset.browser_download_url);
    }

    links
}
