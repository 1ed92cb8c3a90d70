use anyhow::{Context, Result, bail};
use log::debug;
use std::path::Path;

use super::types::{EventPayload, ReleaseEvent};
use crate::runtime::Runtime;

/// Reads the event file written by the CI platform and extracts its release.
#[tracing::instrument(skip(runtime))]
pub fn load_release_event<R: Runtime + ?Sized>(runtime: &R, path: &Path) -> Result<ReleaseEvent> {
    if !runtime.exists(path) {
        bail!("Event file {} does not exist", path.display());
    }

    debug!("Loading release event from {}...", path.display());
    let content = runtime.read_to_string(path)?;

    let payload: EventPayload = serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse release event from {}; is this a `release` event?",
            path.display()
        )
    })?;

    debug!(
        "Release {} with {} asset(s)",
        payload.release.tag_name,
        payload.release.assets.len()
    );

    Ok(payload.release)
}
