//! GitHub release event payload.
//!
//! GitHub Actions writes the webhook payload that triggered the workflow to the
//! file named by `GITHUB_EVENT_PATH`. For `release` events the interesting part
//! lives under the top-level `release` key.

mod event;
mod types;

pub use event::load_release_event;
pub use types::{EventPayload, ReleaseAsset, ReleaseEvent};
