use serde::{Deserialize, Serialize};

use crate::asset::{AssetLinks, Platform};
use crate::github::ReleaseEvent;

/// Embed accent color, `#FF8000`.
pub const EMBED_COLOR: u32 = 0xFF8000;

pub const EMBED_TITLE: &str = "New PCSX2 Nightly Build Available!";

pub const INSTALLATION_STEPS: &str =
    "[See Here](https://github.com/PCSX2/pcsx2/wiki/Nightly-Build-Usage-Guide)";

/// Body of a webhook execution request
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WebhookMessage {
    pub embeds: Vec<Embed>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Embed {
    pub color: u32,
    pub title: String,
    pub fields: Vec<EmbedField>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

impl Embed {
    /// Looks up a field by its title.
    pub fn field(&self, name: &str) -> Option<&EmbedField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Builds the release announcement.
///
/// Version, release link, installation steps and changelog are always present.
/// A download field is appended per platform that has at least one asset.
#[tracing::instrument(skip_all, fields(tag = %release.tag_name))]
pub fn build_message(release: &ReleaseEvent, links: &AssetLinks) -> WebhookMessage {
    let mut fields = vec![
        EmbedField::new("Version", release.tag_name.as_str(), true),
        EmbedField::new(
            "Release Link",
            format!("[Github Release]({})", release.html_url),
            true,
        ),
        EmbedField::new("Installation Steps", INSTALLATION_STEPS, true),
        EmbedField::new("Included Changes", release.body.as_str(), false),
    ];

    for platform in Platform::ALL {
        let downloads = links.for_platform(platform);
        if !downloads.is_empty() {
            fields.push(EmbedField::new(platform.field_name(), downloads, false));
        }
    }

    WebhookMessage {
        embeds: vec![Embed {
            color: EMBED_COLOR,
            title: EMBED_TITLE.to_string(),
            fields,
        }],
    }
}
