/// Assets whose name contains this are debug symbol bundles and never announced.
pub const SYMBOLS_MARKER: &str = "symbols";

/// Platforms that get their own download list in the announcement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
}

impl Platform {
    /// Platforms in matching order. A name containing both keywords is Windows.
    pub const ALL: [Platform; 2] = [Platform::Windows, Platform::Linux];

    /// Substring that routes an asset to this platform
    pub fn keyword(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }

    /// Text that precedes the label in a well-formed asset name
    fn label_start(&self) -> &'static str {
        match self {
            Platform::Windows => "windows-",
            Platform::Linux => "linux-",
        }
    }

    /// Text that follows the label in a well-formed asset name
    fn label_end(&self) -> &'static str {
        match self {
            Platform::Windows => ".7z",
            Platform::Linux => ".AppImage",
        }
    }

    /// Title of the embed field listing this platform's downloads
    pub fn field_name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows Downloads",
            Platform::Linux => "Linux Downloads",
        }
    }

    /// Finds the platform an asset belongs to, if any.
    pub fn for_asset(name: &str) -> Option<Platform> {
        if name.contains(SYMBOLS_MARKER) {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|platform| name.contains(platform.keyword()))
    }

    /// Extracts the human readable label from an asset name.
    ///
    /// `pcsx2-windows-x64-Qt.7z` becomes `x64 Qt`: the text between the start
    /// marker and the end marker, with its first hyphen turned into a space.
    /// The label never extends past a second start marker, and when the end
    /// marker is missing the rest of the segment is used. Returns `None` when
    /// the start marker is missing.
    pub fn friendly_label(&self, name: &str) -> Option<String> {
        let (_, rest) = name.split_once(self.label_start())?;
        let segment = rest.split(self.label_start()).next().unwrap_or(rest);
        let label = segment.split(self.label_end()).next().unwrap_or(segment);
        Some(label.replacen('-', " ", 1))
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
