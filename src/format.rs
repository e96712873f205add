use std::path::Path;

/// Classification of an input file, keyed on its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    WebpImage,
    AvifImage,
    SvgImage,
    Mp3Audio,
    Mp4Audio,
    M4aAudio,
    Unsupported,
}

impl FormatKind {
    /// Classify a path by its extension, case-insensitive. Missing or
    /// unknown extensions map to `Unsupported`.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "webp" => Self::WebpImage,
            "avif" => Self::AvifImage,
            "svg" => Self::SvgImage,
            "mp3" => Self::Mp3Audio,
            "mp4" => Self::Mp4Audio,
            "m4a" => Self::M4aAudio,
            _ => Self::Unsupported,
        }
    }

    /// Extension of the format this kind converts to.
    pub fn target_ext(&self) -> Option<&'static str> {
        match self {
            Self::WebpImage | Self::AvifImage | Self::SvgImage => Some("png"),
            Self::Mp3Audio | Self::Mp4Audio | Self::M4aAudio => Some("wav"),
            Self::Unsupported => None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::WebpImage | Self::AvifImage | Self::SvgImage)
    }
}
