use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaConvError {
    #[error(
        "unsupported format \"{ext}\" (images -> png: webp, avif, svg; audio -> wav: mp3, mp4, m4a)"
    )]
    UnsupportedFormat { ext: String },
    #[error("input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },
    #[error("ffmpeg not found (required for {0})")]
    FfmpegNotFound(&'static str),
    #[error("conversion failed: {0}")]
    ConversionFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_lists_conversions() {
        let e = MediaConvError::UnsupportedFormat {
            ext: "txt".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("\"txt\""));
        assert!(msg.contains("webp"));
        assert!(msg.contains("mp3"));
    }
}
