use crate::error::MediaConvError;
use log::debug;
use std::path::Path;
use std::process::Command;

/// Check that the ffmpeg executable is reachable on PATH.
pub fn ensure_available(needed_for: &'static str) -> Result<(), MediaConvError> {
    let probe = Command::new("ffmpeg").arg("-version").output();
    if probe.is_err() {
        return Err(MediaConvError::FfmpegNotFound(needed_for));
    }
    Ok(())
}

/// Run ffmpeg over a single input, producing a single output file.
/// `codec_args` sit between the input and output arguments; `-y` is always
/// passed so an explicitly chosen output path is overwritten.
pub fn transcode(input: &Path, codec_args: &[&str], output: &Path) -> Result<(), MediaConvError> {
    let mut cmd = Command::new("ffmpeg");
    cmd.arg("-i").arg(input).args(codec_args).arg("-y").arg(output);

    debug!("running {:?}", cmd);
    let result = cmd.output()?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(MediaConvError::ConversionFailed(
            stderr.trim().to_string(),
        ));
    }

    debug!("ffmpeg wrote {}", output.display());
    Ok(())
}
