use crate::error::MediaConvError;
use crate::ffmpeg;
use std::path::Path;

// 16-bit signed PCM, the same default the common tooling writes.
const WAV_ARGS: &[&str] = &["-f", "wav", "-acodec", "pcm_s16le"];

/// Transcode an MP3 file to WAV.
///
/// WAV is uncompressed; this doesn't restore quality the MP3 encoder threw
/// away, it only changes the container.
pub fn convert_mp3_to_wav(input: &Path, output: &Path) -> Result<(), MediaConvError> {
    ffmpeg::ensure_available("MP3 audio")?;
    ffmpeg::transcode(input, WAV_ARGS, output)
}

/// Extract the audio track of an MP4 container into WAV. `-vn` drops the
/// video stream.
pub fn convert_mp4_to_wav(input: &Path, output: &Path) -> Result<(), MediaConvError> {
    ffmpeg::ensure_available("MP4 audio")?;
    ffmpeg::transcode(input, &["-vn", "-f", "wav", "-acodec", "pcm_s16le"], output)
}

/// M4A is the audio-only MP4 profile; same transcode as MP3.
pub fn convert_m4a_to_wav(input: &Path, output: &Path) -> Result<(), MediaConvError> {
    ffmpeg::ensure_available("M4A audio")?;
    ffmpeg::transcode(input, WAV_ARGS, output)
}
