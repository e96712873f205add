use crate::audio_converter;
use crate::cli::Cli;
use crate::error::MediaConvError;
use crate::format::FormatKind;
use crate::image_converter;
use crate::output::resolve_output_path;
use anyhow::Result;
use log::{debug, info};
use std::path::PathBuf;

/// A fully resolved conversion: where to read, where to write, and which
/// converter runs. Immutable once built.
struct ConversionRequest {
    input: PathBuf,
    output: PathBuf,
    kind: FormatKind,
}

pub fn convert(cli: &Cli) -> Result<()> {
    let request = resolve_request(cli)?;

    info!(
        "converting {} ({:?}) to {}",
        request.input.display(),
        request.kind,
        request.output.display()
    );

    run_conversion(&request)?;

    if request.kind.is_image() {
        if let Ok(info) = image_converter::probe(&request.output) {
            debug!("wrote {}: {}", request.output.display(), info);
        }
    }

    eprintln!(
        "Converted {} to {}",
        request.input.display(),
        request.output.display()
    );

    Ok(())
}

fn resolve_request(cli: &Cli) -> Result<ConversionRequest> {
    let input = cli.input_path()?;

    if !input.exists() {
        return Err(MediaConvError::InputNotFound { path: input }.into());
    }

    let kind = FormatKind::from_path(&input);
    let target_ext = match kind.target_ext() {
        Some(ext) => ext,
        None => {
            let ext = input
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_string();
            return Err(MediaConvError::UnsupportedFormat { ext }.into());
        }
    };

    let output = resolve_output_path(&input, cli.output.as_ref(), target_ext);

    Ok(ConversionRequest {
        input,
        output,
        kind,
    })
}

fn run_conversion(request: &ConversionRequest) -> Result<(), MediaConvError> {
    let input = &request.input;
    let output = &request.output;

    match request.kind {
        FormatKind::WebpImage => image_converter::convert_webp_to_png(input, output),
        FormatKind::AvifImage => image_converter::convert_avif_to_png(input, output),
        FormatKind::SvgImage => image_converter::convert_svg_to_png(input, output),
        FormatKind::Mp3Audio => audio_converter::convert_mp3_to_wav(input, output),
        FormatKind::Mp4Audio => audio_converter::convert_mp4_to_wav(input, output),
        FormatKind::M4aAudio => audio_converter::convert_m4a_to_wav(input, output),
        // resolve_request rejects unsupported inputs before a request exists
        FormatKind::Unsupported => unreachable!("unsupported inputs are rejected at resolution"),
    }
}
