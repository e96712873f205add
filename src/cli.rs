use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Convert modern image and audio formats to universal ones
#[derive(Parser, Debug)]
#[command(name = "mediaconv", version, about)]
pub struct Cli {
    /// Path to the input file (prompted for when omitted)
    pub input: Option<PathBuf>,

    /// Output path. Defaults to the input path with the target extension,
    /// renamed with a " (1)", " (2)", ... suffix if that file already exists.
    pub output: Option<PathBuf>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Input path from the command line, or read from stdin when omitted.
    pub fn input_path(&self) -> Result<PathBuf> {
        if let Some(ref input) = self.input {
            return Ok(input.clone());
        }
        prompt_input_path(&mut io::stdin().lock(), &mut io::stderr())
    }
}

fn prompt_input_path(reader: &mut impl BufRead, prompt_out: &mut impl Write) -> Result<PathBuf> {
    write!(prompt_out, "Input file: ")?;
    prompt_out.flush()?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read input path from stdin")?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        bail!("No input file given");
    }

    Ok(PathBuf::from(trimmed))
}
