use std::path::{Path, PathBuf};

/// Resolve where the converted file should be written.
///
/// An explicit output path wins unchanged. Otherwise the input's extension is
/// swapped for `ext` in the same directory; if that file already exists, a
/// " (1)", " (2)", ... suffix is appended before the extension until a free
/// path is found.
pub fn resolve_output_path(input: &Path, provided: Option<&PathBuf>, ext: &str) -> PathBuf {
    if let Some(p) = provided {
        return p.clone();
    }

    let candidate = input.with_extension(ext);
    if !candidate.exists() {
        return candidate;
    }

    let stem = candidate
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut n: u32 = 1;
    loop {
        let disambiguated = candidate.with_file_name(format!("{stem} ({n}).{ext}"));
        if !disambiguated.exists() {
            return disambiguated;
        }
        n += 1;
    }
}
