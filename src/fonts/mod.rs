//! Font loading utilities for the pdf_sampler crate.
//!
//! `genpdf` embeds a TrueType family into every document it renders, so the
//! crate needs a set of font files on disk.  Lookup walks a fixed candidate
//! list instead of any process-wide registry: an environment variable
//! override, the directory next to the running binary, and the crate's own
//! `assets/fonts` directory.  Callers can bypass the search entirely by
//! passing an explicit directory to [`font_family_from_dir`].

use std::env;
use std::path::{Path, PathBuf};

use genpdf::fonts::{self, FontData, FontFamily};

use crate::error::{Error, Result};

/// Name of the bundled font family.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "LiberationSans";

/// Environment variable that overrides the font search path.
pub const FONTS_DIR_ENV: &str = "PDF_SAMPLER_FONTS_DIR";

const FONT_FILES: &[&str] = &[
    "LiberationSans-Regular.ttf",
    "LiberationSans-Bold.ttf",
    "LiberationSans-Italic.ttf",
    "LiberationSans-BoldItalic.ttf",
];

fn font_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = env::var(FONTS_DIR_ENV) {
        if !path.trim().is_empty() {
            candidates.push(PathBuf::from(path));
        }
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            let candidate = bin_dir.join("assets/fonts");
            if !candidates.iter().any(|existing| existing == &candidate) {
                candidates.push(candidate);
            }
        }
    }

    let manifest_candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts");
    if !candidates
        .iter()
        .any(|existing| existing == &manifest_candidate)
    {
        candidates.push(manifest_candidate);
    }

    candidates
}

fn missing_font_files(path: &Path) -> Vec<PathBuf> {
    FONT_FILES
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn resolve_font_directory() -> Result<PathBuf> {
    let mut attempts = Vec::new();

    for candidate in font_directory_candidates() {
        let exists = candidate.is_dir();
        let missing = missing_font_files(&candidate);

        if exists && missing.is_empty() {
            return Ok(candidate);
        }

        let reason = if !exists {
            format!("directory missing at {}", candidate.display())
        } else {
            let missing_list = missing
                .iter()
                .map(|path| path.file_name().unwrap_or_default().to_string_lossy())
                .collect::<Vec<_>>()
                .join(", ");
            format!("missing files [{}]", missing_list)
        };

        attempts.push(format!("{} ({})", candidate.display(), reason));
    }

    Err(Error::Fonts(format!(
        "unable to locate the {} family. Checked: {}. See assets/fonts/README.md or set {}.",
        DEFAULT_FONT_FAMILY_NAME,
        attempts.join(", "),
        FONTS_DIR_ENV
    )))
}

/// Loads the bundled font family from an explicit directory.
pub fn font_family_from_dir(directory: &Path) -> Result<FontFamily<FontData>> {
    let missing = missing_font_files(directory);
    if !missing.is_empty() {
        let missing_list = missing
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::Fonts(format!(
            "missing font files: {}",
            missing_list
        )));
    }

    fonts::from_files(directory, DEFAULT_FONT_FAMILY_NAME, None).map_err(|err| {
        Error::Fonts(format!(
            "failed to load font family '{}' from {}: {}",
            DEFAULT_FONT_FAMILY_NAME,
            directory.display(),
            err
        ))
    })
}

/// Returns the bundled font family, searching the default candidate paths.
pub fn default_font_family() -> Result<FontFamily<FontData>> {
    let directory = resolve_font_directory()?;
    font_family_from_dir(&directory)
}

/// Indicates whether all files required for the default font family are present on disk.
pub fn default_fonts_available() -> bool {
    resolve_font_directory().is_ok()
}
