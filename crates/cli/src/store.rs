// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON workbook files.

use color_eyre::eyre::{Context, Result, bail};
use shiftbook::Workbook;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads a workbook from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid workbook.
pub fn load(path: &Path) -> Result<Workbook> {
    let text: String = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read workbook {}", path.display()))?;
    let workbook: Workbook = serde_json::from_str(&text)
        .wrap_err_with(|| format!("Failed to parse workbook {}", path.display()))?;
    info!(
        path = %path.display(),
        jobs = workbook.jobs().count(),
        shifts = workbook.catalog.len(),
        "Loaded workbook"
    );
    Ok(workbook)
}

/// Returns the sibling file a save is staged in before it replaces `path`.
fn staging_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes `workbook` to `path` as pretty-printed JSON.
///
/// The JSON is written to a sibling staging file first and renamed over
/// `path`, so an interrupted save leaves the previous workbook intact.
///
/// # Errors
///
/// Returns an error if the workbook cannot be serialized or written.
pub fn save(path: &Path, workbook: &Workbook) -> Result<()> {
    let mut text: String =
        serde_json::to_string_pretty(workbook).wrap_err("Failed to serialize workbook")?;
    text.push('\n');

    let staging: PathBuf = staging_path(path);
    fs::write(&staging, text)
        .wrap_err_with(|| format!("Failed to write workbook {}", staging.display()))?;
    if let Err(err) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(err).wrap_err_with(|| format!("Failed to replace workbook {}", path.display()));
    }
    info!(path = %path.display(), "Saved workbook");
    Ok(())
}

/// Writes a fresh workbook with the standard catalog to `path`.
///
/// # Errors
///
/// Returns an error if the file exists and `force` is not set, or if the
/// write fails.
pub fn create(path: &Path, force: bool) -> Result<Workbook> {
    if path.exists() && !force {
        bail!(
            "Workbook {} already exists; pass --force to overwrite it",
            path.display()
        );
    }
    let workbook: Workbook = Workbook::new();
    save(path, &workbook)?;
    Ok(workbook)
}
