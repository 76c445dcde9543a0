//! Filesystem helpers: directory creation, permission probes, recursive
//! search, copies, and human-readable size listings.
//!
//! Everything here is a thin, synchronous wrapper around `std::fs`. The
//! permission probes open a real handle rather than inspecting permission
//! bits, so they report what an actual open would see (ACLs, read-only
//! mounts); the handle is dropped before returning, on every path.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use humansize::{DECIMAL, format_size};
use tracing::info;
use walkdir::WalkDir;

/// Create a directory and all missing parents.
///
/// Succeeds silently when the directory already exists, so repeated calls
/// are idempotent. Returns the path for call-chaining.
///
/// # Errors
///
/// Returns any creation error other than "already exists".
pub fn ensure_dir_created(path: &Path) -> Result<&Path> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))?;
    Ok(path)
}

/// Assert that a file exists and is readable by opening it for reading.
///
/// The probe handle is dropped before returning. When `verbose` is set an
/// info event is emitted before the open.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be opened for
/// reading.
pub fn ensure_file_exists_and_readable(path: &Path, verbose: bool) -> Result<&Path> {
    if verbose {
        info!("Trying to open file {} for reading", path.display());
    }

    // The handle exists only to probe permissions; it closes here.
    File::open(path).with_context(|| format!("File {} is not readable", path.display()))?;

    Ok(path)
}

/// Assert that a file is writable by opening it for writing.
///
/// The file is created if missing and truncated if present, matching what a
/// subsequent write would do. The probe handle is dropped before returning.
/// When `verbose` is set an info event is emitted before the open.
///
/// # Errors
///
/// Returns an error if the file cannot be opened for writing.
pub fn ensure_file_exists_and_writable(path: &Path, verbose: bool) -> Result<&Path> {
    if verbose {
        info!("Trying to open file {} for writing", path.display());
    }

    File::create(path).with_context(|| format!("File {} is not writable", path.display()))?;

    Ok(path)
}

/// Recursively collect the full paths of every file under `base_dir` whose
/// name exactly equals `filename`.
///
/// Results follow directory traversal order (platform-dependent, not
/// sorted). Entries that cannot be read (permission denied, broken
/// symlinks) are silently skipped.
#[must_use]
pub fn search_files(base_dir: &Path, filename: &str) -> Vec<PathBuf> {
    let mut matches = Vec::new();

    for entry in WalkDir::new(base_dir).into_iter().flatten() {
        if entry.file_type().is_file() && entry.file_name() == std::ffi::OsStr::new(filename) {
            matches.push(entry.into_path());
        }
    }

    matches
}

/// Copy a file into a directory under a caller-computed name.
///
/// The destination filename is whatever `name_fn(src_path, dst_dir)`
/// returns; an existing destination file is overwritten. File bytes and
/// permissions are copied. When `message_template` is `Some`, an info event
/// is emitted with the `{src}` and `{dst}` placeholders replaced by the
/// source and destination paths.
///
/// # Errors
///
/// Returns an error if the source does not exist or the destination
/// directory is not writable.
pub fn copy_file_to_dir<F>(
    src_path: &Path,
    dst_dir: &Path,
    name_fn: F,
    message_template: Option<&str>,
) -> Result<PathBuf>
where
    F: FnOnce(&Path, &Path) -> String,
{
    let dst_path = dst_dir.join(name_fn(src_path, dst_dir));

    if let Some(template) = message_template {
        let message = template
            .replace("{src}", &src_path.display().to_string())
            .replace("{dst}", &dst_path.display().to_string());
        info!("{message}");
    }

    fs::copy(src_path, &dst_path).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            src_path.display(),
            dst_path.display()
        )
    })?;

    Ok(dst_path)
}

/// List the immediate entries of a directory with human-readable sizes.
///
/// Returns one line per entry, formatted as
/// `"<human-readable-size>    <full-path>"`, in directory-listing order.
/// Sizes use decimal units (`kB`, `MB`, ...).
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or an entry's
/// metadata cannot be read.
pub fn get_file_sizes_in_dir(dir_path: &Path) -> Result<String> {
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to list directory {}", dir_path.display()))?;

    let mut listing = String::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir_path.display()))?;
        let metadata = entry
            .metadata()
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;

        listing.push_str(&format_size(metadata.len(), DECIMAL));
        listing.push_str("    ");
        listing.push_str(&entry.path().display().to_string());
        listing.push('\n');
    }

    Ok(listing)
}

/// Extract a filename's extension without the leading dot.
///
/// Returns an empty string when the filename has no extension. Only the
/// final extension is returned (`"a.tar.gz"` yields `"gz"`).
#[must_use]
pub fn get_file_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map_or_else(String::new, |ext| ext.to_string_lossy().into_owned())
}

/// Create or truncate the file at `path` and write `data` to it as text.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_to_file(path: &Path, data: &str) -> Result<()> {
    fs::write(path, data).with_context(|| format!("Failed to write to {}", path.display()))
}
