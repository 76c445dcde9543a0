//! # chrome-history-utils
//!
//! Shared helper functions for the sibling tools that export and process
//! Google Chrome history data.
//!
//! Chrome stores its timestamps as microsecond offsets from the Windows
//! FILETIME epoch (1601-01-01T00:00:00), and the export tools turn page
//! titles into filenames and shuffle database copies around on disk. The
//! helpers here cover exactly those chores and nothing more:
//!
//! - [`strings`] — Unicode-to-ASCII filename sanitization and soft-wrapping
//!   of long strings by whitespace
//! - [`dates`] — conversions between the FILETIME epoch and calendar
//!   date/time values, plus formatted string conversions
//! - [`files`] — idempotent directory creation, readability/writability
//!   checks, recursive filename search, file copy with caller-supplied
//!   naming, and human-readable size listings
//!
//! All functions are stateless and synchronous. Informational and warning
//! events are emitted through the [`tracing`] facade; installing a
//! subscriber (and choosing a destination) is entirely up to the calling
//! tool.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use chrome_history_utils::{dates, files, strings};
//!
//! # fn main() -> anyhow::Result<()> {
//! let title = strings::replace_special_chars("Crème brûlée — recipe");
//! let visited = dates::add_microseconds_to_win_epoch(13_217_442_058_000_000);
//! let out_dir = files::ensure_dir_created(Path::new("/tmp/chrome-export"))?;
//! # Ok(())
//! # }
//! ```

pub mod dates;
pub mod files;
pub mod strings;
