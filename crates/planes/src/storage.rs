//! JSON persistence for plane lists.
//!
//! A data file is a single UTF-8 JSON array of plane objects, indented with
//! four spaces, with non-ASCII text written as-is. Every call opens, fully
//! reads or writes, and closes the file; nothing is held between calls.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::plane::PlaneList;

/// Indentation used for data files.
const JSON_INDENT: &[u8] = b"    ";

/// Suffix of the sibling file written before being renamed into place.
const TEMP_SUFFIX: &str = ".tmp";

/// Resolve a data file name against the user's home directory.
///
/// The name is always treated as home-relative: a leading root (or drive
/// prefix on Windows) is dropped, so `/flights.json` resolves to
/// `<home>/flights.json`.
#[must_use]
pub fn resolve_data_path(home: &Path, filename: &Path) -> PathBuf {
    let relative: PathBuf = filename
        .components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();
    home.join(relative)
}

/// Load a plane list, reporting each kind of failure separately.
///
/// # Errors
///
/// - [`Error::StoreMissing`] if there is no file at `path`.
/// - [`Error::StoreRead`] if the file exists but cannot be read.
/// - [`Error::StoreCorrupt`] if the content is not valid JSON or not an array
///   of objects. Objects whose fields hold unexpected JSON types still load;
///   see [`Plane`](crate::plane::Plane).
pub fn try_load(path: &Path) -> Result<PlaneList> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::StoreMissing {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(Error::StoreRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let planes: PlaneList = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            Error::StoreRead {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            Error::StoreCorrupt {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    debug!("Loaded {} planes from {}", planes.len(), path.display());
    Ok(planes)
}

/// Load a plane list, falling back to an empty list on any failure.
///
/// A missing file is logged as a warning, anything else as an error.
#[must_use]
pub fn load(path: &Path) -> PlaneList {
    match try_load(path) {
        Ok(planes) => planes,
        Err(err) => {
            log_load_failure(&err);
            PlaneList::new()
        }
    }
}

/// Log a failure returned by [`try_load`] at the level it deserves.
pub fn log_load_failure(err: &Error) {
    if let Error::StoreMissing { path } = err {
        warn!(
            "Data file {} not found, a new one will be created",
            path.display()
        );
    } else {
        error!("Failed to load data: {}", err);
    }
}

/// Serialize a plane list exactly as it is stored on disk.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_pretty_json(planes: &PlaneList) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    planes.serialize(&mut ser)?;
    Ok(buf)
}

/// Write a plane list to `path`, replacing any previous content.
///
/// Parent directories are created as needed. The document is written to a
/// sibling temporary file first and renamed over `path`.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn try_save(path: &Path, planes: &PlaneList) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let contents = to_pretty_json(planes)?;
    let temp_path = temp_path_for(path);

    let written = write_file(&temp_path, &contents).and_then(|()| fs::rename(&temp_path, path));
    if let Err(source) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::StoreWrite {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

/// Write a plane list to `path`, logging instead of returning failures.
pub fn save(path: &Path, planes: &PlaneList) {
    match try_save(path, planes) {
        Ok(()) => info!("Data saved to {}", path.display()),
        Err(err) => error!("Failed to save data: {}", err),
    }
}

fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(OsString::new, std::ffi::OsStr::to_os_string);
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}
