//! Running one parsed command against a data file.
//!
//! A run loads the data file, applies the command, saves the list again if
//! the command changed it, and logs how long the whole thing took.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use crate::cli::Command;
use crate::config::{Config, CorruptPolicy};
use crate::display;
use crate::error::{Error, Result};
use crate::plane::PlaneList;
use crate::storage;

/// Executes commands against data files under one home directory.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    home: PathBuf,
    on_corrupt: CorruptPolicy,
}

impl Dispatcher {
    /// Create a dispatcher resolving data files against `home`.
    #[must_use]
    pub fn new(config: &Config, home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            on_corrupt: config.storage.on_corrupt,
        }
    }

    /// Create a dispatcher for the current user's home directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirUnavailable`] if the home directory is unknown.
    pub fn for_current_user(config: &Config) -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeDirUnavailable)?;
        Ok(Self::new(config, home))
    }

    /// Run `command`, writing any listing to `out`.
    ///
    /// Failures to save are logged, not returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file is corrupt and the policy is
    /// [`CorruptPolicy::Abort`], or if writing to `out` fails.
    pub fn run<W: Write>(&self, command: &Command, out: &mut W) -> Result<()> {
        let started = Instant::now();
        let result = self.execute(command, out);
        info!(
            "Command '{}' finished in {:?}",
            command.name(),
            started.elapsed()
        );
        result
    }

    fn execute<W: Write>(&self, command: &Command, out: &mut W) -> Result<()> {
        let path = storage::resolve_data_path(&self.home, command.filename());
        debug!("Running '{}' on {}", command.name(), path.display());

        let mut planes = self.load(&path)?;
        let mut dirty = false;

        match command {
            Command::Add(cmd) => {
                planes.add(cmd.destination.as_str(), cmd.num, cmd.typ.as_str());
                dirty = true;
            }
            Command::Display(cmd) => {
                display::display(&planes, cmd.format.into(), out)?;
            }
            Command::Select(cmd) => {
                let selected = planes.filter_by_type(&cmd.typ);
                display::display(&selected, cmd.format.into(), out)?;
            }
        }

        if dirty {
            storage::save(&path, &planes);
        }
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<PlaneList> {
        match self.on_corrupt {
            CorruptPolicy::Recover => Ok(storage::load(path)),
            CorruptPolicy::Abort => match storage::try_load(path) {
                Ok(planes) => Ok(planes),
                Err(err) if err.is_missing() => {
                    storage::log_load_failure(&err);
                    Ok(PlaneList::new())
                }
                Err(err) => Err(err),
            },
        }
    }
}
