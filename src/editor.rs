//! Detect a code editor on `PATH` and open generated files in it.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// An editor command found on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    command: String,
    binary: PathBuf,
}

impl Editor {
    /// Look up `command` on `PATH`.
    pub fn detect(command: &str) -> Option<Self> {
        match which::which(command) {
            Ok(binary) => {
                debug!(command, binary = %binary.display(), "found editor");
                Some(Self {
                    command: command.to_string(),
                    binary,
                })
            }
            Err(e) => {
                debug!(command, error = %e, "editor not found");
                None
            }
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Launch the editor on `file`, discarding its output.
    pub fn open(&self, file: &Path) -> io::Result<()> {
        let status = Command::new(&self.binary)
            .arg(file)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!(
                "{} exited with {}",
                self.command, status
            )))
        }
    }
}
