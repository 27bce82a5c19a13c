use crate::cli::Cli;
use std::env;
use std::path::{Path, PathBuf};

/// Runtime settings resolved from flags and environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub testbed: PathBuf,
    pub vagrant: PathBuf,
    pub verbosity: u8,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Settings {
            testbed: cli.testbed.clone(),
            vagrant: match env::current_dir() {
                Ok(cwd) => resolve_program(&cli.vagrant, &cwd),
                Err(_) => cli.vagrant.clone(),
            },
            verbosity: cli.verbose,
        }
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Anchor a relative program path like `bin/vagrant` at `cwd`.
///
/// Commands run inside the testbed, so such paths would otherwise resolve
/// against the wrong directory. Bare names are left for the PATH lookup.
pub fn resolve_program(program: &Path, cwd: &Path) -> PathBuf {
    if program.is_relative() && program.components().count() > 1 {
        cwd.join(program)
    } else {
        program.to_path_buf()
    }
}
