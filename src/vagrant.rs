use crate::error::{Error, Result};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

/// Vagrant sub-commands nixtrobed drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VagrantCommand {
    Up,
    Halt,
    Provision,
}

impl VagrantCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            VagrantCommand::Up => "up",
            VagrantCommand::Halt => "halt",
            VagrantCommand::Provision => "provision",
        }
    }
}

/// A fully resolved call of the external VM tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(
        program: &Path,
        command: VagrantCommand,
        distros: &[String],
        cwd: impl Into<PathBuf>,
    ) -> Self {
        let mut args = Vec::with_capacity(distros.len() + 1);
        args.push(command.as_str().to_string());
        args.extend(distros.iter().cloned());

        Invocation {
            program: program.to_path_buf(),
            args,
            cwd: cwd.into(),
        }
    }

    /// Run the tool with inherited stdio and wait for it.
    pub fn run(&self) -> Result<()> {
        info!(cwd = %self.cwd.display(), "running {}", self);

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::ToolMissing {
                    program: self.program.display().to_string(),
                },
                _ => Error::io(&self.program, e),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::ExternalTool {
                program: self.program.display().to_string(),
                code: status.code(),
            })
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
