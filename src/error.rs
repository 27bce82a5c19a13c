//! Error types for nixtrobed.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can make a nixtrobed command fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `init` target already exists.
    #[error("{} already exists", .path.display())]
    AlreadyExists { path: PathBuf },

    /// A required testbed file or directory is missing.
    #[error("{} is missing. Are you in a nixtrobed directory?", .path.display())]
    NotFound { path: PathBuf },

    /// Filesystem failure.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the distro file could not be parsed.
    #[error("malformed line in {}. Line {line} {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The Vagrantfile template could not be rendered.
    #[error("template error: {0}")]
    Template(String),

    /// A distro was requested that the registry does not define.
    #[error("unknown distro '{name}' (configured: {})", list_or_none(.known))]
    UnknownDistro { name: String, known: Vec<String> },

    /// Data could not be serialized for printing.
    #[error("failed to format output: {0}")]
    Output(String),

    /// The external VM tool could not be found.
    #[error("{program} not found. Please install Vagrant or set NIXTROBED_VAGRANT")]
    ToolMissing { program: String },

    /// The external VM tool ran and failed.
    #[error("an error occurred when calling {program}. See above for details")]
    ExternalTool { program: String, code: Option<i32> },
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    ///
    /// Failures of the wrapped tool pass its own exit code through.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::AlreadyExists { .. } => 3,
            Error::NotFound { .. } => 4,
            Error::Io { .. } | Error::Output(_) => 5,
            Error::Malformed { .. } | Error::Template(_) => 6,
            Error::UnknownDistro { .. } => 7,
            Error::ToolMissing { .. } => 127,
            Error::ExternalTool { code, .. } => match code {
                Some(code) if *code != 0 => *code,
                _ => 1,
            },
        }
    }
}
