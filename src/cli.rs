use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "nixtrobed")]
#[command(about = "Generate and drive Vagrant testbeds for different Linux and BSD distros")]
pub struct Cli {
    /// Testbed directory to operate in
    #[arg(short = 'C', long, global = true, env = "NIXTROBED_TESTBED", default_value = ".")]
    pub testbed: PathBuf,

    /// Vagrant binary to invoke (looked up in PATH unless it contains a '/')
    #[arg(long, global = true, env = "NIXTROBED_VAGRANT", default_value = "vagrant")]
    pub vagrant: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate and initialize a new testbed directory
    Init {
        /// Target directory. This must not exist yet.
        directory: PathBuf,
    },

    /// Provision the boxes of the given distributions (wraps "vagrant provision")
    Provision {
        /// Distributions to provision; none or "all" selects every configured one
        distros: Vec<String>,
    },

    /// Start the boxes of the given distributions (wraps "vagrant up")
    Start {
        /// Distributions to start; none or "all" selects every configured one
        distros: Vec<String>,
    },

    /// Stop the boxes of the given distributions (wraps "vagrant halt")
    Stop {
        /// Distributions to stop; none or "all" selects every configured one
        distros: Vec<String>,
    },

    /// List the distributions configured in the testbed
    List {
        /// Output format (json, yaml, or pretty)
        #[arg(short, long, default_value = "pretty", value_parser = ["pretty", "json", "yaml"])]
        format: String,
    },
}
