//! CLI argument definitions using clap

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Get and set the configured LLM model per task
#[derive(Parser, Debug)]
#[command(name = "llm-manager")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = "Running 'llm-manager TASK' is shorthand for 'llm-manager get TASK'.")]
pub struct Cli {
    /// Increase logging verbosity (repeat up to -d -d -d)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// User config file (default: ~/.config/llm-manager/llm.conf)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub user_config: Option<PathBuf>,

    /// System config file (default: /etc/llm.conf)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub system_config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the model configured for a task
    Get {
        /// Task name (e.g. text-generation)
        task: String,
    },

    /// Set the model for a task in the user config (echoes the written entry)
    Set {
        /// Task name
        task: String,
        /// Model identifier (e.g. gemma2:2b)
        model: String,
    },

    /// List all configured tasks and models
    Show,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

const VERBS: [&str; 5] = ["get", "set", "show", "completion", "help"];

/// Rewrite a bare `llm-manager TASK` invocation into `llm-manager get TASK`.
///
/// Only the first argument is inspected. Flags and known subcommands pass
/// through untouched, so `--help`, `completion`, etc. keep working.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if let Some(first) = args.get(1) {
        let passthrough = first
            .to_str()
            .map(|s| s.starts_with('-') || VERBS.contains(&s))
            .unwrap_or(false);
        if !passthrough {
            args.insert(1, OsString::from("get"));
        }
    }
    args
}
