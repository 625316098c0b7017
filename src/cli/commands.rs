//! Command dispatch: wires parsed arguments to the resolver and writer

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{ConfigWriter, Resolver};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::ConfigPaths;
use crate::domain::{DefaultTable, SetOutcome};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Get { task }) => _get(&config_paths(cli)?, task),
        Some(Commands::Set { task, model }) => _set(&config_paths(cli)?, task, model),
        Some(Commands::Show) => _show(&config_paths(cli)?),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// Resolve the config file locations, honoring the global overrides.
fn config_paths(cli: &Cli) -> CliResult<ConfigPaths> {
    Ok(ConfigPaths::with_overrides(
        cli.user_config.clone(),
        cli.system_config.clone(),
    )?)
}

#[instrument]
fn _get(paths: &ConfigPaths, task: &str) -> CliResult<()> {
    let task = task.trim();
    let resolver = Resolver::new(paths.clone(), DefaultTable::default());
    let resolution = resolver.resolve(task)?;
    debug!("{} resolved from {:?}", task, resolution.origin);
    output::info(&resolution.model);
    Ok(())
}

#[instrument]
fn _set(paths: &ConfigPaths, task: &str, model: &str) -> CliResult<()> {
    let writer = ConfigWriter::new(paths.user.clone());
    let outcome = writer.set(task, model)?;
    let label = match outcome {
        SetOutcome::Updated => "Updated",
        SetOutcome::Added => "Set",
    };
    output::action(label, &format!("{}={}", task.trim(), model.trim()));
    Ok(())
}

#[instrument]
fn _show(paths: &ConfigPaths) -> CliResult<()> {
    let resolver = Resolver::new(paths.clone(), DefaultTable::default());
    let merged = resolver.merged()?;
    if merged.is_empty() {
        output::info("No configurations found.");
        return Ok(());
    }
    for (task, model) in &merged {
        output::info(&format!("{} = {}", task, model));
    }
    Ok(())
}

#[instrument]
fn _completion(shell: Shell) -> CliResult<()> {
    debug!("generating completions for {:?}", shell);
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
