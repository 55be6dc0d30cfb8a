use std::fs;
use std::io::{self, Read};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, InputArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{Settings, SettingsError};
use crate::item;
use crate::parser::parse;
use crate::render::{print_items, ToTree};
use crate::sort::sort_items;

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show { input, sort }) => _show(input, *sort || settings.sorted),
        Some(Commands::Sort { input }) => _show(input, true),
        Some(Commands::Tree { input, sort }) => _tree(input, *sort || settings.sorted),
        Some(Commands::Leaves { input }) => _leaves(input),
        Some(Commands::Stats { input }) => _stats(input),
        Some(Commands::Config { command }) => _config(command, settings),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell);
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Resolve the notation text: literal argument, file, or stdin.
#[instrument]
fn read_input(input: &InputArgs) -> CliResult<String> {
    if let Some(notation) = &input.notation {
        return Ok(notation.clone());
    }
    if let Some(path) = &input.file {
        return fs::read_to_string(path).map_err(|source| CliError::InputFile {
            path: path.clone(),
            source,
        });
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(CliError::Stdin)?;
    Ok(buffer)
}

#[instrument]
fn _show(input: &InputArgs, sort: bool) -> CliResult<()> {
    let text = read_input(input)?;
    let mut items = parse(&text);
    debug!("parsed {} top-level items", items.len());
    if sort {
        sort_items(&mut items);
    }
    print_items(&items)?;
    Ok(())
}

#[instrument]
fn _tree(input: &InputArgs, sort: bool) -> CliResult<()> {
    let text = read_input(input)?;
    let mut items = parse(&text);
    if sort {
        sort_items(&mut items);
    }
    for item in &items {
        output::info(&item.to_tree());
    }
    Ok(())
}

#[instrument]
fn _leaves(input: &InputArgs) -> CliResult<()> {
    let text = read_input(input)?;
    let items = parse(&text);
    for leaf in item::leaf_names(&items) {
        output::info(&leaf);
    }
    Ok(())
}

#[instrument]
fn _stats(input: &InputArgs) -> CliResult<()> {
    let text = read_input(input)?;
    let items = parse(&text);
    output::info(&format!("items: {}", item::count(&items)));
    output::info(&format!("depth: {}", item::max_depth(&items)));
    Ok(())
}

#[instrument(skip(settings))]
fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(settings).map_err(SettingsError::from)?;
            output::info(rendered.trim_end());
        }
        ConfigCommands::Path => match Settings::global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("cannot determine config directory"),
        },
        ConfigCommands::Init => {
            let path = Settings::init_global()?;
            output::action("Created", &path.display());
        }
    }
    Ok(())
}
