//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

/// Parse nested field-list notation into trees: sort, inspect, and render
#[derive(Parser, Debug)]
#[command(name = "fieldtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Input selection shared by the data subcommands: a literal notation
/// string, a file, or stdin when neither is given.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Notation to parse, e.g. 'a, b(c, d), e' (stdin if omitted)
    pub notation: Option<String>,

    /// Read the notation from a file instead
    #[arg(short, long, value_hint = ValueHint::FilePath, conflicts_with = "notation")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print parsed hierarchy as indented list
    Show {
        #[command(flatten)]
        input: InputArgs,

        /// Sort alphabetically at every level
        #[arg(short, long)]
        sort: bool,
    },

    /// Print hierarchy sorted alphabetically at every level
    Sort {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Render hierarchy as box-drawing tree
    Tree {
        #[command(flatten)]
        input: InputArgs,

        /// Sort alphabetically at every level
        #[arg(short, long)]
        sort: bool,
    },

    /// List leaf names
    Leaves {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show item count and nesting depth
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,

    /// Create config template
    Init,
}
