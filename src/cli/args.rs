//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::Traversal;

/// Small algorithm exercises: digit palindromes and level-order binary trees
#[derive(Parser, Debug)]
#[command(name = "algokit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file, overrides the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Without a subcommand the configured sample number is checked
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a number reads the same in both directions
    Palindrome {
        /// Number to check (default: palindrome.sample from config)
        #[arg(allow_negative_numbers = true)]
        number: Option<i64>,
    },

    /// Build a tree from level-order values and print a traversal
    Tree {
        /// Traversal order: pre, in, post or level (default: tree.order from config)
        #[arg(short, long)]
        order: Option<Traversal>,

        /// Print every traversal order, one per line
        #[arg(short, long, conflicts_with = "order")]
        all: bool,

        /// Use explicit-stack iterators instead of recursion
        #[arg(short, long)]
        iterative: bool,

        /// Render the tree after the traversal
        #[arg(short, long)]
        show: bool,

        /// Values in level order: children of index i sit at 2i+1 and 2i+2
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
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

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the global config file location
    Path,
    /// Print a commented config template
    Template,
}
