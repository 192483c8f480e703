use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{build_tree, verdict, Traversal, TreeNode};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Palindrome { number }) => cmd_palindrome(&load_settings(cli)?, *number),
        Some(Commands::Tree {
            order,
            all,
            iterative,
            show,
            values,
        }) => cmd_tree(&load_settings(cli)?, values, *order, *all, *iterative, *show),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => {
            cmd_completion(*shell);
            Ok(())
        }
        None => cmd_palindrome(&load_settings(cli)?, None),
    }
}

/// Only commands that read settings load them; `config path`, `config template`
/// and `completion` must work with a broken config file.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    Ok(settings)
}

#[instrument(skip(settings))]
fn cmd_palindrome(settings: &Settings, number: Option<i64>) -> CliResult<()> {
    let n = number.unwrap_or(settings.palindrome.sample);
    output::info(&verdict(n)?);
    Ok(())
}

#[instrument(skip(settings, values))]
fn cmd_tree(
    settings: &Settings,
    values: &[String],
    order: Option<Traversal>,
    all: bool,
    iterative: bool,
    show: bool,
) -> CliResult<()> {
    let iterative = iterative || settings.tree.iterative;
    let root = build_tree(values.iter().map(String::as_str));
    let Some(root) = root else {
        if all || show {
            return Err(CliError::InvalidArgs(
                "--all and --show need at least one value".to_string(),
            ));
        }
        output::warning("no values given, the tree is empty");
        return Ok(());
    };

    if all {
        for order in Traversal::ALL {
            output::action(&order.to_string(), &traversal_line(Some(&*root), order, iterative));
        }
    } else {
        let order = order.unwrap_or(settings.tree.order);
        output::info(&traversal_line(Some(&*root), order, iterative));
    }

    if show {
        output::header(&format!("{} nodes, depth {}", root.len(), root.depth()));
        output::info(&root.to_display_tree());
    }
    Ok(())
}

/// Space separated traversal of `root`.
pub fn traversal_line<T>(root: Option<&TreeNode<T>>, order: Traversal, iterative: bool) -> String
where
    T: Clone + std::fmt::Display,
{
    if iterative {
        order.walk(root).join(" ")
    } else {
        order.collect(root).iter().join(" ")
    }
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&load_settings(cli)?.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no home directory, global config disabled"),
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn cmd_completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Traversal::Pre, "1 2 4 5 3 6 7")]
    #[case(Traversal::In, "4 2 5 1 6 3 7")]
    #[case(Traversal::Post, "4 5 2 6 7 3 1")]
    #[case(Traversal::Level, "1 2 3 4 5 6 7")]
    fn test_traversal_line(#[case] order: Traversal, #[case] expected: &str) {
        let root = build_tree(["1", "2", "3", "4", "5", "6", "7"]);
        assert_eq!(traversal_line(root.as_deref(), order, false), expected);
        assert_eq!(traversal_line(root.as_deref(), order, true), expected);
    }

    #[test]
    fn test_traversal_line_empty() {
        let root = build_tree(Vec::<u8>::new());
        assert_eq!(traversal_line(root.as_deref(), Traversal::In, false), "");
    }

    fn parse(args: &[&str]) -> Cli {
        use clap::Parser;
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn given_broken_config_when_running_config_path_then_succeeds() {
        let dir = tempfile::TempDir::new().unwrap();
        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "garbage [").unwrap();
        let bad = bad.to_str().unwrap();

        assert!(execute_command(&parse(&["algokit", "--config", bad, "config", "path"])).is_ok());
        assert!(execute_command(&parse(&["algokit", "--config", bad, "config", "template"])).is_ok());
        assert!(execute_command(&parse(&["algokit", "--config", bad, "completion", "bash"])).is_ok());
    }

    #[test]
    fn given_broken_config_when_running_config_show_then_fails_with_config_code() {
        let dir = tempfile::TempDir::new().unwrap();
        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "garbage [").unwrap();

        let err = execute_command(&parse(&["algokit", "--config", bad.to_str().unwrap(), "config", "show"]))
            .unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }

    #[rstest]
    #[case(&["algokit", "tree", "--show"])]
    #[case(&["algokit", "tree", "--all"])]
    fn given_no_values_when_asking_for_output_then_invalid_args(#[case] args: &[&str]) {
        let err = execute_command(&parse(args)).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgs(_)));
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_no_values_without_output_flags_then_only_warns() {
        assert!(execute_command(&parse(&["algokit", "tree"])).is_ok());
    }
}
