//! Command-line interface for tokdiff
//! Compares two source files token by token, ignoring changes that only touch whitespace.
//!
//! Usage:
//!   tokdiff `<old>` `<new>` [--format `<format>`]   - Diff two files
//!   tokdiff `<path>` `<old>` `<hex>` `<mode>` `<new>` `<hex>` `<mode>`
//!                                             - Run as GIT_EXTERNAL_DIFF
//!   tokdiff --list-formats                    - List available output formats
//!
//! Exit status is 0 on success and 1 on any error. With `--quiet` nothing is
//! printed and the exit status is 1 if the files differ in anything but whitespace.

use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tokdiff_config::{ConfigError, Loader, TokdiffConfig};
use tokdiff_core::formats::RendererRegistry;
use tokdiff_core::{DiffError, DiffSummary, EditOp, SourceDiff};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: tokdiff oldfile newfile";
const LOG_ENV: &str = "TOKDIFF_LOG";

fn main() {
    init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&matches);
        return;
    }

    let files: Vec<&String> = matches
        .get_many::<String>("files")
        .map(|values| values.collect())
        .unwrap_or_default();
    let Some((old, new)) = select_files(&files) else {
        eprintln!("{}", USAGE);
        process::exit(1);
    };

    let config = load_config(&matches);
    handle_diff_command(&config, old, new, matches.get_flag("quiet"));
}

fn build_cli() -> Command {
    Command::new("tokdiff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Whitespace-tolerant token diff for source files")
        .arg(
            Arg::new("files")
                .help("Old and new file, or the seven arguments git passes to GIT_EXTERNAL_DIFF")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (inline, plain, html, json); defaults to the configured format"),
        )
        .arg(
            Arg::new("highlight")
                .long("highlight")
                .help("Syntax highlight unchanged code")
                .action(ArgAction::SetTrue)
                .overrides_with("no-highlight"),
        )
        .arg(
            Arg::new("no-highlight")
                .long("no-highlight")
                .help("Do not syntax highlight unchanged code")
                .action(ArgAction::SetTrue)
                .overrides_with("highlight"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .env("TOKDIFF_CONFIG")
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Print nothing; exit with 1 if the files differ in more than whitespace")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Pick the old and new file out of the positional arguments.
///
/// Git calls an external diff driver with `path old-file old-hex old-mode
/// new-file new-hex new-mode`.
fn select_files<'a>(files: &[&'a String]) -> Option<(&'a str, &'a str)> {
    match files {
        [old, new] => Some((old.as_str(), new.as_str())),
        [_, old, _, _, new, _, _] => Some((old.as_str(), new.as_str())),
        _ => None,
    }
}

/// Defaults, then the user's file, then command-line flags
fn load_config(matches: &ArgMatches) -> TokdiffConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    let result = apply_flag_overrides(loader, matches).and_then(Loader::build);
    match result {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    }
}

fn apply_flag_overrides(
    mut loader: Loader,
    matches: &ArgMatches,
) -> Result<Loader, ConfigError> {
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("render.format", format.as_str())?;
    }

    let highlight = if matches.get_flag("highlight") {
        Some(true)
    } else if matches.get_flag("no-highlight") {
        Some(false)
    } else {
        git_config_highlight()
    };
    if let Some(highlight) = highlight {
        loader = loader.set_override("render.syntax_highlighting", highlight)?;
    }

    Ok(loader)
}

/// `git config --get tokdiff.highlight`, if git is around and the key is set
fn git_config_highlight() -> Option<bool> {
    let output = process::Command::new("git")
        .args(["config", "--get", "tokdiff.highlight"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout);
    debug!(value = %value.trim(), "tokdiff.highlight from git config");
    Some(value.trim() == "true")
}

/// Handle the diff command
fn handle_diff_command(config: &TokdiffConfig, old: &str, new: &str, quiet: bool) {
    let ops = match compute_diff(config, old, new) {
        Ok(ops) => ops,
        Err(DiffError::UnreadableInput { path, .. }) => {
            eprintln!("Cannot read file: {}", path.display());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if quiet {
        let changed = DiffSummary::of(&ops).has_changes();
        process::exit(if changed { 1 } else { 0 });
    }

    let options = config.render_options();
    let registry = RendererRegistry::with_defaults(&options);
    let format = config.render.format.as_str();
    let output = match registry.render(&ops, format) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Available formats: {}", registry.list_formats().join(", "));
            process::exit(1);
        }
    };

    match format {
        "inline" => {
            println!("tokdiff {} {}", old, new);
            println!("{}", options.colours.delete.paint(&format!("--- {}", old)));
            println!("{}", options.colours.add.paint(&format!("+++ {}", new)));
        }
        "plain" => {
            println!("tokdiff {} {}", old, new);
            println!("--- {}", old);
            println!("+++ {}", new);
        }
        _ => {}
    }
    print!("{}", output);
}

fn compute_diff(config: &TokdiffConfig, old: &str, new: &str) -> Result<Vec<EditOp>, DiffError> {
    let mut diff = SourceDiff::with_engine(config.engine());
    diff.set_original_file(old)?.set_final_file(new)?;
    diff.compute()
}

/// Handle the list-formats command
fn handle_list_formats_command(matches: &ArgMatches) {
    let config = load_config(matches);
    let registry = RendererRegistry::with_defaults(&config.render_options());

    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|renderer| renderer.description())
            .unwrap_or_default();
        println!("  {:<8} {}", name, description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn two_arguments_are_old_and_new() {
        let args = strings(&["a.php", "b.php"]);
        let refs: Vec<&String> = args.iter().collect();
        assert_eq!(select_files(&refs), Some(("a.php", "b.php")));
    }

    #[test]
    fn git_external_diff_arguments() {
        let args = strings(&[
            "src/a.php",
            "/tmp/old_a.php",
            "1111111",
            "100644",
            "src/a.php",
            "2222222",
            "100644",
        ]);
        let refs: Vec<&String> = args.iter().collect();
        assert_eq!(select_files(&refs), Some(("/tmp/old_a.php", "src/a.php")));
    }

    #[test]
    fn other_argument_counts_are_rejected() {
        for count in [0, 1, 3, 6, 8] {
            let args: Vec<String> = (0..count).map(|i| format!("f{i}")).collect();
            let refs: Vec<&String> = args.iter().collect();
            assert_eq!(select_files(&refs), None, "{count} arguments");
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        build_cli().debug_assert();
    }
}
