//! Command-line interface for building binarized sentiment treebanks
//!
//! Reads an annotated input file, parses and labels every sentence, and writes
//! the token list and labeled tree of each one to stderr (or `--output`).
//!
//! Usage:
//!   build-binarized-dataset -input `<path>` [-parserModel `<model>`]
//!   build-binarized-dataset --input `<path>` [--config `<toml>`] [--format json] [--output `<path>`]
//!
//! The single-dash spellings are accepted case-insensitively.

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgMatches, Command};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use treebank_config::{Loader, TreebankConfig};
use treebank_core::treebank::binarization::TreeBinarizer;
use treebank_core::treebank::loader::InputLoader;
use treebank_core::treebank::parsing::load_parser;
use treebank_core::treebank::DatasetBuilder;

/// Legacy single-dash flags and the long flags they stand for.
const LEGACY_FLAGS: [(&str, &str); 2] = [("-input", "--input"), ("-parsermodel", "--parser-model")];

/// Flags whose next argument is their value.
const VALUE_FLAGS: [&str; 9] = [
    "--input",
    "--parser-model",
    "--config",
    "-c",
    "--format",
    "-f",
    "--output",
    "-o",
    "--unknown-label",
];

fn main() {
    init_tracing();

    let matches = cli().get_matches_from(normalize_legacy_flags(std::env::args_os()));
    let config = load_config(&matches);

    let Some(input) = matches.get_one::<String>("input") else {
        eprintln!("Error: no input file given (use -input <path>)");
        std::process::exit(1);
    };

    let parser = load_parser(&config.parser.model).unwrap_or_else(|e| {
        eprintln!("Error loading parser model: {}", e);
        std::process::exit(1);
    });
    let binarizer = TreeBinarizer::new(config.binarizer.head_rules);
    let builder = DatasetBuilder::new(parser, Arc::new(binarizer), config.pipeline_settings());

    let loader = InputLoader::from_path(input).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let mut out = open_output(matches.get_one::<String>("output").map(String::as_str));
    if let Err(e) = loader.build(&builder, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cli() -> Command {
    Command::new("build-binarized-dataset")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds a binarized sentiment treebank from annotated sentences")
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("PATH")
                .help("Annotated input: sentence line, label lines, blank line between sentences"),
        )
        .arg(
            Arg::new("parser-model")
                .long("parser-model")
                .value_name("MODEL")
                .help("Parser model: builtin:english-flat, a *.json lexicon or a bracketed treebank"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_parser(PossibleValuesParser::new(["bracketed", "json"]))
                .help("Output format (default: bracketed)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Write the dataset to a file instead of stderr"),
        )
        .arg(
            Arg::new("unknown-label")
                .long("unknown-label")
                .value_name("LABEL")
                .allow_hyphen_values(true)
                .help("Label for constituents without an annotation (default: -1)"),
        )
}

/// Rewrites legacy flags in flag position. Option values pass through as given.
fn normalize_legacy_flags(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut normalized = Vec::new();
    let mut value_next = false;
    for arg in args {
        let arg = if value_next {
            value_next = false;
            arg
        } else {
            let arg = normalize_legacy_flag(arg);
            value_next = arg.to_str().is_some_and(|text| VALUE_FLAGS.contains(&text));
            arg
        };
        normalized.push(arg);
    }
    normalized
}

fn normalize_legacy_flag(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    match LEGACY_FLAGS
        .iter()
        .find(|(legacy, _)| text.eq_ignore_ascii_case(legacy))
    {
        Some((_, long)) => OsString::from(*long),
        None => arg,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Defaults, then `--config`, then individual flags.
fn load_config(matches: &ArgMatches) -> TreebankConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    let overrides = [
        ("parser.model", "parser-model"),
        ("output.format", "format"),
        ("labels.unknown", "unknown-label"),
    ];
    for (key, arg) in overrides {
        if let Some(value) = matches.get_one::<String>(arg) {
            loader = loader.set_override(key, value.clone()).unwrap_or_else(|e| {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            });
        }
    }

    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn open_output(path: Option<&str>) -> Box<dyn Write> {
    match path {
        Some(path) => {
            let file = File::create(path).unwrap_or_else(|e| {
                eprintln!("Error creating {}: {}", path, e);
                std::process::exit(1);
            });
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stderr()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_flags_are_normalized() {
        assert_eq!(normalize_legacy_flag("-input".into()), OsString::from("--input"));
        assert_eq!(normalize_legacy_flag("-INPUT".into()), OsString::from("--input"));
        assert_eq!(
            normalize_legacy_flag("-parserModel".into()),
            OsString::from("--parser-model")
        );
        assert_eq!(normalize_legacy_flag("-1".into()), OsString::from("-1"));
        assert_eq!(normalize_legacy_flag("data.txt".into()), OsString::from("data.txt"));
    }

    #[test]
    fn test_option_values_are_not_rewritten() {
        let args = ["build-binarized-dataset", "--unknown-label", "-INPUT", "-input", "in.txt"]
            .map(OsString::from);
        assert_eq!(
            normalize_legacy_flags(args),
            ["build-binarized-dataset", "--unknown-label", "-INPUT", "--input", "in.txt"]
                .map(OsString::from)
        );

        let args = ["prog", "-input", "-parserModel", "-parserModel", "m"].map(OsString::from);
        assert_eq!(
            normalize_legacy_flags(args),
            ["prog", "--input", "-parserModel", "--parser-model", "m"].map(OsString::from)
        );

        let matches = cli().get_matches_from(normalize_legacy_flags(
            ["prog", "--unknown-label", "-input", "-input", "data.txt"].map(OsString::from),
        ));
        assert_eq!(
            matches.get_one::<String>("unknown-label").map(String::as_str),
            Some("-input")
        );
        assert_eq!(
            matches.get_one::<String>("input").map(String::as_str),
            Some("data.txt")
        );
    }

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }
}
