//! Command-line interface for refmark
//! Annotates reference fragments from files or stdin and shows the rule order per document kind.
//!
//! Usage:
//!   refmark annotate `<path|->` --kind `<kind>` [--config `<file>`]   - Annotate a fragment
//!   refmark rules [--kind `<kind>`] [--format text|json|yaml] [--config `<file>`]
//!                                                               - List rule order per kind
//!
//! Both commands layer `./refmark.toml`, `REFMARK_*` environment variables and
//! `--config` over the built-in settings.

use clap::{Arg, ArgAction, ArgMatches, Command};
use refmark::refmark::pipeline::{DocumentKind, FragmentLoader, RuleCatalogue, RuleId};
use refmark::refmark::settings::{Loader, Settings};
use refmark::refmark::AnnotateError;
use serde::Serialize;
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const KIND_NAMES: [&str; 4] = [
    "description",
    "function-result",
    "function-parameters",
    "user-markup",
];

fn main() {
    let matches = Command::new("refmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decorates API reference HTML fragments")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v debug, -vv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("annotate")
                .about("Annotate a fragment and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the fragment, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .short('k')
                        .help("Role of the fragment")
                        .value_parser(KIND_NAMES)
                        .default_value("description"),
                )
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("rules")
                .about("List the rules each document kind applies, in order")
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .short('k')
                        .help("Only list this kind")
                        .value_parser(KIND_NAMES),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["text", "json", "yaml"])
                        .default_value("text"),
                )
                .arg(config_arg()),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("annotate", annotate_matches)) => handle_annotate_command(annotate_matches),
        Some(("rules", rules_matches)) => handle_rules_command(rules_matches),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("Settings file layered over the built-in defaults")
}

fn load_settings(matches: &ArgMatches) -> Result<Settings, AnnotateError> {
    let mut loader = Loader::new().with_optional_file("refmark.toml").with_env();
    if let Some(config) = matches.get_one::<String>("config") {
        loader = loader.with_file(config);
    }
    Ok(loader.build()?)
}

/// Handle the annotate command
fn handle_annotate_command(matches: &ArgMatches) -> Result<(), AnnotateError> {
    let path = matches.get_one::<String>("path").unwrap();
    let kind: DocumentKind = matches.get_one::<String>("kind").unwrap().parse()?;

    let settings = load_settings(matches)?;
    let fragments = FragmentLoader::with_settings(&settings)?;

    let output = if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|source| AnnotateError::Io {
                path: "<stdin>".into(),
                source,
            })?;
        fragments.annotate(&source, kind)
    } else {
        fragments.load_and_annotate(path, kind)?
    };

    print!("{}", output);
    Ok(())
}

#[derive(Serialize)]
struct KindListing {
    kind: DocumentKind,
    description: &'static str,
    rules: Vec<RuleListing>,
}

#[derive(Serialize)]
struct RuleListing {
    id: RuleId,
    pattern: String,
}

/// Handle the rules command
fn handle_rules_command(matches: &ArgMatches) -> Result<(), AnnotateError> {
    let kinds = match matches.get_one::<String>("kind") {
        Some(name) => vec![name.parse::<DocumentKind>()?],
        None => DocumentKind::ALL.to_vec(),
    };

    let catalogue = RuleCatalogue::from_settings(&load_settings(matches)?)?;
    let listings: Vec<KindListing> = kinds
        .into_iter()
        .map(|kind| KindListing {
            kind,
            description: kind.description(),
            rules: catalogue
                .rule_set(kind)
                .iter()
                .map(|rule| RuleListing {
                    id: rule.id(),
                    pattern: rule.pattern().to_string(),
                })
                .collect(),
        })
        .collect();

    let format = matches.get_one::<String>("format").unwrap();
    let rendered = match format.as_str() {
        "json" => serde_json::to_string_pretty(&listings).unwrap_or_else(|e| {
            eprintln!("Error formatting rules: {}", e);
            std::process::exit(1);
        }) + "\n",
        "yaml" => serde_yaml::to_string(&listings).unwrap_or_else(|e| {
            eprintln!("Error formatting rules: {}", e);
            std::process::exit(1);
        }),
        _ => render_text(&listings),
    };

    print!("{}", rendered);
    Ok(())
}

fn render_text(listings: &[KindListing]) -> String {
    let mut out = String::new();
    for listing in listings {
        out.push_str(&format!("{} - {}\n", listing.kind, listing.description));
        for (i, rule) in listing.rules.iter().enumerate() {
            out.push_str(&format!("  {}. {:<22} {}\n", i + 1, rule.id.as_str(), rule.pattern));
        }
        out.push('\n');
    }
    out
}
