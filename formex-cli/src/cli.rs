//! Command-line surface.
//!
//! With no subcommand the binary runs the interactive menu (see [`crate::menu`]);
//! `check` validates a single input non-interactively for scripting, and
//! `list` prints the catalog table.

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use formex::{Format, FormatKind};

#[derive(Parser)]
#[command(name = "formex", version, about = "Anchored string-format validator catalog")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate one input against a format; the exit code mirrors the verdict
    Check {
        /// Stable format name (see `formex list`)
        format: String,
        /// Candidate string to validate
        input: String,
        /// Print the outcome as JSON instead of the verdict phrase
        #[arg(long)]
        json: bool,
    },
    /// Print the format catalog (name, kind, example)
    List,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Command::Check {
            format,
            input,
            json,
        }) => check(&format, &input, json),
        Some(Command::List) => {
            list();
            Ok(())
        }
        None => crate::menu::run(&mut std::io::stdin().lock()),
    }
}

fn check(name: &str, input: &str, json: bool) -> anyhow::Result<()> {
    let format: Format = name
        .parse()
        .with_context(|| format!("'{name}' is not a catalog entry; run `formex list`"))?;
    let outcome = format.evaluate(input);

    if json {
        let report = serde_json::json!({
            "format": format.name(),
            "input": input,
            "outcome": outcome,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{outcome}");
    }

    if !outcome.is_positive() {
        std::process::exit(1);
    }
    Ok(())
}

fn list() {
    println!("{:<16} {:<16} EXAMPLE", "NAME", "KIND");
    for format in Format::ALL {
        let kind = match format.kind() {
            FormatKind::Boolean => "boolean",
            FormatKind::Classification => "classification",
        };
        println!("{:<16} {:<16} {}", format.name(), kind, format.example());
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => return,
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
