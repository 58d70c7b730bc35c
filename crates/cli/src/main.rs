use anyhow::Result;
use clap::{Parser, Subcommand};

use classdef_cli::commands::{layout_command, parse_annotation_base, show_class_command};
use classdef_cli::init_logging;

/// Canonical class-definition inspector.
///
/// This CLI is a thin wrapper around `classdef-core` (exposed in code as
/// `classdef_core`). All substantive logic lives in the library.
#[derive(Parser, Debug)]
#[command(
    name = "classdef",
    version,
    about = "Inspect classes in their canonical container form",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the library version.
    Info,

    /// Canonicalize a single class description and print its shape.
    ///
    /// Fields are split into static/instance, methods into direct/virtual, and
    /// every bucket is printed in canonical order.
    Show {
        /// Path to a class description (YAML, or JSON with a `.json` extension).
        #[arg(long)]
        input: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Assign class definition indices and annotation directory offsets for a
    /// file of classes.
    Layout {
        /// Path to a `classes:` document (YAML, or JSON with a `.json` extension).
        #[arg(long)]
        input: String,

        /// First offset available for annotation directories (decimal or 0x-hex,
        /// non-zero).
        #[arg(long, default_value = "0x70", value_parser = parse_annotation_base)]
        annotation_base: u32,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to the Info command if none is provided.
    match cli.command.unwrap_or(Command::Info) {
        Command::Info => info_command(),
        Command::Show { input, json } => show_class_command(&input, json)?,
        Command::Layout { input, annotation_base, json } => {
            layout_command(&input, annotation_base, json)?
        }
    }

    Ok(())
}

fn info_command() {
    println!("classdef v{}", classdef_core::version());
}
