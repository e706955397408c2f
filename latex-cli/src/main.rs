//! Command-line interface for merging LaTeX comments into document trees
//!
//! The grammar runs elsewhere; this tool takes its output (the primary tree plus the
//! out-of-band comment list, as JSON) together with the source text and prints the
//! merged tree.
//!
//! Usage:
//!   latex-ast merge `<parsed.json>` --source `<file.tex>` [--format json|outline]
//!   latex-ast extensions                                   - List claimed file extensions
//!   latex-ast post-process `<messages.json>` [--file-path `<path>`]

mod logging;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use latex_ast::latex::formats::to_outline;
use latex_ast::latex::grammar::PreParsed;
use latex_ast::latex::processor::{LatexProcessor, ProcessorOptions};
use latex_config::{LatexConfig, Loader, OutputFormat};
use std::fs;
use tracing::info;

fn cli() -> Command {
    Command::new("latex-ast")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Merge out-of-band LaTeX comments into a textlint document tree")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log filter, e.g. 'debug' or 'latex_ast=trace' (overrides RUST_LOG)"),
        )
        .subcommand(
            Command::new("merge")
                .about("Merge the comments of a grammar result into its tree")
                .arg(
                    Arg::new("parsed")
                        .help("Grammar output: { \"ast\": ..., \"comments\": [...] }")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("source")
                        .long("source")
                        .short('s')
                        .help("The LaTeX source the grammar output was produced from")
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (default from configuration: json)")
                        .value_parser(["json", "outline"]),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Print JSON on a single line")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("extensions").about("List the file extensions the processor claims"))
        .subcommand(
            Command::new("post-process")
                .about("Label a JSON array of diagnostics with the file they belong to")
                .arg(
                    Arg::new("messages")
                        .help("JSON array of diagnostics")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("file-path")
                        .long("file-path")
                        .help("Path reported for the diagnostics"),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();
    if let Err(error) = run(&matches) {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let Some((command, sub)) = matches.subcommand() else {
        anyhow::bail!("no command given");
    };
    logging::init(sub.get_one::<String>("log-level").map(String::as_str))?;

    match command {
        "merge" => handle_merge_command(sub),
        "extensions" => handle_extensions_command(sub),
        "post-process" => handle_post_process_command(sub),
        other => anyhow::bail!("unknown command '{other}'"),
    }
}

fn load_config(matches: &ArgMatches, overrides: &[(&str, String)]) -> Result<LatexConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader = loader.with_env();
    for (key, value) in overrides {
        loader = loader
            .set_override(key, value.as_str())
            .with_context(|| format!("invalid value for {key}"))?;
    }
    loader.build().context("failed to load configuration")
}

/// Handle the merge command
fn handle_merge_command(sub: &ArgMatches) -> Result<()> {
    let mut overrides = Vec::new();
    if let Some(format) = sub.get_one::<String>("format") {
        overrides.push(("output.format", format.clone()));
    }
    if sub.get_flag("compact") {
        overrides.push(("output.pretty", "false".to_string()));
    }
    let config = load_config(sub, &overrides)?;

    let parsed_path = sub
        .get_one::<String>("parsed")
        .context("missing grammar output path")?;
    let source_path = sub
        .get_one::<String>("source")
        .context("missing source path")?;

    let parsed = fs::read_to_string(parsed_path)
        .with_context(|| format!("failed to read {parsed_path}"))?;
    let text = fs::read_to_string(source_path)
        .with_context(|| format!("failed to read {source_path}"))?;
    let grammar = PreParsed::from_json(&parsed)
        .with_context(|| format!("failed to load grammar output from {parsed_path}"))?;

    info!(source = %source_path, "merging comments");
    let processor = LatexProcessor::new(grammar, ProcessorOptions::from(config.processor));
    let root = processor
        .pre_process(&text)
        .with_context(|| format!("failed to process {source_path}"))?;

    let output = match config.output.format {
        OutputFormat::Json if config.output.pretty => serde_json::to_string_pretty(&root)?,
        OutputFormat::Json => serde_json::to_string(&root)?,
        OutputFormat::Outline => to_outline(&root),
    };
    println!("{}", output.trim_end());
    Ok(())
}

/// Handle the extensions command
fn handle_extensions_command(sub: &ArgMatches) -> Result<()> {
    let config = load_config(sub, &[])?;
    let options = ProcessorOptions::from(config.processor);
    for extension in options.available_extensions() {
        println!("{extension}");
    }
    Ok(())
}

/// Handle the post-process command
fn handle_post_process_command(sub: &ArgMatches) -> Result<()> {
    let config = load_config(sub, &[])?;
    let messages_path = sub
        .get_one::<String>("messages")
        .context("missing messages path")?;

    let messages = fs::read_to_string(messages_path)
        .with_context(|| format!("failed to read {messages_path}"))?;
    let messages: Vec<serde_json::Value> = serde_json::from_str(&messages)
        .with_context(|| format!("{messages_path} is not a JSON array of diagnostics"))?;

    let options = ProcessorOptions::from(config.processor);
    let file_path = sub.get_one::<String>("file-path").map(String::as_str);
    let labelled = options.post_process(messages, file_path);

    let output = if config.output.pretty {
        serde_json::to_string_pretty(&labelled)?
    } else {
        serde_json::to_string(&labelled)?
    };
    println!("{output}");
    Ok(())
}
