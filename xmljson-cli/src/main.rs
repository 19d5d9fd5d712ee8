//! xmljson CLI
//!
//! Converts an XML document to JSON, or a JSON document back to XML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use xmljson_common::warning::clear_warnings;
use xmljson_xml::{ParseOptions, parse_document, to_xml};

/// Convert XML documents to JSON
#[derive(Parser, Debug)]
#[command(name = "xmljson")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Convert a file
    xmljson ./note.xml

    # Convert inline XML, keeping every value a string
    xmljson --keep-strings --xml '<a>5</a>'

    # Load options from a JSON file, overriding the depth limit
    xmljson --config options.json --max-depth 64 ./deep.xml

    # Convert JSON back to XML under a root element
    xmljson --to-xml --root doc ./data.json
"#)]
struct Cli {
    /// Path to the input document
    #[arg(value_name = "FILE", required_unless_present = "xml")]
    path: Option<PathBuf>,

    /// Convert this string instead of reading a file
    #[arg(long, value_name = "TEXT", conflicts_with = "path")]
    xml: Option<String>,

    /// Keep attribute values and text as strings
    #[arg(short = 'k', long)]
    keep_strings: bool,

    /// Maximum element nesting depth
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// JSON file with parse options (`keep_strings`, `max_depth`)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Treat the input as JSON and print XML
    #[arg(long)]
    to_xml: bool,

    /// Root element to wrap XML output in (with --to-xml)
    #[arg(long, value_name = "NAME", requires = "to_xml")]
    root: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let input = read_input(&cli)?;

    if cli.to_xml {
        let value: Value = serde_json::from_str(&input).context("Input is not valid JSON")?;
        println!("{}", to_xml(&value, cli.root.as_deref()));
        return Ok(());
    }

    let options = resolve_options(&cli)?;
    clear_warnings();
    let document = parse_document(&input, &options).context("Failed to convert XML")?;
    let value = Value::Object(document);

    let json = if cli.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{json}");
    Ok(())
}

/// Read the document from `--xml` or the positional path
fn read_input(cli: &Cli) -> Result<String> {
    if let Some(ref text) = cli.xml {
        Ok(text.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    } else {
        anyhow::bail!("No input: pass a file path or --xml")
    }
}

/// Merge options from the config file (if any) with command-line flags.
///
/// Flags win over the file; the file wins over defaults.
fn resolve_options(cli: &Cli) -> Result<ParseOptions> {
    let mut options = match cli.config {
        Some(ref path) => load_options(path)?,
        None => ParseOptions::default(),
    };
    if cli.keep_strings {
        options.keep_strings = true;
    }
    if let Some(max_depth) = cli.max_depth {
        options.max_depth = max_depth;
    }
    Ok(options)
}

fn load_options(path: &Path) -> Result<ParseOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}
