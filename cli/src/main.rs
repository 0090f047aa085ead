//! inky CLI - email template converter

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use inky::{detect_format_from_path, ComponentKind, ConvertOptions, Inky};

#[derive(Parser)]
#[command(name = "inky")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert Inky email templates to table HTML", long_about = None)]
struct Cli {
    /// Input template files (stdin if none)
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Output directory (stdout if not specified)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE", env = "INKY_CONFIG")]
    config: Option<PathBuf>,

    /// Serialize output as XML
    #[arg(long, value_enum)]
    xml: Option<XmlMode>,

    /// Grid units in a full-width row
    #[arg(long, value_name = "N")]
    column_count: Option<u32>,

    /// Use a different tag for a component (e.g. columns=col)
    #[arg(long, value_name = "NAME=TAG")]
    component: Vec<String>,

    /// Collapse whitespace runs in text
    #[arg(long)]
    normalize_whitespace: bool,

    /// Decode character references while loading
    #[arg(long)]
    decode_entities: bool,

    /// Cap on rewrite loop substitutions per document
    #[arg(long, value_name = "N")]
    max_iterations: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the effective component tags
    Components,

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum XmlMode {
    /// XML when the input has an XML prolog or XHTML doctype
    Auto,
    /// Always XML
    On,
    /// Always HTML
    Off,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = build_options(&cli).and_then(|options| match cli.command {
        Some(Commands::Components) => cmd_components(options),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None if cli.inputs.is_empty() => cmd_stdin(options),
        None => cmd_convert(
            &cli.inputs,
            cli.output.as_deref(),
            options,
            cli.xml == Some(XmlMode::Auto),
        ),
    });

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Layer command line flags over the optional config file.
fn build_options(cli: &Cli) -> Result<ConvertOptions, Box<dyn std::error::Error>> {
    let mut options = match &cli.config {
        Some(path) => ConvertOptions::from_json(&fs::read_to_string(path)?)?,
        None => ConvertOptions::default(),
    };

    match cli.xml {
        Some(XmlMode::On) => options.return_as_xml = true,
        Some(XmlMode::Off) => options.return_as_xml = false,
        Some(XmlMode::Auto) | None => {}
    }
    if let Some(count) = cli.column_count {
        options.column_count = count;
    }
    if let Some(max) = cli.max_iterations {
        options.max_iterations = max;
    }
    if cli.normalize_whitespace {
        options.parser.normalize_whitespace = true;
    }
    if cli.decode_entities {
        options.parser.decode_entities = true;
    }
    for spec in &cli.component {
        let (kind, tag) = parse_component(spec)?;
        options.components.insert(kind, tag);
    }

    Ok(options)
}

/// Parse a `name=tag` component override.
fn parse_component(spec: &str) -> Result<(ComponentKind, String), Box<dyn std::error::Error>> {
    let (name, tag) = spec
        .split_once('=')
        .ok_or_else(|| format!("Invalid component override '{}': expected NAME=TAG", spec))?;
    let kind = name.trim().parse::<ComponentKind>()?;
    Ok((kind, tag.trim().to_string()))
}

fn cmd_stdin(options: ConvertOptions) -> Result<(), Box<dyn std::error::Error>> {
    let html = inky::convert_reader(io::stdin().lock(), &options)?;
    io::stdout().write_all(html.as_bytes())?;
    Ok(())
}

/// Convert one file, picking the output mode from its content when `auto_xml` is set.
fn convert_input(
    input: &Path,
    options: &ConvertOptions,
    auto_xml: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    if !auto_xml {
        return Ok(inky::convert_file(input, options)?);
    }
    let format = detect_format_from_path(input)?;
    log::debug!("{}: {}", input.display(), format);
    let options = options.clone().with_xml(format.flavor.prefers_xml());
    Ok(inky::convert_file(input, &options)?)
}

fn cmd_convert(
    inputs: &[PathBuf],
    output: Option<&Path>,
    options: ConvertOptions,
    auto_xml: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    options.validate()?;

    let Some(output_dir) = output else {
        let mut stdout = io::stdout().lock();
        for input in inputs {
            let html = convert_input(input, &options, auto_xml)?;
            stdout.write_all(html.as_bytes())?;
        }
        return Ok(());
    };

    fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut written = Vec::with_capacity(inputs.len());
    for input in inputs {
        pb.set_message(input.display().to_string());
        let html = convert_input(input, &options, auto_xml)?;
        let path = output_path(input, output_dir)?;
        fs::write(&path, html)?;
        written.push(path);
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("{}", "Output files:".green().bold());
    for path in &written {
        println!("  {}", path.display());
    }

    Ok(())
}

/// Destination of a converted file: same file name inside the output directory.
fn output_path(input: &Path, output_dir: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let name = input
        .file_name()
        .ok_or_else(|| format!("Input path has no file name: {}", input.display()))?;
    Ok(output_dir.join(name))
}

fn cmd_components(options: ConvertOptions) -> Result<(), Box<dyn std::error::Error>> {
    let inky = Inky::from_options(options)?;

    println!("{}", "Components".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (kind, tag) in inky.registry().iter() {
        let marker = if tag == kind.default_tag() {
            String::new()
        } else {
            format!(" (default: {})", kind.default_tag()).dimmed().to_string()
        };
        println!("{:<12} <{}>{}", kind.name().bold(), tag, marker);
    }

    println!();
    println!("{}: {}", "Column count".bold(), inky.options().column_count);
    println!("{}: {}", "Output".bold(), inky.options().output_mode());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "inky".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Email template to table HTML converter");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/inky".dimmed());
    println!("License: MIT");
}
