use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use plotguide::guide::OPTION_NAMES;
use plotguide::{Alignment, GuideKind, GuideSet, Options, Theme, storage};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "plotguide",
    version,
    about = "Build and resolve legend/colorbar guide settings"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a guide from options, resolve its defaults and print it as JSON.
    Resolve(ResolveArgs),
    /// List guide kinds and the options each accepts.
    Kinds,
}

#[derive(Args, Debug)]
struct ResolveArgs {
    /// Guide kind (legend, colorbar).
    #[arg(short, long, default_value = "legend")]
    kind: GuideKind,
    /// Aesthetic the guide explains; an unset title is derived from it (`title_text`).
    #[arg(short, long, default_value = "colour")]
    aesthetic: String,
    /// JSON file with guide options.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Option override as key=value; value is parsed as JSON, else taken as a string.
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
    /// JSON file with theme parameters.
    #[arg(long)]
    theme: Option<PathBuf>,
    /// Override the theme's legend_title_align.
    #[arg(long)]
    title_align: Option<Alignment>,
    /// Write the resolved guide to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn parse_assignment(s: &str) -> Result<(String, Value)> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("invalid --set '{}', expected KEY=VALUE", s))?;
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.trim().to_string(), value))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Kinds => {
            cmd_kinds();
            Ok(())
        }
    }
}

fn cmd_resolve(args: ResolveArgs) -> Result<()> {
    let mut options: Options = match &args.options {
        Some(path) => storage::load_options(path)?,
        None => Options::new(),
    };
    for s in &args.set {
        let (key, value) = parse_assignment(s)?;
        options.insert(key, value);
    }

    let mut theme = match &args.theme {
        Some(path) => storage::load_theme(path)?,
        None => Theme::new(),
    };
    if let Some(align) = args.title_align {
        theme = theme.with_title_align(align);
    }

    let guide = args.kind.build(&options)?;
    let mut set = GuideSet::new();
    set.insert(args.aesthetic.clone(), guide);
    let resolved = set
        .resolve(&theme)
        .with_context(|| format!("resolving {} guide for '{}'", args.kind, args.aesthetic))?;

    match args.out.as_ref() {
        Some(path) => {
            storage::save_json(&resolved, path)?;
            eprintln!("Wrote {} guide to {}", args.kind, path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&resolved)?),
    }
    Ok(())
}

fn cmd_kinds() {
    for kind in GuideKind::ALL {
        println!("{} ({})", kind.name(), kind.type_name());
        println!("  options: {}", kind.option_names().join(", "));
    }
    println!("shared options: {}", OPTION_NAMES.join(", "));
}
