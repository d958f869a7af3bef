use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markdown_fragment_config::Config;
use markdown_fragment_engine::{
    Sections, convert_sections_to_html, markdown_to_html, read_sections, sanitize_html,
    write_sections,
};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
};

/// Markdown to editor-safe HTML fragments
#[derive(Parser)]
#[command(name = "markdown-fragment", author, version, about)]
struct Cli {
    /// Config file (default: ~/.config/markdown-fragment/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Markdown from FILE (or stdin) to an HTML fragment on stdout
    Convert { file: Option<PathBuf> },

    /// Strip empty list items and editor artifacts from HTML in FILE (or stdin)
    Sanitize { file: Option<PathBuf> },

    /// Convert every .md file under a directory
    Sections {
        /// Sections directory (default: sections_path from the config)
        #[arg(long, value_name = "DIR")]
        input: Option<PathBuf>,

        /// Output directory (default: output_path from the config, else stdout)
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Write a config file with the given defaults
    Init {
        #[arg(long, value_name = "DIR")]
        sections: Option<PathBuf>,

        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[arg(long, default_value = "html")]
        extension: String,
    },
}

fn main() {
    // RUST_LOG wins over the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(Config::config_path);

    match cli.command {
        Command::Convert { file } => {
            let markdown = read_input(file.as_deref())?;
            println!("{}", markdown_to_html(&markdown));
        }
        Command::Sanitize { file } => {
            let html = read_input(file.as_deref())?;
            println!("{}", sanitize_html(&html));
        }
        Command::Sections { input, output } => {
            let config = load_config(&config_path)?;
            let input = input.or(config.sections_path).context(
                "no sections directory: pass --input or set sections_path in the config file",
            )?;
            let output = output.or(config.output_path);
            convert_sections(&input, output.as_deref(), &config.output_extension)?;
        }
        Command::Init {
            sections,
            output,
            extension,
        } => {
            let config = Config {
                sections_path: sections,
                output_path: output,
                output_extension: extension,
            };
            config
                .save_to_path(&config_path)
                .with_context(|| format!("writing {}", config_path.display()))?;
            log::info!("Wrote config to {}", config_path.display());
        }
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    match Config::load_from_path(path)? {
        Some(config) => {
            log::info!("Using config file {}", path.display());
            Ok(config)
        }
        None => {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            log::debug!("Reading {}", path.display());
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn convert_sections(input: &Path, output: Option<&Path>, extension: &str) -> Result<()> {
    log::info!("Reading sections from {}", input.display());
    let sections = read_sections(input)?;
    let html: Sections = convert_sections_to_html(&sections);

    match output {
        Some(dir) => {
            let written = write_sections(dir, &html, extension)?;
            log::info!("Wrote {} sections to {}", written.len(), dir.display());
        }
        None => {
            for (name, fragment) in &html {
                println!("== {name} ==");
                println!("{fragment}");
            }
        }
    }
    Ok(())
}
