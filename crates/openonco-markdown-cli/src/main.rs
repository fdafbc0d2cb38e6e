mod app;
mod terminal;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use openonco_markdown_config::{Config, OutputFormat};
use openonco_markdown_engine::{io, parse_document_with, plain_text, to_html_with};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{Read, stdout},
    path::{Path, PathBuf},
};

use crate::app::App;

#[derive(Parser)]
#[command(name = "openonco-md", version, about = "Render OpenOnco Markdown-subset text")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a document to stdout
    Render {
        /// Input file; `-` or nothing reads stdin
        file: Option<PathBuf>,

        /// Output format: html, json or text (default from config)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Browse a folder of documents in the terminal
    Browse {
        /// Documents folder (default: `docs_path` from config)
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render { file, format } => {
            let format = format.unwrap_or(config.output.format);
            let input = read_input(file.as_deref())?;
            print!("{}", render(&input, format, &config)?);
            Ok(())
        }
        Command::Browse { dir } => {
            let docs_path = match dir.or_else(|| config.docs_path.clone()) {
                Some(path) => path,
                None => bail!(
                    "no documents folder given and no docs_path set in {}",
                    Config::config_path().display()
                ),
            };
            io::validate_docs_dir(&docs_path)
                .with_context(|| format!("documents path '{}' is invalid", docs_path.display()))?;
            browse(docs_path, &config)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            if !path.exists() {
                bail!("config file '{}' does not exist", path.display());
            }
            Config::load_from_path(path)?
        }
        None => Config::load()?,
    };
    if loaded.is_none() {
        log::debug!("no config file, using defaults");
    }
    Ok(loaded.unwrap_or_default())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(io::read_file(path)?),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn render(input: &str, format: OutputFormat, config: &Config) -> Result<String> {
    let doc = parse_document_with(input, &config.render.parse_options());
    let out = match format {
        OutputFormat::Html => to_html_with(&doc, &config.render.html_options()),
        OutputFormat::Json => serde_json::to_string_pretty(&doc)? + "\n",
        OutputFormat::Text => plain_text(&doc) + "\n",
    };
    Ok(out)
}

fn browse(docs_path: PathBuf, config: &Config) -> Result<()> {
    let mut app = App::new(docs_path, config.render.parse_options())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app::run_app(&mut terminal, &mut app);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
