//! SoulScript CLI: journaling with sentiment-based mood tracking.
//!
//! Commands: init, write, prompts, report, completions. Without a command an
//! interactive menu is shown.

mod config;
mod interactive;
mod screens;

use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use soul_core::prompt::{WritingMode, PROMPTS};
use soul_core::record::parse_date;
use soul_core::SoulError;
use soul_report::chart::ChartOpts;
use soul_report::svg::SvgOpts;
use soul_report::OutputFormat;
use soul_vault::{JournalStore, DEFAULT_FILE_NAME};
use tracing::{debug, Level};

use crate::config::Config;
use crate::screens::{Session, APP_TITLE, WELCOME};

#[derive(Parser)]
#[command(name = "soulscript")]
#[command(version)]
#[command(about = "Journaling and mood tracking with sentiment analysis")]
struct Cli {
    /// Journal file (default: entries.csv in the working directory)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Config file (default: soulscript.toml in the working directory, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Date to use as today, YYYY-MM-DD
    #[arg(long, global = true, value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Create the journal file with its header if it does not exist
    Init,
    /// Write a journal entry and show its mood score
    #[command(alias = "w")]
    Write {
        /// Answer one of the writing prompts (see `soulscript prompts`)
        #[arg(long, short)]
        prompt: Option<usize>,
        /// Entry text; read from stdin when omitted
        #[arg(long, short)]
        text: Option<String>,
    },
    /// List the writing prompts
    Prompts,
    /// Show the mood report for the current week
    #[command(alias = "r")]
    Report {
        /// Include the full listing of entries and the weekly average
        #[arg(long, short)]
        generate: bool,
        /// Listing format
        #[arg(long, short, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
        /// Also save the trend chart as an SVG file
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Text,
    Markdown,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_today(input: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(input).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<SoulError>() {
            Some(soul) if soul.is_validation() => {
                eprintln!("{soul}");
                ExitCode::from(1)
            }
            _ => {
                eprintln!("Error: {err:#}");
                ExitCode::from(2)
            }
        },
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::ERROR };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match cli.command {
        Some(Commands::Prompts) => {
            for (i, prompt) in PROMPTS.iter().enumerate() {
                writeln!(stdout, "{}. {prompt}", i + 1)?;
            }
            return Ok(());
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "soulscript", &mut stdout);
            return Ok(());
        }
        _ => {}
    }

    let config = Config::load(cli.config.as_deref())?;
    let session = open_session(cli.data_file, cli.today, &config)?;
    let created = session.store.init()?;

    match cli.command {
        Some(Commands::Init) => {
            if created {
                writeln!(stdout, "Created {}", session.store.path().display())?;
            } else {
                writeln!(stdout, "{} already exists", session.store.path().display())?;
            }
        }
        Some(Commands::Write { prompt, text }) => {
            let mode = match prompt {
                Some(number) => WritingMode::from_prompt_number(number)?,
                None => WritingMode::FreeWrite,
            };
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            screens::journal_heading(&mut stdout, mode)?;
            screens::submit_entry(&mut stdout, &session, &text)?;
        }
        Some(Commands::Report {
            generate,
            format,
            svg,
        }) => {
            screens::mood_report(&mut stdout, &session, generate, format.into(), svg.as_deref())?;
        }
        Some(Commands::Prompts | Commands::Completions { .. }) => {}
        None => {
            if io::stdin().is_terminal() {
                drop(stdout);
                interactive::run(&session)?;
            } else {
                writeln!(stdout, "{APP_TITLE} v{}", env!("CARGO_PKG_VERSION"))?;
                writeln!(stdout, "{WELCOME}")?;
                writeln!(stdout, "Run `soulscript --help` for usage.")?;
            }
        }
    }

    Ok(())
}

/// Resolve the journal path (flag, then config, then the default file) and
/// the effective date.
fn open_session(
    data_file: Option<PathBuf>,
    today: Option<NaiveDate>,
    config: &Config,
) -> Result<Session> {
    let path = data_file
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME));
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    debug!(path = %path.display(), %today, "opening journal");

    let mut chart = ChartOpts::default();
    if let Some(height) = config.chart_height {
        chart.height = height;
    }
    let mut svg = SvgOpts::default();
    if let Some(width) = config.svg_width {
        svg.width = width;
    }
    if let Some(height) = config.svg_height {
        svg.height = height;
    }

    Ok(Session {
        store: JournalStore::open(path),
        today,
        chart,
        svg,
    })
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read entry from stdin")?;
    Ok(text)
}
