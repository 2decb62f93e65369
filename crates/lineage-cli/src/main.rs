// Rust guideline compliant 2026-02-06

//! Lineage CLI Application
//!
//! Command-line interface for inspecting GEDCOM genealogy files.

use anyhow::Result;
use clap::Parser;
use lineage_cli::commands::{self, lineage::Direction};
use lineage_cli::{create_formatter, logging, CommandContext, OutputFormatter};
use lineage_core::Config;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "lineage",
    version,
    about = "Lineage: GEDCOM parsing and family linking",
    long_about = "Lineage parses GEDCOM genealogy files into a record tree, links families to their members, and answers questions about the resulting family graph.",
    after_help = "Examples:\n  lineage individuals family.ged\n  lineage show family.ged @I1@\n  lineage ancestors family.ged I3 --format plain\n  lineage check family.ged --json\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for lineage_core::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Table => Self::Table,
            FormatArg::Plain => Self::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Reprint the parsed tree
    Print {
        /// GEDCOM file
        file: PathBuf,
    },

    /// List all individuals
    Individuals {
        /// GEDCOM file
        file: PathBuf,
    },

    /// Show one individual and their relations
    Show {
        /// GEDCOM file
        file: PathBuf,

        /// Reference id, e.g. @I1@ or I1
        reference: String,
    },

    /// List surname roots
    Roots {
        /// GEDCOM file
        file: PathBuf,
    },

    /// List all ancestors of an individual
    Ancestors {
        /// GEDCOM file
        file: PathBuf,

        /// Reference id, e.g. @I1@ or I1
        reference: String,
    },

    /// List all descendants of an individual
    Descendants {
        /// GEDCOM file
        file: PathBuf,

        /// Reference id, e.g. @I1@ or I1
        reference: String,
    },

    /// Report unresolved references, duplicate ids and ancestry cycles
    Check {
        /// GEDCOM file
        file: PathBuf,
    },
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_file(path)?,
        None => Config::load(&std::env::current_dir()?)?,
    };
    Ok(config)
}

fn run(command: Commands, ctx: &CommandContext<'_>) -> Result<bool> {
    match command {
        Commands::Print { file } => commands::print::execute(&file, ctx)?,
        Commands::Individuals { file } => commands::individuals::execute(&file, ctx)?,
        Commands::Show { file, reference } => commands::show::execute(&file, &reference, ctx)?,
        Commands::Roots { file } => commands::roots::execute(&file, ctx)?,
        Commands::Ancestors { file, reference } => {
            commands::lineage::execute(&file, &reference, Direction::Ancestors, ctx)?
        }
        Commands::Descendants { file, reference } => {
            commands::lineage::execute(&file, &reference, Direction::Descendants, ctx)?
        }
        Commands::Check { file } => return commands::check::execute(&file, ctx),
    }
    Ok(true)
}

fn fail(formatter: &dyn OutputFormatter, err: &anyhow::Error) -> ExitCode {
    eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let fallback = create_formatter(if cli.json {
        lineage_core::OutputFormat::Json
    } else {
        lineage_core::OutputFormat::Table
    });
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => return fail(fallback.as_ref(), &err),
    };

    // --format beats --json, which beats the configured default.
    let format = match (cli.format, cli.json) {
        (Some(arg), _) => arg.into(),
        (None, true) => lineage_core::OutputFormat::Json,
        (None, false) => config.output_format,
    };
    let formatter = create_formatter(format);

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    if let Err(err) = logging::init_tracing(level, config.log_json) {
        return fail(formatter.as_ref(), &err);
    }

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return ExitCode::SUCCESS;
    };

    let ctx = CommandContext {
        formatter: formatter.as_ref(),
        report_unresolved: config.report_unresolved,
    };
    match run(command, &ctx) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => fail(formatter.as_ref(), &err),
    }
}
