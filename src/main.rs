//! filecompare CLI entry point.
//!
//! Loads two texts, compares them line by line and prints the highlighted report.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use filecompare::application::compare::{ReportRow, line_label};
use filecompare::application::session::CompareSession;
use filecompare::domain::{Algorithm, DiffOptions, Mode, Side};
use filecompare::infra::app_config::{self, AppConfig};
use filecompare::infra::diff::{diff_line_with, similarity};
use filecompare::infra::files::STDIN_PATH;
use filecompare::ui::terminal::{render_report, render_row};
use filecompare::ui::theme::ThemeKind;

#[derive(Parser, Debug)]
#[command(name = "filecompare")]
#[command(version)]
#[command(about = "Compare two text files line by line", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug, Clone, Default)]
struct EngineArgs {
    /// Diff mode (lcs-equal-plain, lcs-all-colored, positional)
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Matcher for the LCS modes (ratcliff-obershelp, myers, patience)
    #[arg(short, long)]
    algorithm: Option<Algorithm>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two files (`-` reads one of them from stdin)
    Compare {
        /// Source file
        source: PathBuf,
        /// Target file
        target: PathBuf,

        #[command(flatten)]
        engine: EngineArgs,

        /// Color theme (dark, light)
        #[arg(short, long)]
        theme: Option<ThemeKind>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },

    /// Diff two single lines given on the command line
    Line {
        /// Source line
        source: String,
        /// Target line
        target: String,

        #[command(flatten)]
        engine: EngineArgs,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = app_config::load_config();

    match args.command {
        Commands::Compare {
            source,
            target,
            engine,
            theme,
            format,
            no_color,
        } => {
            if source.as_os_str() == STDIN_PATH && target.as_os_str() == STDIN_PATH {
                anyhow::bail!("Only one of source and target can be read from stdin");
            }

            let mut session =
                CompareSession::new(engine.options(&config), theme.unwrap_or(config.theme));
            session
                .load(Some(source.as_path()), Some(target.as_path()))
                .context("Failed to load files")?;

            let report = session.compare();
            match format {
                OutputFormat::Text => {
                    let color = use_color(&config, no_color);
                    print!("{}", render_report(&report, &session.theme.theme(), color));
                }
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report)
                        .context("Failed to serialize report")?;
                    println!("{json}");
                }
            }

            Ok(if report.is_identical() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }

        Commands::Line {
            source,
            target,
            engine,
            no_color,
        } => {
            let options = engine.options(&config);
            let (source_spans, target_spans) = diff_line_with(&source, &target, &options);
            let theme = config.theme.theme();
            let color = use_color(&config, no_color);

            let mut out = String::new();
            for (side, spans) in [(Side::Source, source_spans), (Side::Target, target_spans)] {
                let row = ReportRow {
                    side,
                    label: line_label(1, side),
                    spans,
                };
                render_row(&mut out, &row, &theme, color);
            }
            print!("{out}");
            println!("similarity: {:.3}", similarity(&source, &target));

            Ok(if source == target {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }

        Commands::Config { init } => {
            let path = if init {
                app_config::save_config(&config).context("Failed to write config")?
            } else {
                app_config::config_path()
            };
            println!("# {}", path.display());
            print!(
                "{}",
                toml::to_string_pretty(&config).context("Failed to serialize config")?
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Colors need the config, the flag and a terminal on stdout to agree.
fn use_color(config: &AppConfig, no_color: bool) -> bool {
    config.color && !no_color && std::io::stdout().is_terminal()
}

impl EngineArgs {
    fn options(&self, config: &AppConfig) -> DiffOptions {
        DiffOptions::new(
            self.mode.unwrap_or(config.mode),
            self.algorithm.unwrap_or(config.algorithm),
        )
    }
}
