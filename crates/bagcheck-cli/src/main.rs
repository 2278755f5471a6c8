//! CLI entry point for bagcheck.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `bagcheck-app` crate.

mod logging;

use anyhow::Context;
use bagcheck_app::{
    CheckError, CheckInput, EXIT_REFUSED, ExplainOutput, error_report, format_explanation,
    format_not_found, load_catalog, parse_report_json, render_markdown, render_text,
    resolve_settings, run_check, run_explain, run_search, run_show, serialize_error_report,
    serialize_report, verdict_exit_code,
};
use bagcheck_domain::{AirlinePolicy, RawMeasurement};
use bagcheck_settings::{Overrides, ResolvedConfig};
use bagcheck_types::{AirlineSelector, CheckReport};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "bagcheck",
    version,
    about = "Check a bag against an airline's cabin or hold baggage limits"
)]
struct Cli {
    /// Path to bagcheck config TOML (missing file is allowed).
    #[arg(long, global = true, default_value = "bagcheck.toml")]
    config: Utf8PathBuf,

    /// Airline catalog JSON file (overrides config; built-in dataset when unset).
    #[arg(long, global = true)]
    catalog: Option<Utf8PathBuf>,

    /// How many airlines an empty search lists.
    #[arg(long, global = true)]
    search_window: Option<u32>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all log output.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RenderFormat {
    Text,
    Markdown,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one bag against an airline's limits.
    Check {
        /// Airline id (e.g. 1) or short code (e.g. AF).
        #[arg(long)]
        airline: String,

        /// Baggage category: cabin or hold (aliases: carry-on, checked).
        #[arg(long)]
        category: Option<String>,

        /// Length in centimetres.
        #[arg(long, allow_hyphen_values = true)]
        length: Option<String>,

        /// Width in centimetres.
        #[arg(long, allow_hyphen_values = true)]
        width: Option<String>,

        /// Height in centimetres.
        #[arg(long, allow_hyphen_values = true)]
        height: Option<String>,

        /// Weight in kilograms.
        #[arg(long, allow_hyphen_values = true)]
        weight: Option<String>,

        /// Output written to stdout.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Also write the JSON report (or error report) to this path.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Search airlines by name or short code.
    Search {
        /// Case-insensitive fragment; empty lists the first few airlines.
        #[arg(default_value = "")]
        query: String,
    },

    /// Show an airline's cabin and hold limits.
    Show {
        /// Airline id or short code.
        airline: String,

        /// Print the policy as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Render an existing JSON report.
    Render {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        #[arg(long, value_enum, default_value = "text")]
        format: RenderFormat,

        /// Where to write the output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "baggage.dimensions") or code (e.g., "sum_exceeded") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet, cli.log_json)?;

    match cli.cmd {
        Commands::Check {
            ref airline,
            ref category,
            ref length,
            ref width,
            ref height,
            ref weight,
            format,
            ref report_out,
        } => {
            let raw = RawMeasurement {
                length: length.clone(),
                width: width.clone(),
                height: height.clone(),
                weight: weight.clone(),
            };
            cmd_check(
                &cli,
                airline,
                category.clone(),
                raw,
                format,
                report_out.as_deref(),
            )
        }
        Commands::Search { ref query } => cmd_search(&cli, query),
        Commands::Show { ref airline, json } => cmd_show(&cli, airline, json),
        Commands::Render {
            report,
            format,
            output,
        } => cmd_render(&report, format, output.as_deref()),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

/// Load config if present; a missing file is allowed (defaults apply).
fn settings(cli: &Cli, category: Option<String>) -> anyhow::Result<ResolvedConfig> {
    let cfg_text = if cli.config.exists() {
        std::fs::read_to_string(&cli.config)
            .with_context(|| format!("read config: {}", cli.config))?
    } else {
        String::new()
    };

    let overrides = Overrides {
        catalog: cli.catalog.clone(),
        search_window: cli.search_window,
        category,
    };
    resolve_settings(&cfg_text, overrides)
        .with_context(|| format!("load settings from {}", cli.config))
}

fn parse_selector(input: &str) -> anyhow::Result<AirlineSelector> {
    AirlineSelector::parse(input).context("airline must be a non-blank id or short code")
}

fn cmd_check(
    cli: &Cli,
    airline: &str,
    category: Option<String>,
    raw: RawMeasurement,
    format: OutputFormat,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let resolved = settings(cli, category)?;
    let catalog = load_catalog(resolved.catalog.as_deref(), resolved.search_window)?;
    let selector = parse_selector(airline)?;

    let input = CheckInput {
        catalog: &catalog,
        selector: &selector,
        category: resolved.default_category,
        raw: &raw,
    };

    match run_check(input) {
        Ok(output) => {
            let report = output.report;
            if let Some(path) = report_out {
                write_bytes_file(path, &serialize_report(&report)?)
                    .context("write report json")?;
            }
            print_report(&report, format)?;

            let code = verdict_exit_code(&report.verdict);
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            report_refusal(&err, format, report_out)?;
            std::process::exit(EXIT_REFUSED);
        }
    }
}

fn print_report(report: &CheckReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(report)),
        OutputFormat::Markdown => print!("{}", render_markdown(report)),
        OutputFormat::Json => {
            let bytes = serialize_report(report)?;
            println!("{}", String::from_utf8_lossy(&bytes));
        }
    }
    Ok(())
}

fn report_refusal(
    err: &CheckError,
    format: OutputFormat,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let report = error_report(err);
    let bytes = serialize_error_report(&report)?;
    if let Some(path) = report_out {
        write_bytes_file(path, &bytes).context("write error report json")?;
    }
    if format == OutputFormat::Json {
        println!("{}", String::from_utf8_lossy(&bytes));
    }
    eprintln!("bagcheck: {err} [{}]", err.code());
    Ok(())
}

fn cmd_search(cli: &Cli, query: &str) -> anyhow::Result<()> {
    let resolved = settings(cli, None)?;
    let catalog = load_catalog(resolved.catalog.as_deref(), resolved.search_window)?;

    let found = run_search(&catalog, query);
    if found.is_empty() {
        eprintln!("bagcheck: no airline matches {query:?}");
        return Ok(());
    }
    for airline in found {
        println!("{}  {}  {}", airline.id, airline.short_code, airline.name);
    }
    Ok(())
}

fn cmd_show(cli: &Cli, airline: &str, json: bool) -> anyhow::Result<()> {
    let resolved = settings(cli, None)?;
    let catalog = load_catalog(resolved.catalog.as_deref(), resolved.search_window)?;
    let selector = parse_selector(airline)?;

    match run_show(&catalog, &selector) {
        Ok(policy) if json => {
            let text = serde_json::to_string_pretty(&policy).context("serialize policy")?;
            println!("{text}");
            Ok(())
        }
        Ok(policy) => {
            print!("{}", format_policy(&policy));
            Ok(())
        }
        Err(err) => {
            eprintln!("bagcheck: {err} [{}]", err.code());
            std::process::exit(EXIT_REFUSED);
        }
    }
}

fn format_policy(policy: &AirlinePolicy) -> String {
    let c = policy.cabin;
    let h = policy.hold;
    format!(
        "{} ({}), id {}\nCabin: {} × {} × {} cm, {} kg\nHold:  {} cm (sum of dimensions), {} kg\n",
        policy.name,
        policy.short_code,
        policy.id,
        c.length,
        c.width,
        c.height,
        c.weight,
        h.sum_max,
        h.weight,
    )
}

fn cmd_render(
    report_path: &Utf8Path,
    format: RenderFormat,
    output: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let text = match format {
        RenderFormat::Text => render_text(&report),
        RenderFormat::Markdown => render_markdown(&report),
    };

    if let Some(out_path) = output {
        write_bytes_file(out_path, text.as_bytes()).context("write rendered output")?;
    } else {
        print!("{}", text);
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found {
            identifier,
            explanation,
        } => {
            print!("{}", format_explanation(identifier, &explanation));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            suggestions,
        } => {
            eprint!("{}", format_not_found(&identifier, &suggestions));
            std::process::exit(1);
        }
    }
}

fn write_bytes_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {}", path))?;
    Ok(())
}
