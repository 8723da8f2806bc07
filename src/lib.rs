//! Probekit: typed model and validator for probeinterface documents.
//!
//! A probeinterface document describes the geometry of neural recording
//! probes: where every electrode contact sits, its shape, which shank it is
//! on, and which acquisition channel records it. Probekit parses these
//! documents into typed values, checks their cross-field consistency, and
//! fills in the per-contact arrays the format allows to be left out.
//!
//! # Modules
//!
//! - [`model`]: Probe, contact and probe group types, JSON and CSV I/O
//! - [`validation`]: The pipeline that turns a raw document into a valid group
//! - [`lint`]: Non-fatal quality checks with a structured report
//! - [`error`]: Error types for probekit operations

pub mod error;
pub mod lint;
pub mod model;
pub mod validation;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

pub use error::ProbeError;
pub use model::{Contact, Probe, ProbeGroup, RawProbe, RawProbeGroup};

/// The probekit CLI application.
#[derive(Parser)]
#[command(name = "probekit")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Validate a probeinterface document and lint its contents.
    Validate(ValidateArgs),
    /// List every contact of a probeinterface document.
    Contacts(ContactsArgs),
    /// Print the validated document with all defaults filled in.
    Normalize(NormalizeArgs),
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// Input JSON file ('-' for stdin).
    input: PathBuf,

    /// Treat lint warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    output: ReportFormat,
}

/// Arguments for the contacts subcommand.
#[derive(clap::Args)]
struct ContactsArgs {
    /// Input JSON file ('-' for stdin).
    input: PathBuf,

    /// Output format for the contact list.
    #[arg(long, value_enum, default_value_t = ContactsFormat::Table)]
    output: ContactsFormat,

    /// Only list contacts wired to a device channel (table and json output).
    #[arg(long)]
    enabled_only: bool,
}

/// Arguments for the normalize subcommand.
#[derive(clap::Args)]
struct NormalizeArgs {
    /// Input JSON file ('-' for stdin).
    input: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum ContactsFormat {
    Table,
    Csv,
    Json,
}

/// Run the probekit CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ProbeError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Validate(args)) => run_validate(args),
        Some(Commands::Contacts(args)) => run_contacts(args),
        Some(Commands::Normalize(args)) => run_normalize(args),
        None => {
            println!("probekit {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Validate and inspect probeinterface probe descriptions.");
            println!();
            println!("Run 'probekit --help' for usage information.");
            Ok(())
        }
    }
}

/// Reads the whole input, treating `-` as stdin.
fn read_input(path: &Path) -> Result<String, ProbeError> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn load_group(path: &Path) -> Result<ProbeGroup, ProbeError> {
    let json = read_input(path)?;
    let group = model::io_json::from_json_str(&json)?;
    tracing::info!(
        path = %path.display(),
        probes = group.probes().len(),
        contacts = group.number_of_contacts(),
        "loaded probe group"
    );
    Ok(group)
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), ProbeError> {
    let group = load_group(&args.input)?;

    let opts = lint::LintOptions {
        strict: args.strict,
    };
    let report = lint::lint_probe_group(&group, &opts);

    match args.output {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report).map_err(ProbeError::Json)?;
            println!("{}", json);
        }
        ReportFormat::Text => {
            println!(
                "Valid probeinterface document: {} probe(s), {} contact(s), {} enabled channel(s)",
                group.probes().len(),
                group.number_of_contacts(),
                group.enabled_channel_count()
            );
            print!("{}", report);
        }
    }

    if report.is_ok() {
        Ok(())
    } else {
        Err(ProbeError::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    }
}

/// Execute the contacts subcommand.
fn run_contacts(args: ContactsArgs) -> Result<(), ProbeError> {
    let group = load_group(&args.input)?;

    match args.output {
        ContactsFormat::Csv => {
            print!("{}", model::io_csv::to_contacts_csv_string(&group)?);
        }
        ContactsFormat::Json => {
            let contacts: Vec<Contact> = group
                .contacts()
                .into_iter()
                .filter(|c| !args.enabled_only || c.is_enabled())
                .collect();
            let json = serde_json::to_string_pretty(&contacts).map_err(ProbeError::Json)?;
            println!("{}", json);
        }
        ContactsFormat::Table => {
            println!(
                "{:>5} {:>5} {:>10} {:>8} {:>7} {:>10} {:>10} {:>6}",
                "probe", "index", "contact", "shank", "channel", "x", "y", "shape"
            );
            for (probe_index, probe) in group.probes().iter().enumerate() {
                for contact in probe.contacts() {
                    if args.enabled_only && !contact.is_enabled() {
                        continue;
                    }
                    println!(
                        "{:>5} {:>5} {:>10} {:>8} {:>7} {:>10.2} {:>10.2} {:>6}",
                        probe_index,
                        contact.index,
                        contact.contact_id,
                        contact.shank_id,
                        contact.device_id,
                        contact.pos_x,
                        contact.pos_y,
                        contact.shape
                    );
                }
            }
        }
    }

    Ok(())
}

/// Execute the normalize subcommand.
fn run_normalize(args: NormalizeArgs) -> Result<(), ProbeError> {
    let group = load_group(&args.input)?;
    println!("{}", model::io_json::to_json_string(&group)?);
    Ok(())
}
