//! Lead Intake - command line entry point
//!
//! Validates and masks Brazilian documents and contacts, and checks complete
//! lead forms read as JSON.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lead_intake::lead::{check_all_steps, StepOutcome};
use lead_intake::{
    mask_cep, mask_cnpj, mask_cpf, mask_phone, validate_cep, validate_cnpj, validate_cpf,
    validate_email, validate_phone, Config, FormWizard, LeadForm, LeadSubmission,
};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lead-intake")]
#[command(about = "Validate and format Brazilian documents and lead forms")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a single value; exits with status 1 when invalid
    Validate {
        kind: ValueKind,
        value: String,
    },

    /// Print the canonical display form of a value
    Format {
        kind: ValueKind,
        value: String,
    },

    /// Check a JSON lead form step by step (reads stdin when no file is given)
    CheckLead {
        file: Option<PathBuf>,
    },

    /// Print the JSON Schema of the lead form
    Schema,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ValueKind {
    Cpf,
    Cnpj,
    Email,
    Phone,
    Cep,
}

#[derive(Debug, Serialize)]
struct LeadReport {
    valid: bool,
    steps: Vec<StepOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    submission: Option<LeadSubmission>,
}

fn validate(kind: ValueKind, value: &str) -> bool {
    match kind {
        ValueKind::Cpf => validate_cpf(value),
        ValueKind::Cnpj => validate_cnpj(value),
        ValueKind::Email => validate_email(value),
        ValueKind::Phone => validate_phone(value),
        ValueKind::Cep => validate_cep(value),
    }
}

fn format(kind: ValueKind, value: &str) -> Result<String> {
    Ok(match kind {
        ValueKind::Cpf => mask_cpf(value),
        ValueKind::Cnpj => mask_cnpj(value),
        ValueKind::Phone => mask_phone(value),
        ValueKind::Cep => mask_cep(value),
        ValueKind::Email => bail!("email addresses have no display mask"),
    })
}

fn read_form(file: Option<PathBuf>) -> Result<LeadForm> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read lead form from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Lead form is not valid JSON")
}

fn check_lead(config: &Config, form: LeadForm) -> LeadReport {
    let rules = config.step_rules();
    let steps = check_all_steps(&form, &rules);
    let submission = FormWizard::with_form(form, rules)
        .submit(&config.lead_origin)
        .ok();

    LeadReport {
        valid: submission.is_some(),
        steps,
        submission,
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only so stdout carries command output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration loaded");

    match args.command {
        Command::Validate { kind, value } => {
            let valid = validate(kind, &value);
            info!(kind = ?kind, valid, "Validated value");
            println!("{}", if valid { "valid" } else { "invalid" });
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Format { kind, value } => {
            println!("{}", format(kind, &value)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckLead { file } => {
            let form = read_form(file)?;
            let report = check_lead(&config, form);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(if report.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Schema => {
            let schema = schemars::schema_for!(LeadForm);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
