use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use commission::Period;
use rust_decimal::Decimal;

/// logisales — sales targets and commission payouts from the command line.
#[derive(Parser, Debug)]
#[command(name = "logisales", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Global settings JSON file (defaults to $LOGISALES_SETTINGS, then the
    /// built-in configuration)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Output as JSON instead of TSV
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the commission breakdown for a set of actuals
    Compute(ComputeArgs),

    /// Show period-adjusted targets and, given actuals, achievement
    Targets(TargetsArgs),

    /// Org or individual stats over the roster history
    Dashboard(DashboardArgs),

    /// Rank the team by average achievement
    Team(TeamArgs),

    /// Check the tier schedule of the active settings
    Validate(ValidateArgs),
}

/// Arguments for the `compute` subcommand.
#[derive(Parser, Debug)]
pub struct ComputeArgs {
    /// Parcels shipped in the period
    #[arg(long)]
    pub parcels: u64,

    /// Revenue earned in the period
    #[arg(long)]
    pub revenue: Decimal,

    /// Merchants onboarded in the period
    #[arg(long, default_value = "0")]
    pub merchants: u64,

    /// Use this employee's effective settings (needs --roster)
    #[arg(long, requires = "roster")]
    pub employee: Option<String>,

    /// Roster JSON file; its global settings replace --settings
    #[arg(long)]
    pub roster: Option<PathBuf>,
}

/// Arguments for the `targets` subcommand.
#[derive(Parser, Debug)]
pub struct TargetsArgs {
    /// Reporting period (daily, weekly, monthly, yearly, custom)
    #[arg(long, default_value = "monthly")]
    pub period: Period,

    /// Actual merchants onboarded
    #[arg(long)]
    pub merchants: Option<u64>,

    /// Actual parcels shipped
    #[arg(long)]
    pub parcels: Option<u64>,

    /// Actual revenue earned
    #[arg(long)]
    pub revenue: Option<Decimal>,
}

/// Arguments for the `dashboard` subcommand.
#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Roster JSON file carrying the history
    #[arg(long)]
    pub roster: PathBuf,

    /// Reporting period (daily, weekly, monthly, yearly, custom)
    #[arg(long, default_value = "monthly")]
    pub period: Period,

    /// First day of a custom range (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day of a custom range (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Show the history against this employee's settings
    #[arg(long)]
    pub employee: Option<String>,
}

/// Arguments for the `team` subcommand.
#[derive(Parser, Debug)]
pub struct TeamArgs {
    /// Roster JSON file
    #[arg(long)]
    pub roster: PathBuf,

    /// Reporting period (daily, weekly, monthly, yearly, custom)
    #[arg(long, default_value = "monthly")]
    pub period: Period,
}

/// Arguments for the `validate` subcommand.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Validate this employee's effective settings (needs --roster)
    #[arg(long, requires = "roster")]
    pub employee: Option<String>,

    /// Roster JSON file; its global settings replace --settings
    #[arg(long)]
    pub roster: Option<PathBuf>,
}
