mod cli;
mod config;
mod error;
mod output;

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use clap::Parser;
use cli::Command;
use commission::{
    adjust_targets, compute_breakdown, leaderboard, load_roster, period_totals, totals,
    Achievement, CommissionError, DateRange, Directory, PerformanceSnapshot, Period, Selection,
    TargetSettings,
};
use error::CliError;
use output::{BreakdownReport, DashboardReport, TargetsReport, TeamReport};
use tracing::{info, warn};

fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenvy::dotenv(); // load .env if present

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "fatal error");
        std::process::exit(1);
    }
}

fn run(cli: cli::Cli) -> Result<(), CliError> {
    let global = config::resolve_settings(cli.settings.as_deref())?;
    let json = cli.json;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Compute(args) => {
            let (subject, settings) =
                subject_settings(args.employee.as_deref(), args.roster.as_deref(), global)?;
            warn_if_invalid(&settings);

            let snapshot = PerformanceSnapshot::new(args.merchants, args.parcels, args.revenue);
            let commission = compute_breakdown(&snapshot, &settings.commission);
            info!(
                subject = %subject,
                parcels = snapshot.parcels,
                revenue = %snapshot.revenue,
                total = %commission.total,
                "commission computed"
            );

            let report = BreakdownReport {
                subject: &subject,
                commission_type: settings.commission.commission_type,
                commission,
            };
            output::emit(&mut out, &report, json)
        }

        Command::Targets(args) => {
            let targets = adjust_targets(&global, args.period);
            let achievement = match (args.merchants, args.parcels, args.revenue) {
                (None, None, None) => None,
                (m, p, r) => {
                    let actual = PerformanceSnapshot::new(
                        m.unwrap_or(0),
                        p.unwrap_or(0),
                        r.unwrap_or_default(),
                    );
                    Some(Achievement::measure(&actual, &targets))
                }
            };

            let report = TargetsReport {
                period: args.period,
                targets,
                achievement,
            };
            output::emit(&mut out, &report, json)
        }

        Command::Dashboard(args) => {
            let range = custom_range(args.period, args.from, args.to)?;
            let (dir, _, history) = load_roster(&args.roster)?.into_parts(global);
            let (subject, settings) = match &args.employee {
                Some(id) => (id.as_str(), employee_settings(&dir, id)?),
                None => ("organisation", &dir.global),
            };
            warn_if_invalid(settings);

            let actuals = period_totals(&history, args.period, range.as_ref());
            let targets = adjust_targets(settings, args.period);
            let report = DashboardReport {
                subject,
                period: args.period,
                commission_type: settings.commission.commission_type,
                achievement: Achievement::measure(&actuals, &targets),
                commission: compute_breakdown(&actuals, &settings.commission),
                actuals,
                targets,
            };
            output::emit(&mut out, &report, json)
        }

        Command::Team(args) => {
            let (dir, performance, _) = load_roster(&args.roster)?.into_parts(global);
            team(&mut out, &dir, &performance, args.period, json)
        }

        Command::Validate(args) => {
            let (subject, settings) =
                subject_settings(args.employee.as_deref(), args.roster.as_deref(), global)?;
            settings.commission.validate()?;
            info!(
                subject = %subject,
                tiers = settings.commission.tiers.len(),
                "tier schedule ok"
            );
            Ok(())
        }
    }
}

fn team<W: Write>(
    out: &mut W,
    dir: &Directory,
    performance: &HashMap<String, PerformanceSnapshot>,
    period: Period,
    json: bool,
) -> Result<(), CliError> {
    let rows = leaderboard(dir, performance, period);
    let report = TeamReport {
        period,
        totals: totals(&rows),
        rows: &rows,
    };
    info!(
        employees = rows.len(),
        commission = %report.totals.commission,
        "leaderboard built"
    );
    output::emit(out, &report, json)
}

/// Settings for a `compute` / `validate` subject. With a roster, the
/// roster's own global default replaces `global`, and an employee id picks
/// that employee's effective settings.
fn subject_settings(
    employee: Option<&str>,
    roster: Option<&Path>,
    global: TargetSettings,
) -> Result<(String, TargetSettings), CliError> {
    let Some(roster) = roster else {
        return Ok(("global".to_string(), global));
    };
    let (dir, _, _) = load_roster(roster)?.into_parts(global);
    match employee {
        Some(id) => Ok((id.to_string(), employee_settings(&dir, id)?.clone())),
        None => Ok(("global".to_string(), dir.global)),
    }
}

/// Effective settings for an employee that must exist in the roster.
fn employee_settings<'a>(
    dir: &'a Directory,
    id: &str,
) -> Result<&'a TargetSettings, CliError> {
    if dir.employee(id).is_none() {
        return Err(CommissionError::EmployeeNotFound(id.to_string()).into());
    }
    Ok(dir.active_settings(&Selection::Employee(id.to_string())))
}

/// The date range for a custom period; other periods ignore `--from`/`--to`.
fn custom_range(
    period: Period,
    from: Option<chrono::NaiveDate>,
    to: Option<chrono::NaiveDate>,
) -> Result<Option<DateRange>, CliError> {
    match (period, from, to) {
        (Period::Custom, Some(from), Some(to)) => Ok(Some(DateRange::new(from, to))),
        (Period::Custom, _, _) => Err(CliError::MissingRange),
        _ => Ok(None),
    }
}

/// The engine accepts any schedule; flag suspicious ones without stopping.
fn warn_if_invalid(settings: &TargetSettings) {
    if let Err(e) = settings.commission.validate() {
        warn!(error = %e, "tier schedule is not well-formed; payouts may double-count");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use commission::CommissionConfig;
    use rust_decimal_macros::dec;
    use std::path::PathBuf;

    fn demo_roster() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/roster.json")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_custom_range_requires_both_ends() {
        let (from, to) = (date(2024, 1, 1), date(2024, 3, 31));
        let range = custom_range(Period::Custom, Some(from), Some(to)).unwrap();
        assert_eq!(range, Some(DateRange::new(from, to)));

        let err = custom_range(Period::Custom, Some(date(2024, 1, 1)), None).unwrap_err();
        assert!(matches!(err, CliError::MissingRange));
        let err = custom_range(Period::Custom, None, None).unwrap_err();
        assert!(matches!(err, CliError::MissingRange));
    }

    #[test]
    fn test_custom_range_ignored_for_other_periods() {
        let range = custom_range(Period::Weekly, Some(date(2024, 1, 1)), None).unwrap();
        assert!(range.is_none());
    }

    #[test]
    fn test_subject_without_roster_is_global() {
        let global = TargetSettings::default();
        let (subject, settings) = subject_settings(Some("e4"), None, global.clone()).unwrap();
        assert_eq!(subject, "global");
        assert_eq!(settings, global);
    }

    #[test]
    fn test_subject_employee_override_from_roster() {
        let roster = demo_roster();
        let (subject, settings) =
            subject_settings(Some("e4"), Some(&*roster), TargetSettings::default()).unwrap();
        assert_eq!(subject, "e4");
        assert_eq!(settings.merchant_onboard, 60);
        assert_eq!(settings.total_parcels, 6000);
    }

    #[test]
    fn test_subject_unknown_employee_is_error() {
        let roster = demo_roster();
        let err = subject_settings(Some("nobody"), Some(&*roster), TargetSettings::default())
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Commission(CommissionError::EmployeeNotFound(ref id)) if id == "nobody"
        ));
    }

    #[test]
    fn test_subject_roster_global_wins_over_caller_global() {
        let roster_global = TargetSettings {
            merchant_onboard: 20,
            total_parcels: 2000,
            total_revenue: dec!(100000),
            commission: CommissionConfig::flat(dec!(3), dec!(1)),
        };
        let roster = serde_json::json!({
            "global": roster_global,
            "employees": [],
        });
        let path = std::env::temp_dir().join(format!(
            "logisales-roster-global-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, roster.to_string()).unwrap();

        let result = subject_settings(None, Some(path.as_path()), TargetSettings::default());
        std::fs::remove_file(&path).unwrap();

        let (subject, settings) = result.unwrap();
        assert_eq!(subject, "global");
        assert_eq!(settings, roster_global);
    }

    #[test]
    fn test_employee_settings_falls_back_to_global() {
        let (dir, _, _) = load_roster(&demo_roster())
            .unwrap()
            .into_parts(TargetSettings::default());
        assert_eq!(employee_settings(&dir, "e1").unwrap(), &dir.global);
        assert!(matches!(
            employee_settings(&dir, "e99").unwrap_err(),
            CliError::Commission(CommissionError::EmployeeNotFound(_))
        ));
    }
}
