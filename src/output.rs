//! TSV and JSON rendering of command results.
//!
//! TSV rounds money to two places for reading; JSON carries the exact
//! unrounded values.

use std::fmt::Write as _;
use std::io::Write;

use commission::{
    Achievement, AdjustedTargets, CommissionBreakdown, CommissionType, PerformanceSnapshot,
    Period, TeamMemberStats, TeamTotals,
};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownReport<'a> {
    pub subject: &'a str,
    pub commission_type: CommissionType,
    pub commission: CommissionBreakdown,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetsReport {
    pub period: Period,
    pub targets: AdjustedTargets,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievement: Option<Achievement>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport<'a> {
    pub subject: &'a str,
    pub period: Period,
    pub commission_type: CommissionType,
    pub actuals: PerformanceSnapshot,
    pub targets: AdjustedTargets,
    pub achievement: Achievement,
    pub commission: CommissionBreakdown,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamReport<'a> {
    pub period: Period,
    pub rows: &'a [TeamMemberStats<'a>],
    pub totals: TeamTotals,
}

/// Anything the CLI prints: JSON via serde, TSV via [`Tsv::write_tsv`].
pub trait Tsv: Serialize {
    fn write_tsv(&self, buf: &mut String);
}

/// Render `report` and write it to `writer` in one go.
pub fn emit<W: Write, R: Tsv>(writer: &mut W, report: &R, json: bool) -> Result<(), CliError> {
    if json {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writer.write_all(b"\n")?;
    } else {
        let mut buf = String::new();
        report.write_tsv(&mut buf);
        writer.write_all(buf.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

impl Tsv for BreakdownReport<'_> {
    fn write_tsv(&self, buf: &mut String) {
        buf.push_str("subject\ttype\tindividual\treference\ttotal\n");
        let _ = write!(buf, "{}\t{}\t", self.subject, self.commission_type);
        push_breakdown(buf, &self.commission);
        buf.push('\n');
    }
}

impl Tsv for TargetsReport {
    fn write_tsv(&self, buf: &mut String) {
        buf.push_str("metric\ttarget");
        if self.achievement.is_some() {
            buf.push_str("\tachievement\tprogress");
        }
        buf.push('\n');

        let t = &self.targets;
        let a = self.achievement;
        let rows = [
            ("merchants", t.merchants.to_string(), a.map(|a| a.merchants)),
            ("parcels", t.parcels.to_string(), a.map(|a| a.parcels)),
            ("revenue", money(t.revenue), a.map(|a| a.revenue)),
        ];
        for (metric, target, pct) in rows {
            let _ = write!(buf, "{metric}\t{target}");
            if let Some(pct) = pct {
                let _ = write!(buf, "\t{:.1}\t{:.1}", pct, Achievement::progress(pct));
            }
            buf.push('\n');
        }
        if let Some(a) = a {
            let _ = writeln!(
                buf,
                "average\t\t{:.1}\t{:.1}",
                a.average,
                Achievement::progress(a.average)
            );
        }
    }
}

impl Tsv for DashboardReport<'_> {
    fn write_tsv(&self, buf: &mut String) {
        let _ = writeln!(
            buf,
            "# {} ({} view, {} mode)",
            self.subject, self.period, self.commission_type
        );
        buf.push_str("metric\tactual\ttarget\tachievement\tprogress\n");

        let (actual, target, a) = (&self.actuals, &self.targets, &self.achievement);
        let rows = [
            (
                "merchants",
                actual.merchants.to_string(),
                target.merchants.to_string(),
                a.merchants,
            ),
            (
                "parcels",
                actual.parcels.to_string(),
                target.parcels.to_string(),
                a.parcels,
            ),
            ("revenue", money(actual.revenue), money(target.revenue), a.revenue),
        ];
        for (metric, actual, target, pct) in rows {
            let _ = writeln!(
                buf,
                "{metric}\t{actual}\t{target}\t{pct:.1}\t{:.1}",
                Achievement::progress(pct)
            );
        }
        buf.push_str("individual\treference\ttotal\n");
        push_breakdown(buf, &self.commission);
        buf.push('\n');
    }
}

impl Tsv for TeamReport<'_> {
    fn write_tsv(&self, buf: &mut String) {
        buf.push_str(
            "rank\tid\tname\trole\tmerchants\tparcels\trevenue\tachievement\tindividual\treference\ttotal\n",
        );
        for (i, row) in self.rows.iter().enumerate() {
            let _ = write!(
                buf,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.1}\t",
                i + 1,
                row.employee.id,
                row.employee.name,
                row.employee.role,
                row.performance.merchants,
                row.performance.parcels,
                money(row.performance.revenue),
                row.achievement.average,
            );
            push_breakdown(buf, &row.commission);
            buf.push('\n');
        }
        let t = &self.totals;
        let _ = writeln!(
            buf,
            "\t\tTOTAL\t\t{}\t{}\t{}\t\t{}\t{}\t{}",
            t.merchants,
            t.parcels,
            money(t.revenue),
            money(t.individual),
            money(t.reference),
            money(t.commission),
        );
    }
}

fn push_breakdown(buf: &mut String, b: &CommissionBreakdown) {
    let _ = write!(
        buf,
        "{}\t{}\t{}",
        money(b.individual),
        money(b.reference),
        money(b.total)
    );
}

/// Two decimal places, half away from zero.
fn money(d: Decimal) -> String {
    format!(
        "{:.2}",
        d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
