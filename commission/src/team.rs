//! Team leaderboard: per-employee targets, achievement and commission,
//! ranked by average achievement.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::directory::Directory;
use crate::engine::compute_breakdown;
use crate::targets::{adjust_targets, Achievement, AdjustedTargets};
use crate::types::{CommissionBreakdown, Employee, PerformanceSnapshot, Period};

/// One leaderboard row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberStats<'a> {
    pub employee: &'a Employee,
    pub performance: PerformanceSnapshot,
    pub targets: AdjustedTargets,
    pub achievement: Achievement,
    pub commission: CommissionBreakdown,
}

/// Sums across the whole leaderboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamTotals {
    pub revenue: Decimal,
    pub parcels: u64,
    pub merchants: u64,
    pub commission: Decimal,
    pub individual: Decimal,
    pub reference: Decimal,
}

/// Build the leaderboard for `period`, highest average achievement first.
///
/// Every employee in the directory gets a row. Employees without an entry in
/// `performance` are measured against an all-zero snapshot.
pub fn leaderboard<'a>(
    directory: &'a Directory,
    performance: &HashMap<String, PerformanceSnapshot>,
    period: Period,
) -> Vec<TeamMemberStats<'a>> {
    let mut rows: Vec<_> = directory
        .employees
        .iter()
        .map(|employee| {
            let settings = directory.effective_settings(employee);
            let snapshot = performance.get(&employee.id).cloned().unwrap_or_else(|| {
                debug!(employee = %employee.id, "no performance recorded");
                PerformanceSnapshot::default()
            });
            let targets = adjust_targets(settings, period);

            TeamMemberStats {
                employee,
                achievement: Achievement::measure(&snapshot, &targets),
                commission: compute_breakdown(&snapshot, &settings.commission),
                performance: snapshot,
                targets,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.achievement.average.total_cmp(&a.achievement.average));
    rows
}

/// Aggregate a leaderboard into team totals, clamping at the numeric bounds.
pub fn totals(rows: &[TeamMemberStats<'_>]) -> TeamTotals {
    rows.iter().fold(TeamTotals::default(), |mut acc, row| {
        acc.revenue = acc.revenue.saturating_add(row.performance.revenue);
        acc.parcels = acc.parcels.saturating_add(row.performance.parcels);
        acc.merchants = acc.merchants.saturating_add(row.performance.merchants);
        acc.commission = acc.commission.saturating_add(row.commission.total);
        acc.individual = acc.individual.saturating_add(row.commission.individual);
        acc.reference = acc.reference.saturating_add(row.commission.reference);
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Selection;
    use crate::types::{CommissionConfig, TargetSettings};
    use rust_decimal_macros::dec;

    fn setup() -> (Directory, HashMap<String, PerformanceSnapshot>) {
        let dir = Directory::new(
            TargetSettings::default(),
            vec![
                Employee::new("e1", "Rahat Islam", "Senior Sales Executive"),
                Employee::new("e2", "Nusrat Jahan", "Business Development Manager"),
                Employee::new("e3", "Tanvir Ahmed", "Sales Associate"),
            ],
        );
        let perf = HashMap::from([
            ("e1".to_string(), PerformanceSnapshot::new(25, 2500, dec!(125000))),
            ("e2".to_string(), PerformanceSnapshot::new(50, 5000, dec!(250000))),
        ]);
        (dir, perf)
    }

    #[test]
    fn test_sorted_by_average_achievement() {
        let (dir, perf) = setup();
        let rows = leaderboard(&dir, &perf, Period::Monthly);
        let ids: Vec<_> = rows.iter().map(|r| r.employee.id.as_str()).collect();
        assert_eq!(ids, vec!["e2", "e1", "e3"]);
        assert!((rows[0].achievement.average - 100.0).abs() < 1e-9);
        assert!((rows[1].achievement.average - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_performance_is_zero() {
        let (dir, perf) = setup();
        let rows = leaderboard(&dir, &perf, Period::Monthly);
        let e3 = rows.iter().find(|r| r.employee.id == "e3").unwrap();
        assert_eq!(e3.performance.parcels, 0);
        assert_eq!(e3.commission, CommissionBreakdown::default());
        assert_eq!(e3.achievement.average, 0.0);
    }

    #[test]
    fn test_override_drives_targets_and_commission() {
        let (mut dir, perf) = setup();
        dir.update_settings(
            &Selection::Employee("e1".into()),
            TargetSettings {
                merchant_onboard: 100,
                total_parcels: 10000,
                total_revenue: dec!(500000),
                commission: CommissionConfig::flat(dec!(2), dec!(0.5)),
            },
        )
        .unwrap();

        let rows = leaderboard(&dir, &perf, Period::Weekly);
        let e1 = rows.iter().find(|r| r.employee.id == "e1").unwrap();
        assert_eq!(e1.targets.parcels, 2500);
        assert_eq!(e1.commission.individual, dec!(5000));
        assert_eq!(e1.commission.reference, dec!(1250));

        let e2 = rows.iter().find(|r| r.employee.id == "e2").unwrap();
        assert_eq!(e2.targets.parcels, 1250);
    }

    #[test]
    fn test_totals_sum_rows() {
        let (dir, perf) = setup();
        let rows = leaderboard(&dir, &perf, Period::Monthly);
        let t = totals(&rows);
        assert_eq!(t.parcels, 7500);
        assert_eq!(t.merchants, 75);
        assert_eq!(t.revenue, dec!(375000));
        assert_eq!(t.commission, t.individual + t.reference);
        let expected: Decimal = rows.iter().map(|r| r.commission.total).sum();
        assert_eq!(t.commission, expected);
    }

    #[test]
    fn test_totals_saturate() {
        let (dir, _) = setup();
        let perf = HashMap::from([
            ("e1".to_string(), PerformanceSnapshot::new(u64::MAX, u64::MAX, Decimal::MAX)),
            ("e2".to_string(), PerformanceSnapshot::new(u64::MAX, u64::MAX, Decimal::MAX)),
        ]);
        let rows = leaderboard(&dir, &perf, Period::Monthly);
        let t = totals(&rows);
        assert_eq!(t.parcels, u64::MAX);
        assert_eq!(t.merchants, u64::MAX);
        assert_eq!(t.revenue, Decimal::MAX);
        assert_eq!(t.commission, t.individual + t.reference);
    }
}
