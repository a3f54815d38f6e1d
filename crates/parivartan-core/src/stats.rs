//! Aggregation engine: read-only summary statistics over the current state.
//!
//! Everything here is a pure function recomputed on demand; nothing is
//! cached across calls. All aggregations degrade to zero or empty output on
//! an empty record set instead of failing.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;

use crate::domain::{Gender, PlacementStatus, StudentPortfolio};
use crate::snapshot::AppSnapshot;

/// Fixed bucket enumeration for the growth-trend chart.
pub const TREND_YEARS: [i32; 5] = [2020, 2021, 2022, 2023, 2024];

// ---------------------------------------------------------------------------
// Job readiness
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadinessTier {
    Ready,
    #[serde(rename = "Partially Ready")]
    PartiallyReady,
    #[serde(rename = "Training Needed")]
    TrainingNeeded,
}

/// Three-tier employability classification. Both identity documents are the
/// baseline; computer knowledge and typing speed decide the tier above it.
/// Every record lands in exactly one tier.
pub fn readiness_tier(p: &StudentPortfolio) -> ReadinessTier {
    let has_documents = p.documents.aadhaar && p.documents.bank_account;
    let has_computer = p.basic_computer_knowledge;
    let decent_typing = p.typing_speed.is_adequate();

    if has_documents && has_computer && decent_typing {
        ReadinessTier::Ready
    } else if has_documents && (has_computer || decent_typing) {
        ReadinessTier::PartiallyReady
    } else {
        ReadinessTier::TrainingNeeded
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessSummary {
    pub ready: usize,
    pub partially: usize,
    pub training: usize,
}

pub fn readiness_summary(portfolios: &[StudentPortfolio]) -> ReadinessSummary {
    let mut summary = ReadinessSummary::default();
    for p in portfolios {
        match readiness_tier(p) {
            ReadinessTier::Ready => summary.ready += 1,
            ReadinessTier::PartiallyReady => summary.partially += 1,
            ReadinessTier::TrainingNeeded => summary.training += 1,
        }
    }
    summary
}

// ---------------------------------------------------------------------------
// Home dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderSplit {
    pub male: usize,
    pub female: usize,
    pub other: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummary {
    pub id: String,
    pub name: String,
    pub student_count: usize,
    pub ltc_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeStats {
    pub total_students: usize,
    pub readiness: ReadinessSummary,
    pub gender: GenderSplit,
    pub active_districts: usize,
    pub zone_summary: Vec<ZoneSummary>,
    pub total_zones: usize,
    pub total_ltcs: usize,
}

pub fn home_stats(snapshot: &AppSnapshot) -> HomeStats {
    let mut gender = GenderSplit::default();
    for p in &snapshot.portfolios {
        match p.gender {
            Gender::Male => gender.male += 1,
            Gender::Female => gender.female += 1,
            Gender::Other => gender.other += 1,
        }
    }

    let districts: HashSet<&str> = snapshot
        .portfolios
        .iter()
        .map(|p| p.district.as_str())
        .collect();

    let zone_summary = snapshot
        .zones
        .iter()
        .map(|zone| ZoneSummary {
            id: zone.id.clone(),
            name: zone.name.clone(),
            student_count: snapshot
                .portfolios
                .iter()
                .filter(|p| p.zone_id == zone.id)
                .count(),
            ltc_count: snapshot
                .ltcs
                .iter()
                .filter(|l| l.zone_id == zone.id)
                .count(),
        })
        .collect();

    HomeStats {
        total_students: snapshot.portfolios.len(),
        readiness: readiness_summary(&snapshot.portfolios),
        gender,
        active_districts: districts.len(),
        zone_summary,
        total_zones: snapshot.zones.len(),
        total_ltcs: snapshot.ltcs.len(),
    }
}

// ---------------------------------------------------------------------------
// Distributions
// ---------------------------------------------------------------------------

/// Single-pass group-by-key tallies. Sparse: categories with no matching
/// records are simply absent, and records with dangling zone/LTC/department
/// references are skipped, matching how the dashboard has always charted
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Distributions {
    pub education: BTreeMap<String, usize>,
    pub typing: BTreeMap<String, usize>,
    pub zones: BTreeMap<String, usize>,
    pub ltcs: BTreeMap<String, usize>,
    pub departments: BTreeMap<String, usize>,
}

pub fn distributions(snapshot: &AppSnapshot) -> Distributions {
    let mut dist = Distributions::default();
    for p in &snapshot.portfolios {
        *dist
            .education
            .entry(p.education_level.label().to_string())
            .or_insert(0) += 1;
        *dist
            .typing
            .entry(p.typing_speed.label().to_string())
            .or_insert(0) += 1;
        if let Some(zone) = snapshot.zone(&p.zone_id) {
            *dist.zones.entry(zone.name.clone()).or_insert(0) += 1;
        }
        if let Some(ltc) = snapshot.ltc(&p.ltc_id) {
            *dist.ltcs.entry(ltc.name.clone()).or_insert(0) += 1;
        }
        if let Some(dept) = snapshot.department(&p.department_id) {
            *dist.departments.entry(dept.name.clone()).or_insert(0) += 1;
        }
    }
    dist
}

// ---------------------------------------------------------------------------
// Placement report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneBreakdown {
    pub id: String,
    pub name: String,
    pub trained: usize,
    pub placed: usize,
    pub avg_salary: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub name: String,
    pub count: usize,
    pub avg_salary: f64,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearTrend {
    pub year: i32,
    pub total: usize,
    pub placed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentFunnel {
    pub trained: usize,
    pub interviewed: usize,
    pub offered: usize,
    pub joined: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementReport {
    pub total_trained: usize,
    pub placed_count: usize,
    pub unplaced_count: usize,
    pub in_process_count: usize,
    pub percentage: f64,
    pub avg_salary: f64,
    pub max_salary: f64,
    pub zone_breakdown: Vec<ZoneBreakdown>,
    pub company_stats: Vec<CompanyStats>,
    pub industry_split: BTreeMap<String, usize>,
    pub trend: Vec<YearTrend>,
    pub funnel: RecruitmentFunnel,
}

/// Placed-over-total as a percentage, with an empty denominator scaling the
/// zero numerator to zero instead of dividing by zero.
pub fn percentage(part: usize, total: usize) -> f64 {
    (part as f64 / total.max(1) as f64) * 100.0
}

fn average_salary<'a>(placed: impl Iterator<Item = &'a StudentPortfolio>) -> f64 {
    let mut count = 0usize;
    let mut sum = 0.0;
    for p in placed {
        count += 1;
        sum += p.monthly_salary;
    }
    sum / count.max(1) as f64
}

pub fn placement_report(snapshot: &AppSnapshot) -> PlacementReport {
    let portfolios = &snapshot.portfolios;
    let total_trained = portfolios.len();
    let placed: Vec<&StudentPortfolio> = portfolios
        .iter()
        .filter(|p| p.placement_status == PlacementStatus::Placed)
        .collect();
    let unplaced_count = portfolios
        .iter()
        .filter(|p| p.placement_status == PlacementStatus::Unplaced)
        .count();
    let in_process_count = portfolios
        .iter()
        .filter(|p| p.placement_status == PlacementStatus::InProcess)
        .count();

    let max_salary = placed
        .iter()
        .map(|p| p.monthly_salary)
        .fold(0.0_f64, f64::max);

    let zone_breakdown = snapshot
        .zones
        .iter()
        .map(|zone| {
            let trained = portfolios.iter().filter(|p| p.zone_id == zone.id).count();
            let placed_in_zone: Vec<&&StudentPortfolio> =
                placed.iter().filter(|p| p.zone_id == zone.id).collect();
            ZoneBreakdown {
                id: zone.id.clone(),
                name: zone.name.clone(),
                trained,
                placed: placed_in_zone.len(),
                avg_salary: average_salary(placed_in_zone.iter().map(|p| **p)),
                percentage: percentage(placed_in_zone.len(), trained),
            }
        })
        .collect();

    let mut companies: BTreeMap<String, (usize, f64, BTreeSet<String>)> = BTreeMap::new();
    for p in &placed {
        let name = p.company_name.clone().unwrap_or_else(|| "Unknown".to_string());
        let entry = companies.entry(name).or_default();
        entry.0 += 1;
        entry.1 += p.monthly_salary;
        if let Some(role) = &p.job_role {
            entry.2.insert(role.clone());
        }
    }
    let mut company_stats: Vec<CompanyStats> = companies
        .into_iter()
        .map(|(name, (count, salary, roles))| CompanyStats {
            name,
            count,
            avg_salary: salary / count.max(1) as f64,
            roles: roles.into_iter().collect(),
        })
        .collect();
    company_stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

    let mut industry_split: BTreeMap<String, usize> = BTreeMap::new();
    for p in &placed {
        let industry = snapshot
            .department(&p.department_id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| "Other".to_string());
        *industry_split.entry(industry).or_insert(0) += 1;
    }

    let trend = TREND_YEARS
        .iter()
        .map(|&year| {
            let in_year: Vec<&StudentPortfolio> =
                portfolios.iter().filter(|p| p.batch_year == year).collect();
            YearTrend {
                year,
                total: in_year.len(),
                placed: in_year
                    .iter()
                    .filter(|p| p.placement_status == PlacementStatus::Placed)
                    .count(),
            }
        })
        .collect();

    // The funnel's middle stages are the dashboard's fixed estimates, not
    // tracked data.
    let funnel = RecruitmentFunnel {
        trained: total_trained,
        interviewed: (total_trained as f64 * 0.85).round() as usize,
        offered: (total_trained as f64 * 0.75).round() as usize,
        joined: placed.len(),
    };

    PlacementReport {
        total_trained,
        placed_count: placed.len(),
        unplaced_count,
        in_process_count,
        percentage: percentage(placed.len(), total_trained),
        avg_salary: average_salary(placed.iter().copied()),
        max_salary,
        zone_breakdown,
        company_stats,
        industry_split,
        trend,
        funnel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Documents, TypingSpeed};
    use crate::test_fixtures::{empty_snapshot, portfolio};

    fn with_readiness(
        id: &str,
        aadhaar: bool,
        bank: bool,
        computer: bool,
        typing: TypingSpeed,
    ) -> StudentPortfolio {
        let mut p = portfolio(id);
        p.documents = Documents {
            aadhaar,
            bank_account: bank,
            education_certificate: false,
        };
        p.basic_computer_knowledge = computer;
        p.typing_speed = typing;
        p
    }

    #[test]
    fn readiness_partition_is_total() {
        let mut snap = empty_snapshot();
        for i in 0..8 {
            let p = with_readiness(
                &format!("p{i}"),
                i % 2 == 0,
                i % 3 != 0,
                i % 4 == 0,
                if i % 5 == 0 {
                    TypingSpeed::Wpm30Plus
                } else {
                    TypingSpeed::Below20
                },
            );
            snap.portfolios.push(p);
        }
        let summary = readiness_summary(&snap.portfolios);
        assert_eq!(
            summary.ready + summary.partially + summary.training,
            snap.portfolios.len()
        );
    }

    #[test]
    fn readiness_scenario_from_three_records() {
        // Fully documented, computer literate, 30+ WPM.
        let a = with_readiness("a", true, true, true, TypingSpeed::Wpm30Plus);
        // Documented but no computer knowledge and slow typing.
        let b = with_readiness("b", true, true, false, TypingSpeed::Below20);
        // Missing both documents.
        let c = with_readiness("c", false, false, true, TypingSpeed::Wpm30Plus);

        assert_eq!(readiness_tier(&a), ReadinessTier::Ready);
        assert_eq!(readiness_tier(&b), ReadinessTier::TrainingNeeded);
        assert_eq!(readiness_tier(&c), ReadinessTier::TrainingNeeded);

        let summary = readiness_summary(&[a, b, c]);
        assert_eq!(
            summary,
            ReadinessSummary {
                ready: 1,
                partially: 0,
                training: 2
            }
        );
    }

    #[test]
    fn documents_plus_one_criterion_is_partially_ready() {
        let p = with_readiness("p", true, true, true, TypingSpeed::Below20);
        assert_eq!(readiness_tier(&p), ReadinessTier::PartiallyReady);
        let q = with_readiness("q", true, true, false, TypingSpeed::Wpm20To30);
        assert_eq!(readiness_tier(&q), ReadinessTier::PartiallyReady);
    }

    #[test]
    fn placement_rate_of_empty_set_is_zero() {
        let snap = empty_snapshot();
        let report = placement_report(&snap);
        assert_eq!(report.percentage, 0.0);
        assert_eq!(report.avg_salary, 0.0);
        assert_eq!(report.max_salary, 0.0);
        assert!(report.percentage.is_finite());
        assert!(report.company_stats.is_empty());
    }

    #[test]
    fn percentage_guard_never_divides_by_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn placement_report_counts_and_averages() {
        let mut snap = empty_snapshot();
        snap.add_zone("West Zone").unwrap();
        let zone_id = snap.zones[0].id.clone();

        let mut placed = portfolio("p1");
        placed.zone_id = zone_id.clone();
        placed.placement_status = PlacementStatus::Placed;
        placed.company_name = Some("Tata Motors".to_string());
        placed.job_role = Some("Assistant".to_string());
        placed.monthly_salary = 12_000.0;

        let mut placed2 = portfolio("p2");
        placed2.zone_id = zone_id.clone();
        placed2.placement_status = PlacementStatus::Placed;
        placed2.company_name = Some("Tata Motors".to_string());
        placed2.job_role = Some("Operator".to_string());
        placed2.monthly_salary = 18_000.0;

        let mut unplaced = portfolio("p3");
        unplaced.zone_id = zone_id.clone();

        snap.portfolios = vec![placed, placed2, unplaced];
        let report = placement_report(&snap);

        assert_eq!(report.total_trained, 3);
        assert_eq!(report.placed_count, 2);
        assert_eq!(report.unplaced_count, 1);
        assert_eq!(report.avg_salary, 15_000.0);
        assert_eq!(report.max_salary, 18_000.0);

        let zone = &report.zone_breakdown[0];
        assert_eq!(zone.trained, 3);
        assert_eq!(zone.placed, 2);
        assert!((zone.percentage - 66.666).abs() < 0.01);

        let company = &report.company_stats[0];
        assert_eq!(company.name, "Tata Motors");
        assert_eq!(company.count, 2);
        assert_eq!(company.avg_salary, 15_000.0);
        assert_eq!(company.roles, vec!["Assistant", "Operator"]);
    }

    #[test]
    fn trend_always_covers_the_fixed_years() {
        let mut snap = empty_snapshot();
        let mut p = portfolio("p1");
        p.batch_year = 2022;
        p.placement_status = PlacementStatus::Placed;
        snap.portfolios.push(p);

        let report = placement_report(&snap);
        assert_eq!(report.trend.len(), TREND_YEARS.len());
        let bucket = report.trend.iter().find(|t| t.year == 2022).unwrap();
        assert_eq!(bucket.total, 1);
        assert_eq!(bucket.placed, 1);
        assert!(report
            .trend
            .iter()
            .filter(|t| t.year != 2022)
            .all(|t| t.total == 0 && t.placed == 0));
    }

    #[test]
    fn dangling_departments_fall_into_other() {
        let mut snap = empty_snapshot();
        let mut p = portfolio("p1");
        p.department_id = "d_removed".to_string();
        p.placement_status = PlacementStatus::Placed;
        snap.portfolios.push(p);

        let report = placement_report(&snap);
        assert_eq!(report.industry_split.get("Other"), Some(&1));
    }

    #[test]
    fn distributions_tally_and_skip_danglers() {
        let mut snap = empty_snapshot();
        snap.add_zone("West Zone").unwrap();
        let zone_id = snap.zones[0].id.clone();

        let mut a = portfolio("a");
        a.zone_id = zone_id.clone();
        let mut b = portfolio("b");
        b.zone_id = zone_id;
        let mut c = portfolio("c");
        c.zone_id = "z_gone".to_string();
        snap.portfolios = vec![a, b, c];

        let dist = distributions(&snap);
        assert_eq!(dist.zones.get("West Zone"), Some(&2));
        assert_eq!(dist.zones.len(), 1);
        assert_eq!(dist.education.get("10th"), Some(&3));
        assert_eq!(dist.typing.get("Below 20 WPM"), Some(&3));
    }

    #[test]
    fn home_stats_summarize_zones_and_districts() {
        let mut snap = empty_snapshot();
        snap.add_zone("West Zone").unwrap();
        let zone_id = snap.zones[0].id.clone();
        snap.add_ltc("Mumbai Hub", &zone_id).unwrap();
        snap.add_ltc("Pune Center", &zone_id).unwrap();

        let mut a = portfolio("a");
        a.zone_id = zone_id.clone();
        a.district = "Pune".to_string();
        a.gender = Gender::Female;
        let mut b = portfolio("b");
        b.zone_id = zone_id;
        b.district = "Pune".to_string();
        snap.portfolios = vec![a, b];

        let stats = home_stats(&snap);
        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.active_districts, 1);
        assert_eq!(stats.gender.female, 1);
        assert_eq!(stats.gender.male, 1);
        assert_eq!(stats.zone_summary.len(), 1);
        assert_eq!(stats.zone_summary[0].student_count, 2);
        assert_eq!(stats.zone_summary[0].ltc_count, 2);
        assert_eq!(stats.total_ltcs, 2);
    }
}
