//! Tabular report export.
//!
//! Rows are rendered as comma-separated text with quoting for embedded
//! delimiters and spreadsheet-formula neutralization, then handed to the
//! runtime to write wherever the user picks.

use crate::domain::PlacementStatus;
use crate::snapshot::AppSnapshot;
use crate::util;

fn should_neutralize(value: &str) -> bool {
    let trimmed = value.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('\'') {
        return false;
    }
    matches!(
        trimmed.chars().next(),
        Some('=') | Some('+') | Some('-') | Some('@')
    )
}

/// Prefix cell text that a spreadsheet would otherwise execute as a formula.
pub fn neutralize_csv_formula(value: &str) -> String {
    if should_neutralize(value) {
        format!("'{value}")
    } else {
        value.to_string()
    }
}

pub fn csv_escape(value: &str) -> String {
    let safe = neutralize_csv_formula(value);
    if safe.contains(',') || safe.contains('"') || safe.contains('\n') || safe.contains('\r') {
        format!("\"{}\"", safe.replace('"', "\"\""))
    } else {
        safe
    }
}

fn csv_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| csv_escape(field))
        .collect::<Vec<_>>()
        .join(",")
}

fn format_salary(salary: f64) -> String {
    if salary.fract() == 0.0 {
        format!("{}", salary as i64)
    } else {
        format!("{salary:.2}")
    }
}

/// Full placement roster: every record with its zone, placement state,
/// company and salary.
pub fn placement_report_csv(snapshot: &AppSnapshot) -> String {
    let header = "Name,Zone,Status,Company,Salary,Joining Date".to_string();
    let mut lines = vec![header];
    for p in &snapshot.portfolios {
        lines.push(csv_line(&[
            p.full_name.clone(),
            snapshot.zone_label(&p.zone_id),
            p.placement_status.label().to_string(),
            p.company_name.clone().unwrap_or_else(|| "N/A".to_string()),
            format_salary(p.monthly_salary),
            p.joining_date.clone().unwrap_or_else(|| "N/A".to_string()),
        ]));
    }
    lines.join("\n")
}

/// Unplaced follow-up list with the recorded reason, where one exists.
pub fn unplaced_report_csv(snapshot: &AppSnapshot) -> String {
    let header = "Name,Zone,Domain,Reason".to_string();
    let mut lines = vec![header];
    let unplaced = snapshot
        .portfolios
        .iter()
        .filter(|p| p.placement_status == PlacementStatus::Unplaced);
    for p in unplaced {
        lines.push(csv_line(&[
            p.full_name.clone(),
            snapshot.zone_label(&p.zone_id),
            snapshot.department_label(&p.department_id),
            p.unplaced_reason
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
        ]));
    }
    lines.join("\n")
}

/// Default download name, stamped so repeated exports never collide.
pub fn report_filename(kind: &str) -> String {
    format!("{kind}-report-{}.csv", util::now_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{empty_snapshot, portfolio};

    fn snapshot_with_one_placed() -> AppSnapshot {
        let mut snap = empty_snapshot();
        snap.add_zone("West Zone").unwrap();
        let zone_id = snap.zones[0].id.clone();

        let mut placed = portfolio("p1");
        placed.full_name = "Arjun Mehra".to_string();
        placed.zone_id = zone_id.clone();
        placed.placement_status = PlacementStatus::Placed;
        placed.company_name = Some("Tata Motors".to_string());
        placed.monthly_salary = 12_500.0;
        placed.joining_date = Some("2024-02-01".to_string());

        let mut unplaced = portfolio("p2");
        unplaced.full_name = "Priya Sharma".to_string();
        unplaced.zone_id = zone_id;
        unplaced.unplaced_reason = Some("Awaiting Interview".to_string());

        snap.portfolios = vec![placed, unplaced];
        snap
    }

    #[test]
    fn placement_report_lists_every_record() {
        let csv = placement_report_csv(&snapshot_with_one_placed());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Name,Zone,Status,Company,Salary,Joining Date");
        assert_eq!(
            lines[1],
            "Arjun Mehra,West Zone,Placed,Tata Motors,12500,2024-02-01"
        );
        assert_eq!(lines[2], "Priya Sharma,West Zone,Unplaced,N/A,0,N/A");
    }

    #[test]
    fn unplaced_report_only_lists_unplaced_records() {
        let csv = unplaced_report_csv(&snapshot_with_one_placed());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Name,Zone,Domain,Reason");
        assert!(lines[1].starts_with("Priya Sharma,West Zone,"));
        assert!(lines[1].ends_with("Awaiting Interview"));
    }

    #[test]
    fn dangling_zone_exports_as_unknown() {
        let mut snap = empty_snapshot();
        let mut p = portfolio("p1");
        p.full_name = "Rohan".to_string();
        p.zone_id = "z_gone".to_string();
        snap.portfolios = vec![p];
        let csv = placement_report_csv(&snap);
        assert!(csv.lines().nth(1).unwrap().contains("Unknown"));
    }

    #[test]
    fn cells_with_delimiters_are_quoted() {
        assert_eq!(csv_escape("Pune, West"), "\"Pune, West\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("plain"), "plain");
    }

    #[test]
    fn formula_cells_are_neutralized() {
        assert_eq!(neutralize_csv_formula("=SUM(A1:A9)"), "'=SUM(A1:A9)");
        assert_eq!(neutralize_csv_formula("+91 8828170103"), "'+91 8828170103");
        assert_eq!(neutralize_csv_formula("@handle"), "'@handle");
        assert_eq!(neutralize_csv_formula("'=already quoted"), "'=already quoted");
        assert_eq!(neutralize_csv_formula("Arjun"), "Arjun");
    }

    #[test]
    fn report_filenames_are_timestamped_csv() {
        let name = report_filename("placement");
        assert!(name.starts_with("placement-report-"));
        assert!(name.ends_with(".csv"));
    }
}
