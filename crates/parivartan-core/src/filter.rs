//! Filter engine: conjunctive predicate composition over the record list.

use serde::{Deserialize, Serialize};

use crate::domain::{Ltc, PortfolioStatus, StudentPortfolio};

/// Who is looking. Viewers only ever see approved records; the role is a
/// presentation toggle, not access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[default]
    Viewer,
}

/// UI-selected criteria. `None` (or the literal "All" the selects submit)
/// leaves an axis unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub department: Option<String>,
    pub zone: Option<String>,
    pub ltc: Option<String>,
    pub search: String,
    pub role: Role,
}

fn axis_matches(filter: Option<&str>, value: &str) -> bool {
    match filter {
        None | Some("All") | Some("") => true,
        Some(wanted) => value == wanted,
    }
}

/// Return the matching subset in the records' original order.
pub fn filter_portfolios<'a>(
    portfolios: &'a [StudentPortfolio],
    criteria: &FilterCriteria,
) -> Vec<&'a StudentPortfolio> {
    let query = criteria.search.trim().to_lowercase();
    portfolios
        .iter()
        .filter(|p| {
            let matches_dept = axis_matches(criteria.department.as_deref(), &p.department_id);
            let matches_zone = axis_matches(criteria.zone.as_deref(), &p.zone_id);
            let matches_ltc = axis_matches(criteria.ltc.as_deref(), &p.ltc_id);
            let matches_search = query.is_empty()
                || p.full_name.to_lowercase().contains(&query)
                || p.district.to_lowercase().contains(&query);
            let visible =
                criteria.role == Role::Admin || p.status == PortfolioStatus::Approved;
            matches_dept && matches_zone && matches_ltc && matches_search && visible
        })
        .collect()
}

/// Options for the cascading LTC select: every center when no zone is
/// chosen, otherwise only the centers of that zone.
pub fn ltc_options<'a>(ltcs: &'a [Ltc], zone: Option<&str>) -> Vec<&'a Ltc> {
    match zone {
        None | Some("All") | Some("") => ltcs.iter().collect(),
        Some(zone_id) => ltcs.iter().filter(|l| l.zone_id == zone_id).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ltc;
    use crate::test_fixtures::portfolio;

    fn records() -> Vec<StudentPortfolio> {
        let mut a = portfolio("a");
        a.full_name = "Arjun Mehra".to_string();
        a.district = "Pune".to_string();
        a.department_id = "d_it".to_string();
        a.zone_id = "z_west".to_string();
        a.ltc_id = "ltc_pune".to_string();
        a.status = PortfolioStatus::Approved;

        let mut b = portfolio("b");
        b.full_name = "Priya Sharma".to_string();
        b.district = "Nagpur".to_string();
        b.department_id = "d_retail".to_string();
        b.zone_id = "z_west".to_string();
        b.ltc_id = "ltc_mumbai".to_string();
        b.status = PortfolioStatus::Pending;

        let mut c = portfolio("c");
        c.full_name = "Rohan Deshmukh".to_string();
        c.district = "Lucknow".to_string();
        c.department_id = "d_it".to_string();
        c.zone_id = "z_north".to_string();
        c.ltc_id = "ltc_lucknow".to_string();
        c.status = PortfolioStatus::Approved;

        vec![a, b, c]
    }

    fn admin() -> FilterCriteria {
        FilterCriteria {
            role: Role::Admin,
            ..FilterCriteria::default()
        }
    }

    #[test]
    fn all_axes_unfiltered_returns_everything_in_order() {
        let records = records();
        let out = filter_portfolios(&records, &admin());
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn the_all_sentinel_behaves_like_no_filter() {
        let records = records();
        let criteria = FilterCriteria {
            department: Some("All".to_string()),
            zone: Some("All".to_string()),
            ltc: Some("All".to_string()),
            ..admin()
        };
        assert_eq!(filter_portfolios(&records, &criteria).len(), 3);
    }

    #[test]
    fn department_filter_is_exact_and_idempotent() {
        let records = records();
        let criteria = FilterCriteria {
            department: Some("d_it".to_string()),
            ..admin()
        };
        let once = filter_portfolios(&records, &criteria);
        assert!(once.iter().all(|p| p.department_id == "d_it"));
        assert_eq!(once.len(), 2);

        let narrowed: Vec<StudentPortfolio> = once.iter().map(|p| (*p).clone()).collect();
        let twice = filter_portfolios(&narrowed, &criteria);
        let ids_once: Vec<&str> = once.iter().map(|p| p.id.as_str()).collect();
        let ids_twice: Vec<&str> = twice.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids_once, ids_twice);
    }

    #[test]
    fn search_matches_name_or_district_case_insensitively() {
        let records = records();
        let criteria = FilterCriteria {
            search: "  PUNE ".to_string(),
            ..admin()
        };
        let out = filter_portfolios(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "a");

        let criteria = FilterCriteria {
            search: "sharma".to_string(),
            ..admin()
        };
        assert_eq!(filter_portfolios(&records, &criteria)[0].id, "b");
    }

    #[test]
    fn viewers_see_only_approved_records() {
        let records = records();
        let out = filter_portfolios(&records, &FilterCriteria::default());
        assert!(out.iter().all(|p| p.status == PortfolioStatus::Approved));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn conjunction_across_axes() {
        let records = records();
        let criteria = FilterCriteria {
            department: Some("d_it".to_string()),
            zone: Some("z_north".to_string()),
            ..admin()
        };
        let out = filter_portfolios(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "c");
    }

    #[test]
    fn ltc_options_cascade_from_the_selected_zone() {
        let ltcs = vec![
            Ltc {
                id: "ltc_mumbai".to_string(),
                name: "Mumbai Hub".to_string(),
                zone_id: "z_west".to_string(),
            },
            Ltc {
                id: "ltc_delhi".to_string(),
                name: "Delhi Regional".to_string(),
                zone_id: "z_north".to_string(),
            },
        ];
        assert_eq!(ltc_options(&ltcs, None).len(), 2);
        assert_eq!(ltc_options(&ltcs, Some("All")).len(), 2);
        let west = ltc_options(&ltcs, Some("z_west"));
        assert_eq!(west.len(), 1);
        assert_eq!(west[0].id, "ltc_mumbai");
        assert!(ltc_options(&ltcs, Some("z_east")).is_empty());
    }
}
