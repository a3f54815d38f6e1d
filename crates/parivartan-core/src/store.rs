//! Mutations over the record store and the master-data store.
//!
//! All operations work on plain owned collections inside [`AppSnapshot`];
//! persistence is the caller's responsibility and happens after every
//! mutation. Master-data removal never cascades: records pointing at a
//! removed zone, center, or department keep their reference and display
//! through the degraded label lookups below.

use crate::domain::{DashboardConfig, Department, Ltc, PortfolioStatus, StudentPortfolio, Zone};
use crate::error::{CoreError, CoreResult};
use crate::snapshot::AppSnapshot;
use crate::util;

const NAME_MAX_LEN: usize = 80;

impl AppSnapshot {
    // -----------------------------------------------------------------------
    // Record store
    // -----------------------------------------------------------------------

    /// Register a new portfolio from a submitted draft. The draft's identity
    /// and lifecycle fields are overwritten: a fresh timestamp-derived id,
    /// status `Pending`, and both date stamps set to now. The record is
    /// prepended so the newest entry lists first.
    pub fn create_portfolio(&mut self, mut draft: StudentPortfolio) -> &StudentPortfolio {
        let now = util::now_iso();
        draft.id = util::new_id("yp");
        draft.status = PortfolioStatus::Pending;
        draft.joined_date = now.clone();
        draft.last_updated = now;
        self.portfolios.insert(0, draft);
        &self.portfolios[0]
    }

    /// Overwrite an existing record's fields with a submitted draft,
    /// preserving `id`, `status`, and `joinedDate`, and restamping
    /// `lastUpdated`.
    pub fn update_portfolio(
        &mut self,
        id: &str,
        mut draft: StudentPortfolio,
    ) -> CoreResult<&StudentPortfolio> {
        let index = self
            .portfolios
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found("Portfolio", id))?;
        let existing = &self.portfolios[index];
        draft.id = existing.id.clone();
        draft.status = existing.status;
        draft.joined_date = existing.joined_date.clone();
        draft.last_updated = util::now_iso();
        self.portfolios[index] = draft;
        Ok(&self.portfolios[index])
    }

    pub fn approve_portfolio(&mut self, id: &str) -> CoreResult<&StudentPortfolio> {
        self.set_portfolio_status(id, PortfolioStatus::Approved)
    }

    pub fn reject_portfolio(&mut self, id: &str) -> CoreResult<&StudentPortfolio> {
        self.set_portfolio_status(id, PortfolioStatus::Rejected)
    }

    /// Targeted single-field transition; only `status` and `lastUpdated`
    /// change.
    fn set_portfolio_status(
        &mut self,
        id: &str,
        status: PortfolioStatus,
    ) -> CoreResult<&StudentPortfolio> {
        let record = self
            .portfolios
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found("Portfolio", id))?;
        record.status = status;
        record.last_updated = util::now_iso();
        Ok(record)
    }

    // -----------------------------------------------------------------------
    // Master data store
    // -----------------------------------------------------------------------

    pub fn add_zone(&mut self, name: &str) -> CoreResult<Zone> {
        let name = required_name(name, "Zone name is required.")?;
        let zone = Zone {
            id: util::new_id("z"),
            name,
        };
        self.zones.push(zone.clone());
        Ok(zone)
    }

    pub fn remove_zone(&mut self, id: &str) -> bool {
        let before = self.zones.len();
        self.zones.retain(|z| z.id != id);
        self.zones.len() != before
    }

    /// Zone existence is not checked here; the hierarchy invariant is only
    /// enforced on portfolio submission.
    pub fn add_ltc(&mut self, name: &str, zone_id: &str) -> CoreResult<Ltc> {
        let name = required_name(name, "Training center name is required.")?;
        let zone_id = required_name(zone_id, "Training center zone is required.")?;
        let ltc = Ltc {
            id: util::new_id("ltc"),
            name,
            zone_id,
        };
        self.ltcs.push(ltc.clone());
        Ok(ltc)
    }

    pub fn remove_ltc(&mut self, id: &str) -> bool {
        let before = self.ltcs.len();
        self.ltcs.retain(|l| l.id != id);
        self.ltcs.len() != before
    }

    pub fn add_department(&mut self, name: &str) -> CoreResult<Department> {
        let name = required_name(name, "Department name is required.")?;
        let department = Department {
            id: util::new_id("d"),
            name,
            icon: "fa-briefcase".to_string(),
            color: "bg-slate-600".to_string(),
        };
        self.departments.push(department.clone());
        Ok(department)
    }

    pub fn remove_department(&mut self, id: &str) -> bool {
        let before = self.departments.len();
        self.departments.retain(|d| d.id != id);
        self.departments.len() != before
    }

    pub fn set_config(&mut self, config: DashboardConfig) {
        self.config = config;
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn ltc(&self, id: &str) -> Option<&Ltc> {
        self.ltcs.iter().find(|l| l.id == id)
    }

    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    pub fn zone_label(&self, id: &str) -> String {
        dangling_label(id, self.zone(id).map(|z| z.name.as_str()))
    }

    pub fn ltc_label(&self, id: &str) -> String {
        dangling_label(id, self.ltc(id).map(|l| l.name.as_str()))
    }

    pub fn department_label(&self, id: &str) -> String {
        dangling_label(id, self.department(id).map(|d| d.name.as_str()))
    }
}

fn required_name(value: &str, message: &str) -> CoreResult<String> {
    let cleaned = util::clamp_string(value, NAME_MAX_LEN, true);
    if cleaned.is_empty() {
        return Err(CoreError::validation(message));
    }
    Ok(cleaned)
}

/// Empty references read "Unassigned"; references to a removed entity read
/// "Unknown". Neither is an error.
fn dangling_label(id: &str, resolved: Option<&str>) -> String {
    if id.is_empty() {
        return "Unassigned".to_string();
    }
    resolved.unwrap_or("Unknown").to_string()
}
