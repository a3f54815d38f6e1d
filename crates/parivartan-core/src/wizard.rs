//! The four-step registration wizard as an explicit finite-state value.
//!
//! Steps are strictly ordered; navigation moves one step at a time and
//! clamps at both ends. Submission validates the training-center assignment
//! against the master data and leaves the wizard untouched on failure.

use serde::{Deserialize, Serialize};

use crate::domain::{Ltc, StudentPortfolio, Zone};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    #[default]
    PersonalLocation,
    EducationCourse,
    SkillsComputer,
    WorkDocs,
}

impl WizardStep {
    pub const COUNT: usize = 4;

    pub fn next(self) -> Self {
        match self {
            WizardStep::PersonalLocation => WizardStep::EducationCourse,
            WizardStep::EducationCourse => WizardStep::SkillsComputer,
            WizardStep::SkillsComputer | WizardStep::WorkDocs => WizardStep::WorkDocs,
        }
    }

    pub fn back(self) -> Self {
        match self {
            WizardStep::PersonalLocation | WizardStep::EducationCourse => {
                WizardStep::PersonalLocation
            }
            WizardStep::SkillsComputer => WizardStep::EducationCourse,
            WizardStep::WorkDocs => WizardStep::SkillsComputer,
        }
    }

    /// 1-based position, as shown in the "Step N of 4" header.
    pub fn number(self) -> usize {
        match self {
            WizardStep::PersonalLocation => 1,
            WizardStep::EducationCourse => 2,
            WizardStep::SkillsComputer => 3,
            WizardStep::WorkDocs => 4,
        }
    }
}

/// Wizard state: the current step plus the draft accumulated so far.
#[derive(Debug, Clone, Default)]
pub struct FormWizard {
    step: WizardStep,
    draft: StudentPortfolio,
}

impl FormWizard {
    pub fn new() -> Self {
        FormWizard::default()
    }

    /// Start from an existing record for edit-and-reassign flows.
    pub fn edit(existing: StudentPortfolio) -> Self {
        FormWizard {
            step: WizardStep::PersonalLocation,
            draft: existing,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn advance(&mut self) {
        self.step = self.step.next();
    }

    pub fn retreat(&mut self) {
        self.step = self.step.back();
    }

    pub fn draft(&self) -> &StudentPortfolio {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut StudentPortfolio {
        &mut self.draft
    }

    /// Terminal action. On success the accumulated draft is handed back for
    /// the store's create-or-update; on failure the error is reported and
    /// the wizard state (step and draft) stays as it was.
    pub fn submit(&self, zones: &[Zone], ltcs: &[Ltc]) -> CoreResult<StudentPortfolio> {
        validate_assignment(&self.draft, zones, ltcs)?;
        Ok(self.draft.clone())
    }
}

/// The one hard invariant enforced at submission time: a zone must be
/// selected and exist, and the selected LTC must exist and belong to it.
pub fn validate_assignment(
    draft: &StudentPortfolio,
    zones: &[Zone],
    ltcs: &[Ltc],
) -> CoreResult<()> {
    if draft.zone_id.is_empty() || draft.ltc_id.is_empty() {
        return Err(CoreError::validation(
            "Please select Zone and Training Center (LTC)",
        ));
    }
    let zone = zones
        .iter()
        .find(|z| z.id == draft.zone_id)
        .ok_or_else(|| CoreError::validation("Selected zone no longer exists."))?;
    let ltc = ltcs
        .iter()
        .find(|l| l.id == draft.ltc_id)
        .ok_or_else(|| CoreError::validation("Selected training center no longer exists."))?;
    if ltc.zone_id != zone.id {
        return Err(CoreError::validation(
            "Selected training center is not part of the selected zone.",
        ));
    }
    Ok(())
}
