//! Core data model for the impact dashboard.
//!
//! Every type serializes with camelCase field names so the persisted
//! snapshot stays byte-compatible with the layout the dashboard has always
//! written. Structs carry `#[serde(default)]` because persisted state is
//! trusted as-is: a missing or partial field is back-filled, never rejected.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Lifecycle and classification enums
// ---------------------------------------------------------------------------

/// Review state of a portfolio. New records always start `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PortfolioStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EducationLevel {
    #[default]
    #[serde(rename = "10th")]
    Tenth,
    #[serde(rename = "12th")]
    Twelfth,
    #[serde(rename = "ITI")]
    Iti,
    Diploma,
    Graduate,
}

impl EducationLevel {
    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::Tenth => "10th",
            EducationLevel::Twelfth => "12th",
            EducationLevel::Iti => "ITI",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::Graduate => "Graduate",
        }
    }
}

/// Typing speed band. The lowest band disqualifies a record from the
/// "Ready" readiness tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypingSpeed {
    #[default]
    #[serde(rename = "Below 20 WPM")]
    Below20,
    #[serde(rename = "20–30")]
    Wpm20To30,
    #[serde(rename = "30+")]
    Wpm30Plus,
}

impl TypingSpeed {
    pub fn label(self) -> &'static str {
        match self {
            TypingSpeed::Below20 => "Below 20 WPM",
            TypingSpeed::Wpm20To30 => "20–30",
            TypingSpeed::Wpm30Plus => "30+",
        }
    }

    /// True for every band above the lowest one.
    pub fn is_adequate(self) -> bool {
        !matches!(self, TypingSpeed::Below20)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Experience {
    #[serde(rename = "Farm work")]
    FarmWork,
    #[serde(rename = "Shop helper")]
    ShopHelper,
    #[serde(rename = "Office helper")]
    OfficeHelper,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Shift work")]
    ShiftWork,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlacementStatus {
    Placed,
    #[serde(rename = "In Process")]
    InProcess,
    #[default]
    Unplaced,
}

impl PlacementStatus {
    pub fn label(self) -> &'static str {
        match self {
            PlacementStatus::Placed => "Placed",
            PlacementStatus::InProcess => "In Process",
            PlacementStatus::Unplaced => "Unplaced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

// ---------------------------------------------------------------------------
// Master data
// ---------------------------------------------------------------------------

/// Top of the geographic hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// Livelihood Training Center, grouped under a [`Zone`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ltc {
    pub id: String,
    pub name: String,
    pub zone_id: String,
}

/// Skill-domain taxonomy node, independent of the geographic hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Global presentation toggles, not domain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    pub show_job_readiness: bool,
    pub show_regional_impact: bool,
    pub show_diversity: bool,
    pub show_ltc_distribution: bool,
    pub public_visibility: bool,
    pub custom_title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            show_job_readiness: true,
            show_regional_impact: true,
            show_diversity: true,
            show_ltc_distribution: true,
            public_visibility: true,
            custom_title: "Yuva Parivartan Impact".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Portfolio sub-records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentSkill {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnglishSkills {
    pub read: bool,
    pub write: bool,
    pub speak: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Languages {
    pub local: bool,
    pub hindi: bool,
    pub english: EnglishSkills,
}

impl Default for Languages {
    fn default() -> Self {
        Languages {
            local: true,
            hindi: true,
            english: EnglishSkills::default(),
        }
    }
}

/// Documents-completeness sub-record. Aadhaar and bank account together are
/// the baseline for any readiness tier above "Training Needed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Documents {
    pub aadhaar: bool,
    pub bank_account: bool,
    pub education_certificate: bool,
}

// ---------------------------------------------------------------------------
// Student portfolio
// ---------------------------------------------------------------------------

/// One trainee record.
///
/// `zone_id` and `ltc_id` must reference an existing zone and one of its
/// LTCs, but the invariant is enforced only at form submission: records that
/// outlive their zone or center display as "Unassigned"/"Unknown" instead of
/// erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentPortfolio {
    pub id: String,
    pub full_name: String,
    pub father_name: String,
    pub dob: String,
    pub gender: Gender,
    pub mobile: String,
    pub email: String,
    pub village: String,
    pub district: String,
    pub state: String,
    pub preferred_location: String,

    pub zone_id: String,
    pub ltc_id: String,
    pub department_id: String,

    pub course_title: String,
    pub duration: String,
    pub batch_year: i32,

    pub education_level: EducationLevel,
    pub institute_name: String,
    pub passing_year: String,
    pub studied_maths: bool,
    pub studied_english: bool,
    pub studied_computers: bool,

    pub basic_computer_knowledge: bool,
    pub knows_typing: bool,
    pub knows_mouse_keyboard: bool,
    pub knows_file_handling: bool,
    pub software_known: Vec<String>,
    pub typing_speed: TypingSpeed,

    pub languages: Languages,
    pub experience: Experience,
    pub willing_to_learn: bool,
    pub availability: Availability,
    pub documents: Documents,

    pub placement_status: PlacementStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    pub monthly_salary: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_band: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unplaced_reason: Option<String>,

    pub bio: String,
    pub skills: Vec<StudentSkill>,
    pub photo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_url: Option<String>,

    pub status: PortfolioStatus,
    pub joined_date: String,
    pub last_updated: String,
}

impl Default for StudentPortfolio {
    fn default() -> Self {
        StudentPortfolio {
            id: String::new(),
            full_name: String::new(),
            father_name: String::new(),
            dob: String::new(),
            gender: Gender::default(),
            mobile: String::new(),
            email: String::new(),
            village: String::new(),
            district: String::new(),
            state: String::new(),
            preferred_location: String::new(),
            zone_id: String::new(),
            ltc_id: String::new(),
            department_id: String::new(),
            course_title: String::new(),
            duration: String::new(),
            batch_year: 0,
            education_level: EducationLevel::default(),
            institute_name: String::new(),
            passing_year: String::new(),
            studied_maths: false,
            studied_english: false,
            studied_computers: false,
            basic_computer_knowledge: false,
            knows_typing: false,
            knows_mouse_keyboard: false,
            knows_file_handling: false,
            software_known: Vec::new(),
            typing_speed: TypingSpeed::default(),
            languages: Languages::default(),
            experience: Experience::default(),
            willing_to_learn: true,
            availability: Availability::default(),
            documents: Documents::default(),
            placement_status: PlacementStatus::default(),
            company_name: None,
            job_role: None,
            employment_type: None,
            monthly_salary: 0.0,
            salary_band: None,
            joining_date: None,
            unplaced_reason: None,
            bio: String::new(),
            skills: Vec::new(),
            photo_url: String::new(),
            certificate_url: None,
            status: PortfolioStatus::default(),
            joined_date: String::new(),
            last_updated: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Recruitment side (partially wired, mock data, not persisted)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecruitmentStatus {
    #[default]
    Planned,
    #[serde(rename = "Interview Ongoing")]
    InterviewOngoing,
    #[serde(rename = "Offers Released")]
    OffersReleased,
    #[serde(rename = "Joining Completed")]
    JoiningCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OfferStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkMode {
    #[default]
    Onsite,
    Hybrid,
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub location: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobOpening {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub salary: u32,
    pub openings: u32,
    pub status: RecruitmentStatus,
    pub visit_date: String,
    pub mode: WorkMode,
}

/// Links a student to an opening with accept/reject state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobOffer {
    pub id: String,
    pub student_id: String,
    pub opening_id: String,
    pub status: OfferStatus,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_consent: Option<String>,
}
