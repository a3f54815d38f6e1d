//! Built-in master data and first-run demo records.
//!
//! Any collection missing from a persisted snapshot falls back to the values
//! here, so a fresh install (or a hand-edited file) always produces a
//! populated dashboard.

use crate::domain::{
    Availability, DashboardConfig, Department, Documents, EducationLevel, EnglishSkills,
    Experience, Gender, Languages, Ltc, PlacementStatus, PortfolioStatus, SkillLevel,
    StudentPortfolio, StudentSkill, TypingSpeed, Zone,
};
use crate::recruitment;

/// How many demo portfolios a first run seeds.
pub const SEED_STUDENT_COUNT: usize = 220;

const FIRST_NAMES: [&str; 10] = [
    "Arjun", "Priya", "Rohan", "Sneha", "Vikram", "Anjali", "Deepak", "Kavita", "Sanjay", "Meera",
];
const LAST_NAMES: [&str; 10] = [
    "Mehra", "Sharma", "Deshmukh", "Patel", "Yadav", "Singh", "Kulkarni", "Joshi", "Verma", "Khan",
];

pub fn default_zones() -> Vec<Zone> {
    [
        ("z_west", "West Zone"),
        ("z_north", "North Zone"),
        ("z_south", "South Zone"),
        ("z_east", "East Zone"),
    ]
    .iter()
    .map(|(id, name)| Zone {
        id: (*id).to_string(),
        name: (*name).to_string(),
    })
    .collect()
}

pub fn default_ltcs() -> Vec<Ltc> {
    [
        ("ltc_mumbai", "Mumbai Hub", "z_west"),
        ("ltc_pune", "Pune Center", "z_west"),
        ("ltc_delhi", "Delhi Regional", "z_north"),
        ("ltc_lucknow", "Lucknow Center", "z_north"),
        ("ltc_bangalore", "Bangalore Hub", "z_south"),
    ]
    .iter()
    .map(|(id, name, zone_id)| Ltc {
        id: (*id).to_string(),
        name: (*name).to_string(),
        zone_id: (*zone_id).to_string(),
    })
    .collect()
}

pub fn default_departments() -> Vec<Department> {
    [
        ("d_it", "IT & Data Ops", "fa-laptop-code", "bg-blue-600"),
        ("d_mfg", "Manufacturing", "fa-industry", "bg-orange-600"),
        ("d_retail", "Retail & Sales", "fa-shop", "bg-pink-600"),
        ("d_bfsi", "BFSI (Banking)", "fa-building-columns", "bg-indigo-600"),
        ("d_health", "Healthcare", "fa-heart-pulse", "bg-red-500"),
    ]
    .iter()
    .map(|(id, name, icon, color)| Department {
        id: (*id).to_string(),
        name: (*name).to_string(),
        icon: (*icon).to_string(),
        color: (*color).to_string(),
    })
    .collect()
}

pub fn default_config() -> DashboardConfig {
    DashboardConfig::default()
}

/// Deterministic stand-in for the original mass-data generator: batches cycle
/// through 2020-2024, roughly 70% of records are placed, and every record
/// lands in an LTC belonging to its zone.
pub fn generate_students() -> Vec<StudentPortfolio> {
    let zones = default_zones();
    let ltcs = default_ltcs();
    let departments = default_departments();
    let companies = recruitment::mock_companies();

    let mut students = Vec::with_capacity(SEED_STUDENT_COUNT);
    for i in 0..SEED_STUDENT_COUNT {
        let year = 2020 + (i % 5) as i32;
        let placement = match i % 10 {
            0..=6 => PlacementStatus::Placed,
            7 => PlacementStatus::InProcess,
            _ => PlacementStatus::Unplaced,
        };
        let placed = placement == PlacementStatus::Placed;
        let dept = &departments[i % departments.len()];
        let company = &companies[i % companies.len()];
        let zone = &zones[i % zones.len()];
        let ltc = ltcs
            .iter()
            .find(|l| l.zone_id == zone.id)
            .unwrap_or(&ltcs[0]);
        let salary = if placed {
            10_000.0 + ((i * 37) % 15_000) as f64
        } else {
            0.0
        };

        students.push(StudentPortfolio {
            id: format!("yp-gen-{i}"),
            full_name: format!("{} {}", FIRST_NAMES[i % 10], LAST_NAMES[(i / 10) % 10]),
            father_name: "Parent Name".to_string(),
            dob: "2001-01-01".to_string(),
            gender: if i % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            },
            mobile: format!("9800000{i:03}"),
            email: format!("student{i}@yuvaparivartan.com"),
            village: "Gram Vikas".to_string(),
            district: "District A".to_string(),
            state: "Maharashtra".to_string(),
            preferred_location: "Metro City".to_string(),
            zone_id: zone.id.clone(),
            ltc_id: ltc.id.clone(),
            department_id: dept.id.clone(),
            course_title: format!("{} Professional", dept.name),
            duration: "3 Months".to_string(),
            batch_year: year,
            education_level: EducationLevel::Twelfth,
            institute_name: "Rural College".to_string(),
            passing_year: (year - 1).to_string(),
            basic_computer_knowledge: true,
            software_known: vec!["Excel".to_string(), "Word".to_string()],
            typing_speed: TypingSpeed::Wpm20To30,
            languages: Languages {
                local: true,
                hindi: true,
                english: EnglishSkills {
                    read: true,
                    write: true,
                    speak: false,
                },
            },
            experience: Experience::None,
            availability: Availability::FullTime,
            documents: Documents {
                aadhaar: true,
                bank_account: true,
                education_certificate: true,
            },
            placement_status: placement,
            company_name: placed.then(|| company.name.clone()),
            job_role: placed.then(|| "Assistant".to_string()),
            employment_type: Some("Full-time".to_string()),
            monthly_salary: salary,
            salary_band: Some((if placed { "₹12k–₹18k" } else { "₹8k–₹12k" }).to_string()),
            bio: "Ready to contribute and learn.".to_string(),
            skills: vec![StudentSkill {
                name: "Punctuality".to_string(),
                level: SkillLevel::Advanced,
            }],
            photo_url: format!("https://api.dicebear.com/7.x/avataaars/svg?seed=YP{i}"),
            status: PortfolioStatus::Approved,
            joined_date: format!("{year}-01-15"),
            last_updated: "2024-03-01".to_string(),
            ..StudentPortfolio::default()
        });
    }
    students
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_expected_size() {
        assert_eq!(generate_students().len(), SEED_STUDENT_COUNT);
    }

    #[test]
    fn seeded_ltcs_belong_to_their_zone() {
        let ltcs = default_ltcs();
        let zones = default_zones();
        for student in generate_students() {
            let ltc = ltcs.iter().find(|l| l.id == student.ltc_id).unwrap();
            assert_eq!(ltc.zone_id, student.zone_id);
            assert!(zones.iter().any(|z| z.id == student.zone_id));
        }
    }

    #[test]
    fn seed_placement_mix_is_roughly_seventy_percent() {
        let students = generate_students();
        let placed = students
            .iter()
            .filter(|s| s.placement_status == PlacementStatus::Placed)
            .count();
        assert_eq!(placed, 154); // 7 out of every 10
        assert!(students
            .iter()
            .any(|s| s.placement_status == PlacementStatus::InProcess));
        assert!(students
            .iter()
            .filter(|s| s.placement_status == PlacementStatus::Placed)
            .all(|s| s.company_name.is_some() && s.monthly_salary >= 10_000.0));
    }

    #[test]
    fn seed_records_are_approved() {
        assert!(generate_students()
            .iter()
            .all(|s| s.status == PortfolioStatus::Approved));
    }

    #[test]
    fn seed_covers_every_trend_year() {
        let students = generate_students();
        for year in [2020, 2021, 2022, 2023, 2024] {
            assert!(students.iter().any(|s| s.batch_year == year));
        }
    }
}
