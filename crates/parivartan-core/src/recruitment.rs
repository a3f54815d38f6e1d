//! Recruitment-side entities: companies, openings, and digital offers.
//!
//! This module is only partially wired into the rest of the system. The
//! board is seeded with mock data at startup and is never persisted; offer
//! state changes live for the session only.

use serde::{Deserialize, Serialize};

use crate::domain::{Company, JobOffer, JobOpening, OfferStatus, RecruitmentStatus, WorkMode};
use crate::error::{CoreError, CoreResult};
use crate::util;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecruitmentBoard {
    pub companies: Vec<Company>,
    pub openings: Vec<JobOpening>,
    pub offers: Vec<JobOffer>,
}

impl RecruitmentBoard {
    /// Flip an offer to the given state, restamping it. Accepting attaches a
    /// digital-consent marker; any other state clears it.
    pub fn set_offer_status(&mut self, id: &str, status: OfferStatus) -> CoreResult<&JobOffer> {
        let offer = self
            .offers
            .iter_mut()
            .find(|offer| offer.id == id)
            .ok_or_else(|| CoreError::not_found("Offer", id))?;
        offer.status = status;
        offer.timestamp = util::now_iso();
        offer.digital_consent = match status {
            OfferStatus::Accepted => Some(format!("SIGNED_BY_STUDENT_{}", util::now_millis())),
            _ => None,
        };
        Ok(offer)
    }
}

pub fn mock_companies() -> Vec<Company> {
    let rows = [
        ("c1", "Tata Motors", "Manufacturing", "Pune"),
        ("c2", "HDFC Bank", "BFSI", "Mumbai"),
        ("c3", "Reliance Retail", "Retail", "Navi Mumbai"),
        ("c4", "Amazon Logistics", "Logistics", "Bangalore"),
        ("c5", "Apollo Hospitals", "Healthcare", "Delhi"),
        ("c6", "Infosys", "IT", "Mysore"),
    ];
    rows.iter()
        .map(|(id, name, industry, location)| Company {
            id: (*id).to_string(),
            name: (*name).to_string(),
            industry: (*industry).to_string(),
            location: (*location).to_string(),
            logo: String::new(),
        })
        .collect()
}

pub fn mock_openings() -> Vec<JobOpening> {
    vec![
        JobOpening {
            id: "j1".to_string(),
            company_id: "c1".to_string(),
            title: "Assembly Line Tech".to_string(),
            salary: 18_000,
            openings: 25,
            status: RecruitmentStatus::Planned,
            visit_date: "2024-06-15".to_string(),
            mode: WorkMode::Onsite,
        },
        JobOpening {
            id: "j2".to_string(),
            company_id: "c2".to_string(),
            title: "Banking Assistant".to_string(),
            salary: 22_000,
            openings: 10,
            status: RecruitmentStatus::InterviewOngoing,
            visit_date: "2024-05-20".to_string(),
            mode: WorkMode::Hybrid,
        },
        JobOpening {
            id: "j3".to_string(),
            company_id: "c3".to_string(),
            title: "Retail Associate".to_string(),
            salary: 15_000,
            openings: 40,
            status: RecruitmentStatus::OffersReleased,
            visit_date: "2024-04-10".to_string(),
            mode: WorkMode::Onsite,
        },
    ]
}

pub fn mock_board() -> RecruitmentBoard {
    let now = util::now_iso();
    RecruitmentBoard {
        companies: mock_companies(),
        openings: mock_openings(),
        offers: vec![
            JobOffer {
                id: "off-1".to_string(),
                student_id: "yp-gen-0".to_string(),
                opening_id: "j1".to_string(),
                status: OfferStatus::Pending,
                timestamp: now.clone(),
                digital_consent: None,
            },
            JobOffer {
                id: "off-2".to_string(),
                student_id: "yp-gen-5".to_string(),
                opening_id: "j2".to_string(),
                status: OfferStatus::Accepted,
                timestamp: now,
                digital_consent: Some("CONSENT_SIGNED_IP_192.168.1.1".to_string()),
            },
        ],
    }
}
