//! Wire types for the agencies backend
//!
//! The backend passes its spreadsheet-sourced columns through verbatim, so
//! the field names below (`"LAW ENFORCEMENT AGENCY"` etc.) are an external,
//! fixed contract. Do not normalize them without coordinating with the
//! backend owner.

use serde::{Deserialize, Serialize};

/// One law-enforcement agency row from `/agencies/nearby`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    #[serde(rename = "LAW ENFORCEMENT AGENCY")]
    pub name: String,

    #[serde(rename = "STATE")]
    pub state: String,

    /// Raw support-type string, e.g. "Jail Enforcement Model" or "Pending".
    /// Missing on some rows; treated as empty.
    #[serde(rename = "SUPPORT TYPE", default)]
    pub support_type: String,
}

/// Participation status derived from the raw support-type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportStatus {
    /// The agency has applied but is not yet active.
    Pending,
    /// Every non-"Pending" support type, including an absent one.
    Participating,
}

impl SupportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SupportStatus::Pending => "Pending",
            SupportStatus::Participating => "Participating",
        }
    }
}

impl Agency {
    /// Classify this agency: the literal string "Pending" marks an in-progress
    /// application, anything else counts as participating.
    pub fn status(&self) -> SupportStatus {
        if self.support_type == "Pending" {
            SupportStatus::Pending
        } else {
            SupportStatus::Participating
        }
    }
}

/// Fixed explanation text for the known 287(g) support types.
pub fn support_type_explanation(support_type: &str) -> Option<&'static str> {
    match support_type {
        "Jail Enforcement Model" => Some(
            "The Jail Enforcement Model is designed to identify and process removable \
             aliens — with criminal or pending criminal charges — who are arrested by \
             state or local law enforcement agencies.",
        ),
        "Task Force Model" => Some(
            "The Task Force Model serves as a force multiplier for law enforcement \
             agencies to enforce limited immigration authority with ICE oversight \
             during their routine police duties.",
        ),
        "Warrant Service Officer" => Some(
            "The Warrant Service Officer program allows ICE to train, certify and \
             authorize state and local law enforcement officers to serve and execute \
             administrative warrants on aliens in their agency's jail.",
        ),
        _ => None,
    }
}

/// What the visitor typed into the search form, captured at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub zip: String,
    pub city: String,
    pub state: String,
}

impl SearchCriteria {
    /// Build the query string for `/agencies/nearby`.
    ///
    /// ZIP takes precedence and is sent raw. City is percent-encoded (it can
    /// contain spaces); state is sent raw. When nothing usable was entered
    /// the query is empty and the request is still issued — the backend
    /// answers that case itself, the client does not validate.
    pub fn query(&self) -> String {
        if !self.zip.is_empty() {
            format!("zipcode={}", self.zip)
        } else if !self.city.is_empty() && !self.state.is_empty() {
            format!(
                "city={}&state={}",
                urlencoding::encode(&self.city),
                self.state
            )
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_query_is_raw() {
        let criteria = SearchCriteria {
            zip: "55401".to_string(),
            ..Default::default()
        };
        assert_eq!(criteria.query(), "zipcode=55401");
    }

    #[test]
    fn test_zip_wins_over_city_and_state() {
        let criteria = SearchCriteria {
            zip: "10001".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
        };
        assert_eq!(criteria.query(), "zipcode=10001");
    }

    #[test]
    fn test_city_is_encoded_state_is_raw() {
        let criteria = SearchCriteria {
            zip: String::new(),
            city: "Saint Paul".to_string(),
            state: "MN".to_string(),
        };
        assert_eq!(criteria.query(), "city=Saint%20Paul&state=MN");
    }

    #[test]
    fn test_city_without_state_yields_empty_query() {
        let criteria = SearchCriteria {
            city: "Chicago".to_string(),
            ..Default::default()
        };
        assert_eq!(criteria.query(), "");
    }

    #[test]
    fn test_empty_criteria_yield_empty_query() {
        assert_eq!(SearchCriteria::default().query(), "");
    }

    #[test]
    fn test_pending_support_type_classifies_as_pending() {
        let agency = Agency {
            name: "Springfield PD".to_string(),
            state: "IL".to_string(),
            support_type: "Pending".to_string(),
        };
        assert_eq!(agency.status(), SupportStatus::Pending);
        assert_eq!(agency.status().label(), "Pending");
    }

    #[test]
    fn test_other_support_types_classify_as_participating() {
        for support_type in ["Jail Enforcement Model", "Active", ""] {
            let agency = Agency {
                name: "Springfield PD".to_string(),
                state: "IL".to_string(),
                support_type: support_type.to_string(),
            };
            assert_eq!(agency.status(), SupportStatus::Participating);
            assert_eq!(agency.status().label(), "Participating");
        }
    }

    #[test]
    fn test_agency_deserializes_from_exact_wire_keys() {
        let agency: Agency = serde_json::from_str(
            r#"{"LAW ENFORCEMENT AGENCY":"Springfield PD","STATE":"IL","SUPPORT TYPE":"Pending"}"#,
        )
        .unwrap();
        assert_eq!(agency.name, "Springfield PD");
        assert_eq!(agency.state, "IL");
        assert_eq!(agency.support_type, "Pending");
    }

    #[test]
    fn test_missing_support_type_defaults_to_empty() {
        let agency: Agency = serde_json::from_str(
            r#"{"LAW ENFORCEMENT AGENCY":"Springfield PD","STATE":"IL"}"#,
        )
        .unwrap();
        assert_eq!(agency.support_type, "");
        assert_eq!(agency.status(), SupportStatus::Participating);
    }

    #[test]
    fn test_known_support_types_have_explanations() {
        assert!(support_type_explanation("Jail Enforcement Model").is_some());
        assert!(support_type_explanation("Task Force Model").is_some());
        assert!(support_type_explanation("Warrant Service Officer").is_some());
        assert!(support_type_explanation("Pending").is_none());
        assert!(support_type_explanation("").is_none());
    }
}
