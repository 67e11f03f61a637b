//! Domain entities. Pure data structures for the risk core.
//!
//! No HTTP/DTO types here; adapters map into these.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Patient demographics needed for a risk assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientSummary {
    pub id: i64,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Single-letter code used by the patient service.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

/// Error returned when a gender code is neither `M` nor `F`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid gender code '{0}' (expected M or F)")]
pub struct InvalidGender(pub String);

impl FromStr for Gender {
    type Err = InvalidGender;

    /// Exactly `M` or `F`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            other => Err(InvalidGender(other.to_string())),
        }
    }
}

/// A single clinical note. Only the text matters for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicalNote {
    pub text: String,
}

impl ClinicalNote {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Diabetes risk level, ordered by severity.
///
/// Serializes to the stable labels `None`, `Borderline`, `InDanger`, `EarlyOnset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    None,
    Borderline,
    InDanger,
    EarlyOnset,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::None => "None",
            RiskLevel::Borderline => "Borderline",
            RiskLevel::InDanger => "InDanger",
            RiskLevel::EarlyOnset => "EarlyOnset",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one assessment. Built fresh per request and handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResult {
    pub patient_id: i64,
    pub age: i32,
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_codes() {
        assert_eq!("M".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("F".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(Gender::Female.code(), "F");
        assert_eq!("f".parse::<Gender>(), Err(InvalidGender("f".into())));
        assert!(" M ".parse::<Gender>().is_err());
        assert!("X".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
        assert!("Male".parse::<Gender>().is_err());
    }

    #[test]
    fn test_invalid_gender_message() {
        let err = "X".parse::<Gender>().unwrap_err();
        assert_eq!(err.to_string(), "invalid gender code 'X' (expected M or F)");
    }

    #[test]
    fn test_risk_level_labels_match_serde() {
        for level in [
            RiskLevel::None,
            RiskLevel::Borderline,
            RiskLevel::InDanger,
            RiskLevel::EarlyOnset,
        ] {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.label()));
        }
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::None < RiskLevel::Borderline);
        assert!(RiskLevel::Borderline < RiskLevel::InDanger);
        assert!(RiskLevel::InDanger < RiskLevel::EarlyOnset);
    }

    #[test]
    fn test_risk_result_json_shape() {
        let result = RiskResult {
            patient_id: 1,
            age: 44,
            risk_level: RiskLevel::InDanger,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"patientId": 1, "age": 44, "riskLevel": "InDanger"})
        );
    }
}
