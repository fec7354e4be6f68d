//! JSON wire model for saved intake records and translation to and from the domain model.
//!
//! Responsibilities:
//! - Define the exact on-disk shape (top-level keys, all values as strings or string lists)
//! - Render skipped vital signs as the "Not recorded" placeholder, and only here
//! - Re-validate every field when reading a file back, so a loaded record obeys the same rules
//!   as one typed at the terminal
//!
//! Notes:
//! - `pain_level` is omitted entirely when absent, never written as an empty string
//! - There is no schema version field

use crate::conditions::mentions_pain;
use crate::constants::{DATE_OF_BIRTH_FORMAT, NOT_RECORDED, RECORD_TIMESTAMP_FORMAT};
use crate::error::{IntakeError, IntakeResult};
use crate::record::{
    EmergencyContact, IntakeRecord, MedicalHistory, MedicationsAllergies, PatientInfo, Symptoms,
    VitalSigns,
};
use crate::validation::{
    parse_stored_height, validate_blood_pressure, validate_date_of_birth, validate_email,
    validate_emergency_phone, validate_gender, validate_heart_rate, validate_pain_level,
    validate_phone, validate_required, validate_temperature, validate_weight, ValidationError,
};
use chrono::NaiveDateTime;
use intake_types::NonEmptyText;
use serde::{Deserialize, Serialize};

// ============================================================================
// Wire types
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntakeRecordWire {
    pub patient_info: PatientInfoWire,
    pub vital_signs: VitalSignsWire,
    pub symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_level: Option<String>,
    pub medical_history: MedicalHistoryWire,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
    pub timestamp: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatientInfoWire {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VitalSignsWire {
    pub blood_pressure: String,
    pub temperature: String,
    pub weight: String,
    pub height: String,
    pub heart_rate: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MedicalHistoryWire {
    pub surgeries: Vec<String>,
    pub chronic_conditions: Vec<String>,
    pub family_history: String,
    pub smoking_status: String,
    pub alcohol_use: String,
}

// ============================================================================
// Domain -> wire
// ============================================================================

fn or_not_recorded<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| NOT_RECORDED.to_owned(), ToString::to_string)
}

fn texts_to_wire(items: &[NonEmptyText]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

impl From<&IntakeRecord> for IntakeRecordWire {
    fn from(record: &IntakeRecord) -> Self {
        let info = &record.patient_info;
        let vitals = &record.vital_signs;
        let history = &record.medical_history;

        Self {
            patient_info: PatientInfoWire {
                first_name: info.first_name.to_string(),
                last_name: info.last_name.to_string(),
                date_of_birth: info.date_of_birth.format(DATE_OF_BIRTH_FORMAT).to_string(),
                gender: info.gender.as_token().to_owned(),
                phone: info.phone.to_string(),
                email: info
                    .email
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                emergency_contact: info
                    .emergency_contact
                    .as_ref()
                    .map(|c| c.name.to_string())
                    .unwrap_or_default(),
                emergency_phone: info
                    .emergency_contact
                    .as_ref()
                    .map(|c| c.phone.to_string())
                    .unwrap_or_default(),
            },
            vital_signs: VitalSignsWire {
                blood_pressure: or_not_recorded(vitals.blood_pressure.as_ref()),
                temperature: or_not_recorded(vitals.temperature.as_ref()),
                weight: or_not_recorded(vitals.weight.as_ref()),
                height: or_not_recorded(vitals.height.as_ref()),
                heart_rate: or_not_recorded(vitals.heart_rate.as_ref()),
            },
            symptoms: texts_to_wire(&record.symptoms.entries),
            pain_level: record.symptoms.pain_level.map(|p| p.to_string()),
            medical_history: MedicalHistoryWire {
                surgeries: texts_to_wire(&history.surgeries),
                chronic_conditions: texts_to_wire(&history.chronic_conditions),
                family_history: history.family_history.clone(),
                smoking_status: history.smoking_status.clone(),
                alcohol_use: history.alcohol_use.clone(),
            },
            medications: texts_to_wire(&record.medications_allergies.medications),
            allergies: texts_to_wire(&record.medications_allergies.allergies),
            timestamp: record
                .timestamp
                .map(|t| t.format(RECORD_TIMESTAMP_FORMAT).to_string()),
        }
    }
}

// ============================================================================
// Wire -> domain
// ============================================================================

fn field<T>(name: &'static str, result: Result<T, ValidationError>) -> IntakeResult<T> {
    result.map_err(|e| IntakeError::InvalidRecord {
        field: name,
        reason: e.to_string(),
    })
}

/// Treat the placeholder like a blank answer before handing the value to its validator.
fn recorded(value: &str) -> &str {
    if value.trim() == NOT_RECORDED {
        ""
    } else {
        value
    }
}

fn texts_from_wire(name: &'static str, items: &[String]) -> IntakeResult<Vec<NonEmptyText>> {
    items
        .iter()
        .map(|s| field(name, validate_required(name, s)))
        .collect()
}

impl TryFrom<IntakeRecordWire> for IntakeRecord {
    type Error = IntakeError;

    fn try_from(wire: IntakeRecordWire) -> IntakeResult<Self> {
        let p = &wire.patient_info;
        let emergency_contact = match NonEmptyText::new(&p.emergency_contact) {
            Ok(name) => Some(EmergencyContact {
                name,
                phone: field("emergency_phone", validate_emergency_phone(&p.emergency_phone))?,
            }),
            Err(_) if p.emergency_phone.trim().is_empty() => None,
            Err(_) => {
                return Err(IntakeError::InvalidRecord {
                    field: "emergency_phone",
                    reason: "emergency phone given without an emergency contact".into(),
                })
            }
        };
        let patient_info = PatientInfo {
            first_name: field("first_name", validate_required("First name", &p.first_name))?,
            last_name: field("last_name", validate_required("Last name", &p.last_name))?,
            date_of_birth: field("date_of_birth", validate_date_of_birth(&p.date_of_birth))?,
            gender: field("gender", validate_gender(&p.gender))?,
            phone: field("phone", validate_phone(&p.phone))?,
            email: field("email", validate_email(&p.email))?,
            emergency_contact,
        };

        let v = &wire.vital_signs;
        let vital_signs = VitalSigns {
            blood_pressure: field(
                "blood_pressure",
                validate_blood_pressure(recorded(&v.blood_pressure)),
            )?,
            temperature: field("temperature", validate_temperature(recorded(&v.temperature)))?,
            weight: field("weight", validate_weight(recorded(&v.weight)))?,
            height: field("height", parse_stored_height(recorded(&v.height)))?,
            heart_rate: field("heart_rate", validate_heart_rate(recorded(&v.heart_rate)))?,
        };

        let entries = texts_from_wire("symptoms", &wire.symptoms)?;
        let pain_level = match wire.pain_level.as_deref() {
            Some(text) => field("pain_level", validate_pain_level(text))?,
            None => None,
        };
        if pain_level.is_some() && !mentions_pain(&entries) {
            return Err(IntakeError::InvalidRecord {
                field: "pain_level",
                reason: "pain level recorded but no symptom mentions pain".into(),
            });
        }

        let h = &wire.medical_history;
        let medical_history = MedicalHistory {
            surgeries: texts_from_wire("surgeries", &h.surgeries)?,
            chronic_conditions: texts_from_wire("chronic_conditions", &h.chronic_conditions)?,
            family_history: h.family_history.trim().to_owned(),
            smoking_status: h.smoking_status.trim().to_owned(),
            alcohol_use: h.alcohol_use.trim().to_owned(),
        };

        let medications_allergies = MedicationsAllergies {
            medications: texts_from_wire("medications", &wire.medications)?,
            allergies: texts_from_wire("allergies", &wire.allergies)?,
        };

        let timestamp = wire
            .timestamp
            .as_deref()
            .map(|t| {
                t.parse::<NaiveDateTime>()
                    .map_err(|e| IntakeError::InvalidRecord {
                        field: "timestamp",
                        reason: e.to_string(),
                    })
            })
            .transpose()?;

        Ok(IntakeRecord {
            patient_info,
            vital_signs,
            symptoms: Symptoms {
                entries,
                pain_level,
            },
            medical_history,
            medications_allergies,
            timestamp,
        })
    }
}

/// Serialize a record as 2-space indented JSON.
pub fn to_json(record: &IntakeRecord) -> IntakeResult<String> {
    serde_json::to_string_pretty(&IntakeRecordWire::from(record)).map_err(IntakeError::Serialization)
}

/// Parse and validate a record from JSON.
pub fn from_json(json: &str) -> IntakeResult<IntakeRecord> {
    let wire: IntakeRecordWire = serde_json::from_str(json).map_err(IntakeError::Deserialization)?;
    IntakeRecord::try_from(wire)
}
