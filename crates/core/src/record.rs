//! Intake record domain model.
//!
//! The domain model is strongly typed: a skipped vital sign is `None`, an emergency phone only
//! exists alongside an emergency contact, and every required text field is a [`NonEmptyText`].
//! The "Not recorded" placeholder never appears here; it belongs to the wire model in
//! [`crate::wire`].
//!
//! [`IntakeForm`] is the in-progress draft. It accepts sections strictly in [`Section`] order and
//! only yields an [`IntakeRecord`] once every data section has been collected.

use crate::error::{IntakeError, IntakeResult};
use chrono::{NaiveDate, NaiveDateTime};
use intake_types::{EmailAddress, NonEmptyText, PhoneNumber};

/// The sections of the form, in the order they are collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    PatientInfo,
    VitalSigns,
    Symptoms,
    MedicalHistory,
    MedicationsAllergies,
    Summary,
}

impl Section {
    /// All sections in collection order.
    pub const ORDER: [Section; 6] = [
        Section::PatientInfo,
        Section::VitalSigns,
        Section::Symptoms,
        Section::MedicalHistory,
        Section::MedicationsAllergies,
        Section::Summary,
    ];

    /// Header text shown when the section starts.
    pub fn title(self) -> &'static str {
        match self {
            Section::PatientInfo => "PATIENT INFORMATION",
            Section::VitalSigns => "VITAL SIGNS",
            Section::Symptoms => "SYMPTOMS & CHIEF COMPLAINT",
            Section::MedicalHistory => "MEDICAL HISTORY",
            Section::MedicationsAllergies => "MEDICATIONS & ALLERGIES",
            Section::Summary => "DATA SUMMARY",
        }
    }

    /// The section that follows this one, if any.
    pub fn next(self) -> Option<Section> {
        let idx = Section::ORDER.iter().position(|s| *s == self)?;
        Section::ORDER.get(idx + 1).copied()
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Section::PatientInfo => "patient information",
            Section::VitalSigns => "vital signs",
            Section::Symptoms => "symptoms",
            Section::MedicalHistory => "medical history",
            Section::MedicationsAllergies => "medications and allergies",
            Section::Summary => "summary",
        };
        f.write_str(name)
    }
}

/// Administrative gender as captured on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Uppercase token used on the form and in the saved file.
    pub fn as_token(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "OTHER",
        }
    }

    /// Case-insensitive parse of `M`, `F` or `OTHER`.
    pub fn from_token(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            "OTHER" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

/// A second person to call, always paired with a valid phone number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: NonEmptyText,
    pub phone: PhoneNumber,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientInfo {
    pub first_name: NonEmptyText,
    pub last_name: NonEmptyText,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub phone: PhoneNumber,
    pub email: Option<EmailAddress>,
    pub emergency_contact: Option<EmergencyContact>,
}

/// Blood pressure reading, kept exactly as entered (e.g. `130/85`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloodPressure {
    pub(crate) text: String,
    pub(crate) systolic: u16,
    pub(crate) diastolic: u16,
}

impl BloodPressure {
    pub fn systolic(&self) -> u16 {
        self.systolic
    }

    pub fn diastolic(&self) -> u16 {
        self.diastolic
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// A numeric reading that keeps the operator's original text alongside its value.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub(crate) text: String,
    pub(crate) value: f64,
}

impl Measurement {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Patient height, entered either as plain inches or as feet and inches.
#[derive(Clone, Debug, PartialEq)]
pub enum Height {
    /// Plain inches, stored as typed (e.g. `70` or `70.5`).
    Inches(Measurement),
    /// Feet and inches, stored in the canonical `68 inches (5'8")` form.
    FeetInches { feet: u32, inches: u32 },
}

impl Height {
    pub fn total_inches(&self) -> f64 {
        match self {
            Height::Inches(m) => m.value,
            Height::FeetInches { feet, inches } => f64::from(feet * 12 + inches),
        }
    }
}

impl std::fmt::Display for Height {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Height::Inches(m) => f.write_str(&m.text),
            Height::FeetInches { feet, inches } => {
                write!(f, "{} inches ({}'{}\")", feet * 12 + inches, feet, inches)
            }
        }
    }
}

/// Vital signs. `None` means the operator left the field blank.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VitalSigns {
    pub blood_pressure: Option<BloodPressure>,
    pub temperature: Option<Measurement>,
    pub weight: Option<Measurement>,
    pub height: Option<Height>,
    pub heart_rate: Option<Measurement>,
}

/// Self-reported pain on a 0 to 10 scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PainLevel(pub(crate) u8);

impl PainLevel {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PainLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Symptoms with the chief complaint first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Symptoms {
    pub entries: Vec<NonEmptyText>,
    pub pain_level: Option<PainLevel>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MedicalHistory {
    pub surgeries: Vec<NonEmptyText>,
    pub chronic_conditions: Vec<NonEmptyText>,
    pub family_history: String,
    pub smoking_status: String,
    pub alcohol_use: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MedicationsAllergies {
    pub medications: Vec<NonEmptyText>,
    pub allergies: Vec<NonEmptyText>,
}

/// A fully collected intake record.
#[derive(Clone, Debug, PartialEq)]
pub struct IntakeRecord {
    pub patient_info: PatientInfo,
    pub vital_signs: VitalSigns,
    pub symptoms: Symptoms,
    pub medical_history: MedicalHistory,
    pub medications_allergies: MedicationsAllergies,
    /// Set when the operator confirms the save.
    pub timestamp: Option<NaiveDateTime>,
}

impl IntakeRecord {
    /// Stamp the record with the save instant. A record is only written once stamped.
    pub fn finalise(mut self, at: NaiveDateTime) -> Self {
        self.timestamp = Some(at);
        self
    }

    pub fn is_finalised(&self) -> bool {
        self.timestamp.is_some()
    }
}

/// The record as it is being filled in, one section at a time.
#[derive(Debug, Default)]
pub struct IntakeForm {
    patient_info: Option<PatientInfo>,
    vital_signs: Option<VitalSigns>,
    symptoms: Option<Symptoms>,
    medical_history: Option<MedicalHistory>,
    medications_allergies: Option<MedicationsAllergies>,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next section waiting to be collected.
    pub fn next_section(&self) -> Section {
        if self.patient_info.is_none() {
            Section::PatientInfo
        } else if self.vital_signs.is_none() {
            Section::VitalSigns
        } else if self.symptoms.is_none() {
            Section::Symptoms
        } else if self.medical_history.is_none() {
            Section::MedicalHistory
        } else if self.medications_allergies.is_none() {
            Section::MedicationsAllergies
        } else {
            Section::Summary
        }
    }

    fn expect_section(&self, found: Section) -> IntakeResult<()> {
        let expected = self.next_section();
        if expected != found {
            return Err(IntakeError::OutOfOrder { expected, found });
        }
        Ok(())
    }

    pub fn set_patient_info(&mut self, info: PatientInfo) -> IntakeResult<()> {
        self.expect_section(Section::PatientInfo)?;
        self.patient_info = Some(info);
        Ok(())
    }

    pub fn set_vital_signs(&mut self, vitals: VitalSigns) -> IntakeResult<()> {
        self.expect_section(Section::VitalSigns)?;
        self.vital_signs = Some(vitals);
        Ok(())
    }

    pub fn set_symptoms(&mut self, symptoms: Symptoms) -> IntakeResult<()> {
        self.expect_section(Section::Symptoms)?;
        self.symptoms = Some(symptoms);
        Ok(())
    }

    pub fn set_medical_history(&mut self, history: MedicalHistory) -> IntakeResult<()> {
        self.expect_section(Section::MedicalHistory)?;
        self.medical_history = Some(history);
        Ok(())
    }

    pub fn set_medications_allergies(&mut self, meds: MedicationsAllergies) -> IntakeResult<()> {
        self.expect_section(Section::MedicationsAllergies)?;
        self.medications_allergies = Some(meds);
        Ok(())
    }

    /// Assemble the final record. Fails if any data section is still missing.
    pub fn complete(self) -> IntakeResult<IntakeRecord> {
        Ok(IntakeRecord {
            patient_info: self
                .patient_info
                .ok_or(IntakeError::IncompleteRecord(Section::PatientInfo))?,
            vital_signs: self
                .vital_signs
                .ok_or(IntakeError::IncompleteRecord(Section::VitalSigns))?,
            symptoms: self
                .symptoms
                .ok_or(IntakeError::IncompleteRecord(Section::Symptoms))?,
            medical_history: self
                .medical_history
                .ok_or(IntakeError::IncompleteRecord(Section::MedicalHistory))?,
            medications_allergies: self
                .medications_allergies
                .ok_or(IntakeError::IncompleteRecord(Section::MedicationsAllergies))?,
            timestamp: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient() -> PatientInfo {
        PatientInfo {
            first_name: NonEmptyText::new("Jane").unwrap(),
            last_name: NonEmptyText::new("Smith").unwrap(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
            gender: Gender::Female,
            phone: PhoneNumber::parse("555-987-6543").unwrap(),
            email: None,
            emergency_contact: None,
        }
    }

    #[test]
    fn sections_follow_fixed_order() {
        let mut section = Section::PatientInfo;
        let mut visited = vec![section];
        while let Some(next) = section.next() {
            visited.push(next);
            section = next;
        }
        assert_eq!(visited, Section::ORDER.to_vec());
        assert_eq!(Section::Summary.next(), None);
    }

    #[test]
    fn gender_tokens_are_case_insensitive() {
        assert_eq!(Gender::from_token("m"), Some(Gender::Male));
        assert_eq!(Gender::from_token("F"), Some(Gender::Female));
        assert_eq!(Gender::from_token("oThEr"), Some(Gender::Other));
        assert_eq!(Gender::from_token("x"), None);
        assert_eq!(Gender::Other.to_string(), "OTHER");
    }

    #[test]
    fn height_renders_canonical_feet_inches() {
        let h = Height::FeetInches { feet: 5, inches: 8 };
        assert_eq!(h.to_string(), "68 inches (5'8\")");
        assert_eq!(h.total_inches(), 68.0);
    }

    #[test]
    fn form_rejects_out_of_order_sections() {
        let mut form = IntakeForm::new();
        let err = form
            .set_vital_signs(VitalSigns::default())
            .expect_err("vitals before patient info should fail");
        assert!(matches!(
            err,
            IntakeError::OutOfOrder {
                expected: Section::PatientInfo,
                found: Section::VitalSigns
            }
        ));

        form.set_patient_info(patient()).expect("first section");
        let err = form
            .set_patient_info(patient())
            .expect_err("patient info cannot be revisited");
        assert!(matches!(err, IntakeError::OutOfOrder { .. }));
    }

    #[test]
    fn incomplete_form_does_not_produce_record() {
        let mut form = IntakeForm::new();
        form.set_patient_info(patient()).unwrap();
        form.set_vital_signs(VitalSigns::default()).unwrap();

        let err = form.complete().expect_err("symptoms missing");
        assert!(matches!(err, IntakeError::IncompleteRecord(Section::Symptoms)));
    }

    #[test]
    fn complete_form_reaches_summary_and_is_unstamped() {
        let mut form = IntakeForm::new();
        form.set_patient_info(patient()).unwrap();
        form.set_vital_signs(VitalSigns::default()).unwrap();
        form.set_symptoms(Symptoms::default()).unwrap();
        form.set_medical_history(MedicalHistory::default()).unwrap();
        form.set_medications_allergies(MedicationsAllergies::default())
            .unwrap();
        assert_eq!(form.next_section(), Section::Summary);

        let record = form.complete().expect("all sections collected");
        assert!(!record.is_finalised());

        let at = NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(9, 15, 2)
            .unwrap();
        let record = record.finalise(at);
        assert_eq!(record.timestamp, Some(at));
    }
}
