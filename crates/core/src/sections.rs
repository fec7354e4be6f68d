//! Section collectors.
//!
//! One function per data section. Each prints its header, asks its fields in a fixed order
//! through [`prompt::ask`], and returns the finished section. Conditional fields are gated by
//! the predicates in [`crate::conditions`].

use crate::conditions::{mentions_pain, needs_emergency_phone};
use crate::constants::HEADER_WIDTH;
use crate::error::IntakeResult;
use crate::prompt::{self, Terminal};
use crate::record::{
    EmergencyContact, MedicalHistory, MedicationsAllergies, PatientInfo, Section, Symptoms,
    VitalSigns,
};
use crate::validation::{
    validate_blood_pressure, validate_date_of_birth, validate_email, validate_emergency_phone,
    validate_gender, validate_heart_rate, validate_height, validate_optional_text,
    validate_pain_level, validate_phone, validate_required, validate_temperature, validate_weight,
};

pub fn collect_patient_info(term: &mut dyn Terminal) -> IntakeResult<PatientInfo> {
    prompt::header(term, Section::PatientInfo.title(), HEADER_WIDTH)?;

    let first_name = prompt::ask(term, "First Name: ", |s| validate_required("First name", s))?;
    let last_name = prompt::ask(term, "Last Name: ", |s| validate_required("Last name", s))?;
    let date_of_birth = prompt::ask(term, "Date of Birth (MM/DD/YYYY): ", validate_date_of_birth)?;
    let gender = prompt::ask(term, "Gender (M/F/Other): ", validate_gender)?;
    let phone = prompt::ask(term, "Phone Number: ", validate_phone)?;
    let email = prompt::ask(term, "Email (optional): ", validate_email)?;

    let contact_name = validate_optional_text(&term.read_line("Emergency Contact Name: ")?);
    let emergency_contact = match contact_name {
        Some(name) if needs_emergency_phone(Some(&name)) => {
            let phone = prompt::ask(term, "Emergency Contact Phone: ", validate_emergency_phone)?;
            Some(EmergencyContact { name, phone })
        }
        _ => None,
    };

    tracing::info!(section = %Section::PatientInfo, "section collected");
    Ok(PatientInfo {
        first_name,
        last_name,
        date_of_birth,
        gender,
        phone,
        email,
        emergency_contact,
    })
}

pub fn collect_vital_signs(term: &mut dyn Terminal) -> IntakeResult<VitalSigns> {
    prompt::header(term, Section::VitalSigns.title(), HEADER_WIDTH)?;

    let vitals = VitalSigns {
        blood_pressure: prompt::ask(
            term,
            "Blood Pressure (e.g., 120/80): ",
            validate_blood_pressure,
        )?,
        temperature: prompt::ask(term, "Temperature (°F, e.g., 98.6): ", validate_temperature)?,
        weight: prompt::ask(term, "Weight (lbs): ", validate_weight)?,
        height: prompt::ask(
            term,
            "Height (inches or ft'in\", e.g., 68 or 5'8\"): ",
            validate_height,
        )?,
        heart_rate: prompt::ask(term, "Heart Rate (bpm): ", validate_heart_rate)?,
    };

    tracing::info!(section = %Section::VitalSigns, "section collected");
    Ok(vitals)
}

pub fn collect_symptoms(term: &mut dyn Terminal) -> IntakeResult<Symptoms> {
    prompt::header(term, Section::Symptoms.title(), HEADER_WIDTH)?;

    term.say("Please describe the main reason for today's visit:")?;
    let chief_complaint = validate_optional_text(&term.read_line("Chief Complaint: ")?);

    term.say("")?;
    term.say("Any additional symptoms? (Enter one per line, press Enter twice when done)")?;
    let mut entries: Vec<_> = chief_complaint.into_iter().collect();
    entries.extend(prompt::collect_list(term, "Symptom: ")?);

    let pain_level = if mentions_pain(&entries) {
        prompt::ask(
            term,
            "Pain level (0-10 scale, 0=no pain, 10=worst pain): ",
            validate_pain_level,
        )?
    } else {
        None
    };

    tracing::info!(section = %Section::Symptoms, "section collected");
    Ok(Symptoms {
        entries,
        pain_level,
    })
}

pub fn collect_medical_history(term: &mut dyn Terminal) -> IntakeResult<MedicalHistory> {
    prompt::header(term, Section::MedicalHistory.title(), HEADER_WIDTH)?;

    term.say("Any previous surgeries? (Enter one per line, press Enter twice when done)")?;
    let surgeries = prompt::collect_list(term, "Surgery: ")?;

    term.say("")?;
    term.say("Any chronic conditions or ongoing health issues?")?;
    let chronic_conditions = prompt::collect_list(term, "Condition: ")?;

    term.say("")?;
    let family_history = prompt::ask_text(term, "Significant family medical history: ")?;
    let smoking_status = prompt::ask_text(term, "Smoking status (Never/Former/Current): ")?;
    let alcohol_use = prompt::ask_text(term, "Alcohol use (None/Occasional/Regular): ")?;

    tracing::info!(section = %Section::MedicalHistory, "section collected");
    Ok(MedicalHistory {
        surgeries,
        chronic_conditions,
        family_history,
        smoking_status,
        alcohol_use,
    })
}

pub fn collect_medications_allergies(
    term: &mut dyn Terminal,
) -> IntakeResult<MedicationsAllergies> {
    prompt::header(term, Section::MedicationsAllergies.title(), HEADER_WIDTH)?;

    term.say("Current medications (include dosage if known):")?;
    let medications = prompt::collect_list(term, "Medication: ")?;

    term.say("")?;
    term.say("Known allergies (medications, foods, environmental):")?;
    let allergies = prompt::collect_list(term, "Allergy: ")?;

    tracing::info!(section = %Section::MedicationsAllergies, "section collected");
    Ok(MedicationsAllergies {
        medications,
        allergies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::{scripted, transcript};
    use crate::record::{Gender, Height};
    use intake_types::NonEmptyText;

    #[test]
    fn test_patient_info_without_emergency_contact_skips_phone() {
        let mut term = scripted(&[
            "Jane",
            "Smith",
            "03/15/1985",
            "f",
            "555-987-6543",
            "",
            "",
        ]);
        let info = collect_patient_info(&mut term).expect("patient info");

        assert_eq!(info.first_name.as_str(), "Jane");
        assert_eq!(info.gender, Gender::Female);
        assert!(info.email.is_none());
        assert!(info.emergency_contact.is_none());
        assert!(!transcript(term).contains("Emergency Contact Phone: "));
    }

    #[test]
    fn test_patient_info_retries_each_field() {
        let mut term = scripted(&[
            "",
            "Jane",
            "  ",
            "Smith",
            "1985-03-15",
            "03/15/1985",
            "female",
            "OTHER",
            "555-1234",
            "555-987-6543",
            "jane@",
            "jane.smith@email.com",
            "John Smith",
            "12345",
            "555-987-6544",
        ]);
        let info = collect_patient_info(&mut term).expect("patient info");

        assert_eq!(info.gender, Gender::Other);
        assert_eq!(info.email.as_ref().unwrap().as_str(), "jane.smith@email.com");
        let contact = info.emergency_contact.expect("contact given");
        assert_eq!(contact.name.as_str(), "John Smith");
        assert_eq!(contact.phone.as_str(), "555-987-6544");

        let out = transcript(term);
        assert!(out.contains("First name is required."));
        assert!(out.contains("Last name is required."));
        assert!(out.contains("Please enter date in MM/DD/YYYY format."));
        assert!(out.contains("Please enter M, F, or Other."));
        assert!(out.contains("Please enter a valid phone number (at least 10 digits)."));
        assert!(out.contains("Please enter a valid email address."));
        assert!(out.contains("Please enter a valid phone number for emergency contact."));
    }

    #[test]
    fn test_patient_info_blank_email_after_invalid_moves_on() {
        let mut term = scripted(&[
            "Jane",
            "Smith",
            "03/15/1985",
            "F",
            "5559876543",
            "bad-email",
            "",
            "",
        ]);
        let info = collect_patient_info(&mut term).expect("patient info");
        assert!(info.email.is_none());
    }

    #[test]
    fn test_vital_signs_blank_fields_are_skipped() {
        let mut term = scripted(&["", "", "", "", ""]);
        let vitals = collect_vital_signs(&mut term).expect("vitals");
        assert_eq!(vitals, VitalSigns::default());
    }

    #[test]
    fn test_vital_signs_retry_and_accept() {
        let mut term = scripted(&[
            "abc", "130/85", "120", "98.6", "-1", "150", "5'8\"", "250", "72",
        ]);
        let vitals = collect_vital_signs(&mut term).expect("vitals");

        assert_eq!(vitals.blood_pressure.unwrap().as_str(), "130/85");
        assert_eq!(vitals.temperature.unwrap().as_str(), "98.6");
        assert_eq!(vitals.weight.unwrap().as_str(), "150");
        assert_eq!(
            vitals.height,
            Some(Height::FeetInches { feet: 5, inches: 8 })
        );
        assert_eq!(vitals.heart_rate.unwrap().as_str(), "72");

        let out = transcript(term);
        assert!(out.contains("Please enter blood pressure in format XXX/YY or leave blank."));
        assert!(out.contains("Temperature should be between 90°F and 110°F."));
        assert!(out.contains("Weight must be a positive number."));
        assert!(out.contains("Heart rate should be between 30 and 200 bpm."));
    }

    #[test]
    fn test_symptoms_with_pain_keyword_ask_pain_level() {
        let mut term = scripted(&["Lower back pain", "", "7"]);
        let symptoms = collect_symptoms(&mut term).expect("symptoms");

        assert_eq!(symptoms.entries, vec![NonEmptyText::new("Lower back pain").unwrap()]);
        assert_eq!(symptoms.pain_level.map(|p| p.value()), Some(7));
    }

    #[test]
    fn test_symptoms_without_pain_keyword_never_ask() {
        let mut term = scripted(&["Cough", "Mild fever", ""]);
        let symptoms = collect_symptoms(&mut term).expect("symptoms");

        assert_eq!(symptoms.entries.len(), 2);
        assert!(symptoms.pain_level.is_none());
        assert!(!transcript(term).contains("Pain level"));
    }

    #[test]
    fn test_symptoms_blank_pain_level_is_absent() {
        let mut term = scripted(&["", "Sore throat", "", "eleven", ""]);
        let symptoms = collect_symptoms(&mut term).expect("symptoms");

        // A blank chief complaint is not recorded.
        assert_eq!(symptoms.entries, vec![NonEmptyText::new("Sore throat").unwrap()]);
        assert!(symptoms.pain_level.is_none());
        assert!(transcript(term).contains("Please enter a number between 0 and 10."));
    }

    #[test]
    fn test_medical_history_lists_and_free_text() {
        let mut term = scripted(&[
            "Appendectomy (2010)",
            "",
            "",
            "Diabetes (mother)",
            "Never",
            "",
        ]);
        let history = collect_medical_history(&mut term).expect("history");

        assert_eq!(history.surgeries.len(), 1);
        assert!(history.chronic_conditions.is_empty());
        assert_eq!(history.family_history, "Diabetes (mother)");
        assert_eq!(history.smoking_status, "Never");
        assert_eq!(history.alcohol_use, "");
    }

    #[test]
    fn test_medications_and_allergies() {
        let mut term = scripted(&["Claritin 10mg", "", "Shellfish", "Latex", ""]);
        let meds = collect_medications_allergies(&mut term).expect("meds");

        assert_eq!(meds.medications.len(), 1);
        assert_eq!(meds.allergies.len(), 2);
        assert_eq!(meds.allergies[1].as_str(), "Latex");
    }
}
