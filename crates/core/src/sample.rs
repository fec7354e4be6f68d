//! Demonstration record used by the `sample` command.
//!
//! The sample is written out in wire form and converted through the same validation path as a
//! loaded file, so it is always a record the form itself could have produced.

use crate::error::IntakeResult;
use crate::record::IntakeRecord;
use crate::wire::{IntakeRecordWire, MedicalHistoryWire, PatientInfoWire, VitalSignsWire};
use chrono::NaiveDateTime;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Jane Smith's intake, stamped at `at`.
pub fn sample_record(at: NaiveDateTime) -> IntakeResult<IntakeRecord> {
    let wire = IntakeRecordWire {
        patient_info: PatientInfoWire {
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            date_of_birth: "03/15/1985".into(),
            gender: "F".into(),
            phone: "555-987-6543".into(),
            email: "jane.smith@email.com".into(),
            emergency_contact: "John Smith".into(),
            emergency_phone: "555-987-6544".into(),
        },
        vital_signs: VitalSignsWire {
            blood_pressure: "118/75".into(),
            temperature: "98.4".into(),
            weight: "140".into(),
            height: "65 inches (5'5\")".into(),
            heart_rate: "72".into(),
        },
        symptoms: strings(&["Persistent cough for 3 days", "Mild fever", "Body aches"]),
        pain_level: Some("3".into()),
        medical_history: MedicalHistoryWire {
            surgeries: strings(&["Appendectomy (2010)"]),
            chronic_conditions: strings(&["Seasonal allergies"]),
            family_history: "Diabetes (mother), Heart disease (father)".into(),
            smoking_status: "Never".into(),
            alcohol_use: "Occasional".into(),
        },
        medications: strings(&["Birth control pill (daily)", "Claritin 10mg (as needed)"]),
        allergies: strings(&["Shellfish", "Latex"]),
        timestamp: None,
    };

    Ok(IntakeRecord::try_from(wire)?.finalise(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_sample_record_is_fully_populated() {
        let at = NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let record = sample_record(at).expect("sample data is valid");

        assert_eq!(record.patient_info.first_name.as_str(), "Jane");
        assert!(record.patient_info.email.is_some());
        assert!(record.patient_info.emergency_contact.is_some());
        assert!(record.vital_signs.blood_pressure.is_some());
        assert!(record.vital_signs.temperature.is_some());
        assert!(record.vital_signs.weight.is_some());
        assert_eq!(
            record.vital_signs.height.as_ref().unwrap().total_inches(),
            65.0
        );
        assert!(record.vital_signs.heart_rate.is_some());
        assert_eq!(record.symptoms.entries.len(), 3);
        assert_eq!(record.symptoms.pain_level.unwrap().value(), 3);
        assert_eq!(record.medications_allergies.allergies.len(), 2);
        assert_eq!(record.timestamp, Some(at));
    }
}
