//! Text views of a record.
//!
//! [`render_summary`] is the confirmation view shown before saving: it only lists what was
//! actually recorded. [`render_report`] is the complete view used when showing a saved file or
//! the sample record.

use crate::constants::{DATE_OF_BIRTH_FORMAT, HEADER_WIDTH, REPORT_WIDTH};
use crate::record::{IntakeRecord, VitalSigns};
use intake_types::NonEmptyText;

/// Labelled vital signs that were recorded, in form order.
fn recorded_vitals(vitals: &VitalSigns) -> Vec<(&'static str, String)> {
    let rows = [
        ("Blood Pressure", vitals.blood_pressure.as_ref().map(|v| v.to_string())),
        ("Temperature", vitals.temperature.as_ref().map(|v| v.to_string())),
        ("Weight", vitals.weight.as_ref().map(|v| v.to_string())),
        ("Height", vitals.height.as_ref().map(|v| v.to_string())),
        ("Heart Rate", vitals.heart_rate.as_ref().map(|v| v.to_string())),
    ];
    rows.into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
}

fn push_list(out: &mut String, heading: &str, bullet: &str, items: &[NonEmptyText]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("{heading}\n"));
    for item in items {
        out.push_str(&format!("{bullet}{item}\n"));
    }
}

/// Confirmation summary. Skipped vitals and empty lists are left out.
pub fn render_summary(record: &IntakeRecord) -> String {
    let info = &record.patient_info;
    let rule = "=".repeat(HEADER_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("\n{rule}\nDATA SUMMARY\n{rule}\n"));
    out.push_str(&format!("Patient: {} {}\n", info.first_name, info.last_name));
    out.push_str(&format!("DOB: {}\n", info.date_of_birth.format(DATE_OF_BIRTH_FORMAT)));
    out.push_str(&format!("Phone: {}\n", info.phone));

    out.push_str("\nVital Signs:\n");
    for (label, value) in recorded_vitals(&record.vital_signs) {
        out.push_str(&format!("  {label}: {value}\n"));
    }

    let symptoms = &record.symptoms;
    if !symptoms.entries.is_empty() {
        push_list(&mut out, "\nSymptoms:", "  - ", &symptoms.entries);
        if let Some(pain) = symptoms.pain_level {
            out.push_str(&format!("  Pain Level: {pain}/10\n"));
        }
    }

    let history = &record.medical_history;
    push_list(&mut out, "\nPrevious Surgeries:", "  - ", &history.surgeries);
    push_list(
        &mut out,
        "\nChronic Conditions:",
        "  - ",
        &history.chronic_conditions,
    );

    let meds = &record.medications_allergies;
    push_list(&mut out, "\nCurrent Medications:", "  - ", &meds.medications);
    push_list(&mut out, "\nAllergies:", "  - ", &meds.allergies);

    out
}

/// Complete report of every section, including the free-text history fields.
pub fn render_report(record: &IntakeRecord) -> String {
    let info = &record.patient_info;
    let rule = "=".repeat(REPORT_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{rule}\nMEDICAL INTAKE RECORD\n{rule}\n"));

    out.push_str("\nPATIENT INFORMATION:\n");
    out.push_str(&format!("   Name: {} {}\n", info.first_name, info.last_name));
    out.push_str(&format!("   DOB: {}\n", info.date_of_birth.format(DATE_OF_BIRTH_FORMAT)));
    out.push_str(&format!("   Gender: {}\n", info.gender));
    out.push_str(&format!("   Phone: {}\n", info.phone));
    if let Some(email) = &info.email {
        out.push_str(&format!("   Email: {email}\n"));
    }
    if let Some(contact) = &info.emergency_contact {
        out.push_str(&format!("   Emergency Contact: {} ({})\n", contact.name, contact.phone));
    }

    out.push_str("\nVITAL SIGNS:\n");
    let vitals = recorded_vitals(&record.vital_signs);
    if vitals.is_empty() {
        out.push_str("   None recorded\n");
    }
    for (label, value) in vitals {
        out.push_str(&format!("   {label}: {value}\n"));
    }

    out.push_str("\nSYMPTOMS & COMPLAINTS:\n");
    for symptom in &record.symptoms.entries {
        out.push_str(&format!("   • {symptom}\n"));
    }
    if let Some(pain) = record.symptoms.pain_level {
        out.push_str(&format!("   Pain Level: {pain}/10\n"));
    }

    let history = &record.medical_history;
    out.push_str("\nMEDICAL HISTORY:\n");
    push_list(&mut out, "   Previous Surgeries:", "     • ", &history.surgeries);
    push_list(
        &mut out,
        "   Chronic Conditions:",
        "     • ",
        &history.chronic_conditions,
    );
    out.push_str(&format!("   Family History: {}\n", history.family_history));
    out.push_str(&format!("   Smoking Status: {}\n", history.smoking_status));
    out.push_str(&format!("   Alcohol Use: {}\n", history.alcohol_use));

    let meds = &record.medications_allergies;
    out.push_str("\nCURRENT MEDICATIONS:\n");
    for med in &meds.medications {
        out.push_str(&format!("   • {med}\n"));
    }

    out.push_str("\nALLERGIES:\n");
    for allergy in &meds.allergies {
        out.push_str(&format!("   • {allergy}\n"));
    }

    if let Some(ts) = record.timestamp {
        out.push_str(&format!("\nData collected: {}\n", ts.format("%Y-%m-%d %H:%M:%S")));
    }
    out.push_str(&rule);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Measurement, Symptoms};
    use crate::sample::sample_record;
    use chrono::NaiveDate;

    fn sample() -> IntakeRecord {
        let at = NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(9, 15, 2)
            .unwrap();
        sample_record(at).unwrap()
    }

    #[test]
    fn test_summary_suppresses_skipped_vitals() {
        let mut record = sample();
        record.vital_signs.temperature = None;
        record.vital_signs.height = None;

        let summary = render_summary(&record);
        assert!(summary.contains("  Blood Pressure: 118/75"));
        assert!(summary.contains("  Heart Rate: 72"));
        assert!(!summary.contains("Temperature"));
        assert!(!summary.contains("Height"));
        assert!(!summary.contains("Not recorded"));
    }

    #[test]
    fn test_summary_suppresses_empty_lists() {
        let mut record = sample();
        record.symptoms = Symptoms::default();
        record.medications_allergies.medications.clear();
        record.medications_allergies.allergies.clear();
        record.medical_history.surgeries.clear();

        let summary = render_summary(&record);
        assert!(!summary.contains("Symptoms:"));
        assert!(!summary.contains("Current Medications:"));
        assert!(!summary.contains("Allergies:"));
        assert!(!summary.contains("Previous Surgeries:"));
        assert!(summary.contains("Chronic Conditions:\n  - Seasonal allergies"));
    }

    #[test]
    fn test_summary_lists_core_identity() {
        let summary = render_summary(&sample());
        assert!(summary.contains("Patient: Jane Smith"));
        assert!(summary.contains("DOB: 03/15/1985"));
        assert!(summary.contains("Phone: 555-987-6543"));
        assert!(summary.contains("  - Mild fever"));
        assert!(summary.contains("  Pain Level: 3/10"));
    }

    #[test]
    fn test_report_renders_every_section() {
        let report = render_report(&sample());
        assert!(report.contains("   Email: jane.smith@email.com"));
        assert!(report.contains("   Emergency Contact: John Smith (555-987-6544)"));
        assert!(report.contains("   Height: 65 inches (5'5\")"));
        assert!(report.contains("   Family History: Diabetes (mother), Heart disease (father)"));
        assert!(report.contains("   • Shellfish"));
        assert!(report.contains("Data collected: 2025-01-31 09:15:02"));
    }

    #[test]
    fn test_report_without_vitals() {
        let mut record = sample();
        record.vital_signs = VitalSigns::default();
        assert!(render_report(&record).contains("VITAL SIGNS:\n   None recorded"));

        record.vital_signs.weight = Some(Measurement {
            text: "150".into(),
            value: 150.0,
        });
        assert!(!render_report(&record).contains("None recorded"));
    }
}
