//! Intake session orchestration.
//!
//! A session walks the draft [`IntakeForm`] through its sections in order, shows the summary,
//! and either saves or discards the record depending on the operator's answer.

use crate::config::IntakeConfig;
use crate::constants::HEADER_WIDTH;
use crate::error::IntakeResult;
use crate::persistence::{resolve_output_path, save_record};
use crate::prompt::Terminal;
use crate::record::{IntakeForm, Section};
use crate::sections;
use crate::summary::render_summary;
use crate::validation::is_affirmative;
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// How a session that ran to the end finished.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Saved(PathBuf),
    Discarded,
}

/// Print the opening banner.
pub fn banner(term: &mut dyn Terminal) -> IntakeResult<()> {
    let rule = "=".repeat(HEADER_WIDTH);
    term.say(&rule)?;
    term.say("MEDICAL OFFICE DATA ENTRY SYSTEM")?;
    term.say(&rule)?;
    term.say("This system collects basic medical office information.")?;
    term.say("Press Ctrl+C at any time to exit.")
}

/// Collect every data section in order into a fresh form.
pub fn collect_form(term: &mut dyn Terminal) -> IntakeResult<IntakeForm> {
    let mut form = IntakeForm::new();
    loop {
        match form.next_section() {
            Section::PatientInfo => form.set_patient_info(sections::collect_patient_info(term)?)?,
            Section::VitalSigns => form.set_vital_signs(sections::collect_vital_signs(term)?)?,
            Section::Symptoms => form.set_symptoms(sections::collect_symptoms(term)?)?,
            Section::MedicalHistory => {
                form.set_medical_history(sections::collect_medical_history(term)?)?
            }
            Section::MedicationsAllergies => form
                .set_medications_allergies(sections::collect_medications_allergies(term)?)?,
            Section::Summary => return Ok(form),
        }
    }
}

/// Run one complete intake session.
///
/// `now` is consulted once, when the operator confirms the save; its value stamps the record
/// and names the file.
pub fn run_session<F>(
    term: &mut dyn Terminal,
    cfg: &IntakeConfig,
    now: F,
) -> IntakeResult<SessionOutcome>
where
    F: FnOnce() -> NaiveDateTime,
{
    banner(term)?;
    let record = collect_form(term)?.complete()?;

    term.say(&render_summary(&record))?;
    term.say("")?;
    term.say(&"=".repeat(HEADER_WIDTH))?;
    let answer = term.read_line("Save this data? (y/N): ")?;

    if !is_affirmative(&answer) {
        tracing::info!("intake record discarded");
        term.say("Data not saved. Session complete!")?;
        return Ok(SessionOutcome::Discarded);
    }

    let at = now();
    let record = record.finalise(at);
    let path = resolve_output_path(cfg, &record.patient_info, at);
    save_record(&record, &path)?;

    term.say(&format!("\nData saved to: {}", path.display()))?;
    term.say("Data collection complete!")?;
    Ok(SessionOutcome::Saved(path))
}
