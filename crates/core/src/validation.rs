//! Field validators.
//!
//! Each validator is a pure function from the operator's raw text to an accepted value, or a
//! [`ValidationError`] whose message tells the operator what to type instead. Validators for
//! optional fields return `Ok(None)` when the input is blank, which is the skip condition.
//!
//! Nothing in this module performs I/O; the retry loop lives in [`crate::prompt`].

use crate::constants::{
    DATE_OF_BIRTH_FORMAT, HEART_RATE_RANGE_BPM, HEIGHT_RANGE_IN, PAIN_SCALE, TEMPERATURE_RANGE_F,
};
use crate::record::{BloodPressure, Gender, Height, Measurement, PainLevel};
use chrono::NaiveDate;
use intake_types::{EmailAddress, NonEmptyText, PhoneNumber};
use once_cell::sync::Lazy;
use regex::Regex;

static BLOOD_PRESSURE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2,3})/([0-9]{2,3})$")
        .expect("blood pressure pattern is a valid regex")
});

static STORED_HEIGHT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^([0-9]+) inches \(([0-9]+)'([0-9]+)"\)$"#)
        .expect("stored height pattern is a valid regex")
});

/// Why a field value was rejected. The `Display` text is the corrective message shown to the
/// operator before the field is asked again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(&'static str),
    #[error("Please enter date in MM/DD/YYYY format.")]
    DateFormat,
    #[error("Please enter M, F, or Other.")]
    Gender,
    #[error("Please enter a valid phone number (at least 10 digits).")]
    Phone,
    #[error("Please enter a valid phone number for emergency contact.")]
    EmergencyPhone,
    #[error("Please enter a valid email address.")]
    Email,
    #[error("Please enter blood pressure in format XXX/YY or leave blank.")]
    BloodPressure,
    #[error("Please enter a valid temperature or leave blank.")]
    TemperatureFormat,
    #[error("Temperature should be between 90°F and 110°F.")]
    TemperatureRange,
    #[error("Please enter a valid weight or leave blank.")]
    WeightFormat,
    #[error("Weight must be a positive number.")]
    WeightRange,
    #[error("Please enter a valid height or leave blank.")]
    HeightFormat,
    #[error("Please enter height as inches or ft'in\" format.")]
    HeightFeetInchesFormat,
    #[error("Height should be between 24 and 96 inches.")]
    HeightRange,
    #[error("Height should be reasonable (2' - 8').")]
    HeightFeetInchesRange,
    #[error("Please enter a valid heart rate or leave blank.")]
    HeartRateFormat,
    #[error("Heart rate should be between 30 and 200 bpm.")]
    HeartRateRange,
    #[error("Please enter a number between 0 and 10.")]
    PainFormat,
    #[error("Pain level should be between 0 and 10.")]
    PainRange,
}

/// Required free text. `label` names the field in the rejection message.
pub fn validate_required(
    label: &'static str,
    input: &str,
) -> Result<NonEmptyText, ValidationError> {
    NonEmptyText::new(input).map_err(|_| ValidationError::Required(label))
}

/// Optional free text. Blank input is `None`.
pub fn validate_optional_text(input: &str) -> Option<NonEmptyText> {
    NonEmptyText::new(input).ok()
}

/// Date of birth in MM/DD/YYYY form. Only calendar validity is checked.
pub fn validate_date_of_birth(input: &str) -> Result<NaiveDate, ValidationError> {
    let text = input.trim();
    let has_full_year = text
        .rsplit('/')
        .next()
        .is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()));
    if !has_full_year {
        return Err(ValidationError::DateFormat);
    }
    NaiveDate::parse_from_str(text, DATE_OF_BIRTH_FORMAT).map_err(|_| ValidationError::DateFormat)
}

pub fn validate_gender(input: &str) -> Result<Gender, ValidationError> {
    Gender::from_token(input).ok_or(ValidationError::Gender)
}

/// At least ten digits once punctuation is stripped. The raw text is kept.
pub fn validate_phone(input: &str) -> Result<PhoneNumber, ValidationError> {
    PhoneNumber::parse(input).map_err(|_| ValidationError::Phone)
}

pub fn validate_emergency_phone(input: &str) -> Result<PhoneNumber, ValidationError> {
    PhoneNumber::parse(input).map_err(|_| ValidationError::EmergencyPhone)
}

/// Optional email. Blank input abandons email entry altogether.
pub fn validate_email(input: &str) -> Result<Option<EmailAddress>, ValidationError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    EmailAddress::parse(input)
        .map(Some)
        .map_err(|_| ValidationError::Email)
}

/// `NN/NN` or `NNN/NN` style reading; no range check. Blank means not recorded.
pub fn validate_blood_pressure(input: &str) -> Result<Option<BloodPressure>, ValidationError> {
    let text = input.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let caps = BLOOD_PRESSURE_RE
        .captures(text)
        .ok_or(ValidationError::BloodPressure)?;
    let systolic = caps[1]
        .parse()
        .map_err(|_| ValidationError::BloodPressure)?;
    let diastolic = caps[2]
        .parse()
        .map_err(|_| ValidationError::BloodPressure)?;
    Ok(Some(BloodPressure {
        text: text.to_owned(),
        systolic,
        diastolic,
    }))
}

fn parse_decimal(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Degrees Fahrenheit, 90 to 110 inclusive. Blank means not recorded.
pub fn validate_temperature(input: &str) -> Result<Option<Measurement>, ValidationError> {
    let text = input.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let value = parse_decimal(text).ok_or(ValidationError::TemperatureFormat)?;
    if !TEMPERATURE_RANGE_F.contains(&value) {
        return Err(ValidationError::TemperatureRange);
    }
    Ok(Some(Measurement {
        text: text.to_owned(),
        value,
    }))
}

/// Pounds, strictly positive. Blank means not recorded.
pub fn validate_weight(input: &str) -> Result<Option<Measurement>, ValidationError> {
    let text = input.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let value = parse_decimal(text).ok_or(ValidationError::WeightFormat)?;
    if value <= 0.0 {
        return Err(ValidationError::WeightRange);
    }
    Ok(Some(Measurement {
        text: text.to_owned(),
        value,
    }))
}

/// Plain inches (`70`) or feet and inches (`5'8"`, `5'8''`, `5'8`, `6'`), 24 to 96 inches in
/// total.
/// Blank means not recorded.
pub fn validate_height(input: &str) -> Result<Option<Height>, ValidationError> {
    let text = input.trim();
    if text.is_empty() {
        return Ok(None);
    }

    if text.contains('\'') {
        return parse_feet_inches(text).map(Some);
    }

    let value = parse_decimal(text).ok_or(ValidationError::HeightFormat)?;
    if !HEIGHT_RANGE_IN.contains(&value) {
        return Err(ValidationError::HeightRange);
    }
    Ok(Some(Height::Inches(Measurement {
        text: text.to_owned(),
        value,
    })))
}

fn parse_feet_inches(text: &str) -> Result<Height, ValidationError> {
    let cleaned = text.replace('"', "");
    let mut parts = cleaned.split('\'');
    let feet_part = parts.next().unwrap_or_default().trim();
    // Anything after a second mark (`5'8''`) is ignored.
    let inches_part = parts.next().unwrap_or_default().trim();

    let feet: u32 = feet_part
        .parse()
        .map_err(|_| ValidationError::HeightFeetInchesFormat)?;
    let inches: u32 = if inches_part.is_empty() {
        0
    } else {
        inches_part
            .parse()
            .map_err(|_| ValidationError::HeightFeetInchesFormat)?
    };

    let total = feet
        .checked_mul(12)
        .and_then(|f| f.checked_add(inches))
        .ok_or(ValidationError::HeightFeetInchesRange)?;
    if !HEIGHT_RANGE_IN.contains(&f64::from(total)) {
        return Err(ValidationError::HeightFeetInchesRange);
    }
    Ok(Height::FeetInches { feet, inches })
}

/// Parse a height as it appears in a saved file: either the canonical feet/inches rendering or
/// whatever plain-inches text was typed.
pub fn parse_stored_height(text: &str) -> Result<Option<Height>, ValidationError> {
    let Some(caps) = STORED_HEIGHT_RE.captures(text.trim()) else {
        return validate_height(text);
    };
    let total: u32 = caps[1]
        .parse()
        .map_err(|_| ValidationError::HeightFeetInchesFormat)?;
    let height = parse_feet_inches(&format!("{}'{}", &caps[2], &caps[3]))?;
    if height.total_inches() != f64::from(total) {
        return Err(ValidationError::HeightFeetInchesFormat);
    }
    Ok(Some(height))
}

/// Whole beats per minute, 30 to 200 inclusive. Blank means not recorded.
pub fn validate_heart_rate(input: &str) -> Result<Option<Measurement>, ValidationError> {
    let text = input.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let bpm: i64 = text.parse().map_err(|_| ValidationError::HeartRateFormat)?;
    if !HEART_RATE_RANGE_BPM.contains(&bpm) {
        return Err(ValidationError::HeartRateRange);
    }
    Ok(Some(Measurement {
        text: text.to_owned(),
        value: bpm as f64,
    }))
}

/// Integer pain score, 0 to 10 inclusive. Blank skips the pain scale.
pub fn validate_pain_level(input: &str) -> Result<Option<PainLevel>, ValidationError> {
    let text = input.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let score: i64 = text.parse().map_err(|_| ValidationError::PainFormat)?;
    if !PAIN_SCALE.contains(&score) {
        return Err(ValidationError::PainRange);
    }
    let score = u8::try_from(score).map_err(|_| ValidationError::PainRange)?;
    Ok(Some(PainLevel(score)))
}

/// Case-insensitive `y`/`yes` confirmation. Anything else, including blank, is a no.
pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
