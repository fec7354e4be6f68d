//! Predicates that decide whether a conditional field is asked at all.
//!
//! Both predicates look only at values already accepted into the record.

use crate::constants::PAIN_KEYWORDS;
use intake_types::NonEmptyText;

/// The emergency phone is only asked for once an emergency contact name has been given.
pub fn needs_emergency_phone(contact_name: Option<&NonEmptyText>) -> bool {
    contact_name.is_some()
}

/// The pain scale is only asked for when the symptoms mention pain.
///
/// Matching is a case-insensitive substring search over all symptoms joined together, so
/// `"Sore throat"` and `"headache"` both qualify.
pub fn mentions_pain(symptoms: &[NonEmptyText]) -> bool {
    let joined = symptoms
        .iter()
        .map(NonEmptyText::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    PAIN_KEYWORDS.iter().any(|word| joined.contains(*word))
}
