use crate::entities::medical::{MedicalDraft, MedicalField};

/// Whether the medical step is complete enough to move on.
///
/// True iff every one of the eight medical fields holds a non-empty value.
pub fn can_advance(draft: &MedicalDraft) -> bool {
    MedicalField::ALL
        .iter()
        .all(|field| !draft.get(*field).is_empty())
}

/// Whether `raw` is an acceptable value for a numeric field.
///
/// The empty string is accepted so a field can be cleared; anything else
/// must parse as a finite, non-negative number.
pub fn is_acceptable_numeric(raw: &str) -> bool {
    if raw.is_empty() {
        return true;
    }
    match raw.trim().parse::<f64>() {
        Ok(value) => value.is_finite() && value >= 0.0,
        Err(_) => false,
    }
}

/// Apply a numeric edit to the draft if it is acceptable.
///
/// Rejected edits (unknown field, negative or non-numeric text) leave the
/// draft untouched and return false. Nothing else is reported.
pub fn accept_numeric_edit(draft: &mut MedicalDraft, name: &str, raw: &str) -> bool {
    let Some(field) = MedicalField::from_name(name) else {
        return false;
    };
    if !is_acceptable_numeric(raw) {
        return false;
    }
    *draft.slot_mut(field) = raw.to_string();
    true
}
