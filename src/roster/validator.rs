//! Field-constraint validation boundary.
//!
//! Every inbound draft passes through [`validate`] before it can reach
//! the store, so validation failure never leaves a partial write behind.
//! All violations are collected in one pass rather than failing on the
//! first, so a response can name every offending field.

use super::errors::{FieldViolation, RosterError, RosterResult};
use super::student::StudentDraft;

/// Minimum name length in characters
pub const NAME_MIN_CHARS: usize = 1;
/// Maximum name length in characters
pub const NAME_MAX_CHARS: usize = 50;
/// Maximum age (inclusive)
pub const AGE_MAX: u32 = 120;

/// Validate a draft against all field constraints.
pub fn validate(draft: &StudentDraft) -> RosterResult<()> {
    let mut violations = Vec::new();

    // Name length counts characters, not bytes.
    let name_len = draft.name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_len) {
        violations.push(FieldViolation::new(
            "name",
            format!(
                "length in [{}, {}] characters",
                NAME_MIN_CHARS, NAME_MAX_CHARS
            ),
            format!("{} characters", name_len),
        ));
    }

    if draft.age > AGE_MAX {
        violations.push(FieldViolation::new(
            "age",
            format!("value in [0, {}]", AGE_MAX),
            draft.age.to_string(),
        ));
    }

    if !is_valid_email(&draft.email) {
        violations.push(FieldViolation::new(
            "email",
            "address of the form local-part@domain with a dot in the domain",
            draft.email.clone(),
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(RosterError::Validation(violations))
    }
}

/// Syntactic email check: non-empty local part, exactly one '@', and a
/// domain made of at least two non-empty dot-separated labels.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
