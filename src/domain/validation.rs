//! Field rules and cross-entity policies applied before records are stored.
//!
//! These are free functions over the aggregates' public readers, kept out
//! of the entities so UI-facing validation concerns never leak into the
//! data model. All of them report structured field errors and never mutate
//! anything.

use std::borrow::Cow;

use chrono::NaiveDate;
use validator::{Validate, ValidationError, ValidationErrors};

use super::entities::{Owner, Pet, Visit};

/// Error code for a missing or blank required field.
pub const REQUIRED: &str = "required";

/// Error code for a pet name already taken on the same owner.
pub const DUPLICATE: &str = "duplicate";

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn check_not_blank(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field.into(), field_error(REQUIRED, "must not be blank"));
    }
}

/// Validates an owner's contact fields.
///
/// Names, address, and city must be non-blank; the telephone rule (exactly
/// ten digits) comes from the derived validator on [`Owner`].
pub fn validate_owner(owner: &Owner) -> Result<(), ValidationErrors> {
    let mut errors = match owner.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };

    check_not_blank(&mut errors, "first_name", &owner.first_name);
    check_not_blank(&mut errors, "last_name", &owner.last_name);
    check_not_blank(&mut errors, "address", &owner.address);
    check_not_blank(&mut errors, "city", &owner.city);
    check_not_blank(&mut errors, "telephone", &owner.telephone);

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validates a pet's fields.
///
/// The name must be non-blank, the birth date must be present and not
/// after `today`, and a pet that has not been stored yet must carry a
/// type. The errors are keyed by field so a form layer can attach them.
pub fn validate_pet(pet: &Pet, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    check_not_blank(&mut errors, "name", &pet.name);

    match pet.birth_date {
        None => errors.add("birth_date".into(), field_error(REQUIRED, "is required")),
        Some(date) if date > today => {
            errors.add(
                "birth_date".into(),
                field_error("birth_date.future", "must not be in the future"),
            );
        }
        Some(_) => {}
    }

    if pet.id.is_new() && pet.kind.is_none() {
        errors.add("kind".into(), field_error(REQUIRED, "is required"));
    }

    errors
}

/// Validates a visit's fields. Only the description is checked; the date
/// always has a value (it defaults to today at construction).
pub fn validate_visit(visit: &Visit) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_not_blank(&mut errors, "description", &visit.description);

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Field error reported when the duplicate pet-name rule rejects a
/// candidate. Attached to the `name` field by the caller.
pub fn duplicate_name_error() -> ValidationError {
    field_error(DUPLICATE, "already exists")
}

/// Read-time duplicate check applied when creating or editing a pet.
///
/// The candidate name is taken when another pet on the same owner is
/// already stored under it (case-insensitively) and is not the record
/// being edited. `editing` is `None` when creating, so any stored hit
/// rejects.
pub fn duplicate_pet_name(owner: &Owner, candidate: &str, editing: Option<&Pet>) -> bool {
    owner
        .pet_by_name_filtered(candidate, true)
        .is_some_and(|existing| editing.is_none_or(|pet| !existing.id.same_record(pet.id)))
}
