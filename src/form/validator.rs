use crate::form::Form;
use tracing::{debug, instrument};

/// Checks every required field of the form. Empty required fields get the
/// error indicator, filled ones get it cleared. Returns true iff every
/// required field was non-empty at the time of the call.
///
/// Purely a function of the current field values; optional fields are never
/// touched. An invalid form is an expected outcome, not a fault.
#[instrument(skip_all)]
pub fn validate(form: &mut Form) -> bool {
    let mut is_valid = true;

    for field in form.fields_mut().filter(|field| field.is_required()) {
        if field.is_empty() {
            debug!("📋 Required field '{}' is empty", field.id());
            is_valid = false;
            field.mark_error();
        } else {
            field.clear_error();
        }
    }

    is_valid
}
