//! Ownership guard: the only authorization relationship in the system.
//!
//! Every domain record carries the id of the user that created it. Any
//! read-one/edit/delete of an owned record must pass through [`authorize`]
//! before the operation proceeds; a mismatch is a hard stop.

use crate::error::CoreError;
use crate::types::DbId;

/// Confirm that `acting_user_id` owns the record.
///
/// Returns [`CoreError::Forbidden`] whenever the ids differ, regardless of
/// record type. Callers must stop processing on the error.
pub fn authorize(record_owner_id: DbId, acting_user_id: DbId) -> Result<(), CoreError> {
    if record_owner_id == acting_user_id {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "You do not have permission to access this record".into(),
        ))
    }
}
