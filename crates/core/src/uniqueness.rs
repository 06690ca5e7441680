//! Duplicate detection for unique business keys.
//!
//! The same rule guards `animals.animal_id`, `categories.name`, and
//! `marks.name`: the caller looks up the record currently holding the
//! candidate value and passes its id here together with the id of the
//! record being edited (if any).

use crate::types::DbId;

/// Whether persisting a candidate key would create a duplicate.
///
/// - No record holds the value: never a duplicate.
/// - The holder is the record being edited: not a duplicate (the edit
///   leaves this field unchanged).
/// - Otherwise (creating a new record, or editing into another record's
///   value): duplicate.
pub fn is_duplicate(holder_id: Option<DbId>, editing_id: Option<DbId>) -> bool {
    match (holder_id, editing_id) {
        (None, _) => false,
        (Some(holder), Some(editing)) => holder != editing,
        (Some(_), None) => true,
    }
}
