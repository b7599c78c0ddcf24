//! Conversion helpers shared by the API handlers

use surrealdb::RecordId;

/// Record id as its `"table:id"` wire string; empty when unset
pub fn record_id_string(id: &Option<RecordId>) -> String {
    id.as_ref().map(ToString::to_string).unwrap_or_default()
}
