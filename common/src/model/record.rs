//! The record model shared between the loader and the table view.
//!
//! Records arrive as arbitrary JSON objects and stay untyped until render
//! time: the endpoint has shipped both a flat shape (`id`, `name`, `email`)
//! and an extended one with nested `address` and `company` objects, and the
//! table must handle either without a schema. `serde_json` is built with the
//! `preserve_order` feature, so a [`Record`] iterates its fields in the
//! order the parser delivered them.

use serde_json::{Map, Value};

/// One fetched user entry: a mapping from field name to field value.
pub type Record = Map<String, Value>;

/// The full ordered collection of records currently loaded. Replaced
/// wholesale on every successful load, never mutated in place.
pub type RecordSet = Vec<Record>;

/// Column headers for the dynamic table layout: the first record's keys, in
/// that record's order. All records are assumed (not verified) to share the
/// same field set.
///
/// Returns an empty vector when no records are loaded.
pub fn column_names(records: &RecordSet) -> Vec<String> {
    records
        .first()
        .map(|record| record.keys().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> Record {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn no_columns_without_records() {
        assert!(column_names(&RecordSet::new()).is_empty());
    }

    #[test]
    fn columns_follow_first_record_key_order() {
        let records = vec![record(r#"{"id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz"}"#)];
        assert_eq!(column_names(&records), vec!["id", "name", "email"]);
    }

    #[test]
    fn columns_ignore_later_records() {
        let records = vec![
            record(r#"{"email": "Sincere@april.biz", "id": 1}"#),
            record(r#"{"id": 2, "name": "Ervin Howell"}"#),
        ];
        assert_eq!(column_names(&records), vec!["email", "id"]);
    }
}
