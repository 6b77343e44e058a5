//! Component state for the users table.
//!
//! Holds the currently loaded record set and the loading flag. Both are
//! written only by the `update` module; the view only reads. Fields are
//! `pub` because they are accessed by the `view` and `update` modules.

use common::model::record::RecordSet;

pub struct UsersTableComponent {
    /// Records from the last successful load. Empty until then; replaced
    /// wholesale on every load, never partially mutated.
    pub records: RecordSet,

    /// True from the moment a load is requested until its records are
    /// published. A failed load leaves this set, with no table.
    pub loading: bool,
}

impl UsersTableComponent {
    pub fn new() -> Self {
        Self {
            records: RecordSet::new(),
            loading: false,
        }
    }

    /// The "⏳ Lade Daten..." indicator is visible exactly while a load is
    /// in flight.
    pub fn show_loading(&self) -> bool {
        self.loading
    }

    /// The table is shown once data is present and no load is in flight.
    pub fn show_table(&self) -> bool {
        !self.loading && !self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_shows_neither_indicator_nor_table() {
        let component = UsersTableComponent::new();
        assert!(!component.show_loading());
        assert!(!component.show_table());
    }

    #[test]
    fn pending_load_hides_the_table() {
        let mut component = UsersTableComponent::new();
        component.records = vec![serde_json::from_str(r#"{"id": 1}"#).unwrap()];
        component.loading = true;
        assert!(component.show_loading());
        assert!(!component.show_table());
    }

    #[test]
    fn finished_load_shows_the_table() {
        let mut component = UsersTableComponent::new();
        component.records = vec![serde_json::from_str(r#"{"id": 1}"#).unwrap()];
        component.loading = false;
        assert!(component.show_table());
    }
}
