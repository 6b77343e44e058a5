use common::model::record::RecordSet;

#[derive(Clone)]
pub enum Msg {
    /// The "Daten laden" button was pressed.
    LoadRequested,
    /// The fetch resolved; carries the parsed records.
    RecordsLoaded(RecordSet),
}
