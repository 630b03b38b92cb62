/// Accumulator for consecutive list-item lines.
///
/// Two states: `NotInList`, or `InList` holding the raw (not yet inline
/// resolved) item texts in source order. `InList` is never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListRun {
    #[default]
    NotInList,
    InList(Vec<String>),
}

impl ListRun {
    /// Appends an item, opening a run if none is open.
    pub fn push(&mut self, item: &str) {
        match self {
            ListRun::NotInList => *self = ListRun::InList(vec![item.to_string()]),
            ListRun::InList(items) => items.push(item.to_string()),
        }
    }

    /// Closes the run, returning its items if it held any.
    pub fn flush(&mut self) -> Option<Vec<String>> {
        match std::mem::take(self) {
            ListRun::NotInList => None,
            ListRun::InList(items) => Some(items),
        }
    }
}
