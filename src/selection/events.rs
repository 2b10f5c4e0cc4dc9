use std::sync::Arc;

use indexmap::IndexMap;

/// Key to integer view of the current selection.
pub type SelectedMap = IndexMap<String, i64>;

/// Change notifications for the three selection views.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    ValuesChanged(Vec<String>),
    TextsChanged(Vec<String>),
    MapChanged(Arc<SelectedMap>),
}

/// Host-side listener for selection changes.
pub trait SelectionObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &SelectionEvent);
}
