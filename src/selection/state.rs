use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::error::{WidgetError, WidgetResult};

use super::{
    ExclusionSet, ItemAccessors, SelectedMap, SelectionEvent, SelectionObserver, SelectionSource,
    SourceKind,
};

/// Selected keys, selected labels and the selected map, kept in step.
///
/// Keys and labels are stored in selection order (first selected first) and
/// deduplicated independently. The map is rebuilt from the keys after every
/// mutation and always handed out as a fresh `Arc`, so observers can track
/// replacement by pointer identity.
pub struct SelectionState {
    source: SelectionSource,
    selected_keys: Vec<String>,
    selected_labels: Vec<String>,
    selected_map: Arc<SelectedMap>,
    seeded: bool,
    observers: Vec<Box<dyn SelectionObserver + Send>>,
}

impl SelectionState {
    #[must_use]
    pub fn new(source: SelectionSource) -> Self {
        Self {
            source,
            selected_keys: Vec::new(),
            selected_labels: Vec::new(),
            selected_map: Arc::new(SelectedMap::new()),
            seeded: false,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn strings() -> Self {
        Self::new(SelectionSource::Strings)
    }

    #[must_use]
    pub fn key_values(source: IndexMap<String, i64>) -> Self {
        Self::new(SelectionSource::KeyValues(source))
    }

    #[must_use]
    pub fn objects() -> Self {
        Self::new(SelectionSource::Objects)
    }

    /// Pre-populates selections supplied by the host before seeding.
    ///
    /// Duplicates are dropped; the map is rebuilt without notifying anyone.
    #[must_use]
    pub fn with_initial_selection<K, L>(mut self, keys: K, labels: L) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        for key in keys {
            push_unique(&mut self.selected_keys, key.into());
        }
        for label in labels {
            push_unique(&mut self.selected_labels, label.into());
        }
        self.selected_map = Arc::new(self.compute_map());
        self
    }

    /// Registers an observer under its unique id.
    pub fn add_observer(
        &mut self,
        observer: Box<dyn SelectionObserver + Send>,
    ) -> WidgetResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(WidgetError::InvalidData("observer id must not be empty".to_owned()));
        }
        if self.observers.iter().any(|entry| entry.id() == observer_id) {
            return Err(WidgetError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Removes an observer by id. Returns `true` when removed.
    pub fn remove_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self.observers.iter().position(|entry| entry.id() == observer_id) {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn kind(&self) -> SourceKind {
        self.source.kind()
    }

    #[must_use]
    pub fn source(&self) -> &SelectionSource {
        &self.source
    }

    #[must_use]
    pub fn selected_keys(&self) -> &[String] {
        &self.selected_keys
    }

    #[must_use]
    pub fn selected_labels(&self) -> &[String] {
        &self.selected_labels
    }

    #[must_use]
    pub fn selected_map(&self) -> &Arc<SelectedMap> {
        &self.selected_map
    }

    #[must_use]
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    #[must_use]
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected_keys.iter().any(|k| k == key)
    }

    /// Keys and labels have equal length and every map key is a selected key.
    ///
    /// Object and string sources also require every selected key in the map;
    /// key/value sources may drop keys absent from the source mapping.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.selected_keys.len() != self.selected_labels.len() {
            return false;
        }
        if !self.selected_map.keys().all(|k| self.is_selected(k)) {
            return false;
        }
        match self.source {
            SelectionSource::KeyValues(_) => true,
            SelectionSource::Strings | SelectionSource::Objects => self
                .selected_keys
                .iter()
                .all(|k| self.selected_map.contains_key(k)),
        }
    }

    /// Selects every item whose label is not excluded. Runs once per engine.
    ///
    /// Returns `Ok(false)` without touching state when already seeded.
    /// Accessor errors are returned before any state changes and leave the
    /// engine unseeded.
    pub fn seed_initial<T>(
        &mut self,
        items: &[T],
        accessors: &ItemAccessors<T>,
        excluded: Option<&ExclusionSet>,
    ) -> WidgetResult<bool> {
        if self.seeded {
            trace!("selection already seeded; ignoring");
            return Ok(false);
        }

        let resolved = items
            .iter()
            .map(|item| accessors.resolve(item))
            .collect::<WidgetResult<Vec<_>>>()?;
        self.seed_resolved(resolved, excluded);
        Ok(true)
    }

    /// [`Self::seed_initial`] for plain string items.
    pub fn seed_strings<S: AsRef<str>>(
        &mut self,
        items: &[S],
        excluded: Option<&ExclusionSet>,
    ) -> bool {
        if self.seeded {
            trace!("selection already seeded; ignoring");
            return false;
        }
        let resolved = items
            .iter()
            .map(|item| (item.as_ref().to_owned(), item.as_ref().to_owned()))
            .collect();
        self.seed_resolved(resolved, excluded);
        true
    }

    /// Seeds from the key/value source, using each key as its own label.
    ///
    /// Other source shapes have no items of their own and seed nothing, but
    /// still consume the one-shot seed.
    pub fn seed_key_values(&mut self, excluded: Option<&ExclusionSet>) -> bool {
        if self.seeded {
            trace!("selection already seeded; ignoring");
            return false;
        }
        let resolved = match &self.source {
            SelectionSource::KeyValues(source) => {
                source.keys().map(|key| (key.clone(), key.clone())).collect()
            }
            SelectionSource::Strings | SelectionSource::Objects => Vec::new(),
        };
        self.seed_resolved(resolved, excluded);
        true
    }

    fn seed_resolved(&mut self, items: Vec<(String, String)>, excluded: Option<&ExclusionSet>) {
        self.seeded = true;

        let keys_before = self.selected_keys.len();
        let labels_before = self.selected_labels.len();
        let item_count = items.len();

        for (key, label) in items {
            if excluded.is_some_and(|set| set.contains(&label)) {
                continue;
            }
            push_unique(&mut self.selected_keys, key);
            push_unique(&mut self.selected_labels, label);
        }

        debug!(
            item_count,
            selected_count = self.selected_keys.len(),
            kind = ?self.kind(),
            "seeded selection"
        );

        self.rebuild_map();
        // Seeding only appends, so a length change is the only possible change.
        if self.selected_keys.len() != keys_before {
            self.emit(SelectionEvent::ValuesChanged(self.selected_keys.clone()));
        }
        if self.selected_labels.len() != labels_before {
            self.emit(SelectionEvent::TextsChanged(self.selected_labels.clone()));
        }
        self.warn_if_misaligned("seed");
    }

    /// Applies one checkbox change.
    ///
    /// Checking appends key and label when absent. Unchecking removes the key
    /// and the label by value, independently of each other. Values and texts
    /// notifications fire even when nothing changed.
    pub fn toggle(&mut self, key: &str, label: &str, checked: bool) {
        if checked {
            push_unique(&mut self.selected_keys, key.to_owned());
            push_unique(&mut self.selected_labels, label.to_owned());
        } else {
            remove_first(&mut self.selected_keys, key);
            remove_first(&mut self.selected_labels, label);
        }
        trace!(
            key,
            checked,
            selected_count = self.selected_keys.len(),
            "toggle selection"
        );

        self.rebuild_map();
        self.emit(SelectionEvent::ValuesChanged(self.selected_keys.clone()));
        self.emit(SelectionEvent::TextsChanged(self.selected_labels.clone()));
        self.warn_if_misaligned("toggle");
    }

    /// Recomputes the map from the selected keys and installs it as a new instance.
    pub fn rebuild_map(&mut self) {
        let map = Arc::new(self.compute_map());
        self.replace_selected_map(map);
    }

    /// Installs `map` as the selected map.
    ///
    /// Observers hear about it only when `map` is a different instance from
    /// the current one; handing back the same `Arc` is a no-op.
    pub fn replace_selected_map(&mut self, map: Arc<SelectedMap>) -> bool {
        if Arc::ptr_eq(&self.selected_map, &map) {
            return false;
        }
        self.selected_map = map;
        self.emit(SelectionEvent::MapChanged(Arc::clone(&self.selected_map)));
        true
    }

    /// Replaces the key/value source mapping and rebuilds the map.
    ///
    /// Returns `false` for string and object sources, which carry no mapping.
    pub fn set_key_value_source(&mut self, source: IndexMap<String, i64>) -> bool {
        let kind = self.kind();
        let SelectionSource::KeyValues(current) = &mut self.source else {
            warn!(?kind, "ignoring key/value source for non key/value selection");
            return false;
        };
        *current = source;
        self.rebuild_map();
        true
    }

    fn compute_map(&self) -> SelectedMap {
        match &self.source {
            SelectionSource::Strings => self
                .selected_keys
                .iter()
                .map(|key| (key.clone(), 0))
                .collect(),
            SelectionSource::KeyValues(source) => self
                .selected_keys
                .iter()
                .filter_map(|key| source.get(key).map(|value| (key.clone(), *value)))
                .collect(),
            SelectionSource::Objects => (0_i64..)
                .zip(&self.selected_keys)
                .map(|(index, key)| (key.clone(), index))
                .collect(),
        }
    }

    fn emit(&mut self, event: SelectionEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    fn warn_if_misaligned(&self, operation: &'static str) {
        if self.selected_keys.len() != self.selected_labels.len() {
            warn!(
                operation,
                keys = self.selected_keys.len(),
                labels = self.selected_labels.len(),
                "selected keys and labels diverged"
            );
        }
    }
}

impl std::fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionState")
            .field("source", &self.source)
            .field("selected_keys", &self.selected_keys)
            .field("selected_labels", &self.selected_labels)
            .field("selected_map", &self.selected_map)
            .field("seeded", &self.seeded)
            .field("observers", &self.observers.len())
            .finish()
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

fn remove_first(values: &mut Vec<String>, value: &str) {
    if let Some(index) = values.iter().position(|v| v == value) {
        values.remove(index);
    }
}
