use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::WidgetResult;
use crate::selection::{
    ExclusionSet, ItemAccessors, SelectionObserver, SelectionSource, SelectionState,
};

/// Render row for one checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckBoxRow {
    pub key: String,
    pub label: String,
    pub checked: bool,
}

/// Checkbox list widget state, independent of any UI framework.
///
/// The host renders [`CheckBoxList::rows`], calls
/// [`CheckBoxList::after_first_render`] once the list is on screen, and
/// forwards checkbox changes through [`CheckBoxList::toggle_item`].
#[derive(Debug)]
pub struct CheckBoxList<T> {
    items: Vec<T>,
    accessors: ItemAccessors<T>,
    unchecked_initially: Option<ExclusionSet>,
    state: SelectionState,
}

impl CheckBoxList<String> {
    /// List over plain strings; map values are `0`.
    #[must_use]
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_source(
            items.into_iter().map(Into::into).collect(),
            ItemAccessors::display(),
            SelectionSource::Strings,
        )
    }
}

impl CheckBoxList<(String, i64)> {
    /// List over key/value pairs; map values are copied from `data`.
    #[must_use]
    pub fn key_values(data: IndexMap<String, i64>) -> Self {
        let items = data.iter().map(|(key, value)| (key.clone(), *value)).collect();
        Self::with_source(
            items,
            ItemAccessors::infallible(
                |item: &(String, i64)| item.0.clone(),
                |item: &(String, i64)| item.0.clone(),
            ),
            SelectionSource::KeyValues(data),
        )
    }

    /// Replaces the key/value data behind both the rows and the selected map.
    ///
    /// Selected keys missing from `data` stay selected but drop out of the map.
    pub fn set_key_values(&mut self, data: IndexMap<String, i64>) -> bool {
        let items = data.iter().map(|(key, value)| (key.clone(), *value)).collect();
        if !self.state.set_key_value_source(data) {
            return false;
        }
        self.items = items;
        debug!(items = self.items.len(), "checkbox list data replaced");
        true
    }
}

impl<T> CheckBoxList<T> {
    /// List over arbitrary records; map values are selection positions.
    #[must_use]
    pub fn objects(items: Vec<T>, accessors: ItemAccessors<T>) -> Self {
        Self::with_source(items, accessors, SelectionSource::Objects)
    }

    #[must_use]
    pub fn with_source(
        items: Vec<T>,
        accessors: ItemAccessors<T>,
        source: SelectionSource,
    ) -> Self {
        Self {
            items,
            accessors,
            unchecked_initially: None,
            state: SelectionState::new(source),
        }
    }

    /// Labels (case-insensitive) that start unchecked.
    #[must_use]
    pub fn with_unchecked_initially<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.unchecked_initially = Some(ExclusionSet::new(labels));
        self
    }

    /// Host-bound selections present before the first render.
    #[must_use]
    pub fn with_selected<K, L>(mut self, keys: K, labels: L) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        self.state = self.state.with_initial_selection(keys, labels);
        self
    }

    pub fn add_observer(
        &mut self,
        observer: Box<dyn SelectionObserver + Send>,
    ) -> WidgetResult<()> {
        self.state.add_observer(observer)
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Seeds the selection on the first render only.
    ///
    /// Returns `Ok(true)` when this call performed the seeding.
    pub fn after_first_render(&mut self) -> WidgetResult<bool> {
        let seeded = self.state.seed_initial(
            &self.items,
            &self.accessors,
            self.unchecked_initially.as_ref(),
        )?;
        if seeded {
            debug!(items = self.items.len(), "checkbox list initialized");
        }
        Ok(seeded)
    }

    /// Toggles the item at `index`. Out-of-range indexes are ignored.
    pub fn toggle_item(&mut self, index: usize, checked: bool) -> WidgetResult<bool> {
        let Some(item) = self.items.get(index) else {
            return Ok(false);
        };
        let (key, label) = self.accessors.resolve(item)?;
        self.state.toggle(&key, &label, checked);
        Ok(true)
    }

    pub fn toggle(&mut self, key: &str, label: &str, checked: bool) {
        self.state.toggle(key, label, checked);
    }

    /// One row per item in source order, checked when its key is selected.
    pub fn rows(&self) -> WidgetResult<Vec<CheckBoxRow>> {
        self.items
            .iter()
            .map(|item| -> WidgetResult<CheckBoxRow> {
                let (key, label) = self.accessors.resolve(item)?;
                let checked = self.state.is_selected(&key);
                Ok(CheckBoxRow {
                    key,
                    label,
                    checked,
                })
            })
            .collect()
    }
}
