use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::WidgetResult;

/// Shape of the data a selection was built from. Fixed per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    /// Plain string items; map values are always `0`.
    Strings,
    /// Key/value pairs; map values come from the source mapping.
    KeyValues,
    /// Arbitrary records; map values are positions in the selected keys.
    Objects,
}

/// Source shape plus whatever the map rebuild needs from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionSource {
    Strings,
    KeyValues(IndexMap<String, i64>),
    Objects,
}

impl SelectionSource {
    #[must_use]
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Strings => SourceKind::Strings,
            Self::KeyValues(_) => SourceKind::KeyValues,
            Self::Objects => SourceKind::Objects,
        }
    }
}

pub type Accessor<T> = Box<dyn Fn(&T) -> WidgetResult<String> + Send + Sync>;

/// Identity and display-text extractors for one item type.
pub struct ItemAccessors<T> {
    key_of: Accessor<T>,
    label_of: Accessor<T>,
}

impl<T> ItemAccessors<T> {
    /// Builds accessors from fallible extractors; their errors surface
    /// unchanged from the selection operations that call them.
    #[must_use]
    pub fn new<K, L>(key_of: K, label_of: L) -> Self
    where
        K: Fn(&T) -> WidgetResult<String> + Send + Sync + 'static,
        L: Fn(&T) -> WidgetResult<String> + Send + Sync + 'static,
    {
        Self {
            key_of: Box::new(key_of),
            label_of: Box::new(label_of),
        }
    }

    pub fn key(&self, item: &T) -> WidgetResult<String> {
        (self.key_of)(item)
    }

    pub fn label(&self, item: &T) -> WidgetResult<String> {
        (self.label_of)(item)
    }

    /// `(key, label)` for one item.
    pub fn resolve(&self, item: &T) -> WidgetResult<(String, String)> {
        Ok((self.key(item)?, self.label(item)?))
    }
}

impl<T: 'static> ItemAccessors<T> {
    #[must_use]
    pub fn infallible<K, L>(key_of: K, label_of: L) -> Self
    where
        K: Fn(&T) -> String + Send + Sync + 'static,
        L: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::new(move |item| Ok(key_of(item)), move |item| Ok(label_of(item)))
    }
}

impl<T: ToString + 'static> ItemAccessors<T> {
    /// Uses the item's own string form for both key and label.
    #[must_use]
    pub fn display() -> Self {
        Self::infallible(|item: &T| item.to_string(), |item: &T| item.to_string())
    }
}

impl<T> std::fmt::Debug for ItemAccessors<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemAccessors").finish_non_exhaustive()
    }
}
