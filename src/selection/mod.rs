//! Selection-state engine for multi-select checkbox lists.
//!
//! Three synchronized views of one selection: ordered keys, ordered labels
//! and a key to integer map whose values depend on the [`SourceKind`].

mod events;
mod exclusion;
mod source;
mod state;

pub use events::{SelectedMap, SelectionEvent, SelectionObserver};
pub use exclusion::ExclusionSet;
pub use source::{Accessor, ItemAccessors, SelectionSource, SourceKind};
pub use state::SelectionState;
