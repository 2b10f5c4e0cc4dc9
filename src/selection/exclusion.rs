use indexmap::IndexSet;

/// Labels that start unchecked, compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    folded: IndexSet<String>,
}

impl ExclusionSet {
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels.into_iter().collect()
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.folded.contains(&label.to_lowercase())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.folded.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            folded: iter
                .into_iter()
                .map(|label| label.as_ref().to_lowercase())
                .collect(),
        }
    }
}
