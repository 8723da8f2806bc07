//! Free-form descriptive metadata for probes and contacts.

use serde::{Deserialize, Serialize};

/// Descriptive metadata about a probe.
///
/// Extra keys present in a document's `annotations` object are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeAnnotations {
    pub name: String,
    pub manufacturer: String,
}

impl ProbeAnnotations {
    /// Creates new probe annotations.
    pub fn new(name: impl Into<String>, manufacturer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manufacturer: manufacturer.into(),
        }
    }
}

/// One free-form annotation per contact, parallel to the contact arrays.
///
/// Entries may be empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactAnnotations(pub Vec<String>);

impl ContactAnnotations {
    /// Returns the number of annotation entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the annotation for contact `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ContactAnnotations {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
