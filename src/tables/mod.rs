//! Ordered name tables (textures and fonts)

/// An ordered list of resource names.
///
/// The on-disk index of a name is its position. Duplicate names are kept so
/// that a decoded table re-encodes with the same entry count; lookups by
/// name return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    entries: Vec<String>,
}

impl NameTable {
    /// Create a new empty table
    pub fn new() -> Self {
        NameTable {
            entries: Vec::new(),
        }
    }

    /// Append a name and return its index
    pub fn add(&mut self, name: impl Into<String>) -> usize {
        self.entries.push(name.into());
        self.entries.len() - 1
    }

    /// Index of `name`, appending it if absent
    pub fn get_or_add(&mut self, name: &str) -> usize {
        match self.index_of(name) {
            Some(index) => index,
            None => self.add(name),
        }
    }

    /// Name at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Position of the first entry equal to `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Remove the entry at `index`, shifting later entries down
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all names in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl From<Vec<String>> for NameTable {
    fn from(entries: Vec<String>) -> Self {
        NameTable { entries }
    }
}

impl<S: Into<String>> FromIterator<S> for NameTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        NameTable {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}
