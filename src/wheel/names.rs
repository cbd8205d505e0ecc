//! The ordered list of names on the wheel and the pending input buffer.

use tracing::{debug, info};

/// Ordered names on the wheel.
///
/// Every stored name is non-empty after trimming. Insertion order decides the
/// slice position and the palette color of each name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim `text` and append it. Blank input is ignored.
    ///
    /// Returns true if a name was appended.
    pub fn add_name(&mut self, text: &str) -> bool {
        let name = text.trim();
        if name.is_empty() {
            debug!("names:ignored blank input");
            return false;
        }
        self.names.push(name.to_string());
        info!(name = %name, count = self.names.len(), "names:added");
        true
    }

    /// Remove the name at `index`. Later names shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.names.len() {
            return None;
        }
        let removed = self.names.remove(index);
        info!(name = %removed, index, count = self.names.len(), "names:removed");
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> Extend<S> for NameList {
    /// Seed names through `add_name`, so blank entries are dropped.
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.add_name(name.as_ref());
        }
    }
}

/// Text typed into the name field but not yet submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameInput {
    buffer: String,
}

impl NameInput {
    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Submit the buffer into `names`.
    ///
    /// The buffer is cleared only when a name was actually added, so a blank
    /// submit leaves whatever whitespace the user typed in place.
    pub fn submit(&mut self, names: &mut NameList) -> bool {
        let added = names.add_name(&self.buffer);
        if added {
            self.buffer.clear();
        }
        added
    }
}
