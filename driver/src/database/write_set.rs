use std::collections::BTreeMap;

/// Writes buffered by a transaction until it commits. `None` marks a deletion.
#[derive(Debug, Default)]
pub(in crate::database) struct WriteSet(BTreeMap<String, Option<Vec<u8>>>);

impl WriteSet {
    /// `Some` when the key was written in this transaction, holding the pending value.
    pub fn get(&self, key: &str) -> Option<Option<Vec<u8>>> {
        self.0.get(key).cloned()
    }

    pub fn put(&mut self, key: &str, value: Vec<u8>) {
        self.0.insert(key.to_string(), Some(value));
    }

    pub fn delete(&mut self, key: &str) {
        self.0.insert(key.to_string(), None);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for WriteSet {
    type Item = (String, Option<Vec<u8>>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Option<Vec<u8>>>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
