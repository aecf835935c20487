use bytes::Bytes;

/// A single-cell write: `(row, family, qualifier) = value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Put {
    pub row: Bytes,
    pub family: Bytes,
    pub qualifier: Bytes,
    pub value: Bytes,
}

impl Put {
    pub fn new(row: Bytes, family: Bytes, qualifier: Bytes, value: Bytes) -> Self {
        Self {
            row,
            family,
            qualifier,
            value,
        }
    }

    /// Bytes this put occupies in a write buffer.
    pub fn heap_size(&self) -> usize {
        self.row.len() + self.family.len() + self.qualifier.len() + self.value.len()
    }
}
