use crate::engine::put::ColumnBatch;

/// Builds column batches entry by entry.
pub struct ColumnBatchFactory<T> {
    qualifiers: Vec<String>,
    values: Vec<Option<T>>,
}

impl<T> ColumnBatchFactory<T> {
    pub fn new() -> Self {
        Self {
            qualifiers: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn with(mut self, qualifier: &str, value: T) -> Self {
        self.qualifiers.push(qualifier.to_string());
        self.values.push(Some(value));
        self
    }

    pub fn with_null(mut self, qualifier: &str) -> Self {
        self.qualifiers.push(qualifier.to_string());
        self.values.push(None);
        self
    }

    /// Adds a qualifier with no matching value, breaking the length invariant.
    pub fn with_dangling_qualifier(mut self, qualifier: &str) -> Self {
        self.qualifiers.push(qualifier.to_string());
        self
    }

    pub fn create(self) -> ColumnBatch<T> {
        ColumnBatch::new(self.qualifiers, self.values)
    }
}
