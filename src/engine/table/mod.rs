pub mod buffered_table;
pub mod memory_table;
pub mod put;

pub use buffered_table::{BufferedTable, BufferedTableFactory};
pub use memory_table::{MemoryTable, MemoryTableFactory};
pub use put::Put;

use crate::engine::errors::TableError;
use crate::engine::put::PutConfig;

/// Handle to a destination table. Implementations own their connection and
/// buffering; callers only issue puts.
pub trait Table {
    fn put(&mut self, put: Put) -> Result<(), TableError>;

    /// Pushes any buffered puts to the store.
    fn flush(&mut self) -> Result<(), TableError> {
        Ok(())
    }
}

impl<T: Table + ?Sized> Table for Box<T> {
    fn put(&mut self, put: Put) -> Result<(), TableError> {
        (**self).put(put)
    }

    fn flush(&mut self) -> Result<(), TableError> {
        (**self).flush()
    }
}

/// Creates table handles from a validated configuration.
pub trait TableFactory {
    type Table: Table;

    fn open(&self, config: &PutConfig) -> Result<Self::Table, TableError>;
}
