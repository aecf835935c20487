use tracing::info;

use crate::engine::errors::TableError;
use crate::engine::put::PutConfig;
use crate::engine::table::{Table, TableFactory};

/// A table handle opened on first use and kept for the owner's lifetime.
///
/// Evaluation of one instance is sequential, so a plain `Option` is enough.
pub struct LazyTable<F: TableFactory> {
    factory: F,
    table: Option<F::Table>,
}

impl<F: TableFactory> LazyTable<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            table: None,
        }
    }

    pub fn get(&mut self, config: &PutConfig) -> Result<&mut F::Table, TableError> {
        let table = match self.table.take() {
            Some(table) => table,
            None => {
                let table = self.factory.open(config)?;
                info!(
                    target: "multicol_put::udf",
                    table = config.table_name(),
                    quorum = config.zookeeper_quorum(),
                    "Opened table handle"
                );
                table
            }
        };
        Ok(self.table.insert(table))
    }

    pub fn is_open(&self) -> bool {
        self.table.is_some()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Flushes the handle if one was opened. The handle stays usable.
    pub fn flush(&mut self) -> Result<(), TableError> {
        match self.table.as_mut() {
            Some(table) => table.flush(),
            None => Ok(()),
        }
    }
}
