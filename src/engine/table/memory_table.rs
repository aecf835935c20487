use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

use crate::engine::errors::TableError;
use crate::engine::put::PutConfig;
use crate::engine::table::{Put, Table, TableFactory};

pub type CellKey = (Bytes, Bytes, Bytes);

#[derive(Debug, Default)]
struct MemoryTableState {
    applied: Vec<Put>,
    cells: BTreeMap<CellKey, Bytes>,
    flushes: usize,
    fail_after: Option<usize>,
}

/// In-process table. Clones share the same cells, so a caller can keep a
/// view while an evaluator owns the handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    name: Arc<str>,
    state: Arc<Mutex<MemoryTableState>>,
}

impl MemoryTable {
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            state: Arc::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rejects every put after the first `n` succeed.
    pub fn fail_after(&self, n: usize) {
        self.state.lock().fail_after = Some(n);
    }

    /// Puts in the order they reached the table.
    pub fn applied(&self) -> Vec<Put> {
        self.state.lock().applied.clone()
    }

    pub fn cell(&self, row: &str, family: &str, qualifier: &str) -> Option<Bytes> {
        let key = (
            Bytes::copy_from_slice(row.as_bytes()),
            Bytes::copy_from_slice(family.as_bytes()),
            Bytes::copy_from_slice(qualifier.as_bytes()),
        );
        self.state.lock().cells.get(&key).cloned()
    }

    /// Latest value of every cell, ordered by row, family, qualifier.
    pub fn cells(&self) -> Vec<(CellKey, Bytes)> {
        self.state
            .lock()
            .cells
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn flushes(&self) -> usize {
        self.state.lock().flushes
    }
}

impl Table for MemoryTable {
    fn put(&mut self, put: Put) -> Result<(), TableError> {
        let mut state = self.state.lock();
        if let Some(limit) = state.fail_after {
            if state.applied.len() >= limit {
                return Err(TableError::Rejected(format!(
                    "table {} refused put after {} writes",
                    self.name, limit
                )));
            }
        }

        state.cells.insert(
            (put.row.clone(), put.family.clone(), put.qualifier.clone()),
            put.value.clone(),
        );
        state.applied.push(put);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TableError> {
        let mut state = self.state.lock();
        state.flushes += 1;
        debug!(
            target: "multicol_put::table",
            table = %self.name,
            applied = state.applied.len(),
            "Flushed memory table"
        );
        Ok(())
    }
}

/// Hands out clones of one shared `MemoryTable` and counts how often it was asked.
#[derive(Debug, Default)]
pub struct MemoryTableFactory {
    table: MemoryTable,
    opens: AtomicUsize,
}

impl MemoryTableFactory {
    pub fn new(table: MemoryTable) -> Self {
        Self {
            table,
            opens: AtomicUsize::new(0),
        }
    }

    pub fn table(&self) -> MemoryTable {
        self.table.clone()
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}

impl TableFactory for MemoryTableFactory {
    type Table = MemoryTable;

    fn open(&self, config: &PutConfig) -> Result<MemoryTable, TableError> {
        if config.table_name() != self.table.name() {
            return Err(TableError::Rejected(format!(
                "unknown table {} (have {})",
                config.table_name(),
                self.table.name()
            )));
        }
        self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(self.table.clone())
    }
}
