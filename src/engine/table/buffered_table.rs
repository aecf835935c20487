use tracing::{debug, trace, warn};

use crate::engine::errors::TableError;
use crate::engine::put::{BufferPolicy, PutConfig};
use crate::engine::table::{Put, Table, TableFactory};

/// Applies a `BufferPolicy` in front of another table.
///
/// With autoflush on, every put goes straight through. Otherwise puts are held
/// until their combined size reaches the write buffer, then sent in order.
/// Anything still buffered is flushed on drop; call `flush` to see errors.
#[derive(Debug)]
pub struct BufferedTable<T: Table> {
    inner: T,
    policy: BufferPolicy,
    pending: Vec<Put>,
    pending_bytes: usize,
}

impl<T: Table> BufferedTable<T> {
    pub fn new(inner: T, policy: BufferPolicy) -> Self {
        Self {
            inner,
            policy,
            pending: Vec::new(),
            pending_bytes: 0,
        }
    }

    pub fn policy(&self) -> BufferPolicy {
        self.policy
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn pending_bytes(&self) -> usize {
        self.pending_bytes
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Sends buffered puts to the inner table. A rejected put is dropped and
    /// the ones behind it stay buffered.
    fn drain_pending(&mut self) -> Result<(), TableError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        debug!(
            target: "multicol_put::table",
            puts = self.pending.len(),
            bytes = self.pending_bytes,
            "Draining write buffer"
        );

        let mut remaining = std::mem::take(&mut self.pending).into_iter();
        while let Some(put) = remaining.next() {
            if let Err(e) = self.inner.put(put) {
                self.pending = remaining.collect();
                self.pending_bytes = self.pending.iter().map(Put::heap_size).sum();
                return Err(e);
            }
        }
        self.pending_bytes = 0;
        Ok(())
    }
}

impl<T: Table> Table for BufferedTable<T> {
    fn put(&mut self, put: Put) -> Result<(), TableError> {
        if self.policy.autoflush {
            return self.inner.put(put);
        }

        self.pending_bytes += put.heap_size();
        self.pending.push(put);
        trace!(
            target: "multicol_put::table",
            pending = self.pending.len(),
            bytes = self.pending_bytes,
            "Buffered put"
        );

        if self.pending_bytes >= self.policy.write_buffer_size {
            self.drain_pending()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TableError> {
        self.drain_pending()?;
        self.inner.flush()
    }
}

impl<T: Table> Drop for BufferedTable<T> {
    fn drop(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let pending = self.pending.len();
        if let Err(e) = self.flush() {
            warn!(
                target: "multicol_put::table",
                pending,
                lost = self.pending.len(),
                "Failed to flush write buffer on drop: {}",
                e
            );
        }
    }
}

/// Wraps every table from `inner` in a `BufferedTable`, reading the policy
/// from the function's configuration.
#[derive(Debug)]
pub struct BufferedTableFactory<F> {
    inner: F,
    defaults: BufferPolicy,
}

impl<F: TableFactory> BufferedTableFactory<F> {
    pub fn new(inner: F, defaults: BufferPolicy) -> Self {
        Self { inner, defaults }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: TableFactory> TableFactory for BufferedTableFactory<F> {
    type Table = BufferedTable<F::Table>;

    fn open(&self, config: &PutConfig) -> Result<Self::Table, TableError> {
        let policy = config.buffer_policy(self.defaults);
        debug!(
            target: "multicol_put::table",
            table = config.table_name(),
            autoflush = policy.autoflush,
            write_buffer_size = policy.write_buffer_size,
            "Opening buffered table"
        );
        Ok(BufferedTable::new(self.inner.open(config)?, policy))
    }
}
