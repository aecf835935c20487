use bytes::Bytes;
use tracing::{debug, trace};

use crate::engine::errors::WriteError;
use crate::engine::put::config::PutConfig;
use crate::engine::put::value::{CellValue, qualifier_bytes, value_bytes};
use crate::engine::table::{Put, Table};

/// Parallel qualifier/value sequences of one numeric domain.
/// `None` values are skipped on write.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBatch<T> {
    pub qualifiers: Vec<String>,
    pub values: Vec<Option<T>>,
}

impl<T> ColumnBatch<T> {
    pub fn new(qualifiers: Vec<String>, values: Vec<Option<T>>) -> Self {
        Self { qualifiers, values }
    }

    pub fn len(&self) -> usize {
        self.qualifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qualifiers.is_empty()
    }
}

impl<T> Default for ColumnBatch<T> {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

/// Writes one put per non-null value into the configured family, in order.
///
/// Each put is applied on its own: a failure partway through leaves the
/// earlier columns written. Returns the number of puts issued.
pub fn write_batch<T, Tb>(
    key: &str,
    batch: &ColumnBatch<T>,
    config: &PutConfig,
    table: &mut Tb,
) -> Result<usize, WriteError>
where
    T: CellValue,
    Tb: Table + ?Sized,
{
    if batch.qualifiers.len() != batch.values.len() {
        return Err(WriteError::LengthMismatch {
            qualifiers: batch.qualifiers.len(),
            values: batch.values.len(),
        });
    }

    let row = Bytes::copy_from_slice(key.as_bytes());
    let family = Bytes::copy_from_slice(config.family().as_bytes());
    let mut written = 0;

    for (qualifier, value) in batch.qualifiers.iter().zip(&batch.values) {
        let Some(value) = value_bytes(value.as_ref()) else {
            debug!(
                target: "multicol_put::writer",
                key,
                qualifier = qualifier.as_str(),
                "Skipping null value"
            );
            continue;
        };

        trace!(
            target: "multicol_put::writer",
            key,
            qualifier = qualifier.as_str(),
            domain = ?T::DOMAIN,
            "Applying put"
        );
        table.put(Put::new(
            row.clone(),
            family.clone(),
            qualifier_bytes(qualifier),
            value,
        ))?;
        written += 1;
    }

    Ok(written)
}
