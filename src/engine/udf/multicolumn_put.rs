use tracing::debug;

use crate::engine::errors::{ArgumentShapeError, BindError, EvaluateError, TableError};
use crate::engine::put::{ColumnBatch, PutConfig, write_batch};
use crate::engine::table::TableFactory;
use crate::engine::udf::arg_shape::ArgShape;
use crate::engine::udf::binder::{BoundCall, Variant, bind};
use crate::engine::udf::lazy_table::LazyTable;

/// One row's typed arguments: the key, the integer batch, and the optional
/// double batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PutRow {
    pub key: String,
    pub longs: ColumnBatch<i64>,
    pub doubles: Option<ColumnBatch<f64>>,
}

impl PutRow {
    pub fn new(key: impl Into<String>, longs: ColumnBatch<i64>) -> Self {
        Self {
            key: key.into(),
            longs,
            doubles: None,
        }
    }

    pub fn with_doubles(mut self, doubles: ColumnBatch<f64>) -> Self {
        self.doubles = Some(doubles);
        self
    }
}

/// `hbase_multicolumn_put(config, key, quals, vals [, double_quals, double_vals])`
pub struct MulticolumnPut<F: TableFactory> {
    call: BoundCall,
    table: LazyTable<F>,
}

impl<F: TableFactory> MulticolumnPut<F> {
    pub fn initialize(args: &[ArgShape], factory: F) -> Result<Self, BindError> {
        let call = bind(Variant::MulticolumnPut, args)?;
        Ok(Self {
            call,
            table: LazyTable::new(factory),
        })
    }

    pub fn config(&self) -> &PutConfig {
        &self.call.config
    }

    pub fn table(&self) -> &LazyTable<F> {
        &self.table
    }

    /// Writes the row's batches and returns `"Put <key>"`.
    pub fn evaluate(&mut self, row: &PutRow) -> Result<String, EvaluateError> {
        evaluate_row(&self.call, &mut self.table, row)
            .map(|()| format!("Put {}", row.key))
            .inspect_err(EvaluateError::log_error)
    }

    pub fn display_string(args: &[&str]) -> String {
        format!(
            "{}( {} )",
            Variant::MulticolumnPut.function_name(),
            args.join(",")
        )
    }

    /// Flushes any puts still held by the table's write buffer. Dropping the
    /// evaluator also flushes, but only logs failures; call this to see them.
    pub fn close(&mut self) -> Result<(), TableError> {
        self.table.flush()
    }
}

/// Writes the integer batch, then the double batch when one was bound.
/// Shared by both variants; nothing is rolled back on failure.
pub(crate) fn evaluate_row<F: TableFactory>(
    call: &BoundCall,
    lazy: &mut LazyTable<F>,
    row: &PutRow,
) -> Result<(), EvaluateError> {
    if row.doubles.is_some() != call.has_double_batch {
        return Err(ArgumentShapeError::DoubleBatchMismatch {
            bound: call.has_double_batch,
            supplied: row.doubles.is_some(),
        }
        .into());
    }

    let table = lazy.get(&call.config).map_err(EvaluateError::Open)?;

    let mut written = write_batch(&row.key, &row.longs, &call.config, table)?;
    if let Some(doubles) = &row.doubles {
        written += write_batch(&row.key, doubles, &call.config, table)?;
    }

    debug!(
        target: "multicol_put::udf",
        key = row.key.as_str(),
        written,
        "Wrote row batches"
    );
    Ok(())
}
