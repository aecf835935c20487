use bytes::Bytes;
use tracing::debug;

use crate::engine::errors::{BindError, EvaluateError, TableError, WriteError};
use crate::engine::put::{PutConfig, SketchSetCodec};
use crate::engine::table::{Put, Table, TableFactory};
use crate::engine::udf::arg_shape::ArgShape;
use crate::engine::udf::binder::{BoundCall, Variant, bind};
use crate::engine::udf::lazy_table::LazyTable;
use crate::engine::udf::multicolumn_put::{PutRow, evaluate_row};

/// Where the encoded identifier set lands. Owned by the integration, not the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchSetColumn {
    pub family: String,
    pub qualifier: String,
}

impl SketchSetColumn {
    pub fn new(family: impl Into<String>, qualifier: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            qualifier: qualifier.into(),
        }
    }
}

impl Default for SketchSetColumn {
    fn default() -> Self {
        Self::new("s", "us")
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SketchsetRow {
    pub put: PutRow,
    pub sketch_set: Vec<String>,
}

impl SketchsetRow {
    pub fn new(put: PutRow, sketch_set: Vec<String>) -> Self {
        Self { put, sketch_set }
    }
}

/// `hbase_put_sketchset(config, key, quals, vals, sketch_set [, double_quals, double_vals])`
pub struct MulticolumnPutSketchset<F: TableFactory> {
    call: BoundCall,
    table: LazyTable<F>,
    column: SketchSetColumn,
}

impl<F: TableFactory> MulticolumnPutSketchset<F> {
    pub fn initialize(args: &[ArgShape], factory: F) -> Result<Self, BindError> {
        let call = bind(Variant::MulticolumnPutSketchset, args)?;
        Ok(Self {
            call,
            table: LazyTable::new(factory),
            column: SketchSetColumn::default(),
        })
    }

    pub fn with_column(mut self, column: SketchSetColumn) -> Self {
        self.column = column;
        self
    }

    pub fn column(&self) -> &SketchSetColumn {
        &self.column
    }

    pub fn config(&self) -> &PutConfig {
        &self.call.config
    }

    pub fn table(&self) -> &LazyTable<F> {
        &self.table
    }

    /// Writes the batches, then the encoded identifier set. Earlier writes
    /// stay in place if a later step fails.
    pub fn evaluate(&mut self, row: &SketchsetRow) -> Result<String, EvaluateError> {
        self.evaluate_inner(row)
            .map(|()| format!("Put {}", row.put.key))
            .inspect_err(EvaluateError::log_error)
    }

    fn evaluate_inner(&mut self, row: &SketchsetRow) -> Result<(), EvaluateError> {
        evaluate_row(&self.call, &mut self.table, &row.put)?;

        let blob = SketchSetCodec::encode(&row.sketch_set)?;
        debug!(
            target: "multicol_put::udf",
            key = row.put.key.as_str(),
            ids = row.sketch_set.len(),
            bytes = blob.len(),
            "Writing sketch set"
        );

        let table = self
            .table
            .get(&self.call.config)
            .map_err(EvaluateError::Open)?;
        table
            .put(Put::new(
                Bytes::copy_from_slice(row.put.key.as_bytes()),
                Bytes::copy_from_slice(self.column.family.as_bytes()),
                Bytes::copy_from_slice(self.column.qualifier.as_bytes()),
                blob,
            ))
            .map_err(WriteError::Underlying)?;
        Ok(())
    }

    pub fn display_string(args: &[&str]) -> String {
        format!(
            "{}( {} )",
            Variant::MulticolumnPutSketchset.function_name(),
            args.join(",")
        )
    }

    /// Flushes any puts still held by the table's write buffer. Dropping the
    /// evaluator also flushes, but only logs failures; call this to see them.
    pub fn close(&mut self) -> Result<(), TableError> {
        self.table.flush()
    }
}
