pub mod arg_shape;
pub mod binder;
pub mod lazy_table;
pub mod multicolumn_put;
pub mod multicolumn_put_sketchset;

pub use arg_shape::{ArgShape, PrimitiveKind};
pub use binder::{BoundCall, Variant, bind};
pub use lazy_table::LazyTable;
pub use multicolumn_put::{MulticolumnPut, PutRow};
pub use multicolumn_put_sketchset::{MulticolumnPutSketchset, SketchSetColumn, SketchsetRow};

#[cfg(test)]
mod binder_test;
