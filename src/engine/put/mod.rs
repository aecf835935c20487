pub mod batch_writer;
pub mod config;
pub mod sketch_set;
pub mod value;

pub use batch_writer::{ColumnBatch, write_batch};
pub use config::{BufferPolicy, PutConfig, validate};
pub use sketch_set::SketchSetCodec;
pub use value::{CellValue, ValueDomain};

#[cfg(test)]
mod value_test;
