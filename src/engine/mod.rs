pub mod errors;
pub mod put;
pub mod table;
pub mod udf;

pub use errors::*;
