pub mod arg_shape_factory;
pub mod column_batch_factory;
pub mod put_config_factory;

pub use arg_shape_factory::ArgShapeFactory;
pub use column_batch_factory::ColumnBatchFactory;
pub use put_config_factory::PutConfigFactory;

#[cfg(test)]
mod arg_shape_factory_test;
#[cfg(test)]
mod column_batch_factory_test;
#[cfg(test)]
mod put_config_factory_test;
