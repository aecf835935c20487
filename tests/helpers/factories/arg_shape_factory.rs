use crate::engine::udf::{ArgShape, PrimitiveKind, Variant};
use crate::test_helpers::factories::PutConfigFactory;
use std::collections::BTreeMap;

/// Builds well-formed argument shape lists for either variant, with
/// per-position overrides for negative tests.
pub struct ArgShapeFactory {
    variant: Variant,
    config: BTreeMap<String, String>,
    with_doubles: bool,
    overrides: Vec<(usize, ArgShape)>,
    truncate_to: Option<usize>,
}

impl ArgShapeFactory {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            config: PutConfigFactory::new().create_map(),
            with_doubles: false,
            overrides: Vec::new(),
            truncate_to: None,
        }
    }

    pub fn with_config(mut self, config: BTreeMap<String, String>) -> Self {
        self.config = config;
        self
    }

    pub fn with_doubles(mut self) -> Self {
        self.with_doubles = true;
        self
    }

    pub fn with_arg(mut self, index: usize, shape: ArgShape) -> Self {
        self.overrides.push((index, shape));
        self
    }

    pub fn truncated_to(mut self, len: usize) -> Self {
        self.truncate_to = Some(len);
        self
    }

    pub fn create(self) -> Vec<ArgShape> {
        let mut args = vec![
            ArgShape::Map {
                constant: Some(self.config),
            },
            ArgShape::string(),
            ArgShape::list_of(PrimitiveKind::String),
            ArgShape::list_of(PrimitiveKind::Long),
        ];
        if self.variant == Variant::MulticolumnPutSketchset {
            args.push(ArgShape::list_of(PrimitiveKind::String));
        }
        if self.with_doubles {
            args.push(ArgShape::list_of(PrimitiveKind::String));
            args.push(ArgShape::list_of(PrimitiveKind::Double));
        }
        for (index, shape) in self.overrides {
            args[index] = shape;
        }
        if let Some(len) = self.truncate_to {
            args.truncate(len);
        }
        args
    }
}
