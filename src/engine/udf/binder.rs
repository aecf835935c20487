use tracing::debug;

use crate::engine::errors::{ArgumentShapeError, BindError};
use crate::engine::put::{PutConfig, ValueDomain};
use crate::engine::udf::arg_shape::ArgShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `(config, key, quals, vals [, double_quals, double_vals])`
    MulticolumnPut,
    /// `(config, key, quals, vals, sketch_set [, double_quals, double_vals])`
    MulticolumnPutSketchset,
}

impl Variant {
    pub fn function_name(&self) -> &'static str {
        match self {
            Variant::MulticolumnPut => "hbase_multicolumn_put",
            Variant::MulticolumnPutSketchset => "hbase_put_sketchset",
        }
    }

    fn expected_arity(&self) -> &'static str {
        match self {
            Variant::MulticolumnPut => "4 or 6",
            Variant::MulticolumnPutSketchset => "5 or 7",
        }
    }

    /// Arity without and with the optional double batch.
    fn arities(&self) -> (usize, usize) {
        match self {
            Variant::MulticolumnPut => (4, 6),
            Variant::MulticolumnPutSketchset => (5, 7),
        }
    }

    /// Position of the double batch's qualifier argument.
    fn double_batch_index(&self) -> usize {
        self.arities().0
    }
}

/// Immutable result of validating a call's argument shapes once, at plan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundCall {
    pub variant: Variant,
    pub config: PutConfig,
    pub has_double_batch: bool,
}

pub fn bind(variant: Variant, args: &[ArgShape]) -> Result<BoundCall, BindError> {
    let (short, long) = variant.arities();
    if args.len() != short && args.len() != long {
        return Err(ArgumentShapeError::ArgCount {
            function: variant.function_name(),
            expected: variant.expected_arity(),
            actual: args.len(),
        }
        .into());
    }

    let config = match &args[0] {
        ArgShape::Map {
            constant: Some(entries),
        } => PutConfig::new(entries.clone())?,
        ArgShape::Map { constant: None } => {
            return Err(ArgumentShapeError::NonConstantConfig { index: 0 }.into());
        }
        _ => return Err(ArgumentShapeError::NotAMap { index: 0 }.into()),
    };

    if !args[1].is_string() {
        return Err(ArgumentShapeError::NotAString { index: 1 }.into());
    }

    check_batch(args, 2, ValueDomain::Integer)?;

    if variant == Variant::MulticolumnPutSketchset {
        let element = args[4]
            .element()
            .ok_or(ArgumentShapeError::NotAList { index: 4 })?;
        if !element.is_string() {
            return Err(ArgumentShapeError::IdentifiersNotString { index: 4 }.into());
        }
    }

    let has_double_batch = args.len() == long;
    if has_double_batch {
        check_batch(args, variant.double_batch_index(), ValueDomain::Float)?;
    }

    debug!(
        target: "multicol_put::udf",
        function = variant.function_name(),
        table = config.table_name(),
        family = config.family(),
        has_double_batch,
        "Bound call"
    );

    Ok(BoundCall {
        variant,
        config,
        has_double_batch,
    })
}

/// Checks a qualifier list at `index` and its value list at `index + 1`.
fn check_batch(
    args: &[ArgShape],
    index: usize,
    domain: ValueDomain,
) -> Result<(), ArgumentShapeError> {
    let qualifiers = args[index]
        .element()
        .ok_or(ArgumentShapeError::NotAList { index })?;
    if !qualifiers.is_string() {
        return Err(ArgumentShapeError::QualifiersNotString { index });
    }

    let values_index = index + 1;
    let values = args[values_index]
        .element()
        .ok_or(ArgumentShapeError::NotAList {
            index: values_index,
        })?;
    if values.domain() != Some(domain) {
        return Err(match domain {
            ValueDomain::Integer => ArgumentShapeError::ValuesNotInteger {
                index: values_index,
            },
            ValueDomain::Float => ArgumentShapeError::ValuesNotFloat {
                index: values_index,
            },
        });
    }
    Ok(())
}
