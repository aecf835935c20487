use crate::engine::errors::{ArgumentShapeError, BindError, ConfigError};
use crate::engine::udf::{ArgShape, PrimitiveKind, Variant, bind};
use crate::test_helpers::factories::{ArgShapeFactory, PutConfigFactory};

fn shape_err(err: BindError) -> ArgumentShapeError {
    match err {
        BindError::Shape(e) => e,
        other => panic!("expected shape error, got {other:?}"),
    }
}

#[test]
fn binds_all_supported_arities() {
    let base = bind(
        Variant::MulticolumnPut,
        &ArgShapeFactory::new(Variant::MulticolumnPut).create(),
    )
    .unwrap();
    assert!(!base.has_double_batch);

    let base_doubles = bind(
        Variant::MulticolumnPut,
        &ArgShapeFactory::new(Variant::MulticolumnPut)
            .with_doubles()
            .create(),
    )
    .unwrap();
    assert!(base_doubles.has_double_batch);

    let sketch = bind(
        Variant::MulticolumnPutSketchset,
        &ArgShapeFactory::new(Variant::MulticolumnPutSketchset).create(),
    )
    .unwrap();
    assert!(!sketch.has_double_batch);
    assert_eq!(sketch.config.family(), "m");

    let sketch_doubles = bind(
        Variant::MulticolumnPutSketchset,
        &ArgShapeFactory::new(Variant::MulticolumnPutSketchset)
            .with_doubles()
            .create(),
    )
    .unwrap();
    assert!(sketch_doubles.has_double_batch);
}

#[test]
fn rejects_wrong_arity() {
    let args = ArgShapeFactory::new(Variant::MulticolumnPut)
        .with_doubles()
        .truncated_to(5)
        .create();

    assert_eq!(
        shape_err(bind(Variant::MulticolumnPut, &args).unwrap_err()),
        ArgumentShapeError::ArgCount {
            function: "hbase_multicolumn_put",
            expected: "4 or 6",
            actual: 5,
        }
    );

    // A base-variant call is not a valid sketchset call.
    let args = ArgShapeFactory::new(Variant::MulticolumnPut).create();
    assert!(matches!(
        shape_err(bind(Variant::MulticolumnPutSketchset, &args).unwrap_err()),
        ArgumentShapeError::ArgCount { actual: 4, .. }
    ));
}

#[test]
fn config_must_be_a_constant_map() {
    let args = ArgShapeFactory::new(Variant::MulticolumnPut)
        .with_arg(0, ArgShape::string())
        .create();
    assert_eq!(
        shape_err(bind(Variant::MulticolumnPut, &args).unwrap_err()),
        ArgumentShapeError::NotAMap { index: 0 }
    );

    let args = ArgShapeFactory::new(Variant::MulticolumnPut)
        .with_arg(0, ArgShape::Map { constant: None })
        .create();
    assert_eq!(
        shape_err(bind(Variant::MulticolumnPut, &args).unwrap_err()),
        ArgumentShapeError::NonConstantConfig { index: 0 }
    );
}

#[test]
fn incomplete_config_fails_at_bind_time() {
    let args = ArgShapeFactory::new(Variant::MulticolumnPut)
        .with_config(PutConfigFactory::new().without("family").create_map())
        .create();

    assert_eq!(
        bind(Variant::MulticolumnPut, &args).unwrap_err(),
        BindError::Config(ConfigError::MissingField("family"))
    );
}

#[test]
fn key_must_be_a_string() {
    let args = ArgShapeFactory::new(Variant::MulticolumnPut)
        .with_arg(1, ArgShape::Primitive(PrimitiveKind::Long))
        .create();

    assert_eq!(
        shape_err(bind(Variant::MulticolumnPut, &args).unwrap_err()),
        ArgumentShapeError::NotAString { index: 1 }
    );
}

#[test]
fn qualifiers_must_be_string_lists() {
    let args = ArgShapeFactory::new(Variant::MulticolumnPut)
        .with_arg(2, ArgShape::string())
        .create();
    assert_eq!(
        shape_err(bind(Variant::MulticolumnPut, &args).unwrap_err()),
        ArgumentShapeError::NotAList { index: 2 }
    );

    let args = ArgShapeFactory::new(Variant::MulticolumnPut)
        .with_arg(2, ArgShape::list_of(PrimitiveKind::Int))
        .create();
    assert_eq!(
        shape_err(bind(Variant::MulticolumnPut, &args).unwrap_err()),
        ArgumentShapeError::QualifiersNotString { index: 2 }
    );
}

#[test]
fn value_lists_must_match_their_domain() {
    let args = ArgShapeFactory::new(Variant::MulticolumnPut)
        .with_arg(3, ArgShape::list_of(PrimitiveKind::String))
        .create();
    assert_eq!(
        shape_err(bind(Variant::MulticolumnPut, &args).unwrap_err()),
        ArgumentShapeError::ValuesNotInteger { index: 3 }
    );

    let args = ArgShapeFactory::new(Variant::MulticolumnPut)
        .with_doubles()
        .with_arg(5, ArgShape::list_of(PrimitiveKind::Long))
        .create();
    assert_eq!(
        shape_err(bind(Variant::MulticolumnPut, &args).unwrap_err()),
        ArgumentShapeError::ValuesNotFloat { index: 5 }
    );

    // Narrower integer kinds widen into the integer domain.
    let args = ArgShapeFactory::new(Variant::MulticolumnPut)
        .with_arg(3, ArgShape::list_of(PrimitiveKind::Int))
        .create();
    assert!(bind(Variant::MulticolumnPut, &args).is_ok());
}

#[test]
fn sketchset_positions_shift_the_double_batch() {
    let args = ArgShapeFactory::new(Variant::MulticolumnPutSketchset)
        .with_doubles()
        .with_arg(5, ArgShape::list_of(PrimitiveKind::Double))
        .create();

    assert_eq!(
        shape_err(bind(Variant::MulticolumnPutSketchset, &args).unwrap_err()),
        ArgumentShapeError::QualifiersNotString { index: 5 }
    );
}

#[test]
fn sketch_set_must_be_a_string_list() {
    let args = ArgShapeFactory::new(Variant::MulticolumnPutSketchset)
        .with_arg(4, ArgShape::string())
        .create();
    assert_eq!(
        shape_err(bind(Variant::MulticolumnPutSketchset, &args).unwrap_err()),
        ArgumentShapeError::NotAList { index: 4 }
    );

    let args = ArgShapeFactory::new(Variant::MulticolumnPutSketchset)
        .with_arg(4, ArgShape::list_of(PrimitiveKind::Long))
        .create();
    assert_eq!(
        shape_err(bind(Variant::MulticolumnPutSketchset, &args).unwrap_err()),
        ArgumentShapeError::IdentifiersNotString { index: 4 }
    );
}
