use crate::engine::udf::{ArgShape, Variant};
use crate::test_helpers::factories::ArgShapeFactory;

#[test]
fn builds_expected_arities() {
    assert_eq!(ArgShapeFactory::new(Variant::MulticolumnPut).create().len(), 4);
    assert_eq!(
        ArgShapeFactory::new(Variant::MulticolumnPut)
            .with_doubles()
            .create()
            .len(),
        6
    );
    assert_eq!(
        ArgShapeFactory::new(Variant::MulticolumnPutSketchset)
            .create()
            .len(),
        5
    );
    assert_eq!(
        ArgShapeFactory::new(Variant::MulticolumnPutSketchset)
            .with_doubles()
            .create()
            .len(),
        7
    );
}

#[test]
fn overrides_replace_positions() {
    let args = ArgShapeFactory::new(Variant::MulticolumnPut)
        .with_arg(1, ArgShape::list_of(crate::engine::udf::PrimitiveKind::String))
        .create();

    assert!(!args[1].is_string());
}
